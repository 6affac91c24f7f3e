#![cfg(test)]

use super::*;
use super::block_deque::End;
use crate::util::alloc::DropCounter;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_push_back_then_pop_back() {
    let mut deque = BlockDeque::new();
    for i in 0..=20 {
        deque.push_back(i);
    }
    assert_eq!(deque.len(), 21);

    for i in (0..=20).rev() {
        assert_eq!(deque.pop_back(), Some(i));
    }
    assert_eq!(deque.pop_back(), None, "Popping an empty deque should do nothing.");
    assert_eq!(deque.pop_front(), None);
    assert!(deque.is_empty());
}

#[test]
fn test_index_and_at() {
    let mut deque = BlockDeque::new();
    for i in 0..=10 {
        deque.push_back(i);
    }

    for i in 0..=10 {
        assert_eq!(deque[i], i);
        assert_eq!(deque.at(i), Ok(&i));
    }
    assert_eq!(deque.at(11), Err(IndexOutOfBounds { index: 11, len: 11 }));
    assert_panics!({
        let _ = deque[11];
    });

    deque[3] = 30;
    *deque.at_mut(4).unwrap() = 40;
    // SAFETY: 5 < 11.
    unsafe { *deque.get_unchecked_mut(5) = 50 };
    assert!(deque.iter().skip(3).take(3).copied().eq([30, 40, 50]));
}

#[test]
fn test_first_growth() {
    let mut deque = BlockDeque::new();
    assert_eq!(deque.num_blocks(), INITIAL_BLOCKS);
    assert_eq!(deque.blocks_used(), 0);

    // The first element lands in the middle of the middle block, leaving 4 + 8 + 8 slots at the back.
    for i in 0..20 {
        deque.push_back(i);
    }
    assert_eq!(deque.num_blocks(), 5);
    assert_eq!(deque.blocks_used(), 3);

    deque.push_back(20);
    assert_eq!(deque.num_blocks(), 10, "The directory should double once the back runs out.");
    assert_eq!(deque.blocks_used(), 4);
    assert_eq!(
        (deque.block_front, deque.num_blocks() - 1 - deque.block_back),
        (3, 3),
        "Live blocks should be centred in the new directory."
    );
    assert!(deque.iter().copied().eq(0..=20));
}

#[test]
fn test_growth_keeps_live_blocks() {
    let mut deque = BlockDeque::with_block_size(4);
    for i in 0..10 {
        deque.push_back(i);
    }
    let live: Vec<_> = (deque.block_front..=deque.block_back)
        .map(|b| deque.blocks[b].ptr)
        .collect();

    deque.grow(End::Back);

    assert_eq!(deque.num_blocks(), 10);
    assert!(
        deque.blocks.iter().all(|block| block.size() == 4),
        "Every slot of the new directory should hold a full block."
    );
    let moved: Vec<_> = (deque.block_front..=deque.block_back)
        .map(|b| deque.blocks[b].ptr)
        .collect();
    assert_eq!(moved, live, "Live blocks should move as handles, not be reallocated.");
    assert!(deque.iter().copied().eq(0..10));

    deque.push_back(10);
    assert_eq!(deque.num_blocks(), 10, "The block opened by growth should be used directly.");
    assert!(deque.iter().copied().eq(0..=10));
}

#[test]
fn test_repeated_growth() {
    let mut deque = BlockDeque::new();
    for i in 0..100 {
        deque.push_back(i);
    }
    assert_eq!(deque.num_blocks(), 20, "Two growth events should have occurred.");
    assert!(deque.iter().copied().eq(0..100));

    let mut deque = BlockDeque::new();
    for i in 0..100 {
        deque.push_front(i);
    }
    assert_eq!(deque.num_blocks(), 20);
    assert!(deque.iter().copied().eq((0..100).rev()));
    assert_eq!(deque.front(), Some(&99));
    assert_eq!(deque.back(), Some(&0));
}

#[test]
fn test_interleaved_ends() {
    let mut deque = BlockDeque::with_block_size(3);
    let mut expected = std::collections::VecDeque::new();

    for i in 0..200 {
        match i % 5 {
            0 | 3 => {
                deque.push_front(i);
                expected.push_front(i);
            },
            1 | 4 => {
                deque.push_back(i);
                expected.push_back(i);
            },
            _ => {
                assert_eq!(deque.pop_front(), expected.pop_front());
            },
        }
        assert_eq!(deque.len(), expected.len());
    }

    assert!(deque.iter().eq(expected.iter()));
    assert!(deque.iter().rev().eq(expected.iter().rev()));
    for (i, item) in expected.iter().enumerate() {
        assert_eq!(deque.at(i), Ok(item));
    }
}

#[test]
fn test_empty_push_recentres() {
    let mut deque: BlockDeque<_> = (0..=20).collect();
    while deque.pop_front().is_some() {}

    deque.push_front(1);
    assert_eq!(deque.block_front, deque.num_blocks() / 2);
    assert_eq!(deque.index_front, DEFAULT_BLOCK_SIZE / 2);
    assert_eq!((deque.block_back, deque.index_back), (deque.block_front, deque.index_front));
    assert_eq!(deque.blocks_used(), 1);
    assert_eq!(deque.back(), Some(&1));
}

#[test]
fn test_unit_blocks() {
    let mut deque = BlockDeque::with_block_size(1);
    for i in 0..10 {
        deque.push_back(i);
        deque.push_front(-i);
    }
    assert_eq!(deque.len(), 20);
    assert_eq!(deque.blocks_used(), 20);
    assert_eq!(deque.pop_front(), Some(-9));
    assert_eq!(deque.pop_back(), Some(9));

    assert_panics!({
        BlockDeque::<u8>::with_block_size(0);
    });
}

#[test]
fn test_zero_sized() {
    let mut deque = BlockDeque::new();
    for _ in 0..50 {
        deque.push_back(());
    }
    assert_eq!(deque.len(), 50);
    assert_eq!(deque.iter().count(), 50);
    assert_eq!(deque.pop_front(), Some(()));
}

#[test]
fn test_iterators() {
    let mut deque: BlockDeque<_> = (0..30).collect();

    for item in deque.iter_mut() {
        *item *= 2;
    }
    let mut iter = deque.iter_mut();
    *iter.next_back().unwrap() = -1;
    assert_eq!(iter.len(), 29);

    assert_eq!(deque.back(), Some(&-1));
    assert!(deque.iter().take(3).copied().eq([0, 2, 4]));

    let mut into_iter = deque.into_iter();
    assert_eq!(into_iter.next_back(), Some(-1));
    assert_eq!(into_iter.next(), Some(0));
    assert_eq!(into_iter.len(), 28);
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut deque = BlockDeque::new();
    for i in 0..30 {
        if i % 2 == 0 {
            deque.push_back(counter.track(i));
        } else {
            deque.push_front(counter.track(i));
        }
    }

    drop(deque.pop_back());
    drop(deque.pop_front());
    assert_eq!(counter.dropped(), 2);

    drop(deque);
    assert_eq!(counter.dropped(), 30, "Every element should be dropped exactly once.");

    let counter = DropCounter::new();
    let mut deque: BlockDeque<_> = (0..10).map(|i| counter.track(i)).collect();
    deque.clear();
    assert_eq!(counter.dropped(), 10);
    assert!(deque.is_empty());
    deque.push_back(counter.track(10));
    assert_eq!(deque.front().map(|t| t.value), Some(10));
}

#[test]
fn test_clone_and_eq() {
    let deque: BlockDeque<_> = "hello world".chars().collect();
    let clone = deque.clone();
    assert_eq!(deque, clone);
    assert_eq!(clone.block_size(), deque.block_size());
    assert_eq!(format!("{deque:?}"), format!("{:?}", "hello world".chars().collect::<Vec<_>>()));
}

#[test]
fn test_queue_and_stack() {
    let mut queue = Queue::new();
    let mut stack = Stack::new();
    for i in 0..40 {
        queue.push(i);
        stack.push(i);
    }

    assert_eq!(queue.front(), Some(&0));
    assert_eq!(queue.back(), Some(&39));
    assert_eq!(stack.top(), Some(&39));

    for i in 0..40 {
        assert_eq!(queue.pop(), Some(i));
        assert_eq!(stack.pop(), Some(39 - i));
    }
    assert!(queue.is_empty() && stack.is_empty());
    assert_eq!(queue.pop(), None);
    assert_eq!(stack.top(), None);
}
