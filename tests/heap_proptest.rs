use containers::collections::contiguous::Vector;
use containers::collections::heap::PriorityQueue;
use containers::collections::traits::Reversed;
use proptest::prelude::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug, Clone)]
enum Operation {
    Push(i64),
    Pop,
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            3 => any::<i64>().prop_map(Operation::Push),
            2 => Just(Operation::Pop),
        ],
        0..300,
    )
}

proptest! {
    #[test]
    fn test_priority_queue_matches_binary_heap(ops in operations()) {
        let mut queue = PriorityQueue::new();
        let mut oracle = BinaryHeap::new();

        for op in ops {
            match op {
                Operation::Push(v) => {
                    queue.push(v);
                    oracle.push(v);
                },
                Operation::Pop => prop_assert_eq!(queue.pop(), oracle.pop()),
            }
            prop_assert_eq!(queue.len(), oracle.len());
            prop_assert_eq!(queue.top(), oracle.peek());
        }

        while let Some(expected) = oracle.pop() {
            prop_assert_eq!(queue.pop(), Some(expected));
        }
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn test_reversed_is_min_heap(items in proptest::collection::vec(any::<u32>(), 0..200)) {
        let mut queue = PriorityQueue::with_compare(Reversed);
        let mut oracle = BinaryHeap::new();
        for item in items.iter() {
            queue.push(*item);
            oracle.push(Reverse(*item));
        }

        while let Some(Reverse(expected)) = oracle.pop() {
            prop_assert_eq!(queue.pop(), Some(expected));
        }
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn test_heapify_then_sort(items in proptest::collection::vec(any::<i16>(), 0..200)) {
        let mut heapified = PriorityQueue::from_vector(items.iter().copied().collect::<Vector<_>>(), Reversed);
        prop_assert_eq!(heapified.len(), items.len());
        let mut previous = None;
        while let Some(item) = heapified.pop() {
            prop_assert!(previous.is_none_or(|prev| prev <= item));
            previous = Some(item);
        }

        let sorted = items.iter().copied().collect::<PriorityQueue<_>>().into_sorted_vector();
        let mut expected = items.clone();
        expected.sort();
        prop_assert_eq!(&*sorted, &expected[..]);
    }
}
