use containers::collections::linked::{ForwardList, LinkedList};
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Operation {
    PushFront(u32),
    PushBack(u32),
    PopFront,
    PopBack,
}

proptest! {
    #[test]
    fn test_linked_list_matches_vec_deque(ops in proptest::collection::vec(
        prop_oneof![
            any::<u32>().prop_map(Operation::PushFront),
            any::<u32>().prop_map(Operation::PushBack),
            Just(Operation::PopFront),
            Just(Operation::PopBack),
        ],
        0..300
    )) {
        let mut list = LinkedList::new();
        let mut oracle = VecDeque::new();

        for op in ops {
            match op {
                Operation::PushFront(v) => {
                    list.push_front(v);
                    oracle.push_front(v);
                },
                Operation::PushBack(v) => {
                    list.push_back(v);
                    oracle.push_back(v);
                },
                Operation::PopFront => prop_assert_eq!(list.pop_front(), oracle.pop_front()),
                Operation::PopBack => prop_assert_eq!(list.pop_back(), oracle.pop_back()),
            }
            prop_assert_eq!(list.len(), oracle.len());
            prop_assert_eq!(list.front(), oracle.front());
            prop_assert_eq!(list.back(), oracle.back());
        }

        prop_assert!(list.iter().eq(oracle.iter()));
        prop_assert!(list.iter().rev().eq(oracle.iter().rev()));
    }

    #[test]
    fn test_forward_list_positional(
        items in proptest::collection::vec(any::<u8>(), 1..60),
        edits in proptest::collection::vec((any::<bool>(), any::<prop::sample::Index>(), any::<u8>()), 0..60),
    ) {
        let mut list: ForwardList<_> = items.iter().copied().collect();
        let mut oracle = items.clone();

        for (insert, index, value) in edits {
            if insert {
                let index = index.index(oracle.len());
                list.insert_after(index, value);
                oracle.insert(index + 1, value);
            } else if oracle.len() > 1 {
                let index = index.index(oracle.len() - 1);
                prop_assert_eq!(list.erase_after(index), oracle.remove(index + 1));
            }
            prop_assert_eq!(list.len(), oracle.len());
        }

        prop_assert!(list.iter().eq(oracle.iter()));
        prop_assert!(list.try_insert_after(oracle.len(), 0).is_err());
    }
}
