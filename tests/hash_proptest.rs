use containers::collections::hash::{HashMap, HashSet};
use proptest::prelude::*;
use std::collections::HashMap as StdHashMap;
use std::collections::HashSet as StdHashSet;

#[derive(Debug, Clone)]
enum Operation {
    Insert(u16),
    Remove(u16),
    Contains(u16),
    Rehash(usize),
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            5 => (0..512_u16).prop_map(Operation::Insert),
            3 => (0..512_u16).prop_map(Operation::Remove),
            2 => (0..512_u16).prop_map(Operation::Contains),
            1 => (0..64_usize).prop_map(Operation::Rehash),
        ],
        0..500,
    )
}

proptest! {
    #[test]
    fn test_hash_set_matches_std(ops in operations()) {
        let mut set = HashSet::new();
        let mut oracle = StdHashSet::new();

        for op in ops {
            match op {
                Operation::Insert(v) => prop_assert_eq!(set.insert(v), oracle.insert(v)),
                Operation::Remove(v) => prop_assert_eq!(set.remove(&v), oracle.take(&v)),
                Operation::Contains(v) => prop_assert_eq!(set.contains(&v), oracle.contains(&v)),
                Operation::Rehash(count) => set.rehash(count),
            }
            prop_assert_eq!(set.len(), oracle.len());
        }

        prop_assert_eq!(set.iter().count(), oracle.len());
        prop_assert!(set.iter().all(|item| oracle.contains(item)));
    }

    #[test]
    fn test_load_factor_stays_bounded(items in proptest::collection::vec(any::<u64>(), 0..1000)) {
        let mut map = HashMap::new();
        for (i, item) in items.iter().enumerate() {
            map.insert(*item, i);
            // Growth happens before an insert, so one insert past the threshold is allowed.
            prop_assert!(map.len() * 10 <= map.bucket_count() * 7 + 10);
        }
    }

    #[test]
    fn test_hash_map_matches_std(entries in proptest::collection::vec((any::<u8>(), any::<i32>()), 0..300)) {
        let mut map = HashMap::new();
        let mut oracle = StdHashMap::new();

        for (k, v) in entries {
            let vacant = !oracle.contains_key(&k);
            if vacant {
                oracle.insert(k, v);
            }
            prop_assert_eq!(map.insert(k, v), vacant);
        }

        prop_assert_eq!(map.len(), oracle.len());
        for (k, v) in oracle.iter() {
            prop_assert_eq!(map.get(k), Some(v));
        }
        for v in map.values_mut() {
            *v = v.wrapping_neg();
        }
        for (k, v) in oracle.iter() {
            prop_assert_eq!(map.remove(k), Some(v.wrapping_neg()));
        }
        prop_assert!(map.is_empty());
    }
}
