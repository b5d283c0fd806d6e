use crate::LogbookMap;

use proptest::prelude::*;

proptest! {
    // Arbitrary set sequences over a small key space (plenty of collisions
    // and overwrites) must agree with an ordered-pair model on length,
    // iteration order, and every lookup.
    #[test]
    fn sets_match_an_ordered_model(
        ops in prop::collection::vec((0u8..24, any::<i32>()), 0..200),
    ) {
        let mut map = LogbookMap::new();
        let mut model: Vec<(u8, i32)> = Vec::new();

        for (key, value) in ops {
            map.set(key, value);
            if let Some(entry) = model.iter_mut().find(|(existing, _)| *existing == key) {
                entry.1 = value;
            } else {
                model.push((key, value));
            }
        }

        prop_assert_eq!(map.len(), model.len());

        let items: Vec<(u8, i32)> = map.iter().map(|(key, value)| (*key, *value)).collect();
        prop_assert_eq!(&items, &model);

        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Ok(value));
        }
        for key in 24u8..32 {
            prop_assert!(map.get(&key).is_err());
        }
    }

    // Distinct-key insertion across any number of doublings loses nothing,
    // and the load-factor and power-of-two invariants hold throughout.
    #[test]
    fn growth_preserves_every_distinct_key(key_count in 1usize..200) {
        let mut map = LogbookMap::new();
        for key in 0..key_count {
            map.set(key, key.wrapping_mul(3));
        }

        prop_assert_eq!(map.len(), key_count);
        prop_assert!(map.load_factor() <= 0.5);
        prop_assert!(map.capacity().is_power_of_two());
        prop_assert!(map.capacity() >= 8);

        for key in 0..key_count {
            prop_assert_eq!(map.get(&key), Ok(&key.wrapping_mul(3)));
        }
    }

    // Deleting an arbitrary subset keeps the length bookkeeping exact,
    // keeps iteration equal to insertion order minus the deletions, makes
    // every deleted key unreachable, and leaves every surviving key
    // retrievable even when a deletion lands in the middle of its probe
    // chain.
    #[test]
    fn deletes_track_length_order_and_reachability(
        key_count in 1usize..40,
        delete_mask in prop::collection::vec(any::<bool>(), 40),
    ) {
        let mut map = LogbookMap::new();
        for key in 0..key_count {
            map.set(key, key);
        }

        let mut deleted: Vec<usize> = Vec::new();
        for (key, flagged) in delete_mask.iter().enumerate().take(key_count) {
            if *flagged {
                prop_assert_eq!(map.delete(&key), Ok(key));
                deleted.push(key);
            }
        }

        let expected: Vec<usize> =
            (0..key_count).filter(|key| !deleted.contains(key)).collect();

        prop_assert_eq!(map.len(), expected.len());

        let keys: Vec<usize> = map.keys().copied().collect();
        prop_assert_eq!(&keys, &expected);

        for key in &deleted {
            prop_assert!(map.get(key).is_err());
        }
        for key in &expected {
            prop_assert_eq!(map.get(key), Ok(key));
        }
    }

    // Interleaved sets and deletes must stay in lockstep with the model:
    // a delete succeeds exactly when the model holds the key, and the
    // final state agrees on length, order, and every lookup.
    #[test]
    fn mixed_ops_match_an_ordered_model(
        ops in prop::collection::vec((any::<bool>(), 0u8..24, any::<i32>()), 0..200),
    ) {
        let mut map = LogbookMap::new();
        let mut model: Vec<(u8, i32)> = Vec::new();

        for (is_delete, key, value) in ops {
            if is_delete {
                let removed = map.delete(&key);
                if let Some(position) =
                    model.iter().position(|(existing, _)| *existing == key)
                {
                    let (_, expected) = model.remove(position);
                    prop_assert_eq!(removed, Ok(expected));
                } else {
                    prop_assert!(removed.is_err());
                }
            } else {
                map.set(key, value);
                if let Some(entry) =
                    model.iter_mut().find(|(existing, _)| *existing == key)
                {
                    entry.1 = value;
                } else {
                    model.push((key, value));
                }
            }
        }

        prop_assert_eq!(map.len(), model.len());

        let items: Vec<(u8, i32)> = map.iter().map(|(key, value)| (*key, *value)).collect();
        prop_assert_eq!(&items, &model);

        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Ok(value));
        }
    }
}
