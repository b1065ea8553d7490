//! Separate-chaining hash map.

use tracing::trace;

use crate::array::DynArray;
use crate::error::{Error, Result};
use crate::table::{SymbolTable, TableKey, hash_index};

/// Mean chain length that triggers a bucket-array resize.
const LOAD_FACTOR_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Hash map resolving collisions with a chain per bucket.
///
/// Each chain is a [`DynArray`] of key/value entries. When the mean
/// chain length crosses `5.0`, the bucket array doubles and every entry
/// rehashes; rehashing walks buckets and chains in order, so the
/// resulting layout is deterministic for a given insertion sequence.
#[derive(Debug, Clone)]
pub struct SeparateChaining<K, V> {
    buckets: Vec<DynArray<Entry<K, V>>>,
    entries: usize,
}

impl<K: TableKey, V: Clone> SeparateChaining<K, V> {
    /// Create a table with `initial_capacity` buckets (minimum 1).
    #[must_use]
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            buckets: new_buckets(initial_capacity.max(1)),
            entries: 0,
        }
    }

    /// Current number of buckets.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[allow(clippy::cast_precision_loss)]
    fn load_factor(&self) -> f64 {
        // buckets is never empty
        self.entries as f64 / self.buckets.len() as f64
    }

    fn resize(&mut self, new_bucket_count: usize) {
        let old = std::mem::replace(&mut self.buckets, new_buckets(new_bucket_count));
        for chain in &old {
            for entry in chain {
                let index = hash_index(&entry.key, new_bucket_count);
                self.buckets[index].append(entry.clone());
            }
        }
        trace!(
            from = old.len(),
            to = new_bucket_count,
            entries = self.entries,
            "resized chaining table"
        );
    }
}

fn new_buckets<K, V>(count: usize) -> Vec<DynArray<Entry<K, V>>> {
    let mut buckets = Vec::with_capacity(count);
    buckets.resize_with(count, || DynArray::with_capacity(1));
    buckets
}

impl<K: TableKey, V: Clone> SymbolTable<K, V> for SeparateChaining<K, V> {
    fn put(&mut self, key: K, value: V) -> Result<()> {
        if key.is_null() {
            return Err(Error::NullKey);
        }

        let index = hash_index(&key, self.buckets.len());
        for entry in self.buckets[index].as_mut_slice() {
            if entry.key == key {
                entry.value = value;
                return Ok(());
            }
        }

        self.buckets[index].append(Entry { key, value });
        self.entries += 1;

        if self.load_factor() > LOAD_FACTOR_THRESHOLD {
            self.resize(self.buckets.len() * 2);
        }
        Ok(())
    }

    fn get(&self, key: &K) -> Option<&V> {
        let index = hash_index(key, self.buckets.len());
        self.buckets[index]
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| &entry.value)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = hash_index(key, self.buckets.len());
        self.buckets[index]
            .as_mut_slice()
            .iter_mut()
            .find(|entry| entry.key == *key)
            .map(|entry| &mut entry.value)
    }

    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        let index = hash_index(key, self.buckets.len());
        let chain = &mut self.buckets[index];
        let position = chain.iter().position(|entry| entry.key == *key)?;
        // DynArray positions are 1-based
        let entry = chain.delete(position + 1).ok()?;
        self.entries -= 1;
        Some(entry.value)
    }

    fn len(&self) -> usize {
        self.entries
    }

    fn key_set(&self) -> DynArray<K> {
        let mut keys = DynArray::with_capacity(self.entries.max(1));
        for chain in &self.buckets {
            for entry in chain {
                keys.append(entry.key.clone());
            }
        }
        keys
    }

    fn value_set(&self) -> DynArray<V> {
        let mut values = DynArray::with_capacity(self.entries.max(1));
        for chain in &self.buckets {
            for entry in chain {
                values.append(entry.value.clone());
            }
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn put_then_get_round_trips() {
        let mut table = SeparateChaining::with_capacity(2);
        table.put("BOG".to_string(), "Bogota").unwrap();
        table.put("LIM".to_string(), "Lima").unwrap();

        assert_eq!(table.get(&"BOG".to_string()), Some(&"Bogota"));
        assert_eq!(table.get(&"LIM".to_string()), Some(&"Lima"));
        assert_eq!(table.get(&"SCL".to_string()), None);
    }

    #[test]
    fn overwrite_replaces_in_place_without_growing() {
        let mut table = SeparateChaining::with_capacity(4);
        table.put("MIA".to_string(), 1).unwrap();
        table.put("MIA".to_string(), 2).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&"MIA".to_string()), Some(&2));
    }

    #[test]
    fn survives_repeated_resizes() {
        let mut table = SeparateChaining::with_capacity(1);
        for i in 0..200u32 {
            table.put(format!("landing-{i}"), i).unwrap();
        }

        assert!(
            table.bucket_count() > 4,
            "expected at least two doublings from 1 bucket, got {}",
            table.bucket_count()
        );
        assert_eq!(table.len(), 200);
        for i in 0..200u32 {
            assert_eq!(
                table.get(&format!("landing-{i}")),
                Some(&i),
                "key landing-{i} lost across resize"
            );
        }
    }

    #[test]
    fn delete_removes_only_the_requested_key() {
        let mut table = SeparateChaining::with_capacity(1);
        for i in 0..10u32 {
            table.put(format!("k{i}"), i).unwrap();
        }

        assert_eq!(table.delete(&"k4".to_string()), Some(4));
        assert_eq!(table.delete(&"k4".to_string()), None);
        assert_eq!(table.len(), 9);
        for i in (0..10u32).filter(|i| *i != 4) {
            assert!(table.contains(&format!("k{i}")));
        }
    }

    #[test]
    fn key_set_and_value_set_align_and_cover_all_entries() {
        let mut table = SeparateChaining::with_capacity(2);
        for i in 0..30u32 {
            table.put(format!("station-{i}"), i * 10).unwrap();
        }

        let keys = table.key_set();
        let values = table.value_set();
        assert_eq!(keys.size(), 30);
        assert_eq!(values.size(), 30);
        for position in 1..=30 {
            let key = keys.get(position).unwrap();
            let value = values.get(position).unwrap();
            assert_eq!(table.get(key), Some(value), "sets disagree at {position}");
        }
    }

    #[test]
    fn identical_insertion_sequences_yield_identical_key_set_order() {
        let build = || {
            let mut table = SeparateChaining::with_capacity(2);
            for i in 0..50u32 {
                table.put(format!("c{i}"), i).unwrap();
            }
            table.key_set().iter().cloned().collect::<Vec<_>>()
        };
        assert_eq!(build(), build());
    }

    proptest! {
        /// Behaves exactly like a std HashMap under random operations.
        #[test]
        fn matches_hashmap_model(
            ops in prop::collection::vec((0u16..50, any::<u32>(), any::<bool>()), 0..300)
        ) {
            let mut table = SeparateChaining::with_capacity(1);
            let mut model: HashMap<String, u32> = HashMap::new();

            for (raw_key, value, is_put) in ops {
                let key = format!("key-{raw_key}");
                if is_put {
                    table.put(key.clone(), value).unwrap();
                    model.insert(key, value);
                } else {
                    prop_assert_eq!(table.delete(&key), model.remove(&key));
                }
            }

            prop_assert_eq!(table.len(), model.len());
            for (key, value) in &model {
                prop_assert_eq!(table.get(key), Some(value));
            }
        }
    }
}
