//! Linear-probing hash map.

use std::mem;

use tracing::trace;

use crate::array::DynArray;
use crate::error::{Error, Result};
use crate::table::{SymbolTable, TableKey, hash_index};

/// Slot occupancy (live entries plus tombstones, over capacity) that
/// triggers a resize.
const OCCUPANCY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone)]
enum Slot<K, V> {
    Empty,
    Occupied { key: K, value: V },
    Tombstone,
}

/// Where a probe sequence for a key ended.
enum Probe {
    /// The key lives at this slot.
    Found(usize),
    /// The key is absent; this is the slot a write should use (the first
    /// tombstone on the probe path, or the terminating empty slot).
    Vacant(usize),
}

/// Hash map resolving collisions by probing the next slot, wrapping at
/// the end of the array.
///
/// Deleting writes a tombstone instead of emptying the slot, so probe
/// sequences that passed through the deleted entry still reach their
/// key. Tombstones count toward occupancy; when live entries plus
/// tombstones would exceed half the capacity, the array doubles and
/// live entries rehash, which also sheds every tombstone. The resize
/// runs ahead of the write, so a probe always terminates at an empty
/// slot or the key itself.
#[derive(Debug, Clone)]
pub struct LinearProbing<K, V> {
    slots: Vec<Slot<K, V>>,
    live: usize,
    tombstones: usize,
}

impl<K: TableKey, V: Clone> LinearProbing<K, V> {
    /// Create a table with `initial_capacity` slots (minimum 1).
    #[must_use]
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            slots: new_slots(initial_capacity.max(1)),
            live: 0,
            tombstones: 0,
        }
    }

    /// Current slot-array capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn probe(&self, key: &K) -> Probe {
        let capacity = self.slots.len();
        let mut index = hash_index(key, capacity);
        let mut first_tombstone = None;

        // The occupancy threshold keeps at least half the slots empty,
        // so the sweep always terminates early.
        for _ in 0..capacity {
            match &self.slots[index] {
                Slot::Occupied { key: existing, .. } if existing == key => {
                    return Probe::Found(index);
                }
                Slot::Occupied { .. } => {}
                Slot::Tombstone => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(index);
                    }
                }
                Slot::Empty => {
                    return Probe::Vacant(first_tombstone.unwrap_or(index));
                }
            }
            index = (index + 1) % capacity;
        }
        Probe::Vacant(first_tombstone.unwrap_or(index))
    }

    #[allow(clippy::cast_precision_loss)]
    fn would_exceed_occupancy(&self) -> bool {
        (self.live + self.tombstones + 1) as f64 / self.slots.len() as f64 > OCCUPANCY_THRESHOLD
    }

    fn resize(&mut self, new_capacity: usize) {
        let old = mem::replace(&mut self.slots, new_slots(new_capacity));
        self.tombstones = 0;
        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                let mut index = hash_index(&key, new_capacity);
                while matches!(self.slots[index], Slot::Occupied { .. }) {
                    index = (index + 1) % new_capacity;
                }
                self.slots[index] = Slot::Occupied { key, value };
            }
        }
        trace!(
            capacity = new_capacity,
            live = self.live,
            "resized probing table"
        );
    }
}

fn new_slots<K, V>(count: usize) -> Vec<Slot<K, V>> {
    let mut slots = Vec::with_capacity(count);
    slots.resize_with(count, || Slot::Empty);
    slots
}

impl<K: TableKey, V: Clone> SymbolTable<K, V> for LinearProbing<K, V> {
    fn put(&mut self, key: K, value: V) -> Result<()> {
        if key.is_null() {
            return Err(Error::NullKey);
        }
        if self.would_exceed_occupancy() {
            self.resize(self.slots.len() * 2);
        }

        match self.probe(&key) {
            Probe::Found(index) => {
                if let Slot::Occupied { value: stored, .. } = &mut self.slots[index] {
                    *stored = value;
                }
            }
            Probe::Vacant(index) => {
                if matches!(self.slots[index], Slot::Tombstone) {
                    self.tombstones -= 1;
                }
                self.slots[index] = Slot::Occupied { key, value };
                self.live += 1;
            }
        }
        Ok(())
    }

    fn get(&self, key: &K) -> Option<&V> {
        match self.probe(key) {
            Probe::Found(index) => match &self.slots[index] {
                Slot::Occupied { value, .. } => Some(value),
                _ => None,
            },
            Probe::Vacant(_) => None,
        }
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.probe(key) {
            Probe::Found(index) => match &mut self.slots[index] {
                Slot::Occupied { value, .. } => Some(value),
                _ => None,
            },
            Probe::Vacant(_) => None,
        }
    }

    fn contains(&self, key: &K) -> bool {
        matches!(self.probe(key), Probe::Found(_))
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        match self.probe(key) {
            Probe::Found(index) => {
                match mem::replace(&mut self.slots[index], Slot::Tombstone) {
                    Slot::Occupied { value, .. } => {
                        self.live -= 1;
                        self.tombstones += 1;
                        Some(value)
                    }
                    other => {
                        self.slots[index] = other;
                        None
                    }
                }
            }
            Probe::Vacant(_) => None,
        }
    }

    fn len(&self) -> usize {
        self.live
    }

    fn key_set(&self) -> DynArray<K> {
        let mut keys = DynArray::with_capacity(self.live.max(1));
        for slot in &self.slots {
            if let Slot::Occupied { key, .. } = slot {
                keys.append(key.clone());
            }
        }
        keys
    }

    fn value_set(&self) -> DynArray<V> {
        let mut values = DynArray::with_capacity(self.live.max(1));
        for slot in &self.slots {
            if let Slot::Occupied { value, .. } = slot {
                values.append(value.clone());
            }
        }
        values
    }
}
