//! Symbol tables: one contract, two collision strategies.
//!
//! Registries and algorithm scratch maps all speak [`SymbolTable`]. Two
//! backends implement it: [`SeparateChaining`] keeps a chain per bucket,
//! [`LinearProbing`] keeps a flat slot array with tombstoned deletes.
//! Callers pick a strategy once, at construction, through
//! [`TableBackend`] and [`create_table`]; nothing downstream can tell
//! the backends apart for `put`/`get`/`contains`/`value_set`.
//!
//! Hashing uses xxh3 rather than the standard library's seeded hasher:
//! `key_set()`/`value_set()` order must be reproducible across runs on
//! the same input order, which a per-process random seed would break.

mod chaining;
mod probing;

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use xxhash_rust::xxh3::Xxh3;

use crate::array::DynArray;
use crate::error::Result;

pub use chaining::SeparateChaining;
pub use probing::LinearProbing;

/// Key bounds for symbol tables.
///
/// `is_null` marks values that are not acceptable keys at all: writing
/// one is a contract violation, not a miss. For strings the empty string
/// is null; numeric keys are never null.
pub trait TableKey: Hash + Eq + Clone + Display + fmt::Debug {
    /// Whether this value is a null key.
    fn is_null(&self) -> bool {
        false
    }
}

impl TableKey for String {
    fn is_null(&self) -> bool {
        self.is_empty()
    }
}

impl TableKey for u32 {}
impl TableKey for u64 {}
impl TableKey for i32 {}
impl TableKey for i64 {}

/// Associative-array contract shared by both hash-map backends.
///
/// Lookups on absent keys are ordinary misses, never errors: `get`
/// returns [`None`] and `delete` returns [`None`]. Only writing a null
/// key fails.
pub trait SymbolTable<K: TableKey, V: Clone> {
    /// Insert `value` under `key`, replacing the previous value in place
    /// if the key is already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullKey`](crate::Error::NullKey) when the key is
    /// null for its type.
    fn put(&mut self, key: K, value: V) -> Result<()>;

    /// Borrow the value stored under `key`, if any.
    fn get(&self, key: &K) -> Option<&V>;

    /// Mutably borrow the value stored under `key`, if any.
    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Whether `key` is present.
    fn contains(&self, key: &K) -> bool;

    /// Remove `key`, returning its value if it was present.
    fn delete(&mut self, key: &K) -> Option<V>;

    /// Number of entries stored.
    fn len(&self) -> usize;

    /// Whether the table holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all keys in the backend's storage order.
    ///
    /// Storage order is deterministic for a given insertion sequence:
    /// bucket-then-chain order for chaining, slot order for probing.
    fn key_set(&self) -> DynArray<K>;

    /// Snapshot of all values, in the same order as [`key_set`](Self::key_set).
    fn value_set(&self) -> DynArray<V>;
}

/// Collision-resolution strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBackend {
    /// Bucket array of chains; resizes on mean chain length.
    Chaining,
    /// Flat slot array with tombstoned deletes; resizes on occupancy.
    Probing,
}

impl Display for TableBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableBackend::Chaining => write!(f, "chaining"),
            TableBackend::Probing => write!(f, "probing"),
        }
    }
}

impl FromStr for TableBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chaining" => Ok(TableBackend::Chaining),
            "probing" => Ok(TableBackend::Probing),
            other => Err(format!(
                "unknown table backend `{other}` (expected `chaining` or `probing`)"
            )),
        }
    }
}

/// Construct a boxed symbol table for the selected backend.
///
/// `initial_capacity` sizes the initial bucket/slot array; both backends
/// grow on their own after that, so small values are safe and simply
/// cause earlier resizes.
#[must_use]
pub fn create_table<K, V>(
    backend: TableBackend,
    initial_capacity: usize,
) -> Box<dyn SymbolTable<K, V>>
where
    K: TableKey + 'static,
    V: Clone + 'static,
{
    match backend {
        TableBackend::Chaining => Box::new(SeparateChaining::with_capacity(initial_capacity)),
        TableBackend::Probing => Box::new(LinearProbing::with_capacity(initial_capacity)),
    }
}

/// Deterministic bucket/slot index for `key` in a table of `modulus`
/// positions. `modulus` must be non-zero.
pub(crate) fn hash_index<K: Hash>(key: &K, modulus: usize) -> usize {
    let mut hasher = Xxh3::new();
    key.hash(&mut hasher);
    usize::try_from(hasher.finish() % modulus as u64).unwrap_or(0)
}
