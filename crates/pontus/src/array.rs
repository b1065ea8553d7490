//! Growable indexed sequence with 1-based positions.
//!
//! [`DynArray`] is the list type the rest of the engine builds on: query
//! results, bucket chains, and edge logs are all dynamic arrays. Positions
//! are 1-based to match the symbol-table and graph contracts; position 1
//! is the first element and `size()` the last.

use crate::error::{Error, Result};

/// Default capacity for [`DynArray::new`].
const DEFAULT_CAPACITY: usize = 10;

/// A growable, generic, 1-based indexed sequence.
///
/// The backing buffer's capacity is tracked separately from the logical
/// size and at least doubles whenever it is exhausted, giving amortized
/// O(1) appends. The buffer never shrinks, not even after deletions.
///
/// # Examples
///
/// ```
/// use pontus::DynArray;
///
/// let mut names = DynArray::new();
/// names.append("Cartagena");
/// names.append("Fortaleza");
/// names.insert("Praia", 2).unwrap();
///
/// assert_eq!(names.size(), 3);
/// assert_eq!(*names.get(2).unwrap(), "Praia");
/// ```
#[derive(Debug, Clone)]
pub struct DynArray<T> {
    items: Vec<T>,
}

impl<T> DynArray<T> {
    /// Create an empty array with the default initial capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty array with an explicit initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements currently stored.
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current backing capacity. Always at least [`size`](Self::size).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Insert `value` at the 1-based `position`, shifting later elements
    /// one position to the right. `size() + 1` appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Position`] when `position` is 0 or greater than
    /// `size() + 1`.
    pub fn insert(&mut self, value: T, position: usize) -> Result<()> {
        if position == 0 || position > self.items.len() + 1 {
            return Err(Error::position(position, self.items.len()));
        }
        self.grow_if_full();
        self.items.insert(position - 1, value);
        Ok(())
    }

    /// Append `value` after the current last element.
    pub fn append(&mut self, value: T) {
        self.grow_if_full();
        self.items.push(value);
    }

    /// Borrow the element at the 1-based `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Position`] when `position` is 0 or greater than
    /// `size()`.
    pub fn get(&self, position: usize) -> Result<&T> {
        self.check_read_position(position)?;
        Ok(&self.items[position - 1])
    }

    /// Mutably borrow the element at the 1-based `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Position`] when `position` is 0 or greater than
    /// `size()`.
    pub fn get_mut(&mut self, position: usize) -> Result<&mut T> {
        self.check_read_position(position)?;
        Ok(&mut self.items[position - 1])
    }

    /// Remove and return the element at the 1-based `position`, shifting
    /// later elements one position to the left. Capacity is retained.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] when the array is empty, and
    /// [`Error::Position`] when `position` is 0 or greater than `size()`.
    pub fn delete(&mut self, position: usize) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::empty("dynamic array", "delete"));
        }
        self.check_read_position(position)?;
        Ok(self.items.remove(position - 1))
    }

    /// Borrow the first element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Borrow the last element, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterate the elements front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Contiguous view of the elements for in-place algorithms.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    fn check_read_position(&self, position: usize) -> Result<()> {
        if position == 0 || position > self.items.len() {
            return Err(Error::position(position, self.items.len()));
        }
        Ok(())
    }

    /// Double the backing capacity when it is exhausted.
    ///
    /// `reserve_exact` may round up, so growth is "at least" doubling.
    fn grow_if_full(&mut self) {
        if self.items.len() == self.items.capacity() {
            let additional = self.items.capacity().max(1);
            self.items.reserve_exact(additional);
        }
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        Self { items }
    }
}
