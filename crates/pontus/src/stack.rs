//! Linked LIFO stack.
//!
//! Backs path reconstruction and traversal bookkeeping. The stack is a
//! heap-allocated node chain rather than a vector, so pushes never move
//! existing elements and pops are pointer swaps.

use crate::error::{Error, Result};

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A generic last-in-first-out stack over a linked node chain.
///
/// `pop` and `peek` on an empty stack are contract violations and return
/// [`Error::Empty`]. Use [`iter`](Stack::iter) to walk the stack top to
/// bottom without consuming it.
#[derive(Debug, Default)]
pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self { top: None, size: 0 }
    }

    /// Push `value` onto the top of the stack.
    pub fn push(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.size += 1;
    }

    /// Remove and return the top value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] when the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        match self.top.take() {
            Some(node) => {
                self.top = node.next;
                self.size -= 1;
                Ok(node.value)
            }
            None => Err(Error::empty("stack", "pop")),
        }
    }

    /// Borrow the top value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] when the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        self.top
            .as_deref()
            .map(|node| &node.value)
            .ok_or(Error::empty("stack", "peek"))
    }

    /// Number of values on the stack.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the stack holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Iterate the values top to bottom without consuming the stack.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }
}

impl<T> Drop for Stack<T> {
    // Unlink iteratively: dropping the default way would recurse once per
    // node and can exhaust the call stack on long chains.
    fn drop(&mut self) {
        let mut current = self.top.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

/// Borrowing iterator over a [`Stack`], top to bottom.
#[derive(Debug)]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.pop().unwrap(), 3);
        assert_eq!(stack.pop().unwrap(), 2);
        assert_eq!(stack.pop().unwrap(), 1);
        assert!(stack.is_empty());
    }

    #[test]
    fn pop_on_empty_is_an_empty_error() {
        let mut stack: Stack<u32> = Stack::new();
        assert_eq!(stack.pop().unwrap_err(), Error::empty("stack", "pop"));
    }

    #[test]
    fn peek_on_empty_is_an_empty_error() {
        let stack: Stack<u32> = Stack::new();
        assert_eq!(stack.peek().unwrap_err(), Error::empty("stack", "peek"));
    }

    #[test]
    fn peek_does_not_remove_the_top() {
        let mut stack = Stack::new();
        stack.push("summit");

        assert_eq!(*stack.peek().unwrap(), "summit");
        assert_eq!(stack.size(), 1);
        assert_eq!(stack.pop().unwrap(), "summit");
    }

    #[test]
    fn size_tracks_pushes_and_pops() {
        let mut stack = Stack::new();
        assert_eq!(stack.size(), 0);

        stack.push('a');
        stack.push('b');
        assert_eq!(stack.size(), 2);

        stack.pop().unwrap();
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn iter_walks_top_to_bottom_without_consuming() {
        let mut stack = Stack::new();
        stack.push(10);
        stack.push(20);
        stack.push(30);

        let seen: Vec<i32> = stack.iter().copied().collect();
        assert_eq!(seen, vec![30, 20, 10]);
        assert_eq!(stack.size(), 3, "iteration must not consume the stack");
    }

    #[test]
    fn deep_stacks_drop_without_recursion() {
        let mut stack = Stack::new();
        for value in 0..100_000 {
            stack.push(value);
        }
        drop(stack);
    }
}
