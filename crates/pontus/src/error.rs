//! Error types for the pontus engine.
//!
//! Structural contract violations (an out-of-range position, an operation
//! on an empty structure, a null key, an unknown edge endpoint) are hard
//! failures surfaced as [`Error`] values at the point of violation.
//! Absence is never an error: table lookups and vertex lookups return
//! [`Option`], and path queries return empty results.

use thiserror::Error;

/// Errors raised by the engine's containers and graph mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A sequence accessor was called with a position outside its valid
    /// range. Positions are 1-based; `size` is the sequence size at the
    /// time of the call.
    #[error("position {position} out of range for size {size}")]
    Position {
        /// The offending 1-based position.
        position: usize,
        /// The sequence size when the access was attempted.
        size: usize,
    },

    /// Pop, peek, or delete was attempted on an empty structure.
    #[error("{operation} on empty {structure}")]
    Empty {
        /// The structure the operation targeted.
        structure: &'static str,
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// A symbol-table write received a key its key type considers null.
    #[error("null key passed to a symbol table write")]
    NullKey,

    /// An edge referenced a vertex identifier not present in the graph.
    #[error("vertex `{id}` does not exist in the graph")]
    MissingVertex {
        /// The identifier that failed to resolve.
        id: String,
    },

    /// An edge weight was negative, NaN, or infinite.
    #[error("invalid edge weight {weight}: weights must be finite and non-negative")]
    InvalidWeight {
        /// The rejected weight.
        weight: f64,
    },
}

impl Error {
    /// Shorthand for a [`Error::Position`] value.
    #[must_use]
    pub fn position(position: usize, size: usize) -> Self {
        Error::Position { position, size }
    }

    /// Shorthand for an [`Error::Empty`] value.
    #[must_use]
    pub fn empty(structure: &'static str, operation: &'static str) -> Self {
        Error::Empty {
            structure,
            operation,
        }
    }
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_error_displays_position_and_size() {
        let err = Error::position(7, 3);
        assert_eq!(err.to_string(), "position 7 out of range for size 3");
    }

    #[test]
    fn empty_error_names_structure_and_operation() {
        let err = Error::empty("stack", "pop");
        assert_eq!(err.to_string(), "pop on empty stack");
    }

    #[test]
    fn missing_vertex_error_includes_id() {
        let err = Error::MissingVertex {
            id: "BOG".to_string(),
        };
        assert!(err.to_string().contains("BOG"));
    }

    #[test]
    fn invalid_weight_error_includes_weight() {
        let err = Error::InvalidWeight { weight: -4.5 };
        assert!(err.to_string().contains("-4.5"));
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(Error::position(1, 0), Error::position(1, 0));
        assert_ne!(Error::position(1, 0), Error::position(2, 0));
    }
}
