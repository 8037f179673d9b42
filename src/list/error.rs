//! Failure kinds raised by [`SimpleLinkedList`](super::SimpleLinkedList) operations

use std::fmt;

use super::element::ElementKind;

/// Errors raised by list operations. Every check runs before the list is
/// touched, so a failed call leaves the list exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Push attempted while the list already holds `capacity` elements.
    FullList { capacity: usize },
    /// Push attempted with an element of a different kind than the first one.
    TypeMismatch {
        expected: ElementKind,
        found: ElementKind,
    },
    /// Index-based removal outside `0..length`.
    NoSuchIndex { index: usize, length: usize },
    /// Value-based removal found no equal element.
    NoSuchElement,
    /// A pop argument combination that selects no removal mode.
    InvalidCriteria(&'static str),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::FullList { capacity } => write!(
                f,
                "The linked list has reached its maximum capacity. Max size {}",
                capacity
            ),
            ListError::TypeMismatch { expected, found } => write!(
                f,
                "Data type mismatch. Required data type: {}, got: {}",
                expected, found
            ),
            ListError::NoSuchIndex { index, length } => write!(
                f,
                "Index out of range: {} (length {})",
                index, length
            ),
            ListError::NoSuchElement => write!(f, "Element not found"),
            ListError::InvalidCriteria(reason) => write!(f, "Invalid pop criteria: {}", reason),
        }
    }
}

impl std::error::Error for ListError {}
