//! Removal modes for [`SimpleLinkedList::pop`](super::SimpleLinkedList::pop)

use super::error::ListError;

/// Selects which element(s) a pop removes.
#[derive(Debug, Clone, PartialEq)]
pub enum PopCriteria<T> {
    /// Remove the head element.
    Front,
    /// Remove the element at a position.
    Index(usize),
    /// Remove the first element equal to the value.
    Value(T),
    /// Remove every element equal to the value.
    AllValues(T),
}

impl<T> PopCriteria<T> {
    /// Build criteria from optional arguments.
    ///
    /// An index is always an index pop, including `Some(0)`. Asking for all
    /// occurrences without a value, or giving both an index and a value, is
    /// rejected rather than guessed at.
    pub fn from_parts(
        index: Option<usize>,
        value: Option<T>,
        all_occurrences: bool,
    ) -> Result<Self, ListError> {
        match (index, value, all_occurrences) {
            (None, None, false) => Ok(PopCriteria::Front),
            (None, None, true) => Err(ListError::InvalidCriteria(
                "all occurrences requested without a value",
            )),
            (Some(_), Some(_), _) => Err(ListError::InvalidCriteria(
                "index and value are mutually exclusive",
            )),
            (Some(_), None, true) => Err(ListError::InvalidCriteria(
                "all occurrences only applies to value pops",
            )),
            (Some(index), None, false) => Ok(PopCriteria::Index(index)),
            (None, Some(value), false) => Ok(PopCriteria::Value(value)),
            (None, Some(value), true) => Ok(PopCriteria::AllValues(value)),
        }
    }
}

/// What a pop handed back: one element, or every match in list order.
#[derive(Debug, Clone, PartialEq)]
pub enum Popped<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Popped<T> {
    /// Number of elements removed.
    pub fn len(&self) -> usize {
        match self {
            Popped::One(_) => 1,
            Popped::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Popped::One(value) => vec![value],
            Popped::Many(values) => values,
        }
    }
}
