//! The list container
//!
//!     Elements live in a chain of boxed nodes starting at `head`. Appending
//!     and positional removal walk the chain from the head, so both are O(n);
//!     removing the head is O(1).
//!
//!     Failed operations never mutate: capacity, kind and range checks all run
//!     before a link is touched. When a node is spliced out its successor is
//!     moved into the predecessor's link first, then the node is dropped.

use std::fmt;

use tracing::debug;

use super::element::{Element, ElementKind};
use super::error::ListError;
use super::iter::Iter;
use super::node::{Link, Node};
use super::pop::{PopCriteria, Popped};

/// A singly-linked list of elements of one kind, optionally bounded.
pub struct SimpleLinkedList<T> {
    head: Link<T>,
    length: usize,
    capacity: Option<usize>,
    element_kind: Option<ElementKind>,
}

impl<T> SimpleLinkedList<T> {
    /// Create an empty, unbounded list.
    pub fn new() -> Self {
        Self {
            head: None,
            length: 0,
            capacity: None,
            element_kind: None,
        }
    }

    /// Create an empty list that holds at most `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            head: None,
            length: 0,
            capacity: Some(capacity),
            element_kind: None,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Kind fixed by the first successful push, if any. Stays fixed after the
    /// list is emptied again.
    pub fn element_kind(&self) -> Option<ElementKind> {
        self.element_kind
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.length,
        }
    }

    /// Append `value` after the current tail.
    pub fn push(&mut self, value: T) -> Result<(), ListError>
    where
        T: Element,
    {
        if let Some(capacity) = self.capacity {
            if self.length >= capacity {
                return Err(ListError::FullList { capacity });
            }
        }

        let found = value.kind();
        if let Some(expected) = self.element_kind {
            if expected != found {
                return Err(ListError::TypeMismatch { expected, found });
            }
        }

        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Node::new(value));

        self.element_kind.get_or_insert(found);
        self.length += 1;
        debug!(length = self.length, kind = %found, "pushed element");
        Ok(())
    }

    /// Remove and return the head element.
    pub fn remove_default(&mut self) -> Result<T, ListError> {
        self.remove_at(0)
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let length = self.length;
        let out_of_range = ListError::NoSuchIndex { index, length };
        if index >= length {
            return Err(out_of_range);
        }

        let link = self.link_at(index).ok_or(out_of_range)?;
        let removed = link.take().ok_or(out_of_range)?;
        let Node { value, next } = *removed;
        *link = next;

        self.length -= 1;
        debug!(index, length = self.length, "removed element by index");
        Ok(value)
    }

    /// Remove the first element equal to `value`, or every equal element when
    /// `all_occurrences` is set. Removed elements come back in list order.
    pub fn remove_value(&mut self, value: &T, all_occurrences: bool) -> Result<Popped<T>, ListError>
    where
        T: PartialEq,
    {
        if all_occurrences {
            self.remove_all(value).map(Popped::Many)
        } else {
            self.remove_first(value).map(Popped::One)
        }
    }

    /// Remove the first element equal to `value`.
    pub fn remove_first(&mut self, value: &T) -> Result<T, ListError>
    where
        T: PartialEq,
    {
        self.splice_matching(value, false)
            .into_iter()
            .next()
            .ok_or(ListError::NoSuchElement)
    }

    /// Remove every element equal to `value`.
    pub fn remove_all(&mut self, value: &T) -> Result<Vec<T>, ListError>
    where
        T: PartialEq,
    {
        let removed = self.splice_matching(value, true);
        if removed.is_empty() {
            return Err(ListError::NoSuchElement);
        }
        Ok(removed)
    }

    /// Remove element(s) selected by `criteria`.
    pub fn pop(&mut self, criteria: PopCriteria<T>) -> Result<Popped<T>, ListError>
    where
        T: PartialEq,
    {
        match criteria {
            PopCriteria::Front => self.remove_default().map(Popped::One),
            PopCriteria::Index(index) => self.remove_at(index).map(Popped::One),
            PopCriteria::Value(value) => self.remove_value(&value, false),
            PopCriteria::AllValues(value) => self.remove_value(&value, true),
        }
    }

    /// Unlink elements equal to `value` in one pass, stopping after the first
    /// unless `all_occurrences` is set.
    fn splice_matching(&mut self, value: &T, all_occurrences: bool) -> Vec<T>
    where
        T: PartialEq,
    {
        let mut removed = Vec::new();
        let mut cursor = &mut self.head;

        while cursor.is_some() {
            if !all_occurrences && !removed.is_empty() {
                break;
            }

            let matches = cursor.as_ref().is_some_and(|node| node.value == *value);
            if matches {
                if let Some(node) = cursor.take() {
                    let Node { value: taken, next } = *node;
                    *cursor = next;
                    removed.push(taken);
                }
            } else if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }

        if !removed.is_empty() {
            self.length -= removed.len();
            debug!(
                removed = removed.len(),
                length = self.length,
                "removed elements by value"
            );
        }
        removed
    }

    pub(crate) fn take_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.length -= 1;
            value
        })
    }

    /// The link that owns the node at `index`; `index == len()` is the empty
    /// link after the tail.
    fn link_at(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return None,
            }
        }
        Some(cursor)
    }
}

impl<T> Default for SimpleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SimpleLinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; dropping the head box directly would recurse
        // once per node.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: fmt::Display> fmt::Display for SimpleLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> SimpleLinkedList<i32> {
        let mut list = SimpleLinkedList::new();
        for value in values {
            list.push(*value).unwrap();
        }
        list
    }

    fn collect(list: &SimpleLinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn empty_list_renders_nothing() {
        let list = SimpleLinkedList::<i32>::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "");
        assert_eq!(list.element_kind(), None);
    }

    #[test]
    fn push_appends_at_tail() {
        let list = list_of(&[5, 10, 15]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&5));
        assert_eq!(list.to_string(), "5 -> 10 -> 15");
        assert_eq!(list.element_kind().map(|kind| kind.name()), Some("i32"));
    }

    #[test]
    fn push_at_capacity_fails_without_mutation() {
        let mut list = SimpleLinkedList::with_capacity(2);
        list.push(5).unwrap();
        list.push(10).unwrap();

        assert_eq!(list.push(15), Err(ListError::FullList { capacity: 2 }));
        assert_eq!(list.len(), 2);
        assert_eq!(collect(&list), vec![5, 10]);
    }

    #[test]
    fn zero_capacity_rejects_first_push() {
        let mut list = SimpleLinkedList::with_capacity(0);
        assert_eq!(list.push(1), Err(ListError::FullList { capacity: 0 }));
        assert_eq!(list.element_kind(), None);
    }

    #[test]
    fn remove_at_splices_middle() {
        let mut list = list_of(&[5, 10, 15]);
        assert_eq!(list.remove_at(1), Ok(10));
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string(), "5 -> 15");
    }

    #[test]
    fn remove_at_tail_then_push_relinks() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.remove_at(2), Ok(3));
        list.push(4).unwrap();
        assert_eq!(collect(&list), vec![1, 2, 4]);
    }

    #[test]
    fn remove_at_out_of_range() {
        let mut list = list_of(&[5]);
        assert_eq!(
            list.remove_at(1),
            Err(ListError::NoSuchIndex {
                index: 1,
                length: 1
            })
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_default_on_empty_list() {
        let mut list = SimpleLinkedList::<i32>::new();
        assert_eq!(
            list.remove_default(),
            Err(ListError::NoSuchIndex {
                index: 0,
                length: 0
            })
        );
    }

    #[test]
    fn remove_first_stops_after_one_match() {
        let mut list = list_of(&[1, 2, 1, 2]);
        assert_eq!(list.remove_first(&2), Ok(2));
        assert_eq!(collect(&list), vec![1, 1, 2]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_first_on_missing_value_leaves_list() {
        let mut list = list_of(&[1, 2]);
        assert_eq!(list.remove_first(&5), Err(ListError::NoSuchElement));
        assert_eq!(list.remove_first(&2), Ok(2));
        assert_eq!(list.remove_first(&2), Err(ListError::NoSuchElement));
        assert_eq!(collect(&list), vec![1]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_value_single_returns_one() {
        let mut list = list_of(&[4, 4]);
        assert_eq!(list.remove_value(&4, false), Ok(Popped::One(4)));
        assert_eq!(collect(&list), vec![4]);
    }

    #[test]
    fn remove_all_removes_adjacent_matches() {
        let mut list = list_of(&[7, 7, 1, 7, 7]);
        assert_eq!(list.remove_all(&7), Ok(vec![7, 7, 7, 7]));
        assert_eq!(collect(&list), vec![1]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_all_can_empty_the_list() {
        let mut list = list_of(&[3, 3]);
        assert_eq!(list.remove_all(&3), Ok(vec![3, 3]));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.element_kind().is_some());
    }

    #[test]
    fn missing_value_is_no_such_element() {
        let mut list = list_of(&[1, 2]);
        assert_eq!(list.remove_value(&9, true), Err(ListError::NoSuchElement));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn pop_dispatches_on_criteria() {
        let mut list = list_of(&[1, 2, 3, 2]);
        assert_eq!(list.pop(PopCriteria::Front), Ok(Popped::One(1)));
        assert_eq!(list.pop(PopCriteria::Index(1)), Ok(Popped::One(3)));
        assert_eq!(list.pop(PopCriteria::AllValues(2)), Ok(Popped::Many(vec![2, 2])));
        assert!(list.is_empty());
        assert_eq!(
            list.pop(PopCriteria::Index(0)),
            Err(ListError::NoSuchIndex {
                index: 0,
                length: 0
            })
        );
    }

    #[test]
    fn iter_restarts_and_reports_size() {
        let list = list_of(&[10, 20, 30]);
        let iter = list.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![&10, &20, &30]);
        assert_eq!((&list).into_iter().count(), 3);
    }

    #[test]
    fn into_iter_drains_in_order() {
        let list = list_of(&[10, 20, 30]);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[test]
    fn debug_lists_elements() {
        assert_eq!(format!("{:?}", list_of(&[1, 2])), "[1, 2]");
    }

    #[test]
    fn dropping_long_list_does_not_overflow() {
        let mut list = SimpleLinkedList::new();
        for value in 0..200_000u32 {
            let mut node = Node::new(value);
            node.next = list.head.take();
            list.head = Some(node);
            list.length += 1;
        }
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
