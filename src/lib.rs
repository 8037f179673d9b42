//! # simple-list
//!
//! A singly-linked list for elements of one kind, with an optional capacity,
//! and a small harness that times it against `Vec`.
//!
//! Layout
//!
//!     src/list      The container: nodes, element kinds, errors, pop criteria, iterators
//!     src/value.rs  A dynamically typed element for lists built from text input
//!     src/bench.rs  Timing wrapper and the list vs Vec comparison
//!
//! Everything is single-threaded and synchronous. Indexed and tail operations
//! walk the chain and are O(n).

pub mod bench;
pub mod list;
pub mod value;

pub use list::{Element, ElementKind, ListError, PopCriteria, Popped, SimpleLinkedList};
pub use value::Value;
