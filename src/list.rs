//! Singly-linked list container
//!
//!     [`SimpleLinkedList`] keeps its elements in a chain of boxed nodes. It
//!     accepts elements of a single kind, fixed by the first push, and can be
//!     bounded at construction. Elements are appended at the tail and removed
//!     from the head, from a position, or by value (first match or all
//!     matches), selected through [`PopCriteria`].
//!
//!     Rendering joins the elements with `" -> "`, e.g. `5 -> 10 -> 15`.

mod element;
mod error;
mod iter;
mod linked_list;
mod node;
mod pop;

pub use element::{Element, ElementKind};
pub use error::ListError;
pub use iter::{IntoIter, Iter};
pub use linked_list::SimpleLinkedList;
pub use pop::{PopCriteria, Popped};
