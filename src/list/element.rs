//! Element kinds
//!
//!     A list fixes the kind of its first element and rejects later elements of
//!     another kind. For plain Rust types the compiler already guarantees this:
//!     each type reports one constant kind, so the runtime check can never fail.
//!     Dynamically typed elements such as [`Value`](crate::value::Value) report
//!     a kind per variant, which keeps the check meaningful for them.

use std::fmt;

/// Runtime identity of an element's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementKind {
    name: &'static str,
}

impl ElementKind {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A value that can be stored in a [`SimpleLinkedList`](super::SimpleLinkedList).
pub trait Element: PartialEq + fmt::Display {
    fn kind(&self) -> ElementKind;
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                fn kind(&self) -> ElementKind {
                    ElementKind::new(stringify!($ty))
                }
            }
        )*
    };
}

impl_element!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl Element for &str {
    fn kind(&self) -> ElementKind {
        ElementKind::new("&str")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_kinds_are_constant_per_type() {
        assert_eq!(1_i32.kind(), 2_i32.kind());
        assert_eq!(1_i32.kind().name(), "i32");
        assert_ne!(1_i32.kind(), 1_i64.kind());
        assert_eq!(String::from("a").kind().to_string(), "String");
        assert_eq!("a".kind().to_string(), "&str");
    }
}
