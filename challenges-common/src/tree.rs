//! # Nested Sequences
//!
//! A sequence whose elements are either plain items or further sequences,
//! nested to any depth. This is the input shape of `flatten`.
//!
//! ```
//! use challenges_common::{nested, Nested};
//!
//! // [1, [2], [3, [[4]]]]
//! let tree: Nested<i32> = nested!([1, [2], [3, [[4]]]]);
//! assert_eq!(tree.count_items(), 4);
//! assert_eq!(tree.depth(), 4);
//! assert_eq!(tree.as_slice().len(), 3);
//! ```

/// An item, or a list of nested values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wraps a plain item.
    #[must_use]
    pub fn item(value: T) -> Self {
        Nested::Item(value)
    }

    /// Builds a list from anything yielding nested values.
    #[must_use]
    pub fn list<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Nested<T>>,
    {
        Nested::List(children.into_iter().collect())
    }

    #[must_use]
    pub fn is_item(&self) -> bool {
        matches!(self, Nested::Item(_))
    }

    /// Views this value as a sequence.
    ///
    /// A list yields its children; an item yields itself as a one-element slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Nested<T>] {
        match self {
            Nested::List(children) => children,
            Nested::Item(_) => std::slice::from_ref(self),
        }
    }

    /// Nesting depth. Items have depth 0; a list is one deeper than its deepest child.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Nested::Item(_) => 0,
            Nested::List(children) => 1 + children.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }

    /// Number of plain items anywhere inside this value.
    #[must_use]
    pub fn count_items(&self) -> usize {
        match self {
            Nested::Item(_) => 1,
            Nested::List(children) => children.iter().map(Nested::count_items).sum(),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Item(value)
    }
}

impl<T> Default for Nested<T> {
    fn default() -> Self {
        Nested::List(Vec::new())
    }
}

/// Builds a [`Nested`] value from a bracket literal.
///
/// Each element must be a single token tree, so negative numbers need
/// parentheses: `nested!([(-1), [2]])`.
///
/// ```
/// use challenges_common::{nested, Nested};
///
/// let empty: Nested<i32> = nested!([[], [[]]]);
/// assert_eq!(empty.count_items(), 0);
/// assert_eq!(nested!(7), Nested::Item(7));
/// ```
#[macro_export]
macro_rules! nested {
    ([$($element:tt),* $(,)?]) => {
        $crate::tree::Nested::List(vec![$($crate::nested!($element)),*])
    };
    ($item:expr) => {
        $crate::tree::Nested::Item($item)
    };
}
