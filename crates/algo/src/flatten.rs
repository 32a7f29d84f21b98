//! Arbitrarily nested sequences and their flattening

use std::fmt;

/// A single value or an arbitrarily nested list of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T: fmt::Display> fmt::Display for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nested::Leaf(value) => write!(f, "{value}"),
            Nested::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Builds a nested-sequence literal as a `Vec<Nested<T>>`:
/// `nested![1, [2, 3], [4, [5]]]`.
#[macro_export]
macro_rules! nested {
    ( $( $item:tt ),* $(,)? ) => {
        vec![ $( $crate::nested_item!($item) ),* ]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! nested_item {
    ( [ $( $item:tt ),* $(,)? ] ) => {
        $crate::flatten::Nested::List(vec![ $( $crate::nested_item!($item) ),* ])
    };
    ( $value:expr ) => {
        $crate::flatten::Nested::Leaf($value)
    };
}

/// Flattens completely, depth-first, preserving left-to-right order.
///
/// # Example
/// ```
/// use algo::{flatten, nested};
///
/// assert_eq!(flatten(nested![1, [2, [3, [4]]]]), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T>(items: Vec<Nested<T>>) -> Vec<T> {
    let mut flat = Vec::new();
    for item in items {
        match item {
            Nested::Leaf(value) => flat.push(value),
            Nested::List(inner) => flat.extend(flatten(inner)),
        }
    }
    flat
}

/// Flattens exactly `depth` levels of nesting; a depth of zero returns
/// the input unchanged.
pub fn flatten_to_depth<T>(items: Vec<Nested<T>>, depth: usize) -> Vec<Nested<T>> {
    if depth == 0 {
        return items;
    }
    let mut flat = Vec::new();
    for item in items {
        match item {
            Nested::List(inner) => flat.extend(flatten_to_depth(inner, depth - 1)),
            leaf => flat.push(leaf),
        }
    }
    flat
}
