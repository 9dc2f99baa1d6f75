//! Compile-time container classification.
//!
//! Every container that takes part in a query declares exactly one
//! [`Kind`] marker through [`Container::Kind`](crate::Container::Kind).
//! Because an associated type can only be bound once per type, a container
//! can never be both a sequence and a map: the three categories are mutually
//! exclusive by construction, and a type without a `Container` impl is
//! simply not accepted by the engine.
//!
//! The engine's generic operations dispatch on pairs of these markers
//! (`(SequenceKind, StringKind)` and so on), so the selection of the right
//! conversion or merge rule happens during monomorphization, not at runtime.

use std::fmt;
use std::marker::PhantomData;

use crate::container::Container;

/// The category a container type falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Ordered collection of values without a key-to-value mapping.
    Sequence,
    /// Collection of key/value pairs, duplicate keys permitted.
    Associative,
    /// Character string.
    String,
    /// Not a container the engine can operate on.
    Unclassified,
}

impl Category {
    /// Returns `true` for the categories the engine can operate on.
    pub fn is_classified(self) -> bool {
        !matches!(self, Category::Unclassified)
    }

    /// Returns the display name of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Sequence => "sequence",
            Category::Associative => "associative",
            Category::String => "string",
            Category::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a container accepts a single new element.
///
/// This is a dispatch key only; it is never part of the query state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Insertion {
    /// Positional containers: the element is placed at the end.
    EmplaceAtEnd,
    /// Strings: one stringified unit is appended.
    AppendCharacters,
    /// The container places the element by its own rule (sorted sets, maps,
    /// hash containers, single-ended adapters).
    EmplaceAny,
}

/// Whether a container can be emptied in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clearing {
    Supported,
    /// Single-ended structures. Clearing them is a silent no-op.
    Unsupported,
}

mod sealed {
    pub trait Sealed {}
}

/// Marker trait implemented by the three category markers.
pub trait Kind: sealed::Sealed {
    const CATEGORY: Category;
}

/// Marker for sequence containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceKind;

/// Marker for associative containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociativeKind;

/// Marker for string-like containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringKind;

impl sealed::Sealed for SequenceKind {}
impl sealed::Sealed for AssociativeKind {}
impl sealed::Sealed for StringKind {}

impl Kind for SequenceKind {
    const CATEGORY: Category = Category::Sequence;
}

impl Kind for AssociativeKind {
    const CATEGORY: Category = Category::Associative;
}

impl Kind for StringKind {
    const CATEGORY: Category = Category::String;
}

/// Returns the category of a container type.
///
/// Only classified types can be named here; use [`classify!`](crate::classify!)
/// to probe an arbitrary type.
///
/// ```
/// use std::collections::BTreeMap;
/// use standout_query::{classify, Category};
///
/// assert_eq!(classify::<Vec<u8>>(), Category::Sequence);
/// assert_eq!(classify::<BTreeMap<u8, u8>>(), Category::Associative);
/// assert_eq!(classify::<String>(), Category::String);
/// ```
pub fn classify<C: Container>() -> Category {
    <C::Kind as Kind>::CATEGORY
}

/// Probe used by [`classify!`](crate::classify!). Not part of the public API.
#[doc(hidden)]
pub struct Probe<T: ?Sized>(PhantomData<T>);

impl<T: ?Sized> Probe<T> {
    #[doc(hidden)]
    pub const fn new() -> Self {
        Probe(PhantomData)
    }
}

#[doc(hidden)]
pub trait ClassifiedProbe {
    fn category(&self) -> Category;
}

impl<T: Container> ClassifiedProbe for Probe<T> {
    fn category(&self) -> Category {
        classify::<T>()
    }
}

#[doc(hidden)]
pub trait UnclassifiedProbe {
    fn category(&self) -> Category;
}

impl<T: ?Sized> UnclassifiedProbe for &Probe<T> {
    fn category(&self) -> Category {
        Category::Unclassified
    }
}

/// Classifies any type, yielding [`Category::Unclassified`] for types that do
/// not implement [`Container`](crate::Container).
///
/// Resolution happens at compile time through method lookup on a zero-sized
/// probe; no value of the type is needed.
///
/// ```
/// use standout_query::{classify, Category};
///
/// assert_eq!(classify!(Vec<i32>), Category::Sequence);
/// assert_eq!(classify!(String), Category::String);
/// assert_eq!(classify!(i32), Category::Unclassified);
/// ```
#[macro_export]
macro_rules! classify {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::__private::{ClassifiedProbe as _, UnclassifiedProbe as _};
        (&$crate::__private::Probe::<$ty>::new()).category()
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

    use crate::adapters::{MultiMap, Queue, Stack};

    #[test]
    fn sequences_classify_as_sequence() {
        assert_eq!(classify::<Vec<i32>>(), Category::Sequence);
        assert_eq!(classify::<VecDeque<i32>>(), Category::Sequence);
        assert_eq!(classify::<LinkedList<i32>>(), Category::Sequence);
        assert_eq!(classify::<BTreeSet<i32>>(), Category::Sequence);
        assert_eq!(classify::<HashSet<i32>>(), Category::Sequence);
        assert_eq!(classify::<Stack<i32>>(), Category::Sequence);
        assert_eq!(classify::<Queue<i32>>(), Category::Sequence);
    }

    #[test]
    fn maps_classify_as_associative() {
        assert_eq!(classify::<BTreeMap<i32, i32>>(), Category::Associative);
        assert_eq!(classify::<HashMap<i32, i32>>(), Category::Associative);
        assert_eq!(classify::<MultiMap<i32, i32>>(), Category::Associative);
    }

    #[test]
    fn string_classifies_as_string() {
        assert_eq!(classify::<String>(), Category::String);
    }

    #[test]
    fn macro_detects_unclassified_types() {
        assert_eq!(classify!(Vec<u8>), Category::Sequence);
        assert_eq!(classify!(BTreeMap<u8, String>), Category::Associative);
        assert_eq!(classify!(String), Category::String);
        assert_eq!(classify!(u64), Category::Unclassified);
        assert_eq!(classify!(&str), Category::Unclassified);
        assert_eq!(classify!([i32; 3]), Category::Unclassified);
    }

    #[test]
    fn category_display() {
        assert_eq!(Category::Sequence.to_string(), "sequence");
        assert_eq!(Category::Associative.to_string(), "associative");
        assert_eq!(Category::String.to_string(), "string");
        assert!(!Category::Unclassified.is_classified());
        assert!(Category::String.is_classified());
    }
}
