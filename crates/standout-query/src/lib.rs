//! Query - Generic query engine over standard container types.
//!
//! Query provides a fluent API for reading, filtering and reshaping any
//! container that declares its category. It supports:
//!
//! - Three container categories: sequences, associative containers, strings
//! - Conversion between categories (sequence to text, map to sequence, ...)
//! - Filtering with closures, reusable [`Gate`] comparisons or regex patterns
//! - A take-limit that stops filtering after a number of matches
//! - Merging and ordered set algebra (union, intersection, difference)
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::{BTreeMap, LinkedList};
//! use standout_query::{from, Gate, Op};
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
//!
//! // The first three even numbers, as a linked list
//! let evens: LinkedList<i32> = from(&numbers)
//!     .take(3)
//!     .where_(|n: &i32| n % 2 == 0)
//!     .to();
//! assert_eq!(evens, LinkedList::from([2, 4, 6]));
//!
//! // Merged and rendered as text
//! let text: String = from(&numbers)
//!     .where_(Gate::probe(Op::Gte, 8))
//!     .merge_list([10])
//!     .to();
//! assert_eq!(text, "8 9 10");
//!
//! // Maps filter on keys or values
//! let ages = BTreeMap::from([("ann", 31), ("bob", 42), ("cid", 67)]);
//! let seniors: String = from(&ages).where_value(Gate::probe(Op::Gt, 40)).to();
//! assert_eq!(seniors, "(bob, 42)(cid, 67)");
//! ```
//!
//! # Buffer Semantics
//!
//! The source is borrowed and never modified. The first operation that
//! needs a working copy copies the source into the query's buffer; every
//! operation after that rewrites the buffer in place. Calling
//! [`Query::to`] before any operation converts straight from the source.
//!
//! # Containers
//!
//! | Category | Types |
//! |----------|-------|
//! | Sequence | `Vec`, `VecDeque`, `LinkedList`, `BTreeSet`, `HashSet`, [`Stack`], [`Queue`], [`MultiSet`] |
//! | Associative | `BTreeMap`, `HashMap`, [`MultiMap`] |
//! | String | `String` |
//!
//! With the `indexmap` feature, `IndexSet` and `IndexMap` are available too.
//! Other types join by implementing [`Container`] plus one of [`Sequence`],
//! [`Associative`] or [`Text`].
//!
//! # Conversions
//!
//! | From | To | Result |
//! |------|----|--------|
//! | sequence | sequence | elements copied in iteration order |
//! | associative | associative | pairs copied in iteration order |
//! | sequence | string | elements stringified, joined by single spaces |
//! | associative | sequence | key, then value, for each pair |
//! | associative | string | `(key, value)` per pair, no separator |
//!
//! Any other combination does not compile.

mod adapters;
mod container;
mod convert;
mod error;
mod filter;
mod gate;
mod insert;
mod kind;
mod merge;
mod op;
mod predicate;
mod query;
mod set_ops;
mod stringify;

// Re-export public API
pub use adapters::{MultiMap, MultiSet, Queue, Stack};
pub use container::{Associative, Container, Sequence, Text};
pub use convert::{convert, ConversionRule};
pub use error::{QueryError, Result};
pub use filter::{
    filter_associative, filter_sequence, try_filter_associative, try_filter_sequence, Limit,
};
pub use gate::{fixed_gate, gate, Comparator, Gate};
pub use insert::{append_unit, clear, insert_one, insert_pair};
pub use kind::{
    classify, AssociativeKind, Category, Clearing, Insertion, Kind, SequenceKind, StringKind,
};
pub use merge::{merge, merge_items, merge_pairs, MergeRule};
pub use op::{Op, TextOp};
pub use predicate::{Matches, Predicate};
pub use query::{from, Query};
pub use set_ops::{
    difference_join, difference_with, intersect_with, intersection_join, union_join, union_with,
    SetRule,
};
pub use stringify::Stringify;

#[doc(hidden)]
pub mod __private {
    pub use crate::kind::{ClassifiedProbe, Probe, UnclassifiedProbe};
}
