//! Conversion between containers of the same or different categories.
//!
//! | From | To | Rule |
//! |------|----|------|
//! | Sequence | Sequence | element-wise copy in iteration order |
//! | Associative | Associative | pair-wise copy |
//! | Sequence | String | elements stringified, joined by single spaces |
//! | Associative | Sequence | key then value for every pair |
//! | Associative | String | `(key, value)` for every pair, no separator |
//!
//! Any other pair has no [`ConversionRule`] and is rejected by the compiler.

use crate::container::{Associative, Container, Sequence, Text};
use crate::insert::{append_unit, insert_one, insert_pair};
use crate::kind::{classify, AssociativeKind, SequenceKind, StringKind};
use crate::stringify::Stringify;

/// Conversion from `S` to `T`, implemented on the pair of category markers
/// `(S::Kind, T::Kind)`.
pub trait ConversionRule<S, T> {
    /// Short rule name, used in trace output.
    const NAME: &'static str;

    fn convert(source: &S) -> T;
}

/// Converts `source` into a freshly built `T`. The source is only read.
///
/// ```
/// use std::collections::BTreeMap;
/// use standout_query::convert;
///
/// let map = BTreeMap::from([(1, 1), (2, 2), (3, 3)]);
/// let text: String = convert(&map);
/// assert_eq!(text, "(1, 1)(2, 2)(3, 3)");
///
/// let flat: Vec<i32> = convert(&map);
/// assert_eq!(flat, vec![1, 1, 2, 2, 3, 3]);
/// ```
pub fn convert<S, T>(source: &S) -> T
where
    S: Container,
    T: Container,
    (S::Kind, T::Kind): ConversionRule<S, T>,
{
    log::trace!(
        "convert {} -> {} via {} ({} entries)",
        classify::<S>(),
        classify::<T>(),
        <(S::Kind, T::Kind) as ConversionRule<S, T>>::NAME,
        source.len()
    );
    <(S::Kind, T::Kind) as ConversionRule<S, T>>::convert(source)
}

impl<S, T> ConversionRule<S, T> for (SequenceKind, SequenceKind)
where
    S: Sequence,
    T: Sequence,
    S::Item: Clone + Into<T::Item>,
{
    const NAME: &'static str = "sequence copy";

    fn convert(source: &S) -> T {
        let mut target = T::default();
        for item in source.items() {
            insert_one(&mut target, item.clone().into());
        }
        target
    }
}

impl<S, T> ConversionRule<S, T> for (AssociativeKind, AssociativeKind)
where
    S: Associative,
    T: Associative,
    S::Key: Clone + Into<T::Key>,
    S::Value: Clone + Into<T::Value>,
{
    const NAME: &'static str = "pair copy";

    fn convert(source: &S) -> T {
        let mut target = T::default();
        for (key, value) in source.pairs() {
            insert_pair(&mut target, key.clone().into(), value.clone().into());
        }
        target
    }
}

impl<S, T> ConversionRule<S, T> for (SequenceKind, StringKind)
where
    S: Sequence,
    T: Text,
    S::Item: Stringify,
{
    const NAME: &'static str = "space-joined text";

    fn convert(source: &S) -> T {
        let mut target = T::default();
        let mut unit = String::new();
        for (index, item) in source.items().enumerate() {
            unit.clear();
            if index > 0 {
                unit.push(' ');
            }
            item.stringify_into(&mut unit);
            append_unit(&mut target, &unit);
        }
        target
    }
}

impl<S, T> ConversionRule<S, T> for (AssociativeKind, SequenceKind)
where
    S: Associative,
    T: Sequence,
    S::Key: Clone + Into<T::Item>,
    S::Value: Clone + Into<T::Item>,
{
    const NAME: &'static str = "pair flattening";

    fn convert(source: &S) -> T {
        let mut target = T::default();
        for (key, value) in source.pairs() {
            insert_one(&mut target, key.clone().into());
            insert_one(&mut target, value.clone().into());
        }
        target
    }
}

impl<S, T> ConversionRule<S, T> for (AssociativeKind, StringKind)
where
    S: Associative,
    T: Text,
    S::Key: Stringify,
    S::Value: Stringify,
{
    const NAME: &'static str = "pair text";

    fn convert(source: &S) -> T {
        let mut target = T::default();
        let mut unit = String::new();
        for (key, value) in source.pairs() {
            unit.clear();
            unit.push('(');
            key.stringify_into(&mut unit);
            unit.push_str(", ");
            value.stringify_into(&mut unit);
            unit.push(')');
            append_unit(&mut target, &unit);
        }
        target
    }
}
