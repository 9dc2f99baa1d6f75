//! The filter engine behind `where`.
//!
//! Filtering rebuilds the buffer: a fresh container of the same type is
//! filled with the accepted elements in iteration order and then replaces
//! the old one. A [`Limit`] caps how many elements are accepted; once it is
//! reached the walk stops.

use std::convert::Infallible;

use crate::container::{Associative, Container, Sequence};
use crate::insert::{insert_one, insert_pair};

/// Maximum number of matches a filter step may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Limit {
    /// No cutoff.
    #[default]
    Unbounded,
    /// Accept at most this many matches.
    AtMost(usize),
}

impl Limit {
    /// Builds a limit from a signed count. Negative counts mean unbounded.
    pub fn from_signed(count: i64) -> Self {
        match usize::try_from(count) {
            Ok(count) => Limit::AtMost(count),
            Err(_) => Limit::Unbounded,
        }
    }

    /// Returns `true` if another match may be accepted after `accepted`.
    pub fn allows(self, accepted: usize) -> bool {
        match self {
            Limit::Unbounded => true,
            Limit::AtMost(max) => accepted < max,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Limit::Unbounded)
    }
}

/// Keeps the elements of a sequence for which `keep` returns `true`.
pub fn filter_sequence<B, F>(buffer: &mut B, limit: Limit, mut keep: F)
where
    B: Sequence,
    B::Item: Clone,
    F: FnMut(&B::Item) -> bool,
{
    let outcome = try_filter_sequence(buffer, limit, |item| Ok::<_, Infallible>(keep(item)));
    match outcome {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Keeps the pairs of an associative container for which `keep` returns `true`.
pub fn filter_associative<B, F>(buffer: &mut B, limit: Limit, mut keep: F)
where
    B: Associative,
    B::Key: Clone,
    B::Value: Clone,
    F: FnMut(&B::Key, &B::Value) -> bool,
{
    let outcome = try_filter_associative(buffer, limit, |key, value| {
        Ok::<_, Infallible>(keep(key, value))
    });
    match outcome {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Fallible form of [`filter_sequence`].
///
/// The first error returned by `keep` is passed through unchanged and the
/// buffer is left as it was.
pub fn try_filter_sequence<B, F, E>(buffer: &mut B, limit: Limit, mut keep: F) -> Result<(), E>
where
    B: Sequence,
    B::Item: Clone,
    F: FnMut(&B::Item) -> Result<bool, E>,
{
    let mut filtered = B::default();
    let mut accepted = 0;
    for item in buffer.items() {
        if !limit.allows(accepted) {
            break;
        }
        if keep(item)? {
            insert_one(&mut filtered, item.clone());
            accepted += 1;
        }
    }
    log::trace!("filter kept {} of {} entries", accepted, buffer.len());
    *buffer = filtered;
    Ok(())
}

/// Fallible form of [`filter_associative`].
pub fn try_filter_associative<B, F, E>(buffer: &mut B, limit: Limit, mut keep: F) -> Result<(), E>
where
    B: Associative,
    B::Key: Clone,
    B::Value: Clone,
    F: FnMut(&B::Key, &B::Value) -> Result<bool, E>,
{
    let mut filtered = B::default();
    let mut accepted = 0;
    for (key, value) in buffer.pairs() {
        if !limit.allows(accepted) {
            break;
        }
        if keep(key, value)? {
            insert_pair(&mut filtered, key.clone(), value.clone());
            accepted += 1;
        }
    }
    log::trace!("filter kept {} of {} pairs", accepted, buffer.len());
    *buffer = filtered;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};

    use crate::adapters::MultiMap;

    #[test]
    fn limit_from_signed() {
        assert_eq!(Limit::from_signed(-1), Limit::Unbounded);
        assert_eq!(Limit::from_signed(i64::MIN), Limit::Unbounded);
        assert_eq!(Limit::from_signed(0), Limit::AtMost(0));
        assert_eq!(Limit::from_signed(3), Limit::AtMost(3));
        assert_eq!(Limit::default(), Limit::Unbounded);
    }

    #[test]
    fn limit_allows() {
        assert!(Limit::Unbounded.allows(usize::MAX - 1));
        assert!(Limit::AtMost(2).allows(1));
        assert!(!Limit::AtMost(2).allows(2));
        assert!(!Limit::AtMost(0).allows(0));
    }

    #[test]
    fn filter_keeps_matches_in_order() {
        let mut buffer: Vec<i32> = (1..=9).collect();
        filter_sequence(&mut buffer, Limit::Unbounded, |n| n % 2 == 0);
        assert_eq!(buffer, vec![2, 4, 6, 8]);
    }

    #[test]
    fn filter_stops_at_limit() {
        let mut buffer: Vec<i32> = (1..=9).collect();
        filter_sequence(&mut buffer, Limit::AtMost(2), |n| n % 2 == 0);
        assert_eq!(buffer, vec![2, 4]);
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut buffer = BTreeSet::from([1, 2, 3]);
        filter_sequence(&mut buffer, Limit::AtMost(0), |_| true);
        assert!(buffer.is_empty());
    }

    #[test]
    fn filter_pairs_by_key_and_value() {
        let mut buffer = BTreeMap::from([(1, "a"), (2, "bb"), (3, "ccc")]);
        filter_associative(&mut buffer, Limit::Unbounded, |key, value| {
            *key > 1 && value.len() < 3
        });
        assert_eq!(buffer, BTreeMap::from([(2, "bb")]));
    }

    #[test]
    fn filter_keeps_duplicate_keys() {
        let mut buffer: MultiMap<i32, i32> = [(1, 10), (1, 11), (2, 20)].into_iter().collect();
        filter_associative(&mut buffer, Limit::AtMost(2), |key, _| *key == 1);
        assert_eq!(buffer.get_all(&1), &[10, 11]);
        assert!(buffer.get_all(&2).is_empty());
    }

    #[test]
    fn failing_predicate_leaves_buffer_untouched() {
        let mut buffer = vec![1, 2, 3];
        let outcome = try_filter_sequence(&mut buffer, Limit::Unbounded, |n| {
            if *n == 2 {
                Err("two")
            } else {
                Ok(true)
            }
        });
        assert_eq!(outcome, Err("two"));
        assert_eq!(buffer, vec![1, 2, 3]);
    }
}
