//! Set algebra over already ordered containers.
//!
//! Union, intersection and difference are single-pass merge-joins. Both
//! inputs must iterate in the same ascending order; this is not checked, and
//! unordered input produces an unspecified result.
//!
//! Multiplicities follow the usual ordered-range rules:
//!
//! - union emits each element `max(m, n)` times
//! - intersection emits each element `min(m, n)` times
//! - difference emits each element `m - n` times (never below zero)
//!
//! where `m` and `n` are the element's counts in the buffer and the other
//! input. Associative containers are joined on whole `(key, value)` pairs.

use std::cmp::Ordering;

use crate::container::{Associative, Container, Sequence};
use crate::insert::{insert_one, insert_pair};
use crate::kind::{AssociativeKind, SequenceKind};

/// Ordered union of two ascending streams. Equal elements are taken from
/// `left`.
pub fn union_join<T, I, J, F>(left: I, right: J, mut emit: F)
where
    T: Ord,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    F: FnMut(T),
{
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut a = left.next();
    let mut b = right.next();
    loop {
        match (a.take(), b.take()) {
            (Some(x), Some(y)) => match x.cmp(&y) {
                Ordering::Less => {
                    emit(x);
                    a = left.next();
                    b = Some(y);
                }
                Ordering::Greater => {
                    emit(y);
                    a = Some(x);
                    b = right.next();
                }
                Ordering::Equal => {
                    emit(x);
                    a = left.next();
                    b = right.next();
                }
            },
            (Some(x), None) => {
                emit(x);
                for rest in left.by_ref() {
                    emit(rest);
                }
                break;
            }
            (None, Some(y)) => {
                emit(y);
                for rest in right.by_ref() {
                    emit(rest);
                }
                break;
            }
            (None, None) => break,
        }
    }
}

/// Ordered intersection of two ascending streams.
pub fn intersection_join<T, I, J, F>(left: I, right: J, mut emit: F)
where
    T: Ord,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    F: FnMut(T),
{
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut a = left.next();
    let mut b = right.next();
    while let (Some(x), Some(y)) = (a.take(), b.take()) {
        match x.cmp(&y) {
            Ordering::Less => {
                a = left.next();
                b = Some(y);
            }
            Ordering::Greater => {
                a = Some(x);
                b = right.next();
            }
            Ordering::Equal => {
                emit(x);
                a = left.next();
                b = right.next();
            }
        }
    }
}

/// Ordered difference `left - right` of two ascending streams.
pub fn difference_join<T, I, J, F>(left: I, right: J, mut emit: F)
where
    T: Ord,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    F: FnMut(T),
{
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut a = left.next();
    let mut b = right.next();
    loop {
        match (a.take(), b.take()) {
            (Some(x), Some(y)) => match x.cmp(&y) {
                Ordering::Less => {
                    emit(x);
                    a = left.next();
                    b = Some(y);
                }
                Ordering::Greater => {
                    a = Some(x);
                    b = right.next();
                }
                Ordering::Equal => {
                    a = left.next();
                    b = right.next();
                }
            },
            (Some(x), None) => {
                emit(x);
                for rest in left.by_ref() {
                    emit(rest);
                }
                break;
            }
            (None, _) => break,
        }
    }
}

/// Set operations of `A` against a buffer `B`, implemented on
/// `(B::Kind, A::Kind)`.
pub trait SetRule<B, A> {
    fn union(buffer: &mut B, other: &A);
    fn intersect(buffer: &mut B, other: &A);
    fn difference(buffer: &mut B, other: &A);
}

impl<B, A> SetRule<B, A> for (SequenceKind, SequenceKind)
where
    B: Sequence,
    A: Sequence<Item = B::Item>,
    B::Item: Ord + Clone,
{
    fn union(buffer: &mut B, other: &A) {
        let mut joined = B::default();
        union_join(buffer.items(), other.items(), |item| {
            insert_one(&mut joined, item.clone())
        });
        *buffer = joined;
    }

    fn intersect(buffer: &mut B, other: &A) {
        let mut joined = B::default();
        intersection_join(buffer.items(), other.items(), |item| {
            insert_one(&mut joined, item.clone())
        });
        *buffer = joined;
    }

    fn difference(buffer: &mut B, other: &A) {
        let mut joined = B::default();
        difference_join(buffer.items(), other.items(), |item| {
            insert_one(&mut joined, item.clone())
        });
        *buffer = joined;
    }
}

impl<B, A> SetRule<B, A> for (AssociativeKind, AssociativeKind)
where
    B: Associative,
    A: Associative<Key = B::Key, Value = B::Value>,
    B::Key: Ord + Clone,
    B::Value: Ord + Clone,
{
    fn union(buffer: &mut B, other: &A) {
        let mut joined = B::default();
        union_join(buffer.pairs(), other.pairs(), |(key, value)| {
            insert_pair(&mut joined, key.clone(), value.clone())
        });
        *buffer = joined;
    }

    fn intersect(buffer: &mut B, other: &A) {
        let mut joined = B::default();
        intersection_join(buffer.pairs(), other.pairs(), |(key, value)| {
            insert_pair(&mut joined, key.clone(), value.clone())
        });
        *buffer = joined;
    }

    fn difference(buffer: &mut B, other: &A) {
        let mut joined = B::default();
        difference_join(buffer.pairs(), other.pairs(), |(key, value)| {
            insert_pair(&mut joined, key.clone(), value.clone())
        });
        *buffer = joined;
    }
}

/// Replaces `buffer` with its ordered union with `other`.
pub fn union_with<B, A>(buffer: &mut B, other: &A)
where
    B: Container,
    A: Container,
    (B::Kind, A::Kind): SetRule<B, A>,
{
    log::trace!("union of {} and {} entries", buffer.len(), other.len());
    <(B::Kind, A::Kind) as SetRule<B, A>>::union(buffer, other);
}

/// Replaces `buffer` with its ordered intersection with `other`.
pub fn intersect_with<B, A>(buffer: &mut B, other: &A)
where
    B: Container,
    A: Container,
    (B::Kind, A::Kind): SetRule<B, A>,
{
    log::trace!("intersection of {} and {} entries", buffer.len(), other.len());
    <(B::Kind, A::Kind) as SetRule<B, A>>::intersect(buffer, other);
}

/// Replaces `buffer` with the ordered difference `buffer - other`.
pub fn difference_with<B, A>(buffer: &mut B, other: &A)
where
    B: Container,
    A: Container,
    (B::Kind, A::Kind): SetRule<B, A>,
{
    log::trace!("difference of {} and {} entries", buffer.len(), other.len());
    <(B::Kind, A::Kind) as SetRule<B, A>>::difference(buffer, other);
}
