//! Reusable comparison values.
//!
//! A [`Gate`] pairs a [`Comparator`] with a stored left operand and plays two
//! roles:
//!
//! - **Fixed**: built from two operands, its truth value is
//!   `comparator(left, right)`, computed once at construction. Gates combine
//!   with `&` and `|` over these stored truth values.
//! - **Probe**: [`Gate::compare_with`] applies the comparator to a new
//!   candidate and the stored left operand, in that order. This is what the
//!   filter engine uses.
//!
//! The two roles are independent. Combining gates never re-runs a
//! comparator, so `a & b` says nothing about any particular candidate.
//!
//! ```
//! use standout_query::{Gate, Op};
//!
//! let probe = Gate::probe(Op::Eq, 2);
//! assert!(probe.compare_with(&2));
//! assert!(!probe.compare_with(&1));
//!
//! let yes = Gate::fixed(Op::Eq, 1, 1);
//! let no = Gate::fixed(Op::Eq, 2, 3);
//! assert!(yes.is_true());
//! assert!(!(&yes & &no));
//! assert!(&yes | &no);
//! ```

use std::ops::{BitAnd, BitOr, Not};

/// A binary comparison.
///
/// Implemented for every `Fn(&T, &T) -> bool` as well as for the operator
/// enums [`Op`](crate::Op) and [`TextOp`](crate::TextOp).
pub trait Comparator<T: ?Sized> {
    fn compare(&self, lhs: &T, rhs: &T) -> bool;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn compare(&self, lhs: &T, rhs: &T) -> bool {
        self(lhs, rhs)
    }
}

/// A comparator with its operands and a precomputed outcome.
#[derive(Debug, Clone)]
pub struct Gate<C, T> {
    comparator: C,
    left: T,
    right: Option<T>,
    value: bool,
}

impl<C, T> Gate<C, T>
where
    C: Comparator<T>,
{
    /// Builds a probe gate. Its own truth value is `false`.
    pub fn probe(comparator: C, left: T) -> Self {
        Gate {
            comparator,
            left,
            right: None,
            value: false,
        }
    }

    /// Builds a fixed gate whose truth value is `comparator(left, right)`.
    pub fn fixed(comparator: C, left: T, right: T) -> Self {
        let value = comparator.compare(&left, &right);
        Gate {
            comparator,
            left,
            right: Some(right),
            value,
        }
    }

    /// Applies the comparator to `candidate` and the stored left operand.
    pub fn compare_with(&self, candidate: &T) -> bool {
        self.comparator.compare(candidate, &self.left)
    }

    /// The outcome computed at construction.
    pub fn is_true(&self) -> bool {
        self.value
    }

    /// Logical AND of the two precomputed outcomes.
    pub fn and<D, U>(&self, other: &Gate<D, U>) -> bool {
        self.value && other.value
    }

    /// Logical OR of the two precomputed outcomes.
    pub fn or<D, U>(&self, other: &Gate<D, U>) -> bool {
        self.value || other.value
    }

    pub fn left(&self) -> &T {
        &self.left
    }

    /// The right operand, present only on fixed gates.
    pub fn right(&self) -> Option<&T> {
        self.right.as_ref()
    }

    pub fn is_probe(&self) -> bool {
        self.right.is_none()
    }
}

/// Builds a probe gate. Shorthand for [`Gate::probe`].
pub fn gate<C: Comparator<T>, T>(comparator: C, left: T) -> Gate<C, T> {
    Gate::probe(comparator, left)
}

/// Builds a fixed gate. Shorthand for [`Gate::fixed`].
pub fn fixed_gate<C: Comparator<T>, T>(comparator: C, left: T, right: T) -> Gate<C, T> {
    Gate::fixed(comparator, left, right)
}

impl<C, T> From<Gate<C, T>> for bool {
    fn from(gate: Gate<C, T>) -> bool {
        gate.value
    }
}

impl<C, T> From<&Gate<C, T>> for bool {
    fn from(gate: &Gate<C, T>) -> bool {
        gate.value
    }
}

impl<'a, 'b, C, T, D, U> BitAnd<&'b Gate<D, U>> for &'a Gate<C, T> {
    type Output = bool;

    fn bitand(self, other: &'b Gate<D, U>) -> bool {
        self.value && other.value
    }
}

impl<C, T, D, U> BitAnd<Gate<D, U>> for Gate<C, T> {
    type Output = bool;

    fn bitand(self, other: Gate<D, U>) -> bool {
        self.value && other.value
    }
}

impl<'a, 'b, C, T, D, U> BitOr<&'b Gate<D, U>> for &'a Gate<C, T> {
    type Output = bool;

    fn bitor(self, other: &'b Gate<D, U>) -> bool {
        self.value || other.value
    }
}

impl<C, T, D, U> BitOr<Gate<D, U>> for Gate<C, T> {
    type Output = bool;

    fn bitor(self, other: Gate<D, U>) -> bool {
        self.value || other.value
    }
}

impl<C, T> Not for &Gate<C, T> {
    type Output = bool;

    fn not(self) -> bool {
        !self.value
    }
}

impl<C, T> Not for Gate<C, T> {
    type Output = bool;

    fn not(self) -> bool {
        !self.value
    }
}
