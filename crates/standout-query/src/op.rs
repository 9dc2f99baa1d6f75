//! Ready-made comparison operators.
//!
//! [`Op`] covers the ordering comparisons and works on any `PartialOrd`
//! value; [`TextOp`] covers substring tests on anything that is `AsRef<str>`.
//! Both implement [`Comparator`], so they can be used wherever a closure
//! comparator is accepted, most notably in a [`Gate`](crate::Gate).

use std::cmp::Ordering;

use crate::gate::Comparator;

/// Ordering comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
}

impl Op {
    /// Evaluates this operator given the ordering of `lhs` relative to `rhs`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<T: PartialOrd + ?Sized> Comparator<T> for Op {
    fn compare(&self, lhs: &T, rhs: &T) -> bool {
        match lhs.partial_cmp(rhs) {
            Some(ordering) => self.eval_ordering(ordering),
            // Unordered values (NaN) only satisfy "not equal"
            None => matches!(self, Op::Ne),
        }
    }
}

/// Substring operator for text values.
///
/// The left operand is the text being tested, the right operand the needle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextOp {
    StartsWith,
    EndsWith,
    Contains,
}

impl TextOp {
    pub fn as_str(self) -> &'static str {
        match self {
            TextOp::StartsWith => "startswith",
            TextOp::EndsWith => "endswith",
            TextOp::Contains => "contains",
        }
    }
}

impl std::fmt::Display for TextOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<T: AsRef<str> + ?Sized> Comparator<T> for TextOp {
    fn compare(&self, lhs: &T, rhs: &T) -> bool {
        let (text, needle) = (lhs.as_ref(), rhs.as_ref());
        match self {
            TextOp::StartsWith => text.starts_with(needle),
            TextOp::EndsWith => text.ends_with(needle),
            TextOp::Contains => text.contains(needle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_eval_ordering() {
        assert!(Op::Eq.eval_ordering(Ordering::Equal));
        assert!(!Op::Eq.eval_ordering(Ordering::Less));

        assert!(Op::Ne.eval_ordering(Ordering::Greater));
        assert!(!Op::Ne.eval_ordering(Ordering::Equal));

        assert!(Op::Gt.eval_ordering(Ordering::Greater));
        assert!(!Op::Gt.eval_ordering(Ordering::Equal));

        assert!(Op::Gte.eval_ordering(Ordering::Equal));
        assert!(!Op::Gte.eval_ordering(Ordering::Less));

        assert!(Op::Lt.eval_ordering(Ordering::Less));
        assert!(!Op::Lt.eval_ordering(Ordering::Greater));

        assert!(Op::Lte.eval_ordering(Ordering::Less));
        assert!(!Op::Lte.eval_ordering(Ordering::Greater));
    }

    #[test]
    fn op_compares_values() {
        assert!(Op::Lt.compare(&1, &2));
        assert!(Op::Gte.compare(&2.5, &2.5));
        assert!(Op::Eq.compare("a", "a"));
        assert!(!Op::Gt.compare(&"apple", &"banana"));
    }

    #[test]
    fn op_on_nan() {
        assert!(!Op::Eq.compare(&f64::NAN, &f64::NAN));
        assert!(!Op::Lt.compare(&f64::NAN, &1.0));
        assert!(Op::Ne.compare(&f64::NAN, &1.0));
    }

    #[test]
    fn text_op_compares_substrings() {
        assert!(TextOp::StartsWith.compare("hello world", "hello"));
        assert!(TextOp::EndsWith.compare(&String::from("report.txt"), &String::from(".txt")));
        assert!(TextOp::Contains.compare("needle in haystack", "in"));
        assert!(!TextOp::Contains.compare("abc", "z"));
    }

    #[test]
    fn op_display() {
        assert_eq!(Op::Gte.to_string(), "gte");
        assert_eq!(TextOp::StartsWith.to_string(), "startswith");
    }
}
