//! Single-value predicates used by the filter engine.
//!
//! A [`Predicate`] answers one question about one candidate. Gates answer it
//! in their probe role, closures answer it directly, and [`Matches`] answers
//! it with a regular expression.

use regex::Regex;

use crate::error::Result;
use crate::gate::{Comparator, Gate};

/// A test applied to a single candidate value.
pub trait Predicate<T: ?Sized> {
    fn test(&self, candidate: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, candidate: &T) -> bool {
        self(candidate)
    }
}

impl<C, T> Predicate<T> for Gate<C, T>
where
    C: Comparator<T>,
{
    fn test(&self, candidate: &T) -> bool {
        self.compare_with(candidate)
    }
}

/// Matches text values against a regular expression.
///
/// ```
/// use standout_query::{Matches, Predicate};
///
/// let task = Matches::new(r"^Task [A-Z]$").unwrap();
/// assert!(task.test("Task B"));
/// assert!(!task.test("Urgent Task"));
/// ```
#[derive(Debug, Clone)]
pub struct Matches {
    regex: Regex,
}

impl Matches {
    /// Compiles `pattern`. Returns an error if the pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(Matches { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl From<Regex> for Matches {
    fn from(regex: Regex) -> Self {
        Matches { regex }
    }
}

impl<T: AsRef<str> + ?Sized> Predicate<T> for Matches {
    fn test(&self, candidate: &T) -> bool {
        self.regex.is_match(candidate.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use crate::op::Op;

    #[test]
    fn closures_are_predicates() {
        let even = |n: &i32| n % 2 == 0;
        assert!(even.test(&4));
        assert!(!even.test(&3));
    }

    #[test]
    fn gates_probe_candidates() {
        let gate = Gate::probe(Op::Gt, 10);
        assert!(gate.test(&11));
        assert!(!gate.test(&10));
    }

    #[test]
    fn regex_predicate() {
        let matches = Matches::new(r"\d{3}").unwrap();
        assert!(matches.test("abc123"));
        assert!(matches.test(&String::from("999")));
        assert!(!matches.test("12"));
        assert_eq!(matches.as_str(), r"\d{3}");
    }

    #[test]
    fn invalid_regex_is_an_error() {
        let error = Matches::new("[unclosed").unwrap_err();
        assert!(matches!(error, QueryError::InvalidPattern(_)));
        assert!(error.to_string().starts_with("invalid regex pattern"));
    }
}
