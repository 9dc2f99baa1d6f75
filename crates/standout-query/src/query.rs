//! Query builder and executor.
//!
//! The [`Query`] struct provides a fluent builder over a borrowed source
//! container. The source is never modified: the first operation that needs a
//! working copy copies the whole source into an owned buffer, and every later
//! operation rewrites that buffer. [`Query::to`] materializes the result from
//! the buffer, or straight from the source when nothing has been run yet.

use crate::container::{Associative, Container, Sequence};
use crate::convert::{convert, ConversionRule};
use crate::filter::{
    filter_associative, filter_sequence, try_filter_associative, try_filter_sequence, Limit,
};
use crate::merge::{merge, merge_items, merge_pairs, MergeRule};
use crate::predicate::Predicate;
use crate::set_ops::{difference_with, intersect_with, union_with, SetRule};

/// Lifecycle of the query buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BufferState {
    /// Nothing has been copied from the source yet.
    Empty,
    /// The buffer holds the working copy, possibly with zero elements.
    Populated,
}

/// A query over a borrowed source container.
///
/// `S` is the source type and `B` the buffer type, which defaults to `S`.
/// The buffer may be any container of the same category that the source can
/// be merged into, e.g. a `VecDeque` buffer over a `Vec` source.
///
/// Operations available depend on the buffer's category:
///
/// - sequences: [`where_`](Query::where_), [`where_field`](Query::where_field),
///   [`merge_list`](Query::merge_list)
/// - associative: [`where_key`](Query::where_key),
///   [`where_value`](Query::where_value), [`where_entry`](Query::where_entry),
///   [`merge_pairs`](Query::merge_pairs)
/// - both: [`take`](Query::take), [`merge`](Query::merge),
///   [`union_with`](Query::union_with), [`intersect_with`](Query::intersect_with),
///   [`difference_with`](Query::difference_with), [`to`](Query::to)
///
/// # Example
///
/// ```
/// use standout_query::{from, Gate, Op};
///
/// let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
/// let evens: Vec<i32> = from(&numbers)
///     .take(2)
///     .where_(|n: &i32| n % 2 == 0)
///     .to();
/// assert_eq!(evens, vec![2, 4]);
///
/// let text: String = from(&numbers)
///     .where_(Gate::probe(Op::Gt, 6))
///     .to();
/// assert_eq!(text, "7 8 9");
/// ```
#[derive(Debug)]
pub struct Query<'a, S, B = S> {
    source: &'a S,
    buffer: B,
    state: BufferState,
    limit: Limit,
}

/// Starts a query over `source`, buffering into the source's own type.
pub fn from<S: Container>(source: &S) -> Query<'_, S> {
    Query::new(source)
}

impl<'a, S: Container> Query<'a, S, S> {
    /// Creates a query whose buffer has the same type as the source.
    pub fn new(source: &'a S) -> Self {
        Query::buffered(source)
    }
}

impl<'a, S, B> Query<'a, S, B>
where
    S: Container,
    B: Container,
{
    /// Creates a query with an explicitly typed buffer.
    ///
    /// ```
    /// use std::collections::VecDeque;
    /// use standout_query::Query;
    ///
    /// let source = vec![3, 1, 2];
    /// let query = Query::<_, VecDeque<i32>>::buffered(&source).merge_list([4]);
    /// assert_eq!(query.buffer(), Some(&VecDeque::from([3, 1, 2, 4])));
    /// ```
    pub fn buffered(source: &'a S) -> Self {
        Query {
            source,
            buffer: B::default(),
            state: BufferState::Empty,
            limit: Limit::Unbounded,
        }
    }

    // ========================================================================
    // Limits
    // ========================================================================

    /// Sets the maximum number of matches the next filter step accepts.
    ///
    /// Negative counts mean unbounded. The limit stays in effect for every
    /// following filter until `take` is called again.
    pub fn take(mut self, count: i64) -> Self {
        self.limit = Limit::from_signed(count);
        self
    }

    /// Sets the take-limit from an explicit [`Limit`].
    pub fn take_limit(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }

    // ========================================================================
    // Materialization
    // ========================================================================

    /// Converts the result into a new `T`.
    ///
    /// Reads the buffer if any operation has populated it, otherwise converts
    /// straight from the source without copying it into the buffer first.
    pub fn to<T>(&self) -> T
    where
        T: Container,
        (S::Kind, T::Kind): ConversionRule<S, T>,
        (B::Kind, T::Kind): ConversionRule<B, T>,
    {
        match self.state {
            BufferState::Empty => convert(self.source),
            BufferState::Populated => convert(&self.buffer),
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns `true` once the source has been copied into the buffer.
    pub fn is_populated(&self) -> bool {
        self.state == BufferState::Populated
    }

    /// Returns the current take-limit.
    pub fn limit(&self) -> Limit {
        self.limit
    }

    pub fn source(&self) -> &'a S {
        self.source
    }

    /// Returns the buffer, or `None` while it has not been populated.
    pub fn buffer(&self) -> Option<&B> {
        match self.state {
            BufferState::Empty => None,
            BufferState::Populated => Some(&self.buffer),
        }
    }
}

impl<'a, S, B> Query<'a, S, B>
where
    S: Container,
    B: Container,
    (B::Kind, S::Kind): MergeRule<B, S>,
{
    /// Copies the source into the buffer, once.
    fn populate(&mut self) -> &mut B {
        if self.state == BufferState::Empty {
            log::debug!(
                "populating query buffer from source ({} entries)",
                self.source.len()
            );
            merge(&mut self.buffer, self.source);
            self.state = BufferState::Populated;
        }
        &mut self.buffer
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// Appends every element (or pair) of `other` to the result.
    pub fn merge<A>(mut self, other: &A) -> Self
    where
        A: Container,
        (B::Kind, A::Kind): MergeRule<B, A>,
    {
        merge(self.populate(), other);
        self
    }

    // ========================================================================
    // Set algebra
    // ========================================================================

    /// Replaces the result with its ordered union with `other`.
    ///
    /// Both the current result and `other` must already be sorted the same
    /// way; this is not checked.
    pub fn union_with<A>(mut self, other: &A) -> Self
    where
        A: Container,
        (B::Kind, A::Kind): SetRule<B, A>,
    {
        union_with(self.populate(), other);
        self
    }

    /// Replaces the result with its ordered intersection with `other`.
    ///
    /// Both inputs must already be sorted the same way.
    pub fn intersect_with<A>(mut self, other: &A) -> Self
    where
        A: Container,
        (B::Kind, A::Kind): SetRule<B, A>,
    {
        intersect_with(self.populate(), other);
        self
    }

    /// Removes from the result the elements matched in `other`.
    ///
    /// Both inputs must already be sorted the same way.
    pub fn difference_with<A>(mut self, other: &A) -> Self
    where
        A: Container,
        (B::Kind, A::Kind): SetRule<B, A>,
    {
        difference_with(self.populate(), other);
        self
    }
}

impl<'a, S, B> Query<'a, S, B>
where
    S: Container,
    B: Sequence,
    B::Item: Clone,
    (B::Kind, S::Kind): MergeRule<B, S>,
{
    // ========================================================================
    // Sequence filters
    // ========================================================================

    /// Keeps the elements accepted by `predicate`.
    ///
    /// Any [`Predicate`] works: a probe [`Gate`](crate::Gate), a
    /// [`Matches`](crate::Matches) pattern, or a closure with an annotated
    /// argument such as `|n: &i32| *n > 3`.
    pub fn where_<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<B::Item>,
    {
        let limit = self.limit;
        filter_sequence(self.populate(), limit, |item| predicate.test(item));
        self
    }

    /// Keeps the elements whose projected field is accepted by `predicate`.
    ///
    /// ```
    /// use standout_query::{from, Gate, Op};
    ///
    /// #[derive(Clone)]
    /// struct Human {
    ///     age: u32,
    ///     name: String,
    /// }
    ///
    /// let people = vec![
    ///     Human { age: 30, name: "Ada".into() },
    ///     Human { age: 42, name: "Brian".into() },
    ///     Human { age: 57, name: "Grace".into() },
    /// ];
    /// let names: Vec<String> = from(&people)
    ///     .where_field(|h: &Human| &h.age, Gate::probe(Op::Gte, 42))
    ///     .to::<Vec<Human>>()
    ///     .into_iter()
    ///     .map(|h| h.name)
    ///     .collect();
    /// assert_eq!(names, vec!["Brian", "Grace"]);
    /// ```
    pub fn where_field<U, F, P>(mut self, field: F, predicate: P) -> Self
    where
        U: ?Sized,
        F: Fn(&B::Item) -> &U,
        P: Predicate<U>,
    {
        let limit = self.limit;
        filter_sequence(self.populate(), limit, |item| predicate.test(field(item)));
        self
    }

    /// Keeps the elements accepted by a fallible callback.
    ///
    /// The first error is returned as is and the query is dropped.
    pub fn try_where<E, F>(mut self, keep: F) -> Result<Self, E>
    where
        F: FnMut(&B::Item) -> Result<bool, E>,
    {
        let limit = self.limit;
        try_filter_sequence(self.populate(), limit, keep)?;
        Ok(self)
    }

    /// Appends a literal list of elements.
    pub fn merge_list<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<B::Item>,
    {
        merge_items(self.populate(), items);
        self
    }
}

impl<'a, S, B> Query<'a, S, B>
where
    S: Container,
    B: Associative,
    B::Key: Clone,
    B::Value: Clone,
    (B::Kind, S::Kind): MergeRule<B, S>,
{
    // ========================================================================
    // Associative filters
    // ========================================================================

    /// Keeps the pairs whose key is accepted by `predicate`.
    pub fn where_key<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<B::Key>,
    {
        let limit = self.limit;
        filter_associative(self.populate(), limit, |key, _| predicate.test(key));
        self
    }

    /// Keeps the pairs whose value is accepted by `predicate`.
    pub fn where_value<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<B::Value>,
    {
        let limit = self.limit;
        filter_associative(self.populate(), limit, |_, value| predicate.test(value));
        self
    }

    /// Keeps the pairs accepted by a callback that sees both key and value.
    pub fn where_entry<F>(mut self, keep: F) -> Self
    where
        F: Fn(&B::Key, &B::Value) -> bool,
    {
        let limit = self.limit;
        filter_associative(self.populate(), limit, keep);
        self
    }

    /// Keeps the pairs whose projected key field is accepted by `predicate`.
    pub fn where_key_field<U, F, P>(mut self, field: F, predicate: P) -> Self
    where
        U: ?Sized,
        F: Fn(&B::Key) -> &U,
        P: Predicate<U>,
    {
        let limit = self.limit;
        filter_associative(self.populate(), limit, |key, _| predicate.test(field(key)));
        self
    }

    /// Keeps the pairs whose projected value field is accepted by `predicate`.
    pub fn where_value_field<U, F, P>(mut self, field: F, predicate: P) -> Self
    where
        U: ?Sized,
        F: Fn(&B::Value) -> &U,
        P: Predicate<U>,
    {
        let limit = self.limit;
        filter_associative(self.populate(), limit, |_, value| {
            predicate.test(field(value))
        });
        self
    }

    /// Fallible form of [`where_key`](Query::where_key).
    pub fn try_where_key<E, F>(mut self, mut keep: F) -> Result<Self, E>
    where
        F: FnMut(&B::Key) -> Result<bool, E>,
    {
        let limit = self.limit;
        try_filter_associative(self.populate(), limit, |key, _| keep(key))?;
        Ok(self)
    }

    /// Fallible form of [`where_value`](Query::where_value).
    pub fn try_where_value<E, F>(mut self, mut keep: F) -> Result<Self, E>
    where
        F: FnMut(&B::Value) -> Result<bool, E>,
    {
        let limit = self.limit;
        try_filter_associative(self.populate(), limit, |_, value| keep(value))?;
        Ok(self)
    }

    /// Appends a literal list of pairs.
    pub fn merge_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<B::Key>,
        V: Into<B::Value>,
    {
        merge_pairs(self.populate(), pairs);
        self
    }
}
