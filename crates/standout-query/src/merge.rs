//! Appending one container into another of the same category.
//!
//! Merging is append-only: the target keeps its contents and order, the
//! addend is walked in its own iteration order, and nothing is deduplicated
//! beyond what the target's own insertion rule does.

use crate::container::{Associative, Container, Sequence};
use crate::insert::{insert_one, insert_pair};
use crate::kind::{classify, AssociativeKind, SequenceKind};

/// Merge of `A` into `T`, implemented on `(T::Kind, A::Kind)`.
///
/// Only same-category pairs have an implementation.
pub trait MergeRule<T, A> {
    fn merge(target: &mut T, addend: &A);
}

/// Appends every element (or pair) of `addend` into `target`.
///
/// ```
/// use standout_query::merge;
///
/// let mut target = vec![1, 2, 3];
/// merge(&mut target, &vec![4, 5, 6]);
/// assert_eq!(target, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn merge<T, A>(target: &mut T, addend: &A)
where
    T: Container,
    A: Container,
    (T::Kind, A::Kind): MergeRule<T, A>,
{
    log::trace!(
        "merge {} entries into {} of {} entries",
        addend.len(),
        classify::<T>(),
        target.len()
    );
    <(T::Kind, A::Kind) as MergeRule<T, A>>::merge(target, addend);
}

impl<T, A> MergeRule<T, A> for (SequenceKind, SequenceKind)
where
    T: Sequence,
    A: Sequence,
    A::Item: Clone + Into<T::Item>,
{
    fn merge(target: &mut T, addend: &A) {
        for item in addend.items() {
            insert_one(target, item.clone().into());
        }
    }
}

impl<T, A> MergeRule<T, A> for (AssociativeKind, AssociativeKind)
where
    T: Associative,
    A: Associative,
    A::Key: Clone + Into<T::Key>,
    A::Value: Clone + Into<T::Value>,
{
    fn merge(target: &mut T, addend: &A) {
        for (key, value) in addend.pairs() {
            insert_pair(target, key.clone().into(), value.clone().into());
        }
    }
}

/// Appends a literal list of values to a sequence.
pub fn merge_items<T, I>(target: &mut T, items: I)
where
    T: Sequence,
    I: IntoIterator,
    I::Item: Into<T::Item>,
{
    for item in items {
        insert_one(target, item.into());
    }
}

/// Appends a literal list of pairs to an associative container.
pub fn merge_pairs<T, I, K, V>(target: &mut T, pairs: I)
where
    T: Associative,
    I: IntoIterator<Item = (K, V)>,
    K: Into<T::Key>,
    V: Into<T::Value>,
{
    for (key, value) in pairs {
        insert_pair(target, key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet, HashMap, LinkedList, VecDeque};

    use crate::adapters::MultiMap;

    #[test]
    fn merge_appends_in_order() {
        let mut target = vec![1, 2, 3];
        merge(&mut target, &vec![4, 5, 6]);
        assert_eq!(target, vec![1, 2, 3, 4, 5, 6]);

        let mut reversed = vec![4, 5, 6];
        merge(&mut reversed, &vec![1, 2, 3]);
        assert_eq!(reversed, vec![4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn merge_across_sequence_types() {
        let mut target: VecDeque<i32> = VecDeque::from([1]);
        let addend: LinkedList<i32> = [2, 3].into_iter().collect();
        merge(&mut target, &addend);
        assert_eq!(target, VecDeque::from([1, 2, 3]));
    }

    #[test]
    fn merge_into_set_follows_set_rule() {
        let mut target = BTreeSet::from([1, 5]);
        merge(&mut target, &vec![5, 3]);
        assert_eq!(target.into_iter().collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn merge_does_not_deduplicate() {
        let mut target = vec![1, 1];
        merge(&mut target, &vec![1]);
        assert_eq!(target, vec![1, 1, 1]);
    }

    #[test]
    fn merge_associative() {
        let mut target = MultiMap::new();
        target.insert(1, "a");
        merge(&mut target, &BTreeMap::from([(1, "b"), (2, "c")]));
        assert_eq!(target.get_all(&1), &["a", "b"]);
        assert_eq!(target.get_all(&2), &["c"]);

        let mut unique: HashMap<i32, &str> = HashMap::new();
        merge(&mut unique, &target);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique.get(&1), Some(&"a"));
    }

    #[test]
    fn merge_never_rewrites_existing_pairs() {
        let mut target = BTreeMap::from([(1, "a")]);
        merge(&mut target, &BTreeMap::from([(1, "b"), (2, "c")]));
        assert_eq!(target, BTreeMap::from([(1, "a"), (2, "c")]));

        let mut hashed = HashMap::from([(1, "a")]);
        merge(&mut hashed, &BTreeMap::from([(1, "b")]));
        assert_eq!(hashed.get(&1), Some(&"a"));
    }

    #[test]
    fn merge_literal_lists() {
        let mut target = vec![1, 2, 3];
        merge_items(&mut target, [4, 5, 6]);
        assert_eq!(target, vec![1, 2, 3, 4, 5, 6]);

        let mut map = BTreeMap::new();
        merge_pairs(&mut map, [(2, 'b'), (1, 'a')]);
        assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![(1, 'a'), (2, 'b')]);
    }
}
