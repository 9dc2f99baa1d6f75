//! The capability contract a container type must satisfy.
//!
//! [`Container`] carries what every participant shares: its category marker,
//! its insertion and clearing tags, and a size query. On top of it sit the
//! three category traits:
//!
//! - [`Sequence`]: ordered iteration over values, single-value insertion
//! - [`Associative`]: iteration over key/value pairs, pair insertion
//! - [`Text`]: a character buffer that accepts appended units
//!
//! Each category trait fixes `Container::Kind`, so a type can implement at
//! most one of them. Implementations for the standard collections live here;
//! the single-ended and multi-valued adapters live in [`crate::adapters`].

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::kind::{AssociativeKind, Clearing, Insertion, Kind, SequenceKind, StringKind};

/// Shared capabilities of every container the engine can operate on.
///
/// `Default` provides the empty container that conversions, filters and set
/// operations build into.
pub trait Container: Default {
    /// Category marker. Fixed by the category trait the type implements.
    type Kind: Kind;

    /// How the container places a new element.
    ///
    /// This is a declared property: the container's own `insert_one` or
    /// `insert_pair` does the placing, and must agree with the tag.
    /// `EmplaceAtEnd` containers put the new element last in iteration order;
    /// `EmplaceAny` containers put it where their ordering rule says and keep
    /// an element already present under the same key.
    const INSERTION: Insertion;

    /// Whether [`clear`](crate::clear) empties the container.
    const CLEARING: Clearing = Clearing::Supported;

    /// Number of elements (pairs for maps, bytes for strings).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element. [`clear`](crate::clear) only calls it when
    /// `CLEARING` is `Supported`.
    fn clear_contents(&mut self);
}

/// An ordered collection of values without a key-to-value mapping.
pub trait Sequence: Container<Kind = SequenceKind> {
    type Item;

    /// Iterates the values in the container's natural order.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;

    /// Adds one value according to [`Container::INSERTION`].
    fn insert_one(&mut self, item: Self::Item);
}

/// A collection of key/value pairs.
///
/// Duplicate keys are allowed; the engine never deduplicates, but a map with
/// unique keys will of course keep only one value per key on insertion.
pub trait Associative: Container<Kind = AssociativeKind> {
    type Key;
    type Value;

    /// Iterates the pairs in the container's natural order.
    fn pairs(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    /// Adds one pair according to the container's own placement rule.
    fn insert_pair(&mut self, key: Self::Key, value: Self::Value);
}

/// A character string.
pub trait Text: Container<Kind = StringKind> {
    fn as_text(&self) -> &str;

    /// Appends one already stringified unit.
    fn append_unit(&mut self, unit: &str);
}

// ============================================================================
// Positional sequences
// ============================================================================

impl<T> Container for Vec<T> {
    type Kind = SequenceKind;
    const INSERTION: Insertion = Insertion::EmplaceAtEnd;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn clear_contents(&mut self) {
        Vec::clear(self)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn insert_one(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Container for VecDeque<T> {
    type Kind = SequenceKind;
    const INSERTION: Insertion = Insertion::EmplaceAtEnd;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn clear_contents(&mut self) {
        VecDeque::clear(self)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn insert_one(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T> Container for LinkedList<T> {
    type Kind = SequenceKind;
    const INSERTION: Insertion = Insertion::EmplaceAtEnd;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn clear_contents(&mut self) {
        LinkedList::clear(self)
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn insert_one(&mut self, item: T) {
        self.push_back(item);
    }
}

// ============================================================================
// Self-ordering sequences
// ============================================================================

impl<T: Ord> Container for BTreeSet<T> {
    type Kind = SequenceKind;
    const INSERTION: Insertion = Insertion::EmplaceAny;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn clear_contents(&mut self) {
        BTreeSet::clear(self)
    }
}

impl<T: Ord> Sequence for BTreeSet<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn insert_one(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T, S> Container for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Kind = SequenceKind;
    const INSERTION: Insertion = Insertion::EmplaceAny;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn clear_contents(&mut self) {
        HashSet::clear(self)
    }
}

impl<T, S> Sequence for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn insert_one(&mut self, item: T) {
        self.insert(item);
    }
}

// ============================================================================
// Maps
// ============================================================================

impl<K: Ord, V> Container for BTreeMap<K, V> {
    type Kind = AssociativeKind;
    const INSERTION: Insertion = Insertion::EmplaceAny;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn clear_contents(&mut self) {
        BTreeMap::clear(self)
    }
}

impl<K: Ord, V> Associative for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn insert_pair(&mut self, key: K, value: V) {
        self.entry(key).or_insert(value);
    }
}

impl<K, V, S> Container for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Kind = AssociativeKind;
    const INSERTION: Insertion = Insertion::EmplaceAny;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn clear_contents(&mut self) {
        HashMap::clear(self)
    }
}

impl<K, V, S> Associative for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Key = K;
    type Value = V;

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn insert_pair(&mut self, key: K, value: V) {
        self.entry(key).or_insert(value);
    }
}

// ============================================================================
// Strings
// ============================================================================

impl Container for String {
    type Kind = StringKind;
    const INSERTION: Insertion = Insertion::AppendCharacters;

    fn len(&self) -> usize {
        String::len(self)
    }

    fn clear_contents(&mut self) {
        String::clear(self)
    }
}

impl Text for String {
    fn as_text(&self) -> &str {
        self.as_str()
    }

    fn append_unit(&mut self, unit: &str) {
        self.push_str(unit);
    }
}

// ============================================================================
// indexmap
// ============================================================================

#[cfg(feature = "indexmap")]
mod index {
    use std::hash::{BuildHasher, Hash};

    use indexmap::{IndexMap, IndexSet};

    use super::{Associative, Container, Sequence};
    use crate::kind::{AssociativeKind, Insertion, SequenceKind};

    impl<K, V, S> Container for IndexMap<K, V, S>
    where
        K: Eq + Hash,
        S: BuildHasher + Default,
    {
        type Kind = AssociativeKind;
        const INSERTION: Insertion = Insertion::EmplaceAny;

        fn len(&self) -> usize {
            IndexMap::len(self)
        }

        fn clear_contents(&mut self) {
            IndexMap::clear(self)
        }
    }

    impl<K, V, S> Associative for IndexMap<K, V, S>
    where
        K: Eq + Hash,
        S: BuildHasher + Default,
    {
        type Key = K;
        type Value = V;

        fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
            self.iter()
        }

        fn insert_pair(&mut self, key: K, value: V) {
            self.entry(key).or_insert(value);
        }
    }

    impl<T, S> Container for IndexSet<T, S>
    where
        T: Eq + Hash,
        S: BuildHasher + Default,
    {
        type Kind = SequenceKind;
        const INSERTION: Insertion = Insertion::EmplaceAny;

        fn len(&self) -> usize {
            IndexSet::len(self)
        }

        fn clear_contents(&mut self) {
            IndexSet::clear(self)
        }
    }

    impl<T, S> Sequence for IndexSet<T, S>
    where
        T: Eq + Hash,
        S: BuildHasher + Default,
    {
        type Item = T;

        fn items(&self) -> impl Iterator<Item = &T> {
            self.iter()
        }

        fn insert_one(&mut self, item: T) {
            self.insert(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_sequences_append_at_end() {
        let mut v = vec![1, 2];
        Sequence::insert_one(&mut v, 3);
        assert_eq!(v, vec![1, 2, 3]);

        let mut d: VecDeque<i32> = VecDeque::new();
        d.insert_one(1);
        d.insert_one(2);
        assert_eq!(d.items().copied().collect::<Vec<_>>(), vec![1, 2]);

        let mut l: LinkedList<i32> = LinkedList::new();
        l.insert_one(5);
        l.insert_one(4);
        assert_eq!(l.items().copied().collect::<Vec<_>>(), vec![5, 4]);
    }

    #[test]
    fn ordered_set_places_by_own_rule() {
        let mut s = BTreeSet::new();
        s.insert_one(3);
        s.insert_one(1);
        s.insert_one(2);
        s.insert_one(1);
        assert_eq!(s.items().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(Container::len(&s), 3);
    }

    #[test]
    fn maps_iterate_pairs() {
        let mut m = BTreeMap::new();
        m.insert_pair(2, "b");
        m.insert_pair(1, "a");
        let pairs: Vec<(i32, &str)> = m.pairs().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn string_appends_units() {
        let mut s = String::new();
        s.append_unit("ab");
        s.append_unit("c");
        assert_eq!(s.as_text(), "abc");
        assert!(!Container::is_empty(&s));
    }

    #[test]
    fn insertion_tags() {
        assert_eq!(<Vec<u8> as Container>::INSERTION, Insertion::EmplaceAtEnd);
        assert_eq!(<LinkedList<u8> as Container>::INSERTION, Insertion::EmplaceAtEnd);
        assert_eq!(<BTreeSet<u8> as Container>::INSERTION, Insertion::EmplaceAny);
        assert_eq!(<HashMap<u8, u8> as Container>::INSERTION, Insertion::EmplaceAny);
        assert_eq!(<String as Container>::INSERTION, Insertion::AppendCharacters);
        assert_eq!(<Vec<u8> as Container>::CLEARING, Clearing::Supported);
    }

    fn places_last<C: Sequence<Item = i32>>() -> bool {
        let mut container = C::default();
        container.insert_one(9);
        container.insert_one(1);
        container.items().last() == Some(&1)
    }

    #[test]
    fn insertion_tags_match_placement() {
        assert_eq!(<Vec<i32> as Container>::INSERTION, Insertion::EmplaceAtEnd);
        assert!(places_last::<Vec<i32>>());
        assert_eq!(<VecDeque<i32> as Container>::INSERTION, Insertion::EmplaceAtEnd);
        assert!(places_last::<VecDeque<i32>>());
        assert_eq!(<LinkedList<i32> as Container>::INSERTION, Insertion::EmplaceAtEnd);
        assert!(places_last::<LinkedList<i32>>());

        assert_eq!(<BTreeSet<i32> as Container>::INSERTION, Insertion::EmplaceAny);
        assert!(!places_last::<BTreeSet<i32>>());
    }

    #[test]
    fn unique_key_maps_keep_the_first_value() {
        let mut ordered = BTreeMap::new();
        ordered.insert_pair(1, "a");
        ordered.insert_pair(1, "b");
        assert_eq!(ordered.get(&1), Some(&"a"));

        let mut hashed: HashMap<i32, &str> = HashMap::new();
        hashed.insert_pair(1, "a");
        hashed.insert_pair(1, "b");
        assert_eq!(hashed.get(&1), Some(&"a"));
        assert_eq!(Container::len(&hashed), 1);
    }

    #[cfg(feature = "indexmap")]
    #[test]
    fn index_map_keeps_the_first_value() {
        let mut m = indexmap::IndexMap::new();
        m.insert_pair(1, 'a');
        m.insert_pair(1, 'b');
        assert_eq!(m.get(&1), Some(&'a'));
    }

    #[cfg(feature = "indexmap")]
    #[test]
    fn index_map_keeps_insertion_order() {
        let mut m = indexmap::IndexMap::new();
        m.insert_pair(3, 'c');
        m.insert_pair(1, 'a');
        let keys: Vec<i32> = m.pairs().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![3, 1]);
    }
}
