//! Container adapters missing from the standard library.
//!
//! - [`Stack`] and [`Queue`]: single-ended structures. They accept new
//!   elements only at their one open end and are never emptied by
//!   [`clear`](crate::clear).
//! - [`MultiSet`]: a sorted sequence that keeps duplicates.
//! - [`MultiMap`]: a key-ordered map that keeps every value inserted under
//!   the same key, in insertion order.

use std::collections::{BTreeMap, VecDeque};

use crate::container::{Associative, Container, Sequence};
use crate::kind::{AssociativeKind, Clearing, Insertion, SequenceKind};

/// Last-in, first-out stack.
///
/// Iteration runs from the bottom of the stack to the top, which is the
/// order elements were pushed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Container for Stack<T> {
    type Kind = SequenceKind;
    const INSERTION: Insertion = Insertion::EmplaceAny;
    const CLEARING: Clearing = Clearing::Unsupported;

    fn len(&self) -> usize {
        self.items.len()
    }
    fn clear_contents(&mut self) {
        self.items.clear();
    }
}

impl<T> Sequence for Stack<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    fn insert_one(&mut self, item: T) {
        self.push(item);
    }
}

/// First-in, first-out queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Container for Queue<T> {
    type Kind = SequenceKind;
    const INSERTION: Insertion = Insertion::EmplaceAny;
    const CLEARING: Clearing = Clearing::Unsupported;

    fn len(&self) -> usize {
        self.items.len()
    }
    fn clear_contents(&mut self) {
        self.items.clear();
    }
}

impl<T> Sequence for Queue<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    fn insert_one(&mut self, item: T) {
        self.push(item);
    }
}

/// Sorted sequence that keeps duplicates.
///
/// Equal elements stay in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSet<T> {
    items: Vec<T>,
}

impl<T: Ord> MultiSet<T> {
    pub fn new() -> Self {
        MultiSet { items: Vec::new() }
    }

    pub fn insert(&mut self, item: T) {
        let at = self.items.partition_point(|existing| existing <= &item);
        self.items.insert(at, item);
    }

    /// Number of elements equal to `item`.
    pub fn count(&self, item: &T) -> usize {
        let start = self.items.partition_point(|existing| existing < item);
        let end = self.items.partition_point(|existing| existing <= item);
        end - start
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Ord> Default for MultiSet<T> {
    fn default() -> Self {
        MultiSet::new()
    }
}

impl<T: Ord> FromIterator<T> for MultiSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        items.sort();
        MultiSet { items }
    }
}

impl<T: Ord> Container for MultiSet<T> {
    type Kind = SequenceKind;
    const INSERTION: Insertion = Insertion::EmplaceAny;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear_contents(&mut self) {
        self.items.clear();
    }
}

impl<T: Ord> Sequence for MultiSet<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    fn insert_one(&mut self, item: T) {
        self.insert(item);
    }
}

/// Key-ordered map that keeps duplicate keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiMap<K, V> {
    entries: BTreeMap<K, Vec<V>>,
    len: usize,
}

impl<K: Ord, V> MultiMap<K, V> {
    pub fn new() -> Self {
        MultiMap {
            entries: BTreeMap::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.entries.entry(key).or_default().push(value);
        self.len += 1;
    }

    /// All values stored under `key`, in insertion order.
    pub fn get_all(&self, key: &K) -> &[V] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<K: Ord, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        MultiMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MultiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = MultiMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Ord, V> Container for MultiMap<K, V> {
    type Kind = AssociativeKind;
    const INSERTION: Insertion = Insertion::EmplaceAny;

    fn len(&self) -> usize {
        self.len
    }

    fn clear_contents(&mut self) {
        self.entries.clear();
        self.len = 0;
    }
}

impl<K: Ord, V> Associative for MultiMap<K, V> {
    type Key = K;
    type Value = V;

    fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key, value)))
    }

    fn insert_pair(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_iterates_bottom_to_top() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.insert_one(3);
        assert_eq!(stack.items().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(stack.top(), Some(&3));
        assert_eq!(stack.pop(), Some(3));
    }

    #[test]
    fn queue_iterates_front_to_back() {
        let mut queue: Queue<&str> = ["a", "b"].into_iter().collect();
        queue.insert_one("c");
        assert_eq!(queue.front(), Some(&"a"));
        assert_eq!(queue.pop(), Some("a"));
        assert_eq!(queue.items().copied().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn single_ended_adapters_cannot_be_cleared() {
        assert_eq!(<Stack<u8> as Container>::CLEARING, Clearing::Unsupported);
        assert_eq!(<Queue<u8> as Container>::CLEARING, Clearing::Unsupported);
    }

    #[test]
    fn multiset_keeps_duplicates_sorted() {
        let mut set: MultiSet<i32> = [3, 1, 2].into_iter().collect();
        set.insert_one(2);
        assert_eq!(set.as_slice(), &[1, 2, 2, 3]);
        assert_eq!(set.count(&2), 2);
        assert_eq!(set.count(&7), 0);
    }

    #[test]
    fn multimap_keeps_every_value() {
        let mut map = MultiMap::new();
        map.insert_pair(2, "x");
        map.insert_pair(1, "a");
        map.insert_pair(2, "y");

        let pairs: Vec<(i32, &str)> = map.pairs().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(pairs, vec![(1, "a"), (2, "x"), (2, "y")]);
        assert_eq!(Container::len(&map), 3);
        assert_eq!(map.get_all(&2), &["x", "y"]);
        assert!(map.get_all(&9).is_empty());
    }
}
