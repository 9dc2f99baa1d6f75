//! Generic insertion and clearing primitives.
//!
//! These are the only ways the engine writes into a container. Placement is
//! decided by the container's [`Insertion`] tag and clearing by its
//! [`Clearing`] tag.

use crate::container::{Associative, Container, Sequence, Text};
use crate::kind::{Clearing, Insertion};

/// Inserts one value into a sequence.
pub fn insert_one<C: Sequence>(container: &mut C, item: C::Item) {
    debug_assert!(matches!(
        C::INSERTION,
        Insertion::EmplaceAtEnd | Insertion::EmplaceAny
    ));
    container.insert_one(item);
}

/// Inserts one key/value pair into an associative container.
pub fn insert_pair<C: Associative>(container: &mut C, key: C::Key, value: C::Value) {
    container.insert_pair(key, value);
}

/// Appends one stringified unit to a string-like container.
pub fn append_unit<C: Text>(container: &mut C, unit: &str) {
    container.append_unit(unit);
}

/// Empties a container, or does nothing if the container cannot be cleared.
///
/// Single-ended adapters such as [`Stack`](crate::Stack) are never cleared;
/// callers of those structures replace them instead.
pub fn clear<C: Container>(container: &mut C) {
    match C::CLEARING {
        Clearing::Supported => container.clear_contents(),
        Clearing::Unsupported => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet, LinkedList};

    use crate::adapters::{MultiMap, Stack};

    #[test]
    fn insert_one_appends_to_positional_sequences() {
        let mut list = LinkedList::new();
        insert_one(&mut list, 1);
        insert_one(&mut list, 2);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn insert_one_lets_sets_order() {
        let mut set = BTreeSet::new();
        insert_one(&mut set, 9);
        insert_one(&mut set, 4);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![4, 9]);
    }

    #[test]
    fn insert_pair_keeps_duplicates_in_multimap() {
        let mut map = MultiMap::new();
        insert_pair(&mut map, 1, 'a');
        insert_pair(&mut map, 1, 'b');
        assert_eq!(map.get_all(&1), &['a', 'b']);
    }

    #[test]
    fn append_unit_extends_string() {
        let mut s = String::from("1");
        append_unit(&mut s, " 2");
        assert_eq!(s, "1 2");
    }

    #[test]
    fn clear_empties_clearable_containers() {
        let mut v = vec![1, 2, 3];
        clear(&mut v);
        assert!(v.is_empty());

        let mut m = BTreeMap::from([(1, 1)]);
        clear(&mut m);
        assert!(m.is_empty());

        let mut s = String::from("text");
        clear(&mut s);
        assert!(s.is_empty());
    }

    #[test]
    fn clear_is_a_no_op_on_single_ended_adapters() {
        let mut stack: Stack<i32> = [1, 2].into_iter().collect();
        clear(&mut stack);
        assert_eq!(Container::len(&stack), 2);
    }
}
