//! Copy-on-write helpers for store collections.
//!
//! Every list is an `Arc<Vec<T>>`. A helper only calls `Arc::make_mut` once it
//! knows the list will change, so lists a transition leaves alone stay
//! pointer-equal to their previous value.

use crate::domain::{Entity, SoftDelete};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

pub type List<T> = Arc<Vec<T>>;
pub type Keyed<K, T> = HashMap<K, List<T>>;

/// Replaces the list with `items`, keeping the old `Arc` when the contents match.
pub fn replace_all<T: PartialEq>(list: &mut List<T>, items: Vec<T>) {
    if **list != items {
        *list = Arc::new(items);
    }
}

pub fn append<T: Clone>(list: &mut List<T>, item: T) {
    Arc::make_mut(list).push(item);
}

/// Swaps in `item` where its id already appears. Returns whether it did.
pub fn replace<T: Entity + Clone + PartialEq>(list: &mut List<T>, item: &T) -> bool {
    let Some(pos) = list.iter().position(|r| r.id() == item.id()) else {
        return false;
    };
    if list[pos] != *item {
        Arc::make_mut(list)[pos] = item.clone();
    }
    true
}

pub fn upsert<T: Entity + Clone + PartialEq>(list: &mut List<T>, item: T) {
    if !replace(list, &item) {
        append(list, item);
    }
}

pub fn remove<T: Entity + Clone>(list: &mut List<T>, id: i64) -> Option<T> {
    let pos = list.iter().position(|r| r.id() == id)?;
    Some(Arc::make_mut(list).remove(pos))
}

pub fn contains<T: Entity>(list: &[T], id: i64) -> bool {
    list.iter().any(|r| r.id() == id)
}

/// Sets one key of a keyed sub-collection; sibling keys are untouched.
pub fn merge_key<K: Eq + Hash, T: PartialEq>(map: &mut Keyed<K, T>, key: K, items: Vec<T>) {
    match map.get_mut(&key) {
        Some(existing) => replace_all(existing, items),
        None => {
            map.insert(key, Arc::new(items));
        }
    }
}

/// Appends to an already-loaded key. Keys that were never loaded stay absent.
pub fn append_to_key<K: Eq + Hash, T: Clone>(map: &mut Keyed<K, T>, key: &K, item: T) {
    if let Some(list) = map.get_mut(key) {
        append(list, item);
    }
}

pub fn replace_in_keys<K, T: Entity + Clone + PartialEq>(map: &mut Keyed<K, T>, item: &T) {
    for list in map.values_mut() {
        replace(list, item);
    }
}

/// Removes the id from every key, returning the first copy found.
pub fn remove_from_keys<K, T: Entity + Clone>(map: &mut Keyed<K, T>, id: i64) -> Option<T> {
    let mut found = None;
    for list in map.values_mut() {
        if let Some(removed) = remove(list, id) {
            found.get_or_insert(removed);
        }
    }
    found
}

/// Replaces a single-item pointer if it refers to the same record.
pub fn replace_current<T: Entity + Clone>(current: &mut Option<T>, item: &T) {
    if current.as_ref().is_some_and(|c| c.id() == item.id()) {
        *current = Some(item.clone());
    }
}

pub fn take_current<T: Entity>(current: &mut Option<T>, id: i64) -> Option<T> {
    if current.as_ref().is_some_and(|c| c.id() == id) {
        current.take()
    } else {
        None
    }
}

/// Files a removed record under `deleted`, flagged.
pub fn bury<T: SoftDelete + Clone + PartialEq>(deleted: &mut List<T>, mut record: T) {
    record.set_deleted(true);
    upsert(deleted, record);
}

/// Moves a record out of `deleted` and back into `active`, flag cleared.
pub fn restore<T: SoftDelete + Clone + PartialEq>(
    active: &mut List<T>,
    deleted: &mut List<T>,
    mut record: T,
) {
    remove(deleted, record.id());
    record.set_deleted(false);
    upsert(active, record);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Genre;

    fn genre(id: i64, name: &str) -> Genre {
        Genre {
            id,
            name: name.into(),
        }
    }

    #[test]
    fn replace_missing_id_keeps_identity() {
        let mut list: List<Genre> = Arc::new(vec![genre(1, "rap")]);
        let before = Arc::clone(&list);
        assert!(!replace(&mut list, &genre(2, "jazz")));
        assert!(Arc::ptr_eq(&before, &list));
    }

    #[test]
    fn replace_all_with_equal_items_keeps_identity() {
        let mut list: List<Genre> = Arc::new(vec![genre(1, "rap")]);
        let before = Arc::clone(&list);
        replace_all(&mut list, vec![genre(1, "rap")]);
        assert!(Arc::ptr_eq(&before, &list));
        replace_all(&mut list, vec![genre(1, "trap")]);
        assert!(!Arc::ptr_eq(&before, &list));
        assert_eq!(before[0].name, "rap");
    }

    #[test]
    fn append_to_absent_key_does_not_create_it() {
        let mut map: Keyed<i64, Genre> = HashMap::new();
        append_to_key(&mut map, &5, genre(1, "rap"));
        assert!(map.is_empty());

        merge_key(&mut map, 5, Vec::new());
        append_to_key(&mut map, &5, genre(1, "rap"));
        assert_eq!(map[&5].len(), 1);
    }

    #[test]
    fn remove_from_keys_hits_every_key() {
        let mut map: Keyed<i64, Genre> = HashMap::new();
        merge_key(&mut map, 1, vec![genre(7, "a"), genre(8, "b")]);
        merge_key(&mut map, 2, vec![genre(7, "a")]);
        merge_key(&mut map, 3, vec![genre(9, "c")]);
        let untouched = Arc::clone(&map[&3]);

        let removed = remove_from_keys(&mut map, 7);
        assert_eq!(removed, Some(genre(7, "a")));
        assert_eq!(map[&1].len(), 1);
        assert!(map[&2].is_empty());
        assert!(Arc::ptr_eq(&untouched, &map[&3]));
    }

    #[test]
    fn take_current_only_matches_same_id() {
        let mut current = Some(genre(1, "rap"));
        assert!(take_current(&mut current, 2).is_none());
        assert!(current.is_some());
        assert_eq!(take_current(&mut current, 1), Some(genre(1, "rap")));
        assert!(current.is_none());
    }
}
