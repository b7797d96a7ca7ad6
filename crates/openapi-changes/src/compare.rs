//! Walks shared by every comparator: optional nested objects and keyed
//! collections.

use crate::change::{Change, ChangeType, create_change};
use indexmap::IndexMap;
use openapi_low::{FlatMap, NodeReference};
use openapi_yaml::Node;
use std::borrow::Cow;

/// A keyed collection viewed as entry name to value node and decoded value.
pub(crate) type Keyed<'a, 'r, T> = IndexMap<Cow<'r, str>, (&'a Node, &'r T)>;

pub(crate) fn keyed_map<'a, 'r, T>(map: &'r FlatMap<'a, T>) -> Keyed<'a, 'r, T> {
    map.iter()
        .map(|(key, value)| (Cow::Borrowed(key.value.as_str()), (value.value_node, &value.value)))
        .collect()
}

pub(crate) fn keyed_optional_map<'a, 'r, T>(
    map: &'r Option<NodeReference<'a, FlatMap<'a, T>>>,
) -> Keyed<'a, 'r, T> {
    map.as_ref().map(|m| keyed_map(&m.value)).unwrap_or_default()
}

/// Key a list of objects by one of their fields.
///
/// Entries without the field, or repeating a name already taken, are keyed by
/// position as `#<index>` so that no entry is lost.
pub(crate) fn keyed_list<'a, 'r, T>(
    items: &'r [NodeReference<'a, T>],
    key: impl Fn(&'r T) -> Option<&'r str>,
) -> Keyed<'a, 'r, T> {
    let mut keyed: Keyed<'a, 'r, T> = IndexMap::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let entry = (item.value_node, &item.value);
        match key(&item.value) {
            Some(name) if !keyed.contains_key(name) => {
                keyed.insert(Cow::Borrowed(name), entry);
            }
            name => {
                let mut slot = format!("#{index}");
                while keyed.contains_key(slot.as_str()) {
                    slot.push('#');
                }
                tracing::debug!(?name, %slot, "keying list entry by position");
                keyed.insert(Cow::Owned(slot), entry);
            }
        }
    }
    keyed
}

/// Key a list of values by themselves. Repeated values collapse into one.
pub(crate) fn keyed_set<'a, 'r, T>(
    items: &'r [NodeReference<'a, T>],
    key: impl Fn(&'r T) -> &'r str,
) -> Keyed<'a, 'r, T> {
    items
        .iter()
        .map(|item| (Cow::Borrowed(key(&item.value)), (item.value_node, &item.value)))
        .collect()
}

/// Compare an optional nested object.
///
/// Both present recurses through `compare`. Removal is breaking and addition
/// is not; both record a change on `label` rather than a nested change-set.
pub(crate) fn compare_nested<'a, 'r, T, C>(
    label: &str,
    left: &'r Option<NodeReference<'a, T>>,
    right: &'r Option<NodeReference<'a, T>>,
    changes: &mut Vec<Change<'a>>,
    compare: impl FnOnce(&'r T, &'r T) -> Option<C>,
) -> Option<C> {
    match (left, right) {
        (Some(left), Some(right)) => compare(&left.value, &right.value),
        (Some(left), None) => {
            create_change(changes, ChangeType::Removed, label, Some(left.value_node), None, true);
            None
        }
        (None, Some(right)) => {
            create_change(changes, ChangeType::Added, label, None, Some(right.value_node), false);
            None
        }
        (None, None) => None,
    }
}

/// Two-pass walk of a keyed collection.
///
/// Keys only on the left are breaking removals, keys only on the right are
/// non-breaking additions, and keys on both sides are handed to `both`.
pub(crate) fn compare_keyed<'a, 'r, T>(
    label: &str,
    left: &Keyed<'a, 'r, T>,
    right: &Keyed<'a, 'r, T>,
    changes: &mut Vec<Change<'a>>,
    mut both: impl FnMut(&mut Vec<Change<'a>>, &str, (&'a Node, &'r T), (&'a Node, &'r T)),
) {
    for (key, &left_entry) in left {
        let key: &str = key;
        match right.get(key) {
            Some(&right_entry) => both(changes, key, left_entry, right_entry),
            None => changes.push(
                Change::new(ChangeType::Removed, label, Some(left_entry.0), None, true)
                    .with_key(key),
            ),
        }
    }
    for (key, &(right_node, _)) in right {
        let key: &str = key;
        if !left.contains_key(key) {
            changes.push(
                Change::new(ChangeType::Added, label, None, Some(right_node), false).with_key(key),
            );
        }
    }
}

/// Keyed collection of scalars: a redefined entry is a breaking modification.
pub(crate) fn compare_keyed_values<'a, 'r, T>(
    label: &str,
    left: &Keyed<'a, 'r, T>,
    right: &Keyed<'a, 'r, T>,
    changes: &mut Vec<Change<'a>>,
) {
    compare_keyed(label, left, right, changes, |changes, key, (l, _), (r, _)| {
        if !l.semantic_eq(r) {
            changes.push(Change::new(ChangeType::Modified, label, Some(l), Some(r), true).with_key(key));
        }
    });
}

/// Keyed collection of objects: entries on both sides get a nested change-set.
pub(crate) fn compare_keyed_objects<'a, 'r, T, C>(
    label: &str,
    left: &Keyed<'a, 'r, T>,
    right: &Keyed<'a, 'r, T>,
    changes: &mut Vec<Change<'a>>,
    compare: impl Fn(&'r T, &'r T) -> Option<C>,
) -> IndexMap<String, C> {
    let mut nested = IndexMap::new();
    compare_keyed(label, left, right, changes, |_, key, (_, l), (_, r)| {
        if let Some(found) = compare(l, r) {
            nested.insert(key.to_string(), found);
        }
    });
    nested
}
