//! Position maintenance for ordered sibling collections.
//!
//! Every function leaves the collection in canonical order with
//! `position == index` for each record, except `sort`, which only orders.

use super::Movable;

fn sort_key<T: Movable>(item: &T) -> (bool, i32, bool, i32) {
    (
        item.position().is_none(),
        item.position().unwrap_or_default(),
        item.id().is_none(),
        item.id().unwrap_or_default(),
    )
}

/// Canonical order: position ascending, then identity; unset values last. Stable.
pub fn sort<T: Movable>(items: &mut [T]) {
    items.sort_by_key(sort_key);
}

/// Rewrite positions to match the current order of `items`
pub fn reindex<T: Movable>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_position(Some(index as i32));
    }
}

/// Reindex `items`, then every child collection below them
pub fn reindex_all<T: Movable>(items: &mut [T]) {
    reindex(items);
    for item in items.iter_mut() {
        item.reindex_children();
    }
}

pub fn find_index<T: Movable>(items: &[T], id: i32) -> Option<usize> {
    items.iter().position(|item| item.id() == Some(id))
}

/// Add `item` at the end of the list
pub fn append<T: Movable>(items: &mut Vec<T>, mut item: T) {
    item.set_position(Some(items.len() as i32));
    items.push(item);
}

/// Remove the record with `id`; later siblings shift down by one
pub fn remove<T: Movable>(items: &mut Vec<T>, id: i32) -> Option<T> {
    sort(items);
    let index = find_index(items, id)?;
    let removed = items.remove(index);
    reindex(items);
    Some(removed)
}

/// Append a deep copy of the record with `id`; returns the copy's index
pub fn duplicate<T: Movable>(items: &mut Vec<T>, id: i32) -> Option<usize> {
    sort(items);
    let index = find_index(items, id)?;
    let copy = items[index].duplicate();
    items.push(copy);
    reindex(items);
    Some(items.len() - 1)
}

/// Swap with the predecessor. Returns `false` at the top or for an unknown id.
pub fn move_up<T: Movable>(items: &mut [T], id: i32) -> bool {
    sort(items);
    match find_index(items, id) {
        Some(index) if index > 0 => {
            items.swap(index - 1, index);
            reindex(items);
            true
        }
        _ => false,
    }
}

/// Swap with the successor. Returns `false` at the bottom or for an unknown id.
pub fn move_down<T: Movable>(items: &mut [T], id: i32) -> bool {
    sort(items);
    match find_index(items, id) {
        Some(index) if index + 1 < items.len() => {
            items.swap(index, index + 1);
            reindex(items);
            true
        }
        _ => false,
    }
}
