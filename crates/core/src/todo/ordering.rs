use std::cmp::Ordering;

use super::types::{TodoItem, TodoList};

/// Comparator for the display order of items: incomplete items first, then
/// completed ones; within each group, newest creation time first.
pub fn display_ordering(a: &TodoItem, b: &TodoItem) -> Ordering {
    let completed_cmp = a.completed.cmp(&b.completed);
    if completed_cmp != Ordering::Equal {
        return completed_cmp;
    }
    b.created_at.cmp(&a.created_at)
}

/// Sorts items for display. The sort is stable, so items comparing equal
/// keep their original relative order.
pub fn sort_items_for_display(items: &mut [TodoItem]) {
    items.sort_by(display_ordering);
}

/// Sorts items by creation time descending, the raw store order. The
/// reconciled view uses [`sort_items_for_display`] instead.
pub fn sort_items_by_created(items: &mut [TodoItem]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Sorts lists by creation time descending.
pub fn sort_lists_by_created(lists: &mut [TodoList]) {
    lists.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
