//! Live-update reconciliation for one open list.
//!
//! This module keeps a locally held item sequence consistent with a
//! server-pushed stream of insert/update/delete notifications, without
//! requiring a full reload. The push channel delivers at least once, so
//! duplicate events must be harmless, and events may address items the
//! local fetch never saw, so unmatched updates and deletes must be ignored.
//!
//! This is part of the Functional Core - all methods are pure state
//! transitions with no side effects.

use uuid::Uuid;

use super::events::ItemChange;
use super::ordering::sort_items_for_display;
use super::types::TodoItem;

/// Outcome of applying one change to the local sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The item was added to the sequence.
    Inserted,
    /// The item was replaced in place.
    Updated,
    /// The item was removed.
    Removed,
    /// The change had no effect: a duplicate insert, or an update/delete
    /// addressing an id the sequence does not hold.
    Ignored,
}

impl Applied {
    /// Returns true if the sequence changed.
    pub fn changed(&self) -> bool {
        !matches!(self, Applied::Ignored)
    }
}

/// An ordered item sequence, keyed by id (ids unique within the sequence),
/// kept consistent with a change feed.
///
/// The display order is applied uniformly: at construction from a fetch,
/// after every insert or update, and on [`replace_all`](Self::replace_all).
/// No code path trusts the order the rows arrived in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciler {
    items: Vec<TodoItem>,
}

impl Reconciler {
    /// Creates an empty reconciler.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a reconciler from a fresh fetch, applying display order.
    pub fn from_items(mut items: Vec<TodoItem>) -> Self {
        sort_items_for_display(&mut items);
        Self { items }
    }

    /// The current, display-ordered sequence.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items are held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item with the given id, if present.
    pub fn get(&self, id: Uuid) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Replaces the whole sequence from a fresh fetch. Used to resynchronize
    /// after a dropped channel; missed events are never diffed or replayed.
    pub fn replace_all(&mut self, mut items: Vec<TodoItem>) {
        sort_items_for_display(&mut items);
        self.items = items;
    }

    /// Applies one change to the sequence.
    ///
    /// Inserts of an id already present are ignored, which makes
    /// at-least-once delivery and races with optimistic local inserts safe.
    /// Updates and deletes of an absent id are ignored for the same reason.
    pub fn apply(&mut self, change: &ItemChange) -> Applied {
        match change {
            ItemChange::Insert { new } => {
                if self.items.iter().any(|item| item.id == new.id) {
                    return Applied::Ignored;
                }
                self.items.push(new.clone());
                sort_items_for_display(&mut self.items);
                Applied::Inserted
            }
            ItemChange::Update { new } => {
                match self.items.iter_mut().find(|item| item.id == new.id) {
                    Some(item) => {
                        *item = new.clone();
                        sort_items_for_display(&mut self.items);
                        Applied::Updated
                    }
                    None => Applied::Ignored,
                }
            }
            ItemChange::Delete { old } => {
                let before = self.items.len();
                self.items.retain(|item| item.id != old.id);
                if self.items.len() == before {
                    Applied::Ignored
                } else {
                    Applied::Removed
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::events::DeletedItem;
    use chrono::{TimeZone, Utc};

    fn at(seconds: i64) -> chrono::DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    fn item(title: &str, completed: bool, seconds: i64) -> TodoItem {
        TodoItem::new(Uuid::new_v4(), title)
            .with_completed(completed)
            .with_created_at(at(seconds))
    }

    fn insert(item: &TodoItem) -> ItemChange {
        ItemChange::Insert { new: item.clone() }
    }

    fn update(item: &TodoItem) -> ItemChange {
        ItemChange::Update { new: item.clone() }
    }

    fn delete(id: Uuid) -> ItemChange {
        ItemChange::Delete {
            old: DeletedItem { id },
        }
    }

    fn titles(reconciler: &Reconciler) -> Vec<&str> {
        reconciler.items().iter().map(|i| i.title.as_str()).collect()
    }

    fn assert_no_duplicate_ids(reconciler: &Reconciler) {
        let mut ids: Vec<Uuid> = reconciler.items().iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), reconciler.len());
    }

    fn assert_display_sorted(reconciler: &Reconciler) {
        let items = reconciler.items();
        for pair in items.windows(2) {
            assert!(
                !pair[0].completed || pair[1].completed,
                "incomplete items must precede completed ones"
            );
            if pair[0].completed == pair[1].completed {
                assert!(
                    pair[0].created_at >= pair[1].created_at,
                    "newer items must come first within a group"
                );
            }
        }
    }

    #[test]
    fn test_insert_appends_and_sorts() {
        let mut reconciler = Reconciler::new();
        let a = item("A", false, 1);
        let b = item("B", false, 2);

        assert_eq!(reconciler.apply(&insert(&a)), Applied::Inserted);
        assert_eq!(reconciler.apply(&insert(&b)), Applied::Inserted);

        assert_eq!(titles(&reconciler), vec!["B", "A"]);
        assert_display_sorted(&reconciler);
    }

    #[test]
    fn test_duplicate_insert_is_ignored() {
        let a = item("A", false, 1);
        let b = item("B", false, 2);
        let mut reconciler = Reconciler::from_items(vec![b.clone(), a.clone()]);

        let before = reconciler.clone();
        assert_eq!(reconciler.apply(&insert(&a)), Applied::Ignored);

        assert_eq!(reconciler, before);
        assert_eq!(titles(&reconciler), vec!["B", "A"]);
        assert_no_duplicate_ids(&reconciler);
    }

    #[test]
    fn test_insert_twice_equals_insert_once() {
        let a = item("A", false, 1);

        let mut once = Reconciler::new();
        once.apply(&insert(&a));

        let mut twice = Reconciler::new();
        twice.apply(&insert(&a));
        twice.apply(&insert(&a));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let a = item("A", false, 1);
        let mut reconciler = Reconciler::from_items(vec![a.clone()]);

        let mut renamed = a.clone();
        renamed.title = "A renamed".to_string();
        assert_eq!(reconciler.apply(&update(&renamed)), Applied::Updated);

        assert_eq!(titles(&reconciler), vec!["A renamed"]);
        assert_eq!(reconciler.len(), 1);
    }

    #[test]
    fn test_update_of_unknown_id_is_ignored() {
        let a = item("A", false, 1);
        let mut reconciler = Reconciler::from_items(vec![a]);
        let before = reconciler.clone();

        let stranger = item("stranger", false, 5);
        assert_eq!(reconciler.apply(&update(&stranger)), Applied::Ignored);
        assert_eq!(reconciler, before);
    }

    #[test]
    fn test_update_resorts_on_completion_change() {
        let a = item("A", false, 1);
        let b = item("B", false, 2);
        let mut reconciler = Reconciler::from_items(vec![a.clone(), b.clone()]);
        assert_eq!(titles(&reconciler), vec!["B", "A"]);

        // Completing A keeps it after B: B is incomplete and comes first.
        let completed_a = a.clone().with_completed(true);
        reconciler.apply(&update(&completed_a));
        assert_eq!(titles(&reconciler), vec!["B", "A"]);
        assert_display_sorted(&reconciler);

        // Completing B too: both done, B still newer.
        let completed_b = b.clone().with_completed(true);
        reconciler.apply(&update(&completed_b));
        assert_eq!(titles(&reconciler), vec!["B", "A"]);
        assert_display_sorted(&reconciler);
    }

    #[test]
    fn test_reopening_an_item_moves_it_up() {
        // A is newer but completed, so it sorts below the open B.
        let a = item("A", true, 5);
        let b = item("B", false, 2);
        let mut reconciler = Reconciler::from_items(vec![a.clone(), b]);
        assert_eq!(titles(&reconciler), vec!["B", "A"]);

        let reopened = a.with_completed(false);
        reconciler.apply(&update(&reopened));

        assert_eq!(titles(&reconciler), vec!["A", "B"]);
        assert!(reconciler.items().iter().all(|i| !i.completed));
    }

    #[test]
    fn test_delete_removes_item() {
        let a = item("A", false, 1);
        let b = item("B", false, 2);
        let mut reconciler = Reconciler::from_items(vec![a.clone(), b]);

        assert_eq!(reconciler.apply(&delete(a.id)), Applied::Removed);
        assert_eq!(titles(&reconciler), vec!["B"]);
    }

    #[test]
    fn test_delete_of_absent_id_is_a_noop() {
        let a = item("A", false, 1);
        let mut reconciler = Reconciler::from_items(vec![a]);
        let before = reconciler.clone();

        let outcome = reconciler.apply(&delete(Uuid::new_v4()));

        assert_eq!(outcome, Applied::Ignored);
        assert!(!outcome.changed());
        assert_eq!(reconciler, before);
    }

    #[test]
    fn test_duplicate_delete_is_ignored() {
        let a = item("A", false, 1);
        let mut reconciler = Reconciler::from_items(vec![a.clone()]);

        assert_eq!(reconciler.apply(&delete(a.id)), Applied::Removed);
        assert_eq!(reconciler.apply(&delete(a.id)), Applied::Ignored);
        assert!(reconciler.is_empty());
    }

    #[test]
    fn test_from_items_applies_display_order() {
        let done = item("done", true, 3);
        let open_old = item("open-old", false, 1);
        let open_new = item("open-new", false, 2);

        let reconciler = Reconciler::from_items(vec![done, open_old, open_new]);

        assert_eq!(titles(&reconciler), vec!["open-new", "open-old", "done"]);
    }

    #[test]
    fn test_replace_all_resets_state() {
        let a = item("A", false, 1);
        let mut reconciler = Reconciler::from_items(vec![a]);

        let fresh = vec![item("done", true, 5), item("open", false, 4)];
        reconciler.replace_all(fresh);

        assert_eq!(titles(&reconciler), vec!["open", "done"]);
        assert_eq!(reconciler.len(), 2);
    }

    #[test]
    fn test_event_for_unfetched_item_is_tolerated() {
        // The fetch is the source of truth at open time; a late update or
        // delete for a row it never contained must not invent items.
        let mut reconciler = Reconciler::new();
        let unseen = item("unseen", false, 9);

        assert_eq!(reconciler.apply(&update(&unseen)), Applied::Ignored);
        assert_eq!(reconciler.apply(&delete(unseen.id)), Applied::Ignored);
        assert!(reconciler.is_empty());

        // A late insert for an unseen row is real news and is applied.
        assert_eq!(reconciler.apply(&insert(&unseen)), Applied::Inserted);
        assert_eq!(reconciler.len(), 1);
    }

    #[test]
    fn test_arbitrary_event_sequence_keeps_invariants() {
        let a = item("A", false, 1);
        let b = item("B", false, 2);
        let c = item("C", true, 3);
        let mut reconciler = Reconciler::from_items(vec![a.clone(), b.clone()]);

        let changes = vec![
            insert(&c),
            insert(&a),
            update(&b.clone().with_completed(true)),
            delete(a.id),
            delete(a.id),
            insert(&a),
            update(&c.clone().with_completed(false)),
            delete(Uuid::new_v4()),
        ];

        for change in &changes {
            reconciler.apply(change);
            assert_no_duplicate_ids(&reconciler);
            assert_display_sorted(&reconciler);
        }

        assert_eq!(titles(&reconciler), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_get_finds_item_by_id() {
        let a = item("A", false, 1);
        let reconciler = Reconciler::from_items(vec![a.clone()]);

        assert_eq!(reconciler.get(a.id).map(|i| i.title.as_str()), Some("A"));
        assert!(reconciler.get(Uuid::new_v4()).is_none());
    }
}
