use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::TodoItem;

/// Identifying stub of a deleted row. Delete notifications carry only the
/// columns needed to address the row, not the full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedItem {
    pub id: Uuid,
}

/// A row-change notification from the push channel, scoped to one list's
/// items. Insert and update events carry the new row; delete events carry
/// the id stub of the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemChange {
    /// A row was inserted.
    Insert { new: TodoItem },
    /// A row was updated in place.
    Update { new: TodoItem },
    /// A row was deleted.
    Delete { old: DeletedItem },
}

impl ItemChange {
    /// Returns the id of the item the change addresses.
    pub fn item_id(&self) -> Uuid {
        match self {
            ItemChange::Insert { new } | ItemChange::Update { new } => new.id,
            ItemChange::Delete { old } => old.id,
        }
    }
}
