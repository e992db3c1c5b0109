//! API request types for list and item operations.
//!
//! These types are shared between the HTTP client and the in-memory store for
//! type-safe store calls. Following the Functional Core pattern, these are
//! pure data types with no I/O.
//!
//! Update requests carry only the mutable fields as options, where an absent
//! field means "unchanged". They carry no id or owner fields, so identifiers
//! and ownership cannot change through an update.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{TodoItem, TodoList};

fn default_public() -> bool {
    true
}

/// Request payload for creating a new todo list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListRequest {
    pub title: String,
    /// New lists default to public.
    #[serde(default = "default_public")]
    pub is_public: bool,
}

impl CreateListRequest {
    /// Create a new request with just a title. The list starts public.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_public: true,
        }
    }

    /// Set the visibility flag.
    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }
}

/// Request payload for updating a todo list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

impl UpdateListRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the visibility flag.
    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = Some(is_public);
        self
    }

    /// Apply the present fields to an existing list.
    pub fn apply_to(self, list: &mut TodoList) {
        if let Some(title) = self.title {
            list.title = title;
        }
        if let Some(is_public) = self.is_public {
            list.is_public = is_public;
        }
    }
}

/// Request payload for creating a new todo item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub todo_list_id: Uuid,
    pub title: String,
}

impl CreateItemRequest {
    /// Create a new request for an item under the given list.
    pub fn new(todo_list_id: Uuid, title: impl Into<String>) -> Self {
        Self {
            todo_list_id,
            title: title.into(),
        }
    }
}

/// Request payload for updating a todo item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateItemRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Apply the present fields to an existing item.
    pub fn apply_to(self, item: &mut TodoItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(completed) = self.completed {
            item.completed = completed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_list_request_defaults_to_public() {
        let req = CreateListRequest::new("Groceries");
        assert_eq!(req.title, "Groceries");
        assert!(req.is_public);

        let private = CreateListRequest::new("Secrets").with_public(false);
        assert!(!private.is_public);
    }

    #[test]
    fn test_create_list_request_deserializes_without_flag() {
        let req: CreateListRequest = serde_json::from_str(r#"{"title":"Groceries"}"#).unwrap();
        assert!(req.is_public);
    }

    #[test]
    fn test_update_list_apply() {
        let mut list = TodoList::owned("Old", Uuid::new_v4());
        let update = UpdateListRequest::new()
            .with_title("New")
            .with_public(false);

        update.apply_to(&mut list);

        assert_eq!(list.title, "New");
        assert!(!list.is_public);
    }

    #[test]
    fn test_update_list_absent_fields_leave_list_untouched() {
        let mut list = TodoList::owned("Keep", Uuid::new_v4());
        let before = list.clone();

        UpdateListRequest::new().apply_to(&mut list);

        assert_eq!(list, before);
    }

    #[test]
    fn test_update_requests_serialize_only_present_fields() {
        let empty = serde_json::to_string(&UpdateListRequest::new()).unwrap();
        assert_eq!(empty, "{}");

        let partial = serde_json::to_string(&UpdateItemRequest::new().with_completed(true)).unwrap();
        assert_eq!(partial, r#"{"completed":true}"#);
    }

    #[test]
    fn test_update_item_apply() {
        let mut item = TodoItem::new(Uuid::new_v4(), "Buy milk");
        let update = UpdateItemRequest::new().with_completed(true);

        update.apply_to(&mut item);

        assert_eq!(item.title, "Buy milk");
        assert!(item.completed);
    }

    #[test]
    fn test_update_item_cannot_touch_identity() {
        // The request type has no id/owner/list fields, so applying one can
        // only ever change title and completion.
        let list_id = Uuid::new_v4();
        let item = TodoItem::new(list_id, "Buy milk").with_owner(Uuid::new_v4());
        let mut updated = item.clone();

        UpdateItemRequest::new()
            .with_title("Buy oat milk")
            .with_completed(true)
            .apply_to(&mut updated);

        assert_eq!(updated.id, item.id);
        assert_eq!(updated.todo_list_id, item.todo_list_id);
        assert_eq!(updated.user_id, item.user_id);
        assert_eq!(updated.created_at, item.created_at);
    }
}
