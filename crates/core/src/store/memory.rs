//! In-memory store implementation.
//!
//! Mirrors the hosted backend's row-level rules far enough for tests and
//! local use: visibility by ownership or public flag, owner-only list
//! mutations, viewer-writable items in visible lists, cascade on list
//! delete, idempotent deletes, and expiry of anonymous lists. Data is not
//! persisted and is lost when the store is dropped.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::identity::{Caller, SESSION_TTL_DAYS};
use crate::todo::{
    merge_visible_lists, sort_items_by_created, validate_title, CreateItemRequest,
    CreateListRequest, TodoItem, TodoList, UpdateItemRequest, UpdateListRequest,
};

use super::error::{Result, StoreError};
use super::traits::{ItemStore, ListStore};

/// In-memory store backend.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access. Lock
/// order is lists before items everywhere.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    lists: Arc<RwLock<HashMap<Uuid, TodoList>>>,
    items: Arc<RwLock<HashMap<Uuid, TodoItem>>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            lists: Arc::new(RwLock::new(HashMap::new())),
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

/// True if the caller's identity owns the list.
fn owns(list: &TodoList, caller: &Caller) -> bool {
    match caller {
        Caller::User(user_id) => list.user_id == Some(*user_id),
        Caller::Anonymous(token) => list.session_id.as_ref() == Some(token),
        Caller::Public => false,
    }
}

/// True if the list is visible to the caller: not expired, and either
/// public or owned. An invisible list is reported as missing, never as
/// forbidden, so its existence is not revealed.
fn can_see(list: &TodoList, caller: &Caller, now: DateTime<Utc>) -> bool {
    !list.is_expired(now) && (list.is_public || owns(list, caller))
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn list_lists(&self, caller: &Caller) -> Result<Vec<TodoList>> {
        let now = Utc::now();
        let lists = self.lists.read().await;
        let own: Vec<TodoList> = lists
            .values()
            .filter(|list| !list.is_expired(now) && owns(list, caller))
            .cloned()
            .collect();
        let public: Vec<TodoList> = lists
            .values()
            .filter(|list| !list.is_expired(now) && list.is_public)
            .cloned()
            .collect();
        Ok(merge_visible_lists(own, public))
    }

    async fn get_list(&self, caller: &Caller, id: Uuid) -> Result<TodoList> {
        let now = Utc::now();
        let lists = self.lists.read().await;
        match lists.get(&id) {
            Some(list) if can_see(list, caller, now) => Ok(list.clone()),
            _ => Err(StoreError::not_found("TodoList", id)),
        }
    }

    async fn create_list(&self, caller: &Caller, req: CreateListRequest) -> Result<TodoList> {
        validate_title(&req.title)?;
        let title = req.title.trim().to_string();

        let list = match caller {
            Caller::User(user_id) => TodoList::owned(title, *user_id),
            Caller::Anonymous(token) => {
                let expires_at = Utc::now() + Duration::days(SESSION_TTL_DAYS);
                TodoList::anonymous(title, token.clone(), expires_at)
            }
            Caller::Public => {
                return Err(StoreError::AccessDenied(
                    "creating a list requires a signed-in user or an anonymous session"
                        .to_string(),
                ))
            }
        }
        .with_public(req.is_public);

        let mut lists = self.lists.write().await;
        lists.insert(list.id, list.clone());
        Ok(list)
    }

    async fn update_list(
        &self,
        caller: &Caller,
        id: Uuid,
        req: UpdateListRequest,
    ) -> Result<TodoList> {
        if let Some(title) = req.title.as_deref() {
            validate_title(title)?;
        }

        let now = Utc::now();
        let mut lists = self.lists.write().await;
        let list = match lists.get_mut(&id) {
            Some(list) if can_see(list, caller, now) => list,
            _ => return Err(StoreError::not_found("TodoList", id)),
        };
        if !owns(list, caller) {
            return Err(StoreError::AccessDenied(
                "only the owner may modify a list".to_string(),
            ));
        }

        let req = UpdateListRequest {
            title: req.title.map(|title| title.trim().to_string()),
            is_public: req.is_public,
        };
        req.apply_to(list);
        Ok(list.clone())
    }

    async fn delete_list(&self, caller: &Caller, id: Uuid) -> Result<()> {
        let now = Utc::now();
        let mut lists = self.lists.write().await;
        let Some(list) = lists.get(&id) else {
            // Already gone; racing a live delete is not an error.
            return Ok(());
        };
        if !can_see(list, caller, now) {
            // The remote would report nothing to delete here.
            return Ok(());
        }
        if !owns(list, caller) {
            return Err(StoreError::AccessDenied(
                "only the owner may delete a list".to_string(),
            ));
        }

        lists.remove(&id);
        let mut items = self.items.write().await;
        items.retain(|_, item| item.todo_list_id != id);
        Ok(())
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list_items(&self, caller: &Caller, list_id: Uuid) -> Result<Vec<TodoItem>> {
        let now = Utc::now();
        let lists = self.lists.read().await;
        let visible = lists
            .get(&list_id)
            .is_some_and(|list| can_see(list, caller, now));
        if !visible {
            return Err(StoreError::not_found("TodoList", list_id));
        }

        let items = self.items.read().await;
        let mut items: Vec<TodoItem> = items
            .values()
            .filter(|item| item.todo_list_id == list_id)
            .cloned()
            .collect();
        sort_items_by_created(&mut items);
        Ok(items)
    }

    async fn create_item(&self, caller: &Caller, req: CreateItemRequest) -> Result<TodoItem> {
        validate_title(&req.title)?;
        let title = req.title.trim().to_string();

        let now = Utc::now();
        let lists = self.lists.read().await;
        let visible = lists
            .get(&req.todo_list_id)
            .is_some_and(|list| can_see(list, caller, now));
        if !visible {
            return Err(StoreError::not_found("TodoList", req.todo_list_id));
        }

        // Item writes in a visible list are open to every viewer; any
        // stricter policy belongs to the backend's row rules.
        let mut item = TodoItem::new(req.todo_list_id, title);
        if let Some(user_id) = caller.user_id() {
            item = item.with_owner(user_id);
        }

        let mut items = self.items.write().await;
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update_item(
        &self,
        caller: &Caller,
        id: Uuid,
        req: UpdateItemRequest,
    ) -> Result<TodoItem> {
        if let Some(title) = req.title.as_deref() {
            validate_title(title)?;
        }

        let now = Utc::now();
        let lists = self.lists.read().await;
        let mut items = self.items.write().await;
        let item = match items.get_mut(&id) {
            Some(item) => item,
            None => return Err(StoreError::not_found("TodoItem", id)),
        };
        let visible = lists
            .get(&item.todo_list_id)
            .is_some_and(|list| can_see(list, caller, now));
        if !visible {
            return Err(StoreError::not_found("TodoItem", id));
        }

        let req = UpdateItemRequest {
            title: req.title.map(|title| title.trim().to_string()),
            completed: req.completed,
        };
        req.apply_to(item);
        Ok(item.clone())
    }

    async fn delete_item(&self, caller: &Caller, id: Uuid) -> Result<()> {
        let now = Utc::now();
        let lists = self.lists.read().await;
        let mut items = self.items.write().await;
        let Some(item) = items.get(&id) else {
            return Ok(());
        };
        let visible = lists
            .get(&item.todo_list_id)
            .is_some_and(|list| can_see(list, caller, now));
        if visible {
            items.remove(&id);
        }
        Ok(())
    }
}
