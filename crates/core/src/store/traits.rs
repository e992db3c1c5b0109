use async_trait::async_trait;
use uuid::Uuid;

use crate::identity::Caller;
use crate::todo::{
    CreateItemRequest, CreateListRequest, TodoItem, TodoList, UpdateItemRequest, UpdateListRequest,
};

use super::Result;

/// Store operations on todo lists.
///
/// Every method takes the caller identity explicitly. Implementations attach
/// the matching credential to the underlying request themselves; callers
/// never handle credentials directly.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Gets the union of the caller's own lists and all public lists,
    /// deduplicated by id, newest creation time first. Fails with
    /// `AccessDenied` only if the caller's credential is rejected.
    async fn list_lists(&self, caller: &Caller) -> Result<Vec<TodoList>>;

    /// Gets one list if it is visible to the caller (owned or public);
    /// `NotFound` otherwise.
    async fn get_list(&self, caller: &Caller, id: Uuid) -> Result<TodoList>;

    /// Creates a list. The title must be non-empty after trimming, checked
    /// before anything is sent. The result carries the assigned id and
    /// creation timestamp.
    async fn create_list(&self, caller: &Caller, req: CreateListRequest) -> Result<TodoList>;

    /// Applies a partial update to a list the caller owns. Identifier and
    /// ownership cannot change.
    async fn update_list(
        &self,
        caller: &Caller,
        id: Uuid,
        req: UpdateListRequest,
    ) -> Result<TodoList>;

    /// Deletes a list and, with it, all of its items. Deleting an id that is
    /// already gone succeeds.
    async fn delete_list(&self, caller: &Caller, id: Uuid) -> Result<()>;
}

/// Store operations on todo items.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Gets all items of one list, newest creation time first. Fails with
    /// `NotFound` if the list does not exist or is not visible to the caller.
    async fn list_items(&self, caller: &Caller, list_id: Uuid) -> Result<Vec<TodoItem>>;

    /// Creates an item under the request's list. The title must be non-empty
    /// after trimming, checked before anything is sent.
    async fn create_item(&self, caller: &Caller, req: CreateItemRequest) -> Result<TodoItem>;

    /// Applies a partial update (title, completion) to an item.
    async fn update_item(
        &self,
        caller: &Caller,
        id: Uuid,
        req: UpdateItemRequest,
    ) -> Result<TodoItem>;

    /// Deletes an item. Deleting an id that is already gone succeeds.
    async fn delete_item(&self, caller: &Caller, id: Uuid) -> Result<()>;
}
