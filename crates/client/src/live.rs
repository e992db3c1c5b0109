//! A live view of one open list.

use std::pin::Pin;

use futures_core::Stream;
use tokio_stream::StreamExt;
use uuid::Uuid;

use memora_core::identity::Caller;
use memora_core::store::{ItemStore, ListStore, Result, StoreError};
use memora_core::todo::{
    remaining_count, Applied, CreateItemRequest, DeletedItem, ItemChange, Reconciler, TodoItem,
    TodoList, UpdateItemRequest, UpdateListRequest,
};

use crate::client::MemoraClient;

type ChangeStream = Pin<Box<dyn Stream<Item = Result<ItemChange>> + Send>>;

/// One open list bound to one subscription and one reconciler.
///
/// [`open`](Self::open) subscribes before fetching, so a change racing the
/// fetch is either already in the fetched rows or still queued on the feed,
/// never lost. Dropping the value closes the subscription with it; the feed
/// never outlives the view.
pub struct LiveList {
    client: MemoraClient,
    caller: Caller,
    list: TodoList,
    reconciler: Reconciler,
    changes: ChangeStream,
}

impl LiveList {
    /// Open a list: subscribe to its change feed, then fetch its current
    /// state.
    pub async fn open(client: MemoraClient, caller: Caller, list_id: Uuid) -> Result<Self> {
        let changes: ChangeStream = Box::pin(client.watch_items(&caller, list_id).await?);
        let (list, items) = tokio::try_join!(
            client.get_list(&caller, list_id),
            client.list_items(&caller, list_id),
        )?;

        Ok(Self {
            client,
            caller,
            list,
            reconciler: Reconciler::from_items(items),
            changes,
        })
    }

    /// The list this view is bound to.
    pub fn list(&self) -> &TodoList {
        &self.list
    }

    /// The current, display-ordered item sequence.
    pub fn items(&self) -> &[TodoItem] {
        self.reconciler.items()
    }

    /// Items still left to do.
    pub fn remaining(&self) -> usize {
        remaining_count(self.reconciler.items())
    }

    /// Pull the next feed event into the reconciler.
    ///
    /// Returns `None` when the feed has closed; callers choose whether to
    /// [`resync`](Self::resync) or stop watching.
    pub async fn next_update(&mut self) -> Option<Result<Applied>> {
        match self.changes.next().await {
            Some(Ok(change)) => Some(Ok(self.reconciler.apply(&change))),
            Some(Err(error)) => Some(Err(error)),
            None => None,
        }
    }

    /// Re-subscribe and re-fetch after a dropped channel. Missed events are
    /// never diffed or replayed; the fresh fetch is the source of truth.
    pub async fn resync(&mut self) -> Result<()> {
        self.changes = Box::pin(self.client.watch_items(&self.caller, self.list.id).await?);
        let (list, items) = tokio::try_join!(
            self.client.get_list(&self.caller, self.list.id),
            self.client.list_items(&self.caller, self.list.id),
        )?;

        self.list = list;
        self.reconciler.replace_all(items);
        Ok(())
    }

    /// Add an item and apply it locally. The feed's echo of this insert is
    /// absorbed by the reconciler's dedup rule.
    pub async fn add_item(&mut self, title: impl Into<String>) -> Result<TodoItem> {
        let req = CreateItemRequest::new(self.list.id, title);
        let item = self.client.create_item(&self.caller, req).await?;
        self.reconciler
            .apply(&ItemChange::Insert { new: item.clone() });
        Ok(item)
    }

    /// Flip an item's completion flag.
    pub async fn toggle_item(&mut self, id: Uuid) -> Result<TodoItem> {
        let completed = match self.reconciler.get(id) {
            Some(item) => !item.completed,
            None => return Err(StoreError::not_found("TodoItem", id)),
        };
        let req = UpdateItemRequest::new().with_completed(completed);
        let item = self.client.update_item(&self.caller, id, req).await?;
        self.reconciler
            .apply(&ItemChange::Update { new: item.clone() });
        Ok(item)
    }

    /// Rename an item.
    pub async fn rename_item(&mut self, id: Uuid, title: impl Into<String>) -> Result<TodoItem> {
        let req = UpdateItemRequest::new().with_title(title);
        let item = self.client.update_item(&self.caller, id, req).await?;
        self.reconciler
            .apply(&ItemChange::Update { new: item.clone() });
        Ok(item)
    }

    /// Delete an item.
    pub async fn remove_item(&mut self, id: Uuid) -> Result<()> {
        self.client.delete_item(&self.caller, id).await?;
        self.reconciler.apply(&ItemChange::Delete {
            old: DeletedItem { id },
        });
        Ok(())
    }

    /// Rename the list itself.
    pub async fn rename(&mut self, title: impl Into<String>) -> Result<()> {
        let req = UpdateListRequest::new().with_title(title);
        self.list = self
            .client
            .update_list(&self.caller, self.list.id, req)
            .await?;
        Ok(())
    }

    /// Change the list's visibility.
    pub async fn set_public(&mut self, is_public: bool) -> Result<()> {
        let req = UpdateListRequest::new().with_public(is_public);
        self.list = self
            .client
            .update_list(&self.caller, self.list.id, req)
            .await?;
        Ok(())
    }

    /// Delete the list, consuming the view and closing the subscription.
    pub async fn delete(self) -> Result<()> {
        self.client.delete_list(&self.caller, self.list.id).await
    }
}
