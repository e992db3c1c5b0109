//! Item store operations over HTTP.

use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

use memora_core::identity::Caller;
use memora_core::store::{ItemStore, Result};
use memora_core::todo::{
    sort_items_by_created, validate_title, CreateItemRequest, TodoItem, UpdateItemRequest,
};

use super::{network_error, MemoraClient};

#[async_trait]
impl ItemStore for MemoraClient {
    async fn list_items(&self, caller: &Caller, list_id: Uuid) -> Result<Vec<TodoItem>> {
        let response = self
            .request(
                Method::GET,
                &format!("/api/todos?todo_list_id={list_id}"),
                caller,
            )
            .send()
            .await
            .map_err(network_error)?;
        let mut items: Vec<TodoItem> = self
            .handle_response(response, "TodoList", &list_id.to_string())
            .await?;
        // Never trust the order the rows arrived in.
        sort_items_by_created(&mut items);
        Ok(items)
    }

    async fn create_item(&self, caller: &Caller, req: CreateItemRequest) -> Result<TodoItem> {
        validate_title(&req.title)?;
        let req = CreateItemRequest {
            todo_list_id: req.todo_list_id,
            title: req.title.trim().to_string(),
        };

        let response = self
            .request(Method::POST, "/api/todos", caller)
            .json(&req)
            .send()
            .await
            .map_err(network_error)?;
        self.handle_response(response, "TodoList", &req.todo_list_id.to_string())
            .await
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
        let req = UpdateItemRequest {
            title: req.title.map(|title| title.trim().to_string()),
            completed: req.completed,
        };

        let response = self
            .request(Method::PATCH, &format!("/api/todos/{id}"), caller)
            .json(&req)
            .send()
            .await
            .map_err(network_error)?;
        self.handle_response(response, "TodoItem", &id.to_string())
            .await
    }

    async fn delete_item(&self, caller: &Caller, id: Uuid) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/api/todos/{id}"), caller)
            .send()
            .await
            .map_err(network_error)?;
        self.handle_delete_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memora_core::store::StoreError;
    use memora_core::todo::ValidationError;

    #[tokio::test]
    async fn test_create_item_validates_before_any_network_call() {
        let client = MemoraClient::new("http://127.0.0.1:1");
        let result = client
            .create_item(&Caller::Public, CreateItemRequest::new(Uuid::new_v4(), "  "))
            .await;
        assert_eq!(
            result,
            Err(StoreError::Validation(ValidationError::EmptyTitle))
        );
    }

    #[tokio::test]
    async fn test_update_item_validates_present_title_first() {
        let client = MemoraClient::new("http://127.0.0.1:1");
        let result = client
            .update_item(
                &Caller::Public,
                Uuid::new_v4(),
                UpdateItemRequest::new().with_title(""),
            )
            .await;
        assert_eq!(
            result,
            Err(StoreError::Validation(ValidationError::EmptyTitle))
        );
    }
}
