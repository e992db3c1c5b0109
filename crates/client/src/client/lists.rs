//! List store operations over HTTP.

use async_trait::async_trait;
use reqwest::Method;
use uuid::Uuid;

use memora_core::identity::Caller;
use memora_core::store::{ListStore, Result};
use memora_core::todo::{
    merge_visible_lists, sort_lists_by_created, validate_title, CreateListRequest, TodoList,
    UpdateListRequest,
};

use super::{network_error, MemoraClient};

impl MemoraClient {
    /// Fetch one visibility scope of lists.
    async fn fetch_lists(&self, caller: &Caller, scope: &str) -> Result<Vec<TodoList>> {
        let response = self
            .request(
                Method::GET,
                &format!("/api/todo_lists?scope={scope}"),
                caller,
            )
            .send()
            .await
            .map_err(network_error)?;
        self.handle_response(response, "TodoList", scope).await
    }
}

#[async_trait]
impl ListStore for MemoraClient {
    async fn list_lists(&self, caller: &Caller) -> Result<Vec<TodoList>> {
        if caller.is_public() {
            let mut lists = self.fetch_lists(caller, "public").await?;
            sort_lists_by_created(&mut lists);
            return Ok(lists);
        }

        // Own and public scopes fetched concurrently, merged client-side.
        let (own, public) = tokio::try_join!(
            self.fetch_lists(caller, "mine"),
            self.fetch_lists(caller, "public"),
        )?;
        Ok(merge_visible_lists(own, public))
    }

    async fn get_list(&self, caller: &Caller, id: Uuid) -> Result<TodoList> {
        let response = self
            .request(Method::GET, &format!("/api/todo_lists/{id}"), caller)
            .send()
            .await
            .map_err(network_error)?;
        self.handle_response(response, "TodoList", &id.to_string())
            .await
    }

    async fn create_list(&self, caller: &Caller, req: CreateListRequest) -> Result<TodoList> {
        validate_title(&req.title)?;
        let req = CreateListRequest {
            title: req.title.trim().to_string(),
            is_public: req.is_public,
        };

        let response = self
            .request(Method::POST, "/api/todo_lists", caller)
            .json(&req)
            .send()
            .await
            .map_err(network_error)?;
        self.handle_response(response, "TodoList", &req.title).await
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
        let req = UpdateListRequest {
            title: req.title.map(|title| title.trim().to_string()),
            is_public: req.is_public,
        };

        let response = self
            .request(Method::PATCH, &format!("/api/todo_lists/{id}"), caller)
            .json(&req)
            .send()
            .await
            .map_err(network_error)?;
        self.handle_response(response, "TodoList", &id.to_string())
            .await
    }

    async fn delete_list(&self, caller: &Caller, id: Uuid) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/api/todo_lists/{id}"), caller)
            .send()
            .await
            .map_err(network_error)?;
        self.handle_delete_response(response).await
    }
}
