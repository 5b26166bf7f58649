//! The todo API as seen by the synchronized store.
//!
//! [`TodoApi`] is the seam: the reducer environment holds an
//! `Arc<dyn TodoApi>`, production wires in [`HttpTodoApi`] and tests wire in
//! [`crate::mocks::InMemoryTodoApi`].

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{NewTodo, Todo, TodoId, TodoPatch};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;

/// Future returned by every [`TodoApi`] method
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'a>>;

/// REST-like todo collection
///
/// | Method | HTTP |
/// |---|---|
/// | `list` | `GET /todos` |
/// | `create` | `POST /todos` |
/// | `update` | `PATCH /todos/{id}` |
/// | `delete` | `DELETE /todos/{id}` |
///
/// Implementations map a 404 to [`ApiError::NotFound`] for every method; the
/// caller decides what that means.
///
/// Methods return boxed futures instead of using `async fn` so the trait
/// stays usable as `Arc<dyn TodoApi>`.
pub trait TodoApi: Send + Sync {
    /// Fetch the full collection
    fn list(&self) -> ApiFuture<'_, Vec<Todo>>;

    /// Create an item; the returned item carries the server-assigned id
    fn create(&self, todo: NewTodo) -> ApiFuture<'_, Todo>;

    /// Change the completion flag of an item
    fn update(&self, id: TodoId, patch: TodoPatch) -> ApiFuture<'_, ()>;

    /// Delete an item
    fn delete(&self, id: TodoId) -> ApiFuture<'_, ()>;
}

/// [`TodoApi`] over HTTP + JSON
///
/// No request timeout is configured.
#[derive(Clone, Debug)]
pub struct HttpTodoApi {
    client: Client,
    config: ApiConfig,
}

impl HttpTodoApi {
    /// Create a client for the API described by `config`
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create a client reusing an existing `reqwest::Client`
    #[must_use]
    pub const fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// The API configuration in use
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn fetch_list(&self) -> Result<Vec<Todo>, ApiError> {
        let url = self.config.todos_url();
        tracing::debug!(%url, "GET todos");

        let response = self.client.get(&url).send().await.map_err(transport)?;
        decode(check_status(response)?).await
    }

    async fn post_todo(&self, todo: NewTodo) -> Result<Todo, ApiError> {
        let url = self.config.todos_url();
        tracing::debug!(%url, text = %todo.text, "POST todo");

        let response = self
            .client
            .post(&url)
            .json(&todo)
            .send()
            .await
            .map_err(transport)?;
        decode(check_status(response)?).await
    }

    async fn patch_todo(&self, id: TodoId, patch: TodoPatch) -> Result<(), ApiError> {
        let url = self.config.todo_url(id);
        tracing::debug!(%url, done = patch.done, "PATCH todo");

        let response = self
            .client
            .patch(&url)
            .json(&patch)
            .send()
            .await
            .map_err(transport)?;
        check_status(response).map(drop)
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError> {
        let url = self.config.todo_url(id);
        tracing::debug!(%url, "DELETE todo");

        let response = self.client.delete(&url).send().await.map_err(transport)?;
        check_status(response).map(drop)
    }
}

impl TodoApi for HttpTodoApi {
    fn list(&self) -> ApiFuture<'_, Vec<Todo>> {
        Box::pin(self.fetch_list())
    }

    fn create(&self, todo: NewTodo) -> ApiFuture<'_, Todo> {
        Box::pin(self.post_todo(todo))
    }

    fn update(&self, id: TodoId, patch: TodoPatch) -> ApiFuture<'_, ()> {
        Box::pin(self.patch_todo(id, patch))
    }

    fn delete(&self, id: TodoId) -> ApiFuture<'_, ()> {
        Box::pin(self.delete_todo(id))
    }
}

#[allow(clippy::needless_pass_by_value)] // used as a map_err adapter
fn transport(error: reqwest::Error) -> ApiError {
    tracing::warn!(error = %error, "Request to todo API failed");
    ApiError::Transport(error.to_string())
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::debug!(status = status.as_u16(), "Todo API returned non-success status");
        Err(ApiError::from_status(status.as_u16()))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.bytes().await.map_err(transport)?;
    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
}
