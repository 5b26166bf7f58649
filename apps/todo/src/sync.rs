//! Todo store kept in sync with a remote todo API.
//!
//! Every intent that talks to the server is split in two actions: the intent
//! itself (`Toggle { id }`), which marks the store as loading and returns a
//! single [`Effect::Future`] performing one API call, and the response
//! (`Toggled { id, done, result }`) that the effect feeds back once the call
//! finished. The response is where the collection actually changes.
//!
//! # Drift
//!
//! The server may lose or delete items behind the client's back. When an
//! update or a delete is answered with [`ApiError::NotFound`] the item is
//! dropped locally and no error is surfaced: the client converges on the
//! server instead of reporting a failure.
//!
//! # Errors
//!
//! Any other failure is recorded as a single human-readable message in
//! [`SyncTodoState::error`], prefixed with the operation
//! (`"fetch failed: server responded with status 500"`). The next intent
//! clears it. Nothing is retried.

use crate::api::TodoApi;
use crate::error::ApiError;
use crate::types::{normalize_text, NewTodo, Todo, TodoId, TodoPatch};
use std::sync::Arc;
use todo_sync_core::{async_effect, effect::Effect, reducer::Reducer, smallvec, SmallVec};
use todo_sync_macros::Action;

/// State of the synchronized store
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncTodoState {
    /// Items as last known from the server, in server order
    pub todos: Vec<Todo>,
    /// True between an intent and the first response to arrive
    pub loading: bool,
    /// Message describing the last failed operation
    pub error: Option<String>,
}

impl SyncTodoState {
    /// Creates an empty, idle state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the item with the given id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Returns true if an item with the given id is present
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Number of items
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.todos.len()
    }

    /// Number of completed items
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.done).count()
    }

    /// Number of items still to do
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.total_count() - self.done_count()
    }

    fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn record_failure(&mut self, operation: &str, error: &ApiError) {
        tracing::warn!(operation, error = %error, "Todo API request failed");
        self.error = Some(format!("{operation} failed: {error}"));
    }

    fn remove_local(&mut self, id: TodoId) {
        self.todos.retain(|todo| todo.id != id);
    }
}

/// Dependencies of the synchronized store
#[derive(Clone)]
pub struct SyncEnvironment {
    /// The todo API
    pub api: Arc<dyn TodoApi>,
}

impl SyncEnvironment {
    /// Creates an environment around the given API
    #[must_use]
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        Self { api }
    }
}

impl std::fmt::Debug for SyncEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncEnvironment").finish_non_exhaustive()
    }
}

/// Actions accepted by the synchronized store
#[derive(Action, Clone, Debug, PartialEq, Eq)]
pub enum SyncTodoAction {
    // ========== Intents ==========
    /// Replace the local collection with the server's
    #[intent]
    FetchAll,

    /// Create an item on the server; blank text is ignored
    #[intent]
    Add {
        /// Item text, trimmed before sending
        text: String,
    },

    /// Flip the completion flag of a known item
    #[intent]
    Toggle {
        /// Item to toggle
        id: TodoId,
    },

    /// Delete an item on the server
    #[intent]
    Remove {
        /// Item to delete
        id: TodoId,
    },

    // ========== Responses ==========
    /// Answer to [`SyncTodoAction::FetchAll`]
    #[response]
    Fetched {
        /// Server collection or failure
        result: Result<Vec<Todo>, ApiError>,
    },

    /// Answer to [`SyncTodoAction::Add`]
    #[response]
    Added {
        /// Created item (with its server-assigned id) or failure
        result: Result<Todo, ApiError>,
    },

    /// Answer to [`SyncTodoAction::Toggle`]
    #[response]
    Toggled {
        /// Item that was updated
        id: TodoId,
        /// Completion flag that was sent
        done: bool,
        /// Outcome of the update
        result: Result<(), ApiError>,
    },

    /// Answer to [`SyncTodoAction::Remove`]
    #[response]
    Removed {
        /// Item that was deleted
        id: TodoId,
        /// Outcome of the delete
        result: Result<(), ApiError>,
    },
}

impl SyncTodoAction {
    /// Shorthand for [`SyncTodoAction::Add`]
    #[must_use]
    pub fn add(text: impl Into<String>) -> Self {
        Self::Add { text: text.into() }
    }
}

/// Reducer for the synchronized store
#[derive(Clone, Copy, Debug, Default)]
pub struct SyncTodoReducer;

impl SyncTodoReducer {
    /// Creates a new `SyncTodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for SyncTodoReducer {
    type State = SyncTodoState;
    type Action = SyncTodoAction;
    type Environment = SyncEnvironment;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Intents ==========
            SyncTodoAction::FetchAll => {
                state.begin_request();
                tracing::debug!("Fetching todos");

                let api = Arc::clone(&env.api);
                smallvec![async_effect! {
                    Some(SyncTodoAction::Fetched { result: api.list().await })
                }]
            }

            SyncTodoAction::Add { text } => {
                let Some(text) = normalize_text(&text) else {
                    return SmallVec::new();
                };

                state.begin_request();
                tracing::debug!(text, "Creating todo");

                let api = Arc::clone(&env.api);
                let new_todo = NewTodo::new(text);
                smallvec![async_effect! {
                    Some(SyncTodoAction::Added { result: api.create(new_todo).await })
                }]
            }

            SyncTodoAction::Toggle { id } => {
                let Some(current) = state.get(id) else {
                    return SmallVec::new();
                };
                let done = !current.done;

                state.begin_request();
                tracing::debug!(%id, done, "Updating todo");

                let api = Arc::clone(&env.api);
                smallvec![async_effect! {
                    let result = api.update(id, TodoPatch { done }).await;
                    Some(SyncTodoAction::Toggled { id, done, result })
                }]
            }

            SyncTodoAction::Remove { id } => {
                state.begin_request();
                tracing::debug!(%id, "Deleting todo");

                let api = Arc::clone(&env.api);
                smallvec![async_effect! {
                    let result = api.delete(id).await;
                    Some(SyncTodoAction::Removed { id, result })
                }]
            }

            // ========== Responses ==========
            SyncTodoAction::Fetched { result } => {
                state.loading = false;
                match result {
                    Ok(todos) => state.todos = todos,
                    Err(error) => state.record_failure("fetch", &error),
                }
                SmallVec::new()
            }

            SyncTodoAction::Added { result } => {
                state.loading = false;
                match result {
                    Ok(todo) => {
                        if let Some(existing) = state.todos.iter_mut().find(|t| t.id == todo.id) {
                            *existing = todo;
                        } else {
                            state.todos.push(todo);
                        }
                    }
                    Err(error) => state.record_failure("add", &error),
                }
                SmallVec::new()
            }

            SyncTodoAction::Toggled { id, done, result } => {
                state.loading = false;
                match result {
                    Ok(()) => {
                        if let Some(todo) = state.todos.iter_mut().find(|t| t.id == id) {
                            todo.done = done;
                        }
                    }
                    Err(ApiError::NotFound) => {
                        tracing::info!(%id, "Todo no longer exists on server, dropping it");
                        state.remove_local(id);
                    }
                    Err(error) => state.record_failure("toggle", &error),
                }
                SmallVec::new()
            }

            SyncTodoAction::Removed { id, result } => {
                state.loading = false;
                match result {
                    Ok(()) => state.remove_local(id),
                    Err(ApiError::NotFound) => {
                        tracing::info!(%id, "Todo was already gone on server");
                        state.remove_local(id);
                    }
                    Err(error) => state.record_failure("remove", &error),
                }
                SmallVec::new()
            }
        }
    }
}
