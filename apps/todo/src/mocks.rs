//! In-memory todo API for tests and offline demos.

use crate::api::{ApiFuture, TodoApi};
use crate::error::ApiError;
use crate::types::{NewTodo, Todo, TodoId, TodoPatch};
use std::sync::{Arc, Mutex, MutexGuard};

/// A call received by [`InMemoryTodoApi`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    /// `GET /todos`
    List,
    /// `POST /todos`
    Create(NewTodo),
    /// `PATCH /todos/{id}`
    Update(TodoId, TodoPatch),
    /// `DELETE /todos/{id}`
    Delete(TodoId),
}

#[derive(Debug, Default)]
struct Server {
    todos: Vec<Todo>,
    last_id: u64,
    failures: Vec<ApiError>,
    calls: Vec<ApiCall>,
}

impl Server {
    /// Records the call and pops a scripted failure, if any
    fn receive(&mut self, call: ApiCall) -> Result<(), ApiError> {
        self.calls.push(call);
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(self.failures.remove(0))
        }
    }
}

/// Mock todo API
///
/// Behaves like a well-behaved `json-server`: ids are assigned on creation,
/// unknown ids answer [`ApiError::NotFound`]. Failures can be scripted with
/// [`fail_next`](Self::fail_next) and the server collection can be edited
/// behind the client's back to produce drift.
///
/// **WARNING**: Do NOT use in production. This is for testing only!
#[derive(Clone, Debug, Default)]
pub struct InMemoryTodoApi {
    server: Arc<Mutex<Server>>,
}

impl InMemoryTodoApi {
    /// Create an empty API
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an API already holding `todos`
    #[must_use]
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let api = Self::new();
        api.reset(todos);
        api
    }

    /// Replace the server collection without the client knowing
    pub fn reset(&self, todos: Vec<Todo>) {
        let mut server = self.server();
        server.last_id = server
            .last_id
            .max(todos.iter().map(|todo| todo.id.get()).max().unwrap_or(0));
        server.todos = todos;
    }

    /// Delete an item on the server without the client knowing
    pub fn forget(&self, id: TodoId) {
        self.server().todos.retain(|todo| todo.id != id);
    }

    /// Make the next call fail with `error`; queued failures are used in order
    pub fn fail_next(&self, error: ApiError) {
        self.server().failures.push(error);
    }

    /// Current server collection
    #[must_use]
    pub fn todos(&self) -> Vec<Todo> {
        self.server().todos.clone()
    }

    /// Every call received so far
    #[must_use]
    pub fn calls(&self) -> Vec<ApiCall> {
        self.server().calls.clone()
    }

    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    fn server(&self) -> MutexGuard<'_, Server> {
        self.server.lock().unwrap()
    }

    fn handle_list(&self) -> Result<Vec<Todo>, ApiError> {
        let mut server = self.server();
        server.receive(ApiCall::List)?;
        Ok(server.todos.clone())
    }

    fn handle_create(&self, new_todo: NewTodo) -> Result<Todo, ApiError> {
        let mut server = self.server();
        server.receive(ApiCall::Create(new_todo.clone()))?;

        server.last_id += 1;
        let todo = Todo {
            id: TodoId::new(server.last_id),
            text: new_todo.text,
            done: new_todo.done,
        };
        server.todos.push(todo.clone());
        Ok(todo)
    }

    fn handle_update(&self, id: TodoId, patch: TodoPatch) -> Result<(), ApiError> {
        let mut server = self.server();
        server.receive(ApiCall::Update(id, patch))?;

        let todo = server
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(ApiError::NotFound)?;
        todo.done = patch.done;
        Ok(())
    }

    fn handle_delete(&self, id: TodoId) -> Result<(), ApiError> {
        let mut server = self.server();
        server.receive(ApiCall::Delete(id))?;

        let before = server.todos.len();
        server.todos.retain(|todo| todo.id != id);
        if server.todos.len() == before {
            Err(ApiError::NotFound)
        } else {
            Ok(())
        }
    }
}

impl TodoApi for InMemoryTodoApi {
    fn list(&self) -> ApiFuture<'_, Vec<Todo>> {
        let result = self.handle_list();
        Box::pin(async move { result })
    }

    fn create(&self, todo: NewTodo) -> ApiFuture<'_, Todo> {
        let result = self.handle_create(todo);
        Box::pin(async move { result })
    }

    fn update(&self, id: TodoId, patch: TodoPatch) -> ApiFuture<'_, ()> {
        let result = self.handle_update(id, patch);
        Box::pin(async move { result })
    }

    fn delete(&self, id: TodoId) -> ApiFuture<'_, ()> {
        let result = self.handle_delete(id);
        Box::pin(async move { result })
    }
}
