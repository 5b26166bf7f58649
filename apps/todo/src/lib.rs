//! Todo list stores.
//!
//! Two stores over the same [`Todo`] item:
//!
//! - [`local`]: an in-memory list with locally issued ids. Every operation is
//!   synchronous and cannot fail.
//! - [`sync`]: a list mirrored from a REST todo API. Intents issue one request
//!   each and the response is folded back into the state, including
//!   convergence when the server no longer knows an item.
//!
//! Both are plain reducers hosted by [`todo_sync_runtime::Store`]; the
//! presentation layer only sends actions and reads snapshots.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo::{ApiConfig, HttpTodoApi, SyncEnvironment, SyncTodoAction, SyncTodoReducer, SyncTodoState};
//! use todo_sync_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = HttpTodoApi::new(ApiConfig::default());
//! let store = Store::new(
//!     SyncTodoState::new(),
//!     SyncTodoReducer::new(),
//!     SyncEnvironment::new(Arc::new(api)),
//! );
//!
//! let mut handle = store.send(SyncTodoAction::FetchAll).await?;
//! handle.wait().await;
//!
//! let (count, error) = store.state(|s| (s.total_count(), s.error.clone())).await;
//! println!("{count} todos, error: {error:?}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod local;
pub mod mocks;
pub mod sync;
pub mod types;

// Re-export commonly used types
pub use api::{HttpTodoApi, TodoApi};
pub use config::{ApiConfig, Config};
pub use error::ApiError;
pub use local::{LocalTodoAction, LocalTodoReducer, LocalTodoState};
pub use sync::{SyncEnvironment, SyncTodoAction, SyncTodoReducer, SyncTodoState};
pub use types::{NewTodo, Todo, TodoId, TodoPatch};
