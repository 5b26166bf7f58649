//! # todo-sync testing
//!
//! Testing utilities for reducers and stores:
//!
//! - [`ReducerTest`]: Given-When-Then harness for a single reduction
//! - [`assertions`]: checks over the effects a reducer returned
//! - [`effects`]: runs returned effects without a `Store`, collecting the
//!   actions they produce
//! - [`init_tracing`]: test-friendly `tracing` subscriber
//!
//! ## Example
//!
//! ```ignore
//! use todo_sync_testing::{effects::collect_actions, ReducerTest};
//!
//! let mut state = SyncTodoState::default();
//! let effects = SyncTodoReducer::new().reduce(&mut state, SyncTodoAction::FetchAll, &env);
//! let responses = collect_actions(effects).await;
//! ```


pub use reducer_test::{assertions, ReducerTest};

/// Running effects outside of a store
pub mod effects {
    use futures::future::join_all;
    use todo_sync_core::effect::Effect;

    /// Execute effects and collect every action they produce
    ///
    /// `Future` effects are awaited together and their actions returned in
    /// input order. Produced actions are NOT reduced; feed them to the
    /// reducer yourself to continue the scenario.
    pub async fn collect_actions<A, I>(effects: I) -> Vec<A>
    where
        A: Send + 'static,
        I: IntoIterator<Item = Effect<A>>,
    {
        let futures = effects.into_iter().filter_map(|effect| match effect {
            Effect::None => None,
            Effect::Future(fut) => Some(fut),
        });

        join_all(futures).await.into_iter().flatten().collect()
    }
}

/// Install a `tracing` subscriber that writes through the test harness
///
/// Honors `RUST_LOG`; safe to call from every test, only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
