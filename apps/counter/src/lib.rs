//! # Counter
//!
//! The smallest store: an integer with a derived value.
//!
//! - Pure state machine, the reducer never returns an effect
//! - `doubled()` is computed from the snapshot, never stored
//!
//! ## Example
//!
//! ```no_run
//! use counter::{CounterAction, CounterReducer, CounterState};
//! use todo_sync_runtime::Store;
//!
//! # async fn example() -> Result<(), todo_sync_runtime::StoreError> {
//! let store = Store::new(CounterState::default(), CounterReducer::new(), ());
//!
//! store.send(CounterAction::Increment).await?;
//! let (count, doubled) = store.state(|s| (s.count, s.doubled())).await;
//! assert_eq!((count, doubled), (1, 2));
//! # Ok(())
//! # }
//! ```

use todo_sync_core::{effect::Effect, reducer::Reducer, SmallVec};
use todo_sync_macros::Action;

/// Counter state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    /// Current count value
    pub count: i64,
}

impl CounterState {
    /// Twice the current count
    #[must_use]
    pub const fn doubled(&self) -> i64 {
        self.count.saturating_mul(2)
    }
}

/// Counter actions
#[derive(Action, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    /// Increment the counter by 1
    #[intent]
    Increment,
    /// Reset the counter to 0
    #[intent]
    Reset,
}

/// Counter reducer
///
/// Increments saturate at `i64::MAX` instead of overflowing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CounterAction::Increment => {
                state.count = state.count.saturating_add(1);
            },
            CounterAction::Reset => {
                state.count = 0;
            },
        }

        tracing::debug!(action = action.name(), count = state.count, "Counter updated");
        SmallVec::new()
    }
}
