//! # todo-sync core
//!
//! Reducer and effect abstractions shared by the todo-sync stores.
//!
//! Every store in this workspace is built from the same three pieces:
//!
//! - **State**: plain owned data the presentation layer reads from
//! - **Action**: every input the store accepts (user intents and server responses)
//! - **Reducer**: `(State, Action, Environment) → (State, Effects)`
//!
//! Reducers never perform I/O themselves. Network calls are described as
//! [`effect::Effect`] values and executed by the runtime, which feeds the
//! resulting action back into the reducer.
//!
//! ## Example
//!
//! ```
//! use todo_sync_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Default)]
//! struct Tally {
//!     count: u32,
//! }
//!
//! enum TallyAction {
//!     Bump,
//! }
//!
//! struct TallyReducer;
//!
//! impl Reducer for TallyReducer {
//!     type State = Tally;
//!     type Action = TallyAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Tally,
//!         action: TallyAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<TallyAction>; 4]> {
//!         match action {
//!             TallyAction::Bump => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = Tally::default();
//! TallyReducer.reduce(&mut state, TallyAction::Bump, &());
//! assert_eq!(state.count, 1);
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Declarative helpers for building effects
pub mod effect_macros;

/// Reducer module - the trait every store's business logic implements
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// Business logic of a store
    ///
    /// A reducer validates an action, mutates state in place and returns
    /// descriptions of the side effects the runtime should perform. It must be
    /// deterministic: the same state and action always produce the same
    /// mutation and the same effects.
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The inputs it accepts
    /// - `Environment`: Injected dependencies (API clients, etc.)
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Most reducers return at most one effect, which is why the result is a
        /// `SmallVec` with inline capacity instead of a heap-allocated `Vec`.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side effect descriptions
///
/// Effects are values, not execution. The runtime decides when and where to
/// run them.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Boxed future produced by [`Effect::Future`]
    pub type EffectFuture<Action> = Pin<Box<dyn Future<Output = Option<Action>> + Send>>;

    /// Effect type - describes a side effect to be executed
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation, typically one API round trip
        ///
        /// If the future resolves to `Some(action)`, the action is fed back into
        /// the reducer.
        Future(EffectFuture<Action>),
    }

    // Future is not Debug, so this is written by hand
    impl<Action> std::fmt::Debug for Effect<Action> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Returns true for [`Effect::None`]
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;

    enum Ping {
        Pong,
    }

    #[test]
    fn debug_hides_future_body() {
        let effect: Effect<Ping> = Effect::Future(Box::pin(async { Some(Ping::Pong) }));
        assert_eq!(format!("{effect:?}"), "Effect::Future(<future>)");
        assert!(!effect.is_none());
        assert!(Effect::<Ping>::None.is_none());
    }
}
