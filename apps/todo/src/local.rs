//! Local-only todo store.
//!
//! Everything happens in memory and synchronously: the reducer never returns
//! an effect, so a `send` has been fully applied by the time it returns.

use crate::types::{normalize_text, Todo, TodoId};
use todo_sync_core::{effect::Effect, reducer::Reducer, SmallVec};
use todo_sync_macros::Action;

/// State of the local store
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalTodoState {
    /// Items in insertion order
    pub todos: Vec<Todo>,
    /// Id handed to the next added item; only ever grows
    pub next_id: u64,
}

impl LocalTodoState {
    /// Creates an empty store whose first item gets id 1
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
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
}

impl Default for LocalTodoState {
    fn default() -> Self {
        Self::new()
    }
}

/// Actions accepted by the local store
#[derive(Action, Clone, Debug, PartialEq, Eq)]
pub enum LocalTodoAction {
    /// Append a new item; blank text is ignored
    #[intent]
    Add {
        /// Item text, trimmed before use
        text: String,
    },

    /// Flip the completion flag of an item
    #[intent]
    Toggle {
        /// Item to toggle
        id: TodoId,
    },

    /// Delete an item
    #[intent]
    Remove {
        /// Item to delete
        id: TodoId,
    },

    /// Delete every item
    #[intent]
    ClearAll,
}

impl LocalTodoAction {
    /// Shorthand for [`LocalTodoAction::Add`]
    #[must_use]
    pub fn add(text: impl Into<String>) -> Self {
        Self::Add { text: text.into() }
    }
}

/// Reducer for the local store
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTodoReducer;

impl LocalTodoReducer {
    /// Creates a new `LocalTodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for LocalTodoReducer {
    type State = LocalTodoState;
    type Action = LocalTodoAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        tracing::debug!(action = action.name(), "Reducing local todo action");

        match action {
            LocalTodoAction::Add { text } => {
                let Some(text) = normalize_text(&text) else {
                    return SmallVec::new();
                };

                let Some(next_id) = state.next_id.checked_add(1) else {
                    tracing::warn!(next_id = state.next_id, "Todo ids exhausted, add ignored");
                    return SmallVec::new();
                };

                let id = TodoId::new(state.next_id);
                state.next_id = next_id;
                state.todos.push(Todo::new(id, text));
            }

            LocalTodoAction::Toggle { id } => {
                if let Some(todo) = state.todos.iter_mut().find(|todo| todo.id == id) {
                    todo.toggle();
                }
            }

            LocalTodoAction::Remove { id } => {
                state.todos.retain(|todo| todo.id != id);
            }

            // next_id keeps counting so ids are never reused
            LocalTodoAction::ClearAll => state.todos.clear(),
        }

        SmallVec::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use todo_sync_testing::{assertions, ReducerTest};

    fn state_with(texts: &[&str]) -> LocalTodoState {
        let mut state = LocalTodoState::new();
        for text in texts {
            let _ = LocalTodoReducer.reduce(&mut state, LocalTodoAction::add(*text), &());
        }
        state
    }

    #[test]
    fn add_to_empty_store() {
        ReducerTest::new(LocalTodoReducer::new())
            .with_env(())
            .given_state(LocalTodoState::new())
            .when_action(LocalTodoAction::add("buy milk"))
            .then_state(|state| {
                assert_eq!(state.todos, vec![Todo::new(TodoId::new(1), "buy milk")]);
                assert_eq!(state.next_id, 2);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn add_trims_text() {
        ReducerTest::new(LocalTodoReducer::new())
            .with_env(())
            .given_state(LocalTodoState::new())
            .when_action(LocalTodoAction::add("  walk dog \n"))
            .then_state(|state| assert_eq!(state.todos[0].text, "walk dog"))
            .run();
    }

    #[test]
    fn add_blank_is_ignored() {
        ReducerTest::new(LocalTodoReducer::new())
            .with_env(())
            .given_state(state_with(&["a"]))
            .when_action(LocalTodoAction::add("   "))
            .then_state(|state| {
                assert_eq!(state.total_count(), 1);
                assert_eq!(state.next_id, 2);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn add_with_exhausted_ids_is_noop() {
        let mut before = state_with(&["a"]);
        before.next_id = u64::MAX;
        let expected = before.clone();

        ReducerTest::new(LocalTodoReducer::new())
            .with_env(())
            .given_state(before)
            .when_action(LocalTodoAction::add("one too many"))
            .then_state(move |state| assert_eq!(*state, expected))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn add_takes_last_id_below_max() {
        let mut before = LocalTodoState::new();
        before.next_id = u64::MAX - 1;

        ReducerTest::new(LocalTodoReducer::new())
            .with_env(())
            .given_state(before)
            .when_action(LocalTodoAction::add("last"))
            .then_state(|state| {
                assert_eq!(state.todos, vec![Todo::new(TodoId::new(u64::MAX - 1), "last")]);
                assert_eq!(state.next_id, u64::MAX);
            })
            .run();
    }

    #[test]
    fn toggle_flips_only_target() {
        ReducerTest::new(LocalTodoReducer::new())
            .with_env(())
            .given_state(state_with(&["a", "b"]))
            .when_action(LocalTodoAction::Toggle { id: TodoId::new(2) })
            .then_state(|state| {
                assert!(!state.get(TodoId::new(1)).unwrap().done);
                assert!(state.get(TodoId::new(2)).unwrap().done);
                assert_eq!(state.done_count(), 1);
                assert_eq!(state.remaining_count(), 1);
            })
            .run();
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let before = state_with(&["a"]);
        let expected = before.clone();

        ReducerTest::new(LocalTodoReducer::new())
            .with_env(())
            .given_state(before)
            .when_action(LocalTodoAction::Toggle { id: TodoId::new(99) })
            .then_state(move |state| assert_eq!(*state, expected))
            .run();
    }

    #[test]
    fn remove_keeps_order_of_others() {
        ReducerTest::new(LocalTodoReducer::new())
            .with_env(())
            .given_state(state_with(&["a", "b", "c"]))
            .when_action(LocalTodoAction::Remove { id: TodoId::new(2) })
            .then_state(|state| {
                let texts: Vec<_> = state.todos.iter().map(|t| t.text.as_str()).collect();
                assert_eq!(texts, ["a", "c"]);
                assert!(!state.contains(TodoId::new(2)));
            })
            .run();
    }

    #[test]
    fn clear_all_keeps_counter() {
        let mut state = state_with(&["a", "b"]);

        let _ = LocalTodoReducer.reduce(&mut state, LocalTodoAction::ClearAll, &());
        assert!(state.todos.is_empty());

        let _ = LocalTodoReducer.reduce(&mut state, LocalTodoAction::add("c"), &());
        assert_eq!(state.todos[0].id, TodoId::new(3));
    }

    #[test]
    fn actions_are_intents() {
        assert!(LocalTodoAction::ClearAll.is_intent());
        assert!(!LocalTodoAction::add("x").is_response());
        assert_eq!(LocalTodoAction::Toggle { id: TodoId::new(1) }.name(), "Toggle");
    }

    fn arb_state() -> impl Strategy<Value = LocalTodoState> {
        prop::collection::vec(("[a-z]{1,8}", any::<bool>()), 0..8).prop_map(|items| {
            let mut state = LocalTodoState::new();
            for (text, done) in items {
                let id = TodoId::new(state.next_id);
                state.next_id += 1;
                state.todos.push(Todo { id, text, done });
            }
            state
        })
    }

    proptest! {
        #[test]
        fn add_grows_by_one_with_fresh_id(mut state in arb_state(), text in "[a-z ]{0,5}[a-z][a-z ]{0,5}") {
            let before = state.total_count();
            let issued = state.next_id;

            let _ = LocalTodoReducer.reduce(&mut state, LocalTodoAction::add(text.clone()), &());

            prop_assert_eq!(state.total_count(), before + 1);
            let added = state.todos.last().unwrap();
            prop_assert_eq!(added.id, TodoId::new(issued));
            prop_assert_eq!(added.text.as_str(), text.trim());
            prop_assert!(!added.done);
        }

        #[test]
        fn blank_add_is_noop(mut state in arb_state(), text in "[ \t\n]{0,6}") {
            let before = state.clone();
            let _ = LocalTodoReducer.reduce(&mut state, LocalTodoAction::add(text), &());
            prop_assert_eq!(state, before);
        }

        #[test]
        fn double_toggle_is_identity(mut state in arb_state(), raw_id in 0u64..12) {
            let before = state.clone();
            let id = TodoId::new(raw_id);

            let _ = LocalTodoReducer.reduce(&mut state, LocalTodoAction::Toggle { id }, &());
            let _ = LocalTodoReducer.reduce(&mut state, LocalTodoAction::Toggle { id }, &());

            prop_assert_eq!(state, before);
        }

        #[test]
        fn remove_unknown_is_noop(mut state in arb_state(), offset in 0u64..5) {
            let before = state.clone();
            let id = TodoId::new(state.next_id + offset);

            let _ = LocalTodoReducer.reduce(&mut state, LocalTodoAction::Remove { id }, &());

            prop_assert_eq!(state, before);
        }

        #[test]
        fn ids_stay_unique(texts in prop::collection::vec("[a-z]{1,4}", 0..10), clear_at in 0usize..10) {
            let mut state = LocalTodoState::new();
            for (i, text) in texts.into_iter().enumerate() {
                if i == clear_at {
                    let _ = LocalTodoReducer.reduce(&mut state, LocalTodoAction::ClearAll, &());
                }
                let _ = LocalTodoReducer.reduce(&mut state, LocalTodoAction::add(text), &());
            }

            let mut ids: Vec<_> = state.todos.iter().map(|t| t.id).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), state.total_count());
        }
    }
}
