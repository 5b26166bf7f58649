//! Tests for #[derive(Action)] macro

use todo_sync_macros::Action;

#[derive(Action, Clone, Debug, PartialEq)]
enum ListAction {
    #[intent]
    Refresh,

    #[intent]
    Rename(u64, String),

    #[intent]
    Archive { id: u64 },

    #[response]
    Refreshed { items: Vec<String> },

    #[response]
    Renamed(Result<(), String>),

    Tick,
}

#[test]
fn test_is_intent() {
    let action = ListAction::Archive { id: 3 };
    assert!(action.is_intent());
    assert!(!action.is_response());
}

#[test]
fn test_is_response() {
    let action = ListAction::Refreshed { items: vec!["a".to_string()] };
    assert!(!action.is_intent());
    assert!(action.is_response());
}

#[test]
fn test_unmarked_variant_is_neither() {
    let action = ListAction::Tick;
    assert!(!action.is_intent());
    assert!(!action.is_response());
}

#[test]
fn test_names_cover_every_field_shape() {
    let cases = vec![
        (ListAction::Refresh, "Refresh"),
        (ListAction::Rename(1, "x".to_string()), "Rename"),
        (ListAction::Archive { id: 1 }, "Archive"),
        (ListAction::Refreshed { items: Vec::new() }, "Refreshed"),
        (ListAction::Renamed(Ok(())), "Renamed"),
        (ListAction::Tick, "Tick"),
    ];

    for (action, expected) in cases {
        assert_eq!(action.name(), expected);
    }
}

