//! Counter hosted by the runtime `Store`.

use counter::{CounterAction, CounterReducer, CounterState};
use todo_sync_runtime::Store;

fn new_store(initial: CounterState) -> Store<CounterState, CounterAction, (), CounterReducer> {
    Store::new(initial, CounterReducer::new(), ())
}

#[tokio::test]
async fn test_counter_with_store() {
    let store = new_store(CounterState::default());

    assert_eq!(store.state(|s| s.count).await, 0);

    let _ = store.send(CounterAction::Increment).await;
    let _ = store.send(CounterAction::Increment).await;
    assert_eq!(store.state(|s| (s.count, s.doubled())).await, (2, 4));

    let _ = store.send(CounterAction::Reset).await;
    assert_eq!(store.state(|s| (s.count, s.doubled())).await, (0, 0));
}

#[tokio::test]
async fn test_concurrent_increments() {
    let store = new_store(CounterState::default());

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move {
                let _ = store.send(CounterAction::Increment).await;
            })
        })
        .collect();

    #[allow(clippy::panic)]
    for handle in handles {
        if let Err(e) = handle.await {
            panic!("concurrent increment task panicked: {e}");
        }
    }

    assert_eq!(store.state(|s| s.count).await, 10);
}

#[tokio::test]
async fn test_state_isolation() {
    let store1 = new_store(CounterState::default());
    let store2 = new_store(CounterState::default());

    let _ = store1.send(CounterAction::Increment).await;
    let _ = store1.send(CounterAction::Increment).await;
    let _ = store2.send(CounterAction::Increment).await;

    assert_eq!(store1.state(|s| s.count).await, 2);
    assert_eq!(store2.state(|s| s.count).await, 1);
}

#[tokio::test]
async fn test_change_notifications() {
    let store = new_store(CounterState { count: i64::MAX - 1 });
    let mut changes = store.subscribe_changes();

    let _ = store.send(CounterAction::Increment).await;
    assert!(changes.has_changed().unwrap_or(false));
    let _ = changes.borrow_and_update();

    let _ = store.send(CounterAction::Increment).await;
    assert!(changes.has_changed().unwrap_or(false));
    assert_eq!(store.state(|s| s.count).await, i64::MAX);
}
