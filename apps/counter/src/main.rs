//! Counter binary
//!
//! Drives the counter store and prints the derived value after each action.

use counter::{CounterAction, CounterReducer, CounterState};
use todo_sync_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), todo_sync_runtime::StoreError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counter=debug,todo_sync_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Counter ===\n");

    let store = Store::new(CounterState::default(), CounterReducer::new(), ());

    for action in [
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Reset,
        CounterAction::Increment,
    ] {
        store.send(action).await?;
        let state = store.state(|s| *s).await;
        println!(
            "{:<9} count = {:>2}, doubled = {:>2}",
            action.name(),
            state.count,
            state.doubled()
        );
    }

    Ok(())
}
