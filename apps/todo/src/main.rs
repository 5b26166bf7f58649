//! CLI demo for the todo stores.
//!
//! Runs a scripted session against the local store, then the same kind of
//! session against the todo API configured by `TODO_API_URL`. API failures are
//! reported, not fatal.

use std::sync::Arc;
use todo::{
    Config, HttpTodoApi, LocalTodoAction, LocalTodoReducer, LocalTodoState, SyncEnvironment,
    SyncTodoAction, SyncTodoReducer, SyncTodoState, Todo, TodoId,
};
use todo_sync_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type SyncStore = Store<SyncTodoState, SyncTodoAction, SyncEnvironment, SyncTodoReducer>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Local Todos ===\n");
    run_local().await?;

    println!("\n=== Synced Todos ({}) ===\n", config.api.todos_url());
    run_synced(&config).await?;

    println!("\n=== Demo Complete ===");
    Ok(())
}

async fn run_local() -> anyhow::Result<()> {
    let store = Store::new(LocalTodoState::new(), LocalTodoReducer::new(), ());

    for text in ["Buy milk", "Write documentation", "   ", "Deploy to production"] {
        store.send(LocalTodoAction::add(text)).await?;
    }
    store.send(LocalTodoAction::Toggle { id: TodoId::new(1) }).await?;
    store.send(LocalTodoAction::Remove { id: TodoId::new(3) }).await?;

    let state = store.state(Clone::clone).await;
    print_todos(&state.todos);
    println!("\nCompleted: {}/{}", state.done_count(), state.total_count());

    store.send(LocalTodoAction::ClearAll).await?;
    store.send(LocalTodoAction::add("Start over")).await?;
    let state = store.state(Clone::clone).await;
    println!("After clearing: {} todo(s), next id {}", state.total_count(), state.next_id);

    Ok(())
}

async fn run_synced(config: &Config) -> anyhow::Result<()> {
    let api = HttpTodoApi::new(config.api.clone());
    let store = Store::new(
        SyncTodoState::new(),
        SyncTodoReducer::new(),
        SyncEnvironment::new(Arc::new(api)),
    );

    store.send(SyncTodoAction::FetchAll).await?.wait().await;
    if report(&store).await {
        return Ok(());
    }

    store
        .send(SyncTodoAction::add("Buy milk"))
        .await?
        .wait()
        .await;
    report(&store).await;

    let added = store.state(|s| s.todos.last().map(|todo| todo.id)).await;
    if let Some(id) = added {
        store.send(SyncTodoAction::Toggle { id }).await?.wait().await;
        report(&store).await;

        store.send(SyncTodoAction::Remove { id }).await?.wait().await;
        report(&store).await;
    }

    Ok(())
}

/// Prints the current synced state; returns true if an error was surfaced.
async fn report(store: &SyncStore) -> bool {
    let state = store.state(Clone::clone).await;
    print_todos(&state.todos);
    println!(
        "{} todo(s), {} remaining",
        state.total_count(),
        state.remaining_count()
    );

    match state.error {
        Some(error) => {
            println!("error: {error}");
            true
        }
        None => false,
    }
}

fn print_todos(todos: &[Todo]) {
    for todo in todos {
        let status = if todo.done { "✓" } else { " " };
        println!("  [{status}] #{} {}", todo.id, todo.text);
    }
}
