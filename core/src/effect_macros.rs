//! Declarative macros for building effects without spelling out the boxing.

/// Create an `Effect::Future` from an async block body
///
/// The body is moved into an `async move` block and must evaluate to
/// `Option<Action>`.
///
/// # Example
///
/// ```rust,ignore
/// use todo_sync_core::async_effect;
///
/// async_effect! {
///     let result = api.list().await;
///     Some(SyncTodoAction::Fetched { result })
/// }
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}
