/// A request to change state (command abstraction).
///
/// Commands represent **intent**. They are transient (never stored) and are
/// either rejected (validation, conflict, not found) or accepted, in which case
/// the handler saves the new state and publishes domain events describing it.
///
/// ## Command vs Event
///
/// - **Command**: intent to do something (e.g. "rename user 42 to Bob")
/// - **Event**: fact that something happened (e.g. `UserUpdated { previous_name, new_name }`)
///
/// Commands must own all of their data (`'static`) and be `Send + Sync` so they
/// can cross the HTTP boundary into async handlers.
pub trait Command: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable command name, used in logs.
    fn command_name(&self) -> &'static str;
}

/// A request to read state. Handling a query never mutates anything.
pub trait Query: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable query name, used in logs.
    fn query_name(&self) -> &'static str;
}
