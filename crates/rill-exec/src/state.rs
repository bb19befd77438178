//! Checkpoint capability for stateful functions.

/// Snapshot/restore capability for functions that keep per-instance state.
///
/// Most scalar functions are pure and never implement this; they leave
/// [`crate::ConfiguredFunction::state`] at its `None` default and the host
/// checkpointer passes them by. Implementations use interior mutability,
/// since the host may snapshot while evaluation threads hold `&self`.
pub trait FunctionState: Send + Sync {
    /// Capture the current state.
    fn snapshot(&self) -> serde_json::Value;

    /// Replace the current state with a previously captured snapshot.
    fn restore(&self, snapshot: serde_json::Value);
}
