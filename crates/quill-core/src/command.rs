//! Commands: requests to change the post collection.

use uuid::Uuid;

/// A request to mutate state, handled by exactly one command handler.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable name of the command, recorded on every log line it produces.
    fn command_type(&self) -> &'static str;

    /// Identifier shared by the request, the command, and the event it yields.
    fn correlation_id(&self) -> Uuid;
}
