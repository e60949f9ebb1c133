//! Domain event abstractions.

use uuid::Uuid;

/// Trait that all domain events implement.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Returns the event type name (used for logging and serialization routing).
    fn event_type(&self) -> &'static str;

    /// Returns the identifier of the entity this event targets.
    fn aggregate_id(&self) -> Uuid;

    /// Serializes the event payload to JSON.
    fn to_payload(&self) -> serde_json::Value;
}
