//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area. Use cases load
//! through ports, apply one domain operation, and save.

use bravura_domain::DomainEvent;

use crate::infrastructure::ports::EventPublisherPort;

pub mod combat;
pub mod economy;
pub mod profile;
pub mod progression;
pub mod registration;
pub mod training;

// Re-export main types
pub use combat::CombatUseCases;
pub use economy::EconomyUseCases;
pub use profile::ProfileUseCases;
pub use progression::ProgressionUseCases;
pub use registration::RegistrationUseCases;
pub use training::TrainingUseCases;

/// Hand an event to the publisher. Delivery failures are logged, never
/// propagated: the state change they describe is already saved.
pub(crate) async fn publish_event(publisher: &dyn EventPublisherPort, event: DomainEvent) {
    let event_type = event.event_type();
    if let Err(e) = publisher.publish(event).await {
        tracing::warn!(event_type, error = %e, "Failed to publish domain event");
    }
}
