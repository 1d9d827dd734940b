//! External collaborator ports: event delivery and localization.

use async_trait::async_trait;
use bravura_domain::DomainEvent;

use super::error::PublishError;

/// Receives domain events (registration hook, level-ups, training, resets).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisherPort: Send + Sync {
    async fn publish(&self, event: DomainEvent) -> Result<(), PublishError>;
}

/// Resolves localization keys such as `titles.3`.
#[cfg_attr(test, mockall::automock)]
pub trait TextLookupPort: Send + Sync {
    fn translate(&self, key: &str) -> String;
}
