//! Event publisher and text lookup adapters.

use async_trait::async_trait;
use bravura_domain::DomainEvent;

use crate::infrastructure::ports::{EventPublisherPort, PublishError, TextLookupPort};

/// Publishes domain events as structured `tracing` records.
#[derive(Debug, Default)]
pub struct TracingEventPublisher;

impl TracingEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisherPort for TracingEventPublisher {
    async fn publish(&self, event: DomainEvent) -> Result<(), PublishError> {
        let payload = serde_json::to_string(&event)
            .map_err(|e| PublishError::DeliveryFailed(e.to_string()))?;
        tracing::info!(
            event_type = event.event_type(),
            character_id = %event.character_id(),
            payload = %payload,
            "Domain event published"
        );
        Ok(())
    }
}

/// Text lookup that returns every key unchanged.
#[derive(Debug, Default)]
pub struct NoopTextLookup;

impl NoopTextLookup {
    pub fn new() -> Self {
        Self
    }
}

impl TextLookupPort for NoopTextLookup {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Collects published events in memory for assertions.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingEventPublisher {
    events: std::sync::Mutex<Vec<DomainEvent>>,
}

#[cfg(test)]
impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl EventPublisherPort for RecordingEventPublisher {
    async fn publish(&self, event: DomainEvent) -> Result<(), PublishError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}
