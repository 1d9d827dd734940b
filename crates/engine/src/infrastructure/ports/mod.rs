//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Storage (in-memory today, any database tomorrow)
//! - Event delivery (registration hook)
//! - Localization (title keys)
//! - Clock/Random (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use error::{PublishError, RepoError};
pub use repos::{CharacterRepo, CreatureRepo, MasteryRepo, PotionRepo, ProfessionRepo};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{EventPublisherPort, TextLookupPort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{
    MockCharacterRepo, MockCreatureRepo, MockMasteryRepo, MockPotionRepo, MockProfessionRepo,
};

#[cfg(test)]
pub use external::{MockEventPublisherPort, MockTextLookupPort};

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};
