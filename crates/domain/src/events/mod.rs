//! Domain Events
//!
//! Coarse-grained events representing significant state changes in the domain.
//! They are handed to the event publisher port; delivery (notifications,
//! sockets) belongs to the adapter on the other side.
//!
//! ## Aggregate Mutation Events
//!
//! The `character_events` and `combat_events` submodules contain return types
//! from aggregate mutations, communicating what happened when state was modified.

pub mod character_events;
pub mod combat_events;

pub use character_events::*;
pub use combat_events::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::MasteryField;
use crate::{CharacterId, MasteryId};

/// Domain event for significant state changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DomainEvent {
    CharacterRegistered {
        character_id: CharacterId,
        nickname: Option<String>,
        registered_at: DateTime<Utc>,
    },
    CharacterLeveledUp {
        character_id: CharacterId,
        new_level: u32,
    },
    TrainingCompleted {
        character_id: CharacterId,
        mastery_id: MasteryId,
        field: MasteryField,
        new_value: u32,
    },
    CharacterReset {
        character_id: CharacterId,
    },
}

impl DomainEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::CharacterRegistered { .. } => "character_registered",
            Self::CharacterLeveledUp { .. } => "character_leveled_up",
            Self::TrainingCompleted { .. } => "training_completed",
            Self::CharacterReset { .. } => "character_reset",
        }
    }

    pub fn character_id(&self) -> CharacterId {
        match self {
            Self::CharacterRegistered { character_id, .. }
            | Self::CharacterLeveledUp { character_id, .. }
            | Self::TrainingCompleted { character_id, .. }
            | Self::CharacterReset { character_id } => *character_id,
        }
    }
}
