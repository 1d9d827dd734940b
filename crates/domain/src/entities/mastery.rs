//! Mastery entity - a trainable attribute

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::value_objects::MasteryField;
use crate::MasteryId;

/// Base training time in seconds, before the per-level increment.
pub const TRAINING_BASE_SECONDS: i64 = 30;

/// Extra training seconds per current level of the trained attribute.
pub const TRAINING_SECONDS_PER_LEVEL: i64 = 15;

/// A mastery reference row: which attribute a training session raises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mastery {
    pub id: MasteryId,
    pub name: String,
    pub field: MasteryField,
}

impl Mastery {
    pub fn new(id: MasteryId, name: impl Into<String>, field: MasteryField) -> Self {
        Self {
            id,
            name: name.into(),
            field,
        }
    }

    /// `30 + 15 * current_level` seconds.
    pub fn training_duration(current_level: u32) -> Duration {
        Duration::seconds(TRAINING_BASE_SECONDS + TRAINING_SECONDS_PER_LEVEL * i64::from(current_level))
    }
}
