//! Timed training state
//!
//! A character is either idle or committed to exactly one mastery until an
//! end timestamp. Nothing fires when the timestamp passes; callers observe
//! completion by comparing against their clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::MasteryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum TrainingState {
    #[default]
    Idle,
    #[serde(rename_all = "camelCase")]
    Training {
        mastery_id: MasteryId,
        ends_at: DateTime<Utc>,
    },
}

impl TrainingState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn mastery_id(&self) -> Option<MasteryId> {
        match self {
            Self::Idle => None,
            Self::Training { mastery_id, .. } => Some(*mastery_id),
        }
    }

    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Idle => None,
            Self::Training { ends_at, .. } => Some(*ends_at),
        }
    }

    /// Training whose end time has been reached but which has not been collected.
    pub fn is_elapsed(&self, now: DateTime<Utc>) -> bool {
        match self {
            Self::Idle => false,
            Self::Training { ends_at, .. } => *ends_at <= now,
        }
    }
}
