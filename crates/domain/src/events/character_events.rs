//! Character-related domain events
//!
//! These enums communicate what happened when character state was modified,
//! allowing callers to react appropriately. A "nothing happened" variant is an
//! outcome, not an error.

use chrono::{DateTime, Utc};

use crate::value_objects::{MasteryField, PotionKind};
use crate::MasteryId;

/// Outcome of attempting a level-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelUpOutcome {
    /// Already at the configured cap, nothing changed
    MaxLevelReached { level: u32 },
    /// Level increased, experience reset, pools refilled
    LeveledUp {
        new_level: u32,
        mastery_points: u32,
        total_health: i32,
    },
}

/// Outcome of adding experience
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceOutcome {
    /// Experience after clamping (0 if a level-up consumed it)
    pub experience: u32,
    /// Set when the gain filled the bar and a level-up was attempted
    pub level_up: Option<LevelUpOutcome>,
}

/// Outcome of buying potions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased {
        kind: PotionKind,
        amount: u32,
        spent: u32,
    },
    /// Not enough gold; gold and stock are untouched
    InsufficientGold { cost: Option<u32>, gold: u32 },
}

/// Outcome of drinking a potion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotionUseOutcome {
    Consumed { kind: PotionKind, restored: i32 },
    /// No potion of that kind in stock; nothing changed
    OutOfStock { kind: PotionKind },
}

/// A training session that just began
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingStarted {
    pub mastery_id: MasteryId,
    pub field: MasteryField,
    pub duration_secs: i64,
    pub ends_at: DateTime<Utc>,
}

/// A training session that was collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingCompleted {
    pub mastery_id: MasteryId,
    pub field: MasteryField,
    pub new_value: u32,
}
