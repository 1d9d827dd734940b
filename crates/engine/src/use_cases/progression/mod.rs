//! Progression use cases.
//!
//! Experience, level-ups, full resets and the periodic resource tick.

use std::sync::Arc;

mod error;
mod experience;
mod regenerate;
mod reset;

pub use error::ProgressionError;
pub use experience::{GainExperience, LevelUp};
pub use regenerate::Regenerate;
pub use reset::ResetCharacter;

/// Container for progression use cases.
pub struct ProgressionUseCases {
    pub gain_experience: Arc<GainExperience>,
    pub level_up: Arc<LevelUp>,
    pub reset: Arc<ResetCharacter>,
    pub regenerate: Arc<Regenerate>,
}

impl ProgressionUseCases {
    pub fn new(
        gain_experience: Arc<GainExperience>,
        level_up: Arc<LevelUp>,
        reset: Arc<ResetCharacter>,
        regenerate: Arc<Regenerate>,
    ) -> Self {
        Self {
            gain_experience,
            level_up,
            reset,
            regenerate,
        }
    }
}
