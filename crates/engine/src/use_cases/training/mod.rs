//! Training use cases.
//!
//! A session is started, observed on read, and collected once its end time
//! has passed. Nothing is scheduled: completion is noticed when asked.

use std::sync::Arc;

mod error;
mod finish_training;
mod start_training;
mod status;

pub use error::TrainingError;
pub use finish_training::FinishTraining;
pub use start_training::StartTraining;
pub use status::{TrainingStatus, TrainingStatusView};

/// Container for training use cases.
pub struct TrainingUseCases {
    pub start: Arc<StartTraining>,
    pub finish: Arc<FinishTraining>,
    pub status: Arc<TrainingStatus>,
}

impl TrainingUseCases {
    pub fn new(
        start: Arc<StartTraining>,
        finish: Arc<FinishTraining>,
        status: Arc<TrainingStatus>,
    ) -> Self {
        Self {
            start,
            finish,
            status,
        }
    }
}
