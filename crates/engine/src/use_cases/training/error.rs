//! Training errors.

use chrono::{DateTime, Utc};

use crate::infrastructure::ports::RepoError;
use bravura_domain::{CharacterId, DomainError, MasteryId};

#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),
    #[error("Mastery not found: {0}")]
    MasteryNotFound(MasteryId),
    #[error("Already training mastery {0}")]
    AlreadyTraining(MasteryId),
    #[error("Character is not training")]
    NotTraining,
    #[error("Training ends at {ends_at}")]
    TrainingNotFinished { ends_at: DateTime<Utc> },
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
