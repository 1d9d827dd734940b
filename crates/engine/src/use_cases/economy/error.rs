//! Economy errors.

use crate::infrastructure::ports::RepoError;
use bravura_domain::{CharacterId, PotionId};

#[derive(Debug, thiserror::Error)]
pub enum EconomyError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),
    #[error("Potion not found: {0}")]
    PotionNotFound(PotionId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
