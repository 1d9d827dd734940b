//! Progression errors.

use crate::infrastructure::ports::RepoError;
use bravura_domain::CharacterId;

#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
