//! Profile errors.

use crate::infrastructure::ports::RepoError;
use bravura_domain::{CharacterId, ProfessionId};

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),
    #[error("Profession not found: {0}")]
    ProfessionNotFound(ProfessionId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
