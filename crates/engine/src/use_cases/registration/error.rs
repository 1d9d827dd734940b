//! Registration errors.

use crate::infrastructure::ports::RepoError;
use bravura_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
