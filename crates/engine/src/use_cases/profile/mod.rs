//! Profile use cases - read models for display.

use std::sync::Arc;

mod describe;
mod error;

pub use describe::{CharacterSummary, DescribeCharacter, ResourceView};
pub use error::ProfileError;

/// Container for profile use cases.
pub struct ProfileUseCases {
    pub describe: Arc<DescribeCharacter>,
}

impl ProfileUseCases {
    pub fn new(describe: Arc<DescribeCharacter>) -> Self {
        Self { describe }
    }
}
