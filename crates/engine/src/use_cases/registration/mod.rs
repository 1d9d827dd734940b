//! Registration use cases.
//!
//! Creates baseline characters and fires the registration hook.

use std::sync::Arc;

mod error;
mod register_character;

pub use error::RegistrationError;
pub use register_character::RegisterCharacter;

/// Container for registration use cases.
pub struct RegistrationUseCases {
    pub register: Arc<RegisterCharacter>,
}

impl RegistrationUseCases {
    pub fn new(register: Arc<RegisterCharacter>) -> Self {
        Self { register }
    }
}
