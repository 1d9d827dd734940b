//! Economy use cases.
//!
//! Potion purchases and consumption. Running short of gold or stock is an
//! outcome, not an error.

use std::sync::Arc;

mod buy_potion;
mod error;
mod use_potion;

pub use buy_potion::BuyPotion;
pub use error::EconomyError;
pub use use_potion::UsePotion;

/// Container for economy use cases.
pub struct EconomyUseCases {
    pub buy_potion: Arc<BuyPotion>,
    pub use_potion: Arc<UsePotion>,
}

impl EconomyUseCases {
    pub fn new(buy_potion: Arc<BuyPotion>, use_potion: Arc<UsePotion>) -> Self {
        Self {
            buy_potion,
            use_potion,
        }
    }
}
