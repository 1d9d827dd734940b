//! Potion entity - purchasable consumables

use serde::{Deserialize, Serialize};

use crate::value_objects::PotionKind;
use crate::PotionId;

/// A potion reference row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Potion {
    pub id: PotionId,
    pub name: String,
    pub price: u32,
    pub kind: PotionKind,
}

impl Potion {
    pub fn new(id: PotionId, name: impl Into<String>, price: u32, kind: PotionKind) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            kind,
        }
    }

    /// `price * amount`, or `None` if it does not fit in a u32.
    pub fn cost_of(&self, amount: u32) -> Option<u32> {
        self.price.checked_mul(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_multiplies_price() {
        let potion = Potion::new(PotionId::new(1), "Vida", 20, PotionKind::Life);
        assert_eq!(potion.cost_of(3), Some(60));
        assert_eq!(potion.cost_of(u32::MAX), None);
    }
}
