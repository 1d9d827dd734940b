//! Potion kinds and the per-character potion inventory

use serde::{Deserialize, Serialize};

/// The resource a potion restores (and the stock counter it lives in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PotionKind {
    Life,
    Mana,
    Stamina,
}

impl PotionKind {
    pub const ALL: [PotionKind; 3] = [Self::Life, Self::Mana, Self::Stamina];

    /// Share of the resource total restored by one potion.
    pub const RESTORE_FRACTION: f64 = 0.4;

    /// Storage column for the stock counter.
    pub fn column(self) -> &'static str {
        match self {
            Self::Life => "life_potions",
            Self::Mana => "mana_potions",
            Self::Stamina => "stamina_potions",
        }
    }
}

/// How many potions of each kind a character carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotionStock {
    life: u32,
    mana: u32,
    stamina: u32,
}

impl PotionStock {
    pub fn new(life: u32, mana: u32, stamina: u32) -> Self {
        Self {
            life,
            mana,
            stamina,
        }
    }

    /// One of each kind.
    pub fn starter() -> Self {
        Self::new(1, 1, 1)
    }

    pub fn count(&self, kind: PotionKind) -> u32 {
        match kind {
            PotionKind::Life => self.life,
            PotionKind::Mana => self.mana,
            PotionKind::Stamina => self.stamina,
        }
    }

    pub fn add(&mut self, kind: PotionKind, amount: u32) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(amount);
    }

    /// Take one potion out of stock. Returns false when none are left.
    pub fn take_one(&mut self, kind: PotionKind) -> bool {
        let slot = self.slot_mut(kind);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    fn slot_mut(&mut self, kind: PotionKind) -> &mut u32 {
        match kind {
            PotionKind::Life => &mut self.life,
            PotionKind::Mana => &mut self.mana,
            PotionKind::Stamina => &mut self.stamina,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_holds_one_of_each() {
        let stock = PotionStock::starter();
        assert!(PotionKind::ALL.iter().all(|k| stock.count(*k) == 1));
    }

    #[test]
    fn take_one_stops_at_zero() {
        let mut stock = PotionStock::new(1, 0, 0);
        assert!(stock.take_one(PotionKind::Life));
        assert!(!stock.take_one(PotionKind::Life));
        assert_eq!(stock.count(PotionKind::Life), 0);
    }

    #[test]
    fn add_accumulates() {
        let mut stock = PotionStock::starter();
        stock.add(PotionKind::Mana, 3);
        assert_eq!(stock.count(PotionKind::Mana), 4);
    }
}
