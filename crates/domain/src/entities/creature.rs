//! Creature entity - PvE combat opponents

use serde::{Deserialize, Serialize};

use crate::CreatureId;

/// A creature a character can fight.
///
/// Health is unbounded below: a strike may push it negative,
/// and [`Creature::stands`] is the only "still alive" check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    pub id: CreatureId,
    pub name: String,
    pub level: u32,
    pub armor: i32,
    pub magic_resistance: i32,
    pub health: i32,
}

impl Creature {
    pub fn new(name: impl Into<String>, level: u32, health: i32) -> Self {
        Self {
            id: CreatureId::new(),
            name: name.into(),
            level,
            armor: 0,
            magic_resistance: 0,
            health,
        }
    }

    pub fn with_id(mut self, id: CreatureId) -> Self {
        self.id = id;
        self
    }

    pub fn with_armor(mut self, armor: i32) -> Self {
        self.armor = armor;
        self
    }

    pub fn with_magic_resistance(mut self, magic_resistance: i32) -> Self {
        self.magic_resistance = magic_resistance;
        self
    }

    pub fn stands(&self) -> bool {
        self.health > 0
    }
}

/// Sort creatures strongest-first, the order opponents are offered in.
pub fn order_by_level_desc(creatures: &mut [Creature]) {
    creatures.sort_by(|a, b| b.level.cmp(&a.level));
}
