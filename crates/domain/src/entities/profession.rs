//! Profession entity - the class a character fights and levels as
//!
//! Professions are seeded reference rows. The row id picks a
//! [`ProfessionKind`], which carries every profession-specific rule, so the
//! rest of the domain never branches on raw ids.

use serde::{Deserialize, Serialize};

use crate::aggregates::Character;
use crate::value_objects::MasteryField;
use crate::ProfessionId;

/// Mana a mage spends to empower a strike.
pub const MAGE_MANA_COST: i32 = 5;

/// A profession reference row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profession {
    pub id: ProfessionId,
    pub name: String,
}

impl Profession {
    pub fn new(id: ProfessionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn kind(&self) -> ProfessionKind {
        ProfessionKind::from_id(self.id)
    }

    /// Apprentices are shown bare; every other profession carries its title.
    pub fn display_name(&self, title: &str) -> String {
        match self.kind() {
            ProfessionKind::Apprentice => self.name.clone(),
            _ => format!("{} {}", self.name, title),
        }
    }
}

/// The closed set of profession rule variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfessionKind {
    Apprentice,
    Knight,
    Mage,
    Hunter,
}

impl ProfessionKind {
    pub const ALL: [ProfessionKind; 4] = [Self::Apprentice, Self::Knight, Self::Mage, Self::Hunter];

    /// Unknown ids behave as apprentices.
    pub fn from_id(id: ProfessionId) -> Self {
        match id.value() {
            2 => Self::Knight,
            3 => Self::Mage,
            4 => Self::Hunter,
            _ => Self::Apprentice,
        }
    }

    pub fn id(self) -> ProfessionId {
        match self {
            Self::Apprentice => ProfessionId::new(1),
            Self::Knight => ProfessionId::new(2),
            Self::Mage => ProfessionId::new(3),
            Self::Hunter => ProfessionId::new(4),
        }
    }

    /// Health added per level on level-up.
    pub fn health_per_level(self) -> i32 {
        match self {
            Self::Knight => 30,
            Self::Mage => 17,
            Self::Hunter => 20,
            Self::Apprentice => 0,
        }
    }

    /// Mages are mitigated by magic resistance; everyone else by armor.
    pub fn uses_magic_mitigation(self) -> bool {
        matches!(self, Self::Mage)
    }

    /// Profession bonus added to a strike, before the level bonus.
    ///
    /// A mage with at least 5 mana burns it for an extra `roll(1, secret_level)`.
    /// That spend happens on every call, including previews.
    pub fn bonus_damage(
        self,
        character: &mut Character,
        roll: &mut impl FnMut(i32, i32) -> i32,
    ) -> i32 {
        match self {
            Self::Knight => {
                character.mastery(MasteryField::Strength) as i32
                    + character.mastery(MasteryField::Sword) as i32
            }
            Self::Mage => {
                let secret = character.mastery(MasteryField::Secret) as i32;
                let mana = character.mana().current();
                if mana >= MAGE_MANA_COST {
                    character.set_current_mana(mana - MAGE_MANA_COST);
                    secret + roll(1, secret)
                } else {
                    secret
                }
            }
            Self::Hunter => character.mastery(MasteryField::Thievery) as i32,
            Self::Apprentice => character.mastery(MasteryField::Strength) as i32,
        }
    }
}
