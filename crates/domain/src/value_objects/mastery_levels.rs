//! Trainable mastery attributes and their levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Which character attribute a mastery trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryField {
    Sword,
    Strength,
    Dungeon,
    Thievery,
    Secret,
    Luck,
    Learning,
    SelfDefence,
}

impl MasteryField {
    pub const ALL: [MasteryField; 8] = [
        Self::Sword,
        Self::Strength,
        Self::Dungeon,
        Self::Thievery,
        Self::Secret,
        Self::Luck,
        Self::Learning,
        Self::SelfDefence,
    ];

    /// Storage column for this attribute.
    pub fn column(self) -> &'static str {
        match self {
            Self::Sword => "sword_level",
            Self::Strength => "strength",
            Self::Dungeon => "dungeon_level",
            Self::Thievery => "thievery_level",
            Self::Secret => "secret_level",
            Self::Luck => "luck_level",
            Self::Learning => "learning_level",
            Self::SelfDefence => "self_defence_level",
        }
    }
}

impl fmt::Display for MasteryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

impl FromStr for MasteryField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.column() == s.trim())
            .ok_or_else(|| DomainError::validation(format!("Unknown mastery field: {}", s)))
    }
}

/// Current level of every mastery attribute. Each level is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryLevels {
    sword: u32,
    strength: u32,
    dungeon: u32,
    thievery: u32,
    secret: u32,
    luck: u32,
    learning: u32,
    self_defence: u32,
}

impl MasteryLevels {
    /// Every attribute at level 1.
    pub fn baseline() -> Self {
        Self {
            sword: 1,
            strength: 1,
            dungeon: 1,
            thievery: 1,
            secret: 1,
            luck: 1,
            learning: 1,
            self_defence: 1,
        }
    }

    pub fn get(&self, field: MasteryField) -> u32 {
        match field {
            MasteryField::Sword => self.sword,
            MasteryField::Strength => self.strength,
            MasteryField::Dungeon => self.dungeon,
            MasteryField::Thievery => self.thievery,
            MasteryField::Secret => self.secret,
            MasteryField::Luck => self.luck,
            MasteryField::Learning => self.learning,
            MasteryField::SelfDefence => self.self_defence,
        }
    }

    /// Set a level, floored at 1.
    pub fn set(&mut self, field: MasteryField, value: u32) {
        let value = value.max(1);
        match field {
            MasteryField::Sword => self.sword = value,
            MasteryField::Strength => self.strength = value,
            MasteryField::Dungeon => self.dungeon = value,
            MasteryField::Thievery => self.thievery = value,
            MasteryField::Secret => self.secret = value,
            MasteryField::Luck => self.luck = value,
            MasteryField::Learning => self.learning = value,
            MasteryField::SelfDefence => self.self_defence = value,
        }
    }

    /// Raise a level by one and return the new value.
    pub fn increment(&mut self, field: MasteryField) -> u32 {
        let value = self.get(field).saturating_add(1);
        self.set(field, value);
        value
    }
}

impl Default for MasteryLevels {
    fn default() -> Self {
        Self::baseline()
    }
}
