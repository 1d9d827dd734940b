//! Strike resolution between a character and a defender
//!
//! The roll is injected as `roll(min, max)` with an inclusive range, so every
//! branch (critical, mitigation floor, mage power roll) is reachable from a
//! deterministic sequence in tests.

use crate::aggregates::Character;
use crate::entities::Creature;
use crate::events::StrikeOutcome;

/// Anything a character can hit.
pub trait Defender {
    fn armor(&self) -> i32;
    fn magic_resistance(&self) -> i32;
    fn health(&self) -> i32;
    fn take_damage(&mut self, damage: i32);

    fn stands(&self) -> bool {
        self.health() > 0
    }
}

impl Defender for Creature {
    fn armor(&self) -> i32 {
        self.armor
    }

    fn magic_resistance(&self) -> i32 {
        self.magic_resistance
    }

    fn health(&self) -> i32 {
        self.health
    }

    /// Creature health may go negative.
    fn take_damage(&mut self, damage: i32) {
        self.health = self.health.saturating_sub(damage);
    }
}

/// A character defends with melee defence against both physical and magic.
impl Defender for Character {
    fn armor(&self) -> i32 {
        self.melee_defence()
    }

    fn magic_resistance(&self) -> i32 {
        self.melee_defence()
    }

    fn health(&self) -> i32 {
        Character::health(self).current()
    }

    fn take_damage(&mut self, damage: i32) {
        let current = Character::health(self).current();
        self.set_current_health(current.saturating_sub(damage));
    }
}

/// Resolve one strike from `attacker` against `defender`.
///
/// Base is the profession bonus plus the attacker's level. The roll spans
/// `[bonus, bonus * 2]`; hitting the top doubles it. Mitigation is magic
/// resistance for mages and armor for everyone else. A fully mitigated strike
/// still chips `roll(1, 2)`.
pub fn strike<D: Defender + ?Sized>(
    attacker: &mut Character,
    defender: &mut D,
    roll: &mut impl FnMut(i32, i32) -> i32,
) -> StrikeOutcome {
    let bonus = attacker
        .bonus_damage(&mut *roll)
        .saturating_add(attacker.level() as i32);
    let ceiling = bonus.saturating_mul(2);

    let mut damage = roll(bonus, ceiling);
    let critical = damage == ceiling;
    if critical {
        damage = damage.saturating_mul(2);
    }

    let mitigation = if attacker.profession().uses_magic_mitigation() {
        defender.magic_resistance()
    } else {
        defender.armor()
    };
    damage = damage.saturating_sub(mitigation);

    let chip = damage <= 0;
    if chip {
        damage = roll(1, 2);
    }

    defender.take_damage(damage);

    StrikeOutcome {
        damage,
        critical,
        mitigation,
        chip,
        defender_standing: defender.stands(),
    }
}

/// Highest creature level offered to `character`.
pub fn eligible_creature_level(character: &Character) -> u32 {
    character.max_opponent_level()
}
