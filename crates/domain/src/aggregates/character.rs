//! Character aggregate - a player's avatar and the rules it obeys
//!
//! # Rustic DDD Design
//!
//! This aggregate follows Rustic DDD principles:
//! - **Private fields**: All fields are encapsulated
//! - **Clamping setters**: resources and experience are bounded on every write
//! - **Explicit inputs**: time (`now`) and randomness (`roll`) are arguments
//! - **Outcomes from mutations**: no-op paths return an outcome variant, not an error

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Mastery, Potion, ProfessionKind};
use crate::error::DomainError;
use crate::events::{
    ExperienceOutcome, LevelUpOutcome, PotionUseOutcome, PurchaseOutcome, TrainingCompleted,
    TrainingStarted,
};
use crate::value_objects::{
    MasteryField, MasteryLevels, Nickname, PotionKind, PotionStock, ResourcePool, TitleTier,
    TrainingState, ANONYMOUS_NICKNAME,
};
use crate::{CharacterId, MasteryId, ProfessionId};

/// Experience needed per level: the bar for level `n` is `n * 100`.
pub const EXPERIENCE_PER_LEVEL: u32 = 100;

/// Health every profession starts from on level-up.
pub const BASE_HEALTH: i32 = 150;

/// Total mana after any level-up, independent of level.
pub const LEVEL_UP_MANA: i32 = 115;

/// Level-ups above this level no longer restore stamina.
pub const STAMINA_RESTORE_LEVEL_LIMIT: u32 = 20;

/// Players within this many levels of each other may duel.
pub const WORTHY_LEVEL_RANGE: u32 = 10;

pub const STARTING_GOLD: u32 = 100;
pub const STARTING_HEALTH: i32 = 150;
pub const STARTING_MANA: i32 = 100;
pub const STARTING_STAMINA: i32 = 100;

const CREATURE_FIGHT_STAMINA: i32 = 5;
const DUEL_STAMINA: i32 = 10;
const REST_STAMINA: i32 = 5;

/// A player character.
///
/// # Invariants
///
/// - `0 <= current <= total` for health, mana and stamina (enforced by `ResourcePool`)
/// - `0 <= experience <= level * 100`
/// - `level >= 1`, every mastery level `>= 1`
/// - training is either idle or bound to one mastery with an end time (`TrainingState`)
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use bravura_domain::Character;
///
/// let mut character = Character::new(None, Utc::now());
/// character.set_current_health(9_999);
///
/// assert_eq!(character.health().current(), 150);
/// assert_eq!(character.display_name(), "Andarilho Misterioso");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    // Identity
    id: CharacterId,
    nickname: Option<Nickname>,
    profession_id: ProfessionId,

    // Progression
    level: u32,
    experience: u32,
    mastery_points: u32,

    // Economy
    gold: u32,
    potions: PotionStock,

    // Resources
    health: ResourcePool,
    mana: ResourcePool,
    stamina: ResourcePool,

    // Attributes
    intelligence: u32,
    masteries: MasteryLevels,

    training: TrainingState,

    created_at: DateTime<Utc>,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a freshly registered character with baseline stats.
    pub fn new(nickname: Option<Nickname>, now: DateTime<Utc>) -> Self {
        Self {
            id: CharacterId::new(),
            nickname,
            profession_id: ProfessionKind::Apprentice.id(),
            level: 1,
            experience: 0,
            mastery_points: 0,
            gold: STARTING_GOLD,
            potions: PotionStock::starter(),
            health: ResourcePool::full(STARTING_HEALTH),
            mana: ResourcePool::full(STARTING_MANA),
            stamina: ResourcePool::full(STARTING_STAMINA),
            intelligence: 1,
            masteries: MasteryLevels::baseline(),
            training: TrainingState::Idle,
            created_at: now,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_id(mut self, id: CharacterId) -> Self {
        self.id = id;
        self
    }

    pub fn with_nickname(mut self, nickname: Nickname) -> Self {
        self.nickname = Some(nickname);
        self
    }

    pub fn with_profession(mut self, profession_id: ProfessionId) -> Self {
        self.profession_id = profession_id;
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.set_level(level);
        self
    }

    /// Clamped like [`Character::set_experience`]; set the level first.
    pub fn with_experience(mut self, experience: u32) -> Self {
        self.set_experience(i64::from(experience));
        self
    }

    pub fn with_mastery_points(mut self, points: u32) -> Self {
        self.mastery_points = points;
        self
    }

    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    pub fn with_potions(mut self, potions: PotionStock) -> Self {
        self.potions = potions;
        self
    }

    pub fn with_health(mut self, health: ResourcePool) -> Self {
        self.health = health;
        self
    }

    pub fn with_mana(mut self, mana: ResourcePool) -> Self {
        self.mana = mana;
        self
    }

    pub fn with_stamina(mut self, stamina: ResourcePool) -> Self {
        self.stamina = stamina;
        self
    }

    pub fn with_intelligence(mut self, intelligence: u32) -> Self {
        self.intelligence = intelligence.max(1);
        self
    }

    pub fn with_mastery(mut self, field: MasteryField, value: u32) -> Self {
        self.masteries.set(field, value);
        self
    }

    pub fn with_training(mut self, training: TrainingState) -> Self {
        self.training = training;
        self
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[inline]
    pub fn nickname(&self) -> Option<&Nickname> {
        self.nickname.as_ref()
    }

    #[inline]
    pub fn profession_id(&self) -> ProfessionId {
        self.profession_id
    }

    /// Rule variant selected by the profession id.
    #[inline]
    pub fn profession(&self) -> ProfessionKind {
        ProfessionKind::from_id(self.profession_id)
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn experience(&self) -> u32 {
        self.experience
    }

    #[inline]
    pub fn mastery_points(&self) -> u32 {
        self.mastery_points
    }

    #[inline]
    pub fn gold(&self) -> u32 {
        self.gold
    }

    #[inline]
    pub fn potions(&self) -> PotionStock {
        self.potions
    }

    #[inline]
    pub fn health(&self) -> ResourcePool {
        self.health
    }

    #[inline]
    pub fn mana(&self) -> ResourcePool {
        self.mana
    }

    #[inline]
    pub fn stamina(&self) -> ResourcePool {
        self.stamina
    }

    #[inline]
    pub fn intelligence(&self) -> u32 {
        self.intelligence
    }

    #[inline]
    pub fn mastery(&self, field: MasteryField) -> u32 {
        self.masteries.get(field)
    }

    #[inline]
    pub fn masteries(&self) -> MasteryLevels {
        self.masteries
    }

    #[inline]
    pub fn training(&self) -> TrainingState {
        self.training
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // =========================================================================
    // Derived Attributes (recomputed on every call)
    // =========================================================================

    pub fn has_nickname(&self) -> bool {
        self.nickname.is_some()
    }

    /// The nickname, or the anonymous placeholder.
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_ref()
            .map(Nickname::as_str)
            .unwrap_or(ANONYMOUS_NICKNAME)
    }

    pub fn title_tier(&self) -> TitleTier {
        TitleTier::for_level(self.level)
    }

    /// Experience bar size for the current level.
    pub fn to_next_level(&self) -> u32 {
        self.level.saturating_mul(EXPERIENCE_PER_LEVEL)
    }

    pub fn has_enough_experience(&self) -> bool {
        self.experience >= self.to_next_level()
    }

    pub fn experience_percentage(&self) -> i32 {
        (f64::from(self.experience) / f64::from(self.to_next_level()) * 100.0).round() as i32
    }

    pub fn health_percentage(&self) -> i32 {
        self.health.percentage()
    }

    pub fn mana_percentage(&self) -> i32 {
        self.mana.percentage()
    }

    pub fn stamina_percentage(&self) -> i32 {
        self.stamina.percentage()
    }

    /// `ceil(self_defence * 0.2 + strength * level * 0.15)`
    pub fn melee_defence(&self) -> i32 {
        let self_defence = f64::from(self.mastery(MasteryField::SelfDefence)) * 0.2;
        let toughness =
            f64::from(self.mastery(MasteryField::Strength)) * f64::from(self.level) * 0.15;
        (self_defence + toughness).ceil() as i32
    }

    /// Health above zero.
    pub fn stands(&self) -> bool {
        self.health.current() > 0
    }

    pub fn is_max_level(&self, max_level: u32) -> bool {
        self.level >= max_level
    }

    /// Within ten levels either way, inclusive.
    pub fn is_worthy_opponent(&self, other: &Character) -> bool {
        self.level.abs_diff(other.level) <= WORTHY_LEVEL_RANGE
    }

    /// Highest creature level this character may be matched against.
    pub fn max_opponent_level(&self) -> u32 {
        self.level.saturating_add(1)
    }

    // =========================================================================
    // Clamping Setters
    // =========================================================================

    /// Level is floored at 1; experience is re-clamped under the new bar.
    pub fn set_level(&mut self, level: u32) {
        self.level = level.max(1);
        self.set_experience(i64::from(self.experience));
    }

    /// Clamp into `[0, level * 100]`.
    pub fn set_experience(&mut self, value: i64) {
        let cap = i64::from(self.to_next_level());
        self.experience = value.clamp(0, cap) as u32;
    }

    pub fn set_current_health(&mut self, value: i32) {
        self.health.set_current(value);
    }

    /// Fractional health is truncated to an integer before clamping.
    pub fn set_current_health_f64(&mut self, value: f64) {
        self.health.set_current_f64(value);
    }

    pub fn set_current_mana(&mut self, value: i32) {
        self.mana.set_current(value);
    }

    pub fn set_current_stamina(&mut self, value: i32) {
        self.stamina.set_current(value);
    }

    // =========================================================================
    // Combat Support
    // =========================================================================

    /// Profession bonus for a strike. Mutating: a mage may spend mana here.
    pub fn bonus_damage(&mut self, roll: &mut impl FnMut(i32, i32) -> i32) -> i32 {
        self.profession().bonus_damage(self, roll)
    }

    /// Stamina spent on a creature fight.
    pub fn drop_stamina(&mut self) {
        self.stamina.adjust(-CREATURE_FIGHT_STAMINA);
    }

    /// Stamina spent on a duel.
    pub fn drop_stamina_pvp(&mut self) {
        self.stamina.adjust(-DUEL_STAMINA);
    }

    // =========================================================================
    // Progression
    // =========================================================================

    /// Advance one level unless `max_level` has been reached.
    ///
    /// Resets experience, grants a mastery point, recomputes total health from
    /// the profession, sets total mana to 115, refills health and mana, and
    /// (up to level 20) tops stamina up by half its total.
    pub fn level_up(&mut self, max_level: u32) -> LevelUpOutcome {
        if self.is_max_level(max_level) {
            return LevelUpOutcome::MaxLevelReached { level: self.level };
        }

        self.level += 1;
        self.experience = 0;
        self.mastery_points = self.mastery_points.saturating_add(1);

        let total_health =
            BASE_HEALTH + self.profession().health_per_level() * self.level as i32;
        self.health.set_total(total_health);
        self.mana.set_total(LEVEL_UP_MANA);

        self.health.refill();

        if self.level <= STAMINA_RESTORE_LEVEL_LIMIT {
            let half = f64::from(self.stamina.total()) / 2.0;
            self.stamina
                .set_current_f64(f64::from(self.stamina.current()) + half);
        }

        self.mana.refill();

        LevelUpOutcome::LeveledUp {
            new_level: self.level,
            mastery_points: self.mastery_points,
            total_health,
        }
    }

    /// Add experience (clamped to the bar) and level up once the bar is full.
    pub fn gain_experience(&mut self, amount: u32, max_level: u32) -> ExperienceOutcome {
        self.set_experience(i64::from(self.experience) + i64::from(amount));

        let level_up = if self.has_enough_experience() {
            Some(self.level_up(max_level))
        } else {
            None
        };

        ExperienceOutcome {
            experience: self.experience,
            level_up,
        }
    }

    /// Back to a brand-new apprentice: level 1, 100 gold, starting pools,
    /// one potion of each kind, no training, every mastery at 1.
    ///
    /// Identity, nickname and intelligence are kept.
    pub fn reset(&mut self) {
        self.level = 1;
        self.profession_id = ProfessionKind::Apprentice.id();
        self.gold = STARTING_GOLD;
        self.health = ResourcePool::full(STARTING_HEALTH);
        self.mana = ResourcePool::full(STARTING_MANA);
        self.stamina = ResourcePool::full(STARTING_STAMINA);
        self.mastery_points = 0;
        self.experience = 0;
        self.potions = PotionStock::starter();
        self.training = TrainingState::Idle;
        self.masteries = MasteryLevels::baseline();
    }

    // =========================================================================
    // Economy
    // =========================================================================

    /// Buy `amount` potions if the character can afford all of them.
    ///
    /// Not enough gold leaves the character untouched.
    pub fn buy_potion(&mut self, potion: &Potion, amount: u32) -> PurchaseOutcome {
        match potion.cost_of(amount) {
            Some(cost) if self.gold >= cost => {
                self.gold -= cost;
                self.potions.add(potion.kind, amount);
                PurchaseOutcome::Purchased {
                    kind: potion.kind,
                    amount,
                    spent: cost,
                }
            }
            cost => PurchaseOutcome::InsufficientGold {
                cost,
                gold: self.gold,
            },
        }
    }

    /// Drink one potion: restores 40% of the matching resource total.
    ///
    /// An empty stock leaves the character untouched.
    pub fn use_potion(&mut self, potion: &Potion) -> PotionUseOutcome {
        if !self.potions.take_one(potion.kind) {
            return PotionUseOutcome::OutOfStock { kind: potion.kind };
        }

        let fraction = PotionKind::RESTORE_FRACTION;
        let restored = match potion.kind {
            PotionKind::Life => self.health.restore_fraction(fraction),
            PotionKind::Mana => self.mana.restore_fraction(fraction),
            PotionKind::Stamina => self.stamina.restore_fraction(fraction),
        };

        PotionUseOutcome::Consumed {
            kind: potion.kind,
            restored,
        }
    }

    // =========================================================================
    // Training
    // =========================================================================

    pub fn is_training(&self) -> bool {
        !self.training.is_idle()
    }

    pub fn is_training_mastery(&self, mastery_id: MasteryId) -> bool {
        self.training.mastery_id() == Some(mastery_id)
    }

    /// In training and the end time has been reached, but not yet collected.
    pub fn train_finished(&self, now: DateTime<Utc>) -> bool {
        self.training.is_elapsed(now)
    }

    /// Commit to training `mastery` for `30 + 15 * current level` seconds.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` if a session (running or uncollected) exists.
    pub fn start_training(
        &mut self,
        mastery: &Mastery,
        now: DateTime<Utc>,
    ) -> Result<TrainingStarted, DomainError> {
        if let Some(active) = self.training.mastery_id() {
            return Err(DomainError::invalid_state_transition(format!(
                "character {} is already training mastery {}",
                self.id, active
            )));
        }

        let duration = Mastery::training_duration(self.masteries.get(mastery.field));
        let ends_at = now + duration;
        self.training = TrainingState::Training {
            mastery_id: mastery.id,
            ends_at,
        };

        Ok(TrainingStarted {
            mastery_id: mastery.id,
            field: mastery.field,
            duration_secs: duration.num_seconds(),
            ends_at,
        })
    }

    /// Collect the active session: back to idle and `field += 1`.
    ///
    /// Elapsed time is not checked here; gate on [`Character::train_finished`].
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` if idle, or if `mastery` is not the one being trained.
    pub fn finish_training(&mut self, mastery: &Mastery) -> Result<TrainingCompleted, DomainError> {
        let active = self.training.mastery_id().ok_or_else(|| {
            DomainError::invalid_state_transition(format!(
                "character {} is not training",
                self.id
            ))
        })?;

        if active != mastery.id {
            return Err(DomainError::invalid_state_transition(format!(
                "character {} is training mastery {}, not {}",
                self.id, active, mastery.id
            )));
        }

        self.training = TrainingState::Idle;
        let new_value = self.masteries.increment(mastery.field);

        Ok(TrainingCompleted {
            mastery_id: mastery.id,
            field: mastery.field,
            new_value,
        })
    }

    // =========================================================================
    // Resource Recovery
    // =========================================================================

    pub fn increase_stamina(&mut self) {
        self.stamina.adjust(REST_STAMINA);
    }

    /// `current + total * strength / 10`
    pub fn increase_health(&mut self) {
        let gain =
            f64::from(self.health.total()) * (f64::from(self.mastery(MasteryField::Strength)) / 10.0);
        self.health
            .set_current_f64(f64::from(self.health.current()) + gain);
    }

    /// `current + total * intelligence / 10`
    pub fn increase_mana(&mut self) {
        let gain = f64::from(self.mana.total()) * (f64::from(self.intelligence) / 10.0);
        self.mana.set_current_f64(f64::from(self.mana.current()) + gain);
    }
}
