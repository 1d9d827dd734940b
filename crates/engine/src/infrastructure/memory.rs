//! In-memory storage adapter.
//!
//! One `DashMap` per table. Implements every repository port, so a single
//! `Arc<InMemoryStore>` can back the whole `Repositories` bundle.

use async_trait::async_trait;
use bravura_domain::{
    order_by_level_desc, Character, CharacterId, Creature, CreatureId, Mastery, MasteryField,
    MasteryId, Potion, PotionId, PotionKind, Profession, ProfessionId, ProfessionKind,
};
use dashmap::DashMap;

use crate::infrastructure::ports::{
    CharacterRepo, CreatureRepo, MasteryRepo, PotionRepo, ProfessionRepo, RepoError,
};

/// Seeded shop rows: (id, name, price in gold, kind).
const SEED_POTIONS: [(u32, &str, u32, PotionKind); 3] = [
    (1, "Poção de Vida", 20, PotionKind::Life),
    (2, "Poção de Mana", 20, PotionKind::Mana),
    (3, "Poção de Energia", 15, PotionKind::Stamina),
];

#[derive(Default)]
pub struct InMemoryStore {
    characters: DashMap<CharacterId, Character>,
    creatures: DashMap<CreatureId, Creature>,
    professions: DashMap<ProfessionId, Profession>,
    masteries: DashMap<MasteryId, Mastery>,
    potions: DashMap<PotionId, Potion>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with professions, potions and masteries already loaded.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.seed_reference_data();
        store
    }

    /// Load the four professions, three potions and eight masteries.
    ///
    /// Idempotent: existing rows with the same id are replaced.
    pub fn seed_reference_data(&self) {
        for kind in ProfessionKind::ALL {
            self.insert_profession(Profession::new(kind.id(), profession_name(kind)));
        }

        for (id, name, price, kind) in SEED_POTIONS {
            self.insert_potion(Potion::new(PotionId::new(id), name, price, kind));
        }

        for (index, field) in MasteryField::ALL.into_iter().enumerate() {
            let id = MasteryId::new(index as u32 + 1);
            self.insert_mastery(Mastery::new(id, mastery_name(field), field));
        }

        tracing::debug!(
            professions = self.professions.len(),
            potions = self.potions.len(),
            masteries = self.masteries.len(),
            "Reference data seeded"
        );
    }

    pub fn insert_profession(&self, profession: Profession) {
        self.professions.insert(profession.id, profession);
    }

    pub fn insert_mastery(&self, mastery: Mastery) {
        self.masteries.insert(mastery.id, mastery);
    }

    pub fn insert_potion(&self, potion: Potion) {
        self.potions.insert(potion.id, potion);
    }

    /// Mastery id seeded for `field`.
    pub fn mastery_id_for(&self, field: MasteryField) -> Option<MasteryId> {
        self.masteries
            .iter()
            .find(|entry| entry.value().field == field)
            .map(|entry| *entry.key())
    }

    /// Potion id seeded for `kind`.
    pub fn potion_id_for(&self, kind: PotionKind) -> Option<PotionId> {
        self.potions
            .iter()
            .find(|entry| entry.value().kind == kind)
            .map(|entry| *entry.key())
    }
}

fn profession_name(kind: ProfessionKind) -> &'static str {
    match kind {
        ProfessionKind::Apprentice => "Aprendiz",
        ProfessionKind::Knight => "Cavaleiro",
        ProfessionKind::Mage => "Mago",
        ProfessionKind::Hunter => "Caçador",
    }
}

fn mastery_name(field: MasteryField) -> &'static str {
    match field {
        MasteryField::Sword => "Espada",
        MasteryField::Strength => "Força",
        MasteryField::Dungeon => "Masmorra",
        MasteryField::Thievery => "Ladinagem",
        MasteryField::Secret => "Segredo",
        MasteryField::Luck => "Sorte",
        MasteryField::Learning => "Aprendizado",
        MasteryField::SelfDefence => "Autodefesa",
    }
}

#[async_trait]
impl CharacterRepo for InMemoryStore {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        Ok(self.characters.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, character: &Character) -> Result<(), RepoError> {
        self.characters.insert(character.id(), character.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Character>, RepoError> {
        let mut characters: Vec<Character> = self
            .characters
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        characters.sort_by_key(|c| c.created_at());
        Ok(characters)
    }
}

#[async_trait]
impl CreatureRepo for InMemoryStore {
    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepoError> {
        Ok(self.creatures.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, creature: &Creature) -> Result<(), RepoError> {
        self.creatures.insert(creature.id, creature.clone());
        Ok(())
    }

    async fn list_up_to_level(&self, max_level: u32) -> Result<Vec<Creature>, RepoError> {
        let mut creatures: Vec<Creature> = self
            .creatures
            .iter()
            .filter(|entry| entry.value().level <= max_level)
            .map(|entry| entry.value().clone())
            .collect();
        order_by_level_desc(&mut creatures);
        Ok(creatures)
    }
}

#[async_trait]
impl ProfessionRepo for InMemoryStore {
    async fn get(&self, id: ProfessionId) -> Result<Option<Profession>, RepoError> {
        Ok(self.professions.get(&id).map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl MasteryRepo for InMemoryStore {
    async fn get(&self, id: MasteryId) -> Result<Option<Mastery>, RepoError> {
        Ok(self.masteries.get(&id).map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl PotionRepo for InMemoryStore {
    async fn get(&self, id: PotionId) -> Result<Option<Potion>, RepoError> {
        Ok(self.potions.get(&id).map(|entry| entry.value().clone()))
    }
}
