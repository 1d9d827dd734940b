//! Per-entity mutual exclusion.
//!
//! Every mutating use case holds the guard of each record it writes across
//! load -> mutate -> save, so two requests for the same character (or the same
//! creature) never interleave. Guards are `tokio::sync::Mutex` so they can be
//! held across `.await` points.

use std::hash::Hash;
use std::sync::Arc;

use bravura_domain::{CharacterId, CreatureId};
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-id locks.
pub struct EntityLocks<K> {
    locks: DashMap<K, Arc<Mutex<()>>>,
}

/// Locks for character records.
pub type CharacterLocks = EntityLocks<CharacterId>;

/// Locks for creature records. Always taken after the attacker's character
/// lock, never before.
pub type CreatureLocks = EntityLocks<CreatureId>;

/// Guards for a two-record operation, acquired in id order.
pub struct PairGuard {
    _first: OwnedMutexGuard<()>,
    _second: Option<OwnedMutexGuard<()>>,
}

impl<K: Eq + Hash> Default for EntityLocks<K> {
    fn default() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }
}

impl<K: Copy + Ord + Hash> EntityLocks<K> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_for(&self, id: K) -> Arc<Mutex<()>> {
        self.locks
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Wait for exclusive access to one record.
    pub async fn acquire(&self, id: K) -> OwnedMutexGuard<()> {
        self.lock_for(id).lock_owned().await
    }

    /// Wait for exclusive access to two records.
    ///
    /// Locks are always taken lowest id first so concurrent duels between the
    /// same pair cannot deadlock. The same id twice takes a single lock.
    pub async fn acquire_pair(&self, a: K, b: K) -> PairGuard {
        if a == b {
            return PairGuard {
                _first: self.acquire(a).await,
                _second: None,
            };
        }

        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let first = self.acquire(low).await;
        let second = self.acquire(high).await;
        PairGuard {
            _first: first,
            _second: Some(second),
        }
    }

    /// Number of ids that have ever been locked.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
