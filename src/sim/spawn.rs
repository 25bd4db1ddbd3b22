//! Difficulty controller
//!
//! Each enemy variant has a one-way latch. Once the score reaches the
//! variant's threshold, one enemy of that kind joins the field and the latch
//! stays closed for the rest of the game.

use rand::Rng;
use serde::Serialize;

use super::entity::{Enemy, EnemyKind};
use crate::consts::*;

/// Which variants have already been introduced this game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SpawnLocks {
    pub red: bool,
    pub yellow: bool,
    pub green: bool,
}

impl SpawnLocks {
    pub fn is_locked(&self, kind: EnemyKind) -> bool {
        match kind {
            EnemyKind::Red => self.red,
            EnemyKind::Yellow => self.yellow,
            EnemyKind::Green => self.green,
        }
    }

    fn lock(&mut self, kind: EnemyKind) {
        match kind {
            EnemyKind::Red => self.red = true,
            EnemyKind::Yellow => self.yellow = true,
            EnemyKind::Green => self.green = true,
        }
    }
}

/// Score that unlocks an extra enemy of `kind`
pub fn threshold(kind: EnemyKind) -> u32 {
    match kind {
        EnemyKind::Red => SPAWN_SECOND_RED_AT,
        EnemyKind::Yellow => SPAWN_YELLOW_AT,
        EnemyKind::Green => SPAWN_GREEN_AT,
    }
}

/// Append one enemy per newly unlocked variant. Returns the kinds spawned.
pub fn release_unlocked<R: Rng + ?Sized>(
    locks: &mut SpawnLocks,
    score: u32,
    enemies: &mut Vec<Enemy>,
    rng: &mut R,
) -> Vec<EnemyKind> {
    let mut spawned = Vec::new();
    for kind in EnemyKind::ALL {
        if score >= threshold(kind) && !locks.is_locked(kind) {
            enemies.push(Enemy::spawn(kind, rng));
            locks.lock(kind);
            log::info!("New {} enemy added! Total enemies: {}", kind.as_str(), enemies.len());
            spawned.push(kind);
        }
    }
    spawned
}
