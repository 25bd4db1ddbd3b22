//! Enemy separation
//!
//! One pass per tick over every ordered pair: when two enemies are closer
//! than the minimum distance, the second is pushed straight away from the
//! first by the shortfall. The pass is not iterated to convergence, so a
//! tight cluster can stay under-separated for a frame.

use glam::Vec2;
use rand::Rng;

use super::entity::Enemy;

/// Push enemies apart so no pair sits closer than `min_distance`
pub fn apply_separation<R: Rng + ?Sized>(enemies: &mut [Enemy], min_distance: f32, rng: &mut R) {
    let n = enemies.len();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let anchor = enemies[i].pos;
            let other = enemies[j].pos;
            let dist = anchor.distance(other);
            if dist >= min_distance {
                continue;
            }

            let dir = if dist == 0.0 {
                random_diagonal(rng)
            } else {
                (other - anchor) / dist
            };
            enemies[j].pos += dir * (min_distance - dist);
        }
    }
}

/// One of the four unit diagonals, chosen at random
fn random_diagonal<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let sx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let sy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    Vec2::new(sx, sy).normalize()
}
