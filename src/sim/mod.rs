//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time comes in as an explicit delta
//! - Randomness comes from the caller's RNG only
//! - No rendering, terminal or file access

pub mod collision;
pub mod entity;
pub mod separation;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionMask, Hitboxes, masks_collide};
pub use entity::{Direction, Enemy, EnemyKind, Motion, Player};
pub use separation::apply_separation;
pub use spawn::{SpawnLocks, release_unlocked};
pub use state::{GameEvent, GamePhase, GameState, Overlay, OverlayKind, SessionState};
pub use tick::{InputEvent, Key, handle_input, tick};
