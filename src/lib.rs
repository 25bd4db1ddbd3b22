//! Star Dodger - a falling-enemy arcade game for the terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, separation, collisions)
//! - `game`: Frame loop owner tying simulation, persistence and rendering together
//! - `renderer`: Software frame buffer and terminal presentation
//! - `platform`: Terminal input and frame-rate governor
//! - `assets`: Sprite loading with placeholder fallback
//! - `highscores`: Single-integer high score file

pub mod assets;
pub mod config;
pub mod game;
pub mod highscores;
pub mod logging;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use game::{FrameOutcome, Game};
pub use highscores::HighScoreFile;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions in pixels
    pub const FIELD_WIDTH: f32 = 300.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Target frame rate of the loop
    pub const TARGET_FPS: u32 = 60;
    /// Longest frame delta the simulation accepts (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Horizontal speed in pixels/second
    pub const PLAYER_SPEED: f32 = 300.0;
    /// Distance of the player's top edge from the bottom of the field
    pub const PLAYER_BOTTOM_OFFSET: f32 = 100.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 50.0;
    /// Enemies closer than this (centre to centre) get pushed apart
    pub const SEPARATION_FACTOR: f32 = 1.5;

    /// Red enemy speed range (pixels/second, inclusive)
    pub const RED_SPEED_MIN: u32 = 80;
    pub const RED_SPEED_MAX: u32 = 120;

    /// Yellow enemy speed and sway ranges
    pub const YELLOW_SPEED_MIN: u32 = 150;
    pub const YELLOW_SPEED_MAX: u32 = 200;
    pub const YELLOW_AMPLITUDE_MIN: u32 = 30;
    pub const YELLOW_AMPLITUDE_MAX: u32 = 50;
    pub const YELLOW_FREQUENCY_MIN: f32 = 1.0;
    pub const YELLOW_FREQUENCY_MAX: f32 = 2.0;
    /// Vertical distance scale of one sway period
    pub const YELLOW_WAVELENGTH: f32 = 50.0;

    /// Green enemy pulsing speed: BASE + sin(t * RATE) * SWING
    pub const GREEN_BASE_SPEED: f32 = 200.0;
    pub const GREEN_SPEED_SWING: f32 = 50.0;
    pub const GREEN_PULSE_RATE: f32 = 2.0;

    /// Score at which each extra enemy joins
    pub const SPAWN_SECOND_RED_AT: u32 = 3;
    pub const SPAWN_YELLOW_AT: u32 = 9;
    pub const SPAWN_GREEN_AT: u32 = 18;

    /// Scores that trigger a milestone splash
    pub const MILESTONES: [u32; 7] = [10, 25, 50, 100, 250, 500, 1000];
    /// How long a splash overlay stays up (real seconds)
    pub const SPLASH_DURATION: f32 = 4.0;
    /// Time scale while a splash is showing
    pub const SLOW_MOTION_SCALE: f32 = 0.25;
}

/// Uniformly random left edge for an entity of `size` inside the field
#[inline]
pub fn random_column<R: rand::Rng + ?Sized>(rng: &mut R, size: f32) -> f32 {
    let max = (consts::FIELD_WIDTH - size).max(0.0) as u32;
    rng.random_range(0..=max) as f32
}
