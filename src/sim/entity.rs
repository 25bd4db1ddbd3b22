//! Player craft and falling enemies
//!
//! Enemies share one fall-and-wrap rule; what differs per variant is the
//! motion policy applied before it.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use crate::consts::*;
use crate::random_column;

/// Horizontal steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The player's craft
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    /// Pixels per second
    pub speed: f32,
    pub moving_left: bool,
    pub moving_right: bool,
    /// Most recent direction pressed (wins while both are held)
    pub last_pressed: Option<Direction>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                (FIELD_WIDTH / 2.0).floor(),
                FIELD_HEIGHT - PLAYER_BOTTOM_OFFSET,
            ),
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            moving_left: false,
            moving_right: false,
            last_pressed: None,
        }
    }
}

impl Player {
    fn held_mut(&mut self, dir: Direction) -> &mut bool {
        match dir {
            Direction::Left => &mut self.moving_left,
            Direction::Right => &mut self.moving_right,
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Left => self.moving_left,
            Direction::Right => self.moving_right,
        }
    }

    pub fn press(&mut self, dir: Direction) {
        let held = self.held_mut(dir);
        if !*held {
            log::debug!("Started moving {:?}", dir);
        }
        *held = true;
        self.last_pressed = Some(dir);
    }

    pub fn release(&mut self, dir: Direction) {
        *self.held_mut(dir) = false;
        log::debug!("Stopped moving {:?}", dir);

        let other = dir.opposite();
        if self.is_held(other) {
            self.last_pressed = Some(other);
            log::debug!("Switching to moving {:?}", other);
        }
    }

    /// Direction the craft is currently travelling, if any
    pub fn heading(&self) -> Option<Direction> {
        self.last_pressed.filter(|dir| self.is_held(*dir))
    }

    /// Advance horizontally, clamped to the field
    pub fn step(&mut self, dt: f32) {
        let max_x = FIELD_WIDTH - self.size;
        match self.heading() {
            Some(Direction::Left) => {
                self.pos.x = (self.pos.x - self.speed * dt).max(0.0);
            }
            Some(Direction::Right) => {
                self.pos.x = (self.pos.x + self.speed * dt).min(max_x);
            }
            None => {}
        }
    }
}

/// Enemy variants, in order of introduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EnemyKind {
    Red,
    Yellow,
    Green,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Red, EnemyKind::Yellow, EnemyKind::Green];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Red => "Red",
            EnemyKind::Yellow => "Yellow",
            EnemyKind::Green => "Green",
        }
    }
}

/// Per-variant motion law, applied before the shared fall step
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Motion {
    /// Fixed fall speed, no drift
    Constant,
    /// Horizontal sway driven by the vertical position
    Sway { amplitude: f32, frequency: f32 },
    /// Fall speed pulses with time since creation
    Pulse { elapsed: f32 },
}

/// A falling enemy
#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    /// Current fall speed in pixels/second
    pub speed: f32,
    pub motion: Motion,
}

impl Enemy {
    /// Create an enemy of `kind` at the top of the field, drawing its
    /// per-variant parameters from `rng`
    pub fn spawn<R: Rng + ?Sized>(kind: EnemyKind, rng: &mut R) -> Self {
        let x = random_column(rng, ENEMY_SIZE);
        let (speed, motion) = match kind {
            EnemyKind::Red => (
                rng.random_range(RED_SPEED_MIN..=RED_SPEED_MAX) as f32,
                Motion::Constant,
            ),
            EnemyKind::Yellow => (
                rng.random_range(YELLOW_SPEED_MIN..=YELLOW_SPEED_MAX) as f32,
                Motion::Sway {
                    amplitude: rng.random_range(YELLOW_AMPLITUDE_MIN..=YELLOW_AMPLITUDE_MAX)
                        as f32,
                    frequency: rng.random_range(YELLOW_FREQUENCY_MIN..=YELLOW_FREQUENCY_MAX),
                },
            ),
            EnemyKind::Green => (GREEN_BASE_SPEED, Motion::Pulse { elapsed: 0.0 }),
        };
        Self {
            kind,
            pos: Vec2::new(x, 0.0),
            size: ENEMY_SIZE,
            speed,
            motion,
        }
    }

    /// Advance one tick. Returns true when the enemy fell past the bottom
    /// and was moved back to the top (which scores a point).
    pub fn step<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> bool {
        match &mut self.motion {
            Motion::Constant => {}
            Motion::Sway {
                amplitude,
                frequency,
            } => {
                let phase = self.pos.y / (YELLOW_WAVELENGTH * *frequency);
                self.pos.x += phase.sin() * *amplitude * dt;
            }
            Motion::Pulse { elapsed } => {
                *elapsed += dt;
                self.speed = GREEN_BASE_SPEED + (*elapsed * GREEN_PULSE_RATE).sin() * GREEN_SPEED_SWING;
            }
        }

        self.pos.y += self.speed * dt;
        if self.pos.y > FIELD_HEIGHT {
            log::info!(
                "{} enemy reset to top of screen from position ({:.1}, {:.1})",
                self.kind.as_str(),
                self.pos.x,
                self.pos.y
            );
            self.pos.y = 0.0;
            self.pos.x = random_column(rng, self.size);
            return true;
        }
        false
    }
}
