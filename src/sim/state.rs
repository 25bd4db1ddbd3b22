//! Game state and core simulation types
//!
//! `GameState` lives for the whole process. Everything that belongs to a
//! single game sits in `SessionState`, which is rebuilt wholesale on start.

use rand::Rng;
use serde::Serialize;

use super::entity::{Enemy, EnemyKind, Player};
use super::spawn::SpawnLocks;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Title screen, before the first game or after a collision
    Idle,
    /// Active gameplay
    Active,
    /// Game is paused
    Paused,
}

/// What a splash overlay is celebrating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverlayKind {
    /// Score reached one of the milestones
    Milestone(u32),
    /// Score passed the stored high score
    NewHighScore,
}

/// A timed splash overlay; slow motion runs while one is up
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overlay {
    pub kind: OverlayKind,
    /// Real seconds left on screen
    pub remaining: f32,
}

impl Overlay {
    pub fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            remaining: SPLASH_DURATION,
        }
    }

    /// Text shown while the overlay is up
    pub fn text(&self) -> String {
        match self.kind {
            OverlayKind::Milestone(score) => format!("{} Points!", score),
            OverlayKind::NewHighScore => "New High Score!".to_string(),
        }
    }
}

/// Things that happened during input handling or a tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Started,
    PauseToggled { paused: bool },
    ScoreChanged(u32),
    EnemySpawned { kind: EnemyKind, total: usize },
    Collision { score: u32 },
    /// The collision path beat the stored best; it must be persisted
    HighScoreBeaten(u32),
    MilestoneReached(u32),
    HighScoreSplash(u32),
    SlowMotionEnded,
}

/// State of a single game, replaced on every start
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub spawn_locks: SpawnLocks,
    pub overlay: Option<Overlay>,
    /// New-high-score splash already shown this game
    pub high_score_splash_shown: bool,
    /// The collision path stored a new high score this game
    pub high_score_updated: bool,
}

impl SessionState {
    /// Fresh game: the player at its start position and one red enemy
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            player: Player::default(),
            enemies: vec![Enemy::spawn(EnemyKind::Red, rng)],
            score: 0,
            spawn_locks: SpawnLocks::default(),
            overlay: None,
            high_score_splash_shown: false,
            high_score_updated: false,
        }
    }

    /// Slow motion is tied to a visible splash
    #[inline]
    pub fn slow_motion(&self) -> bool {
        self.overlay.is_some()
    }

    /// Whether a milestone splash is currently up
    pub fn milestone_active(&self) -> bool {
        matches!(
            self.overlay,
            Some(Overlay {
                kind: OverlayKind::Milestone(_),
                ..
            })
        )
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Best score across all sessions
    pub high_score: u32,
    /// Current (or most recently finished) game
    pub session: SessionState,
}

impl GameState {
    /// Idle state with the persisted high score
    pub fn new<R: Rng + ?Sized>(high_score: u32, rng: &mut R) -> Self {
        Self {
            phase: GamePhase::Idle,
            high_score,
            session: SessionState::new(rng),
        }
    }

    /// Begin a new game, discarding the previous session
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.session = SessionState::new(rng);
        self.phase = GamePhase::Active;
        match serde_json::to_string(&self.session.player) {
            Ok(json) => log::info!("Player created with attributes: {}", json),
            Err(e) => log::warn!("Could not serialize player: {}", e),
        }
    }
}
