//! Per-frame simulation step
//!
//! Input is applied event by event in arrival order, then `tick` advances an
//! active game by one frame of real time.

use rand::Rng;

use super::collision::{Hitboxes, masks_collide};
use super::entity::Direction;
use super::separation::apply_separation;
use super::spawn::release_unlocked;
use super::state::{GameEvent, GamePhase, GameState, Overlay, OverlayKind};
use crate::consts::*;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Start,
    Pause,
}

/// A discrete input event, consumed once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

fn steering(key: Key) -> Option<Direction> {
    match key {
        Key::Left => Some(Direction::Left),
        Key::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Apply one input event. Quit is left to the caller.
pub fn handle_input<R: Rng + ?Sized>(
    state: &mut GameState,
    event: InputEvent,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    match event {
        InputEvent::Quit => {}
        InputEvent::KeyDown(Key::Start) => {
            if state.phase == GamePhase::Idle {
                log::info!("Enter key pressed - Starting game!");
                state.start(rng);
                events.push(GameEvent::Started);
            }
        }
        InputEvent::KeyDown(Key::Pause) => {
            let paused = match state.phase {
                GamePhase::Active => Some(true),
                GamePhase::Paused => Some(false),
                GamePhase::Idle => None,
            };
            if let Some(paused) = paused {
                state.phase = if paused {
                    GamePhase::Paused
                } else {
                    GamePhase::Active
                };
                log::info!("Paused: {}", paused);
                events.push(GameEvent::PauseToggled { paused });
            }
        }
        InputEvent::KeyDown(key) => {
            if let Some(dir) = steering(key) {
                state.session.player.press(dir);
            }
        }
        InputEvent::KeyUp(key) => {
            if let Some(dir) = steering(key) {
                state.session.player.release(dir);
            }
        }
    }
    events
}

/// Advance an active game by `real_dt` seconds of wall time
pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    real_dt: f32,
    hitboxes: &Hitboxes,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Active {
        return events;
    }

    let session = &mut state.session;
    let dt = if session.slow_motion() {
        real_dt * SLOW_MOTION_SCALE
    } else {
        real_dt
    };

    // Splash timer runs on real time, not scaled time
    let expired = match session.overlay.as_mut() {
        Some(overlay) => {
            overlay.remaining -= real_dt;
            overlay.remaining <= 0.0
        }
        None => false,
    };
    if expired {
        session.overlay = None;
        log::info!("Exiting slow motion mode.");
        events.push(GameEvent::SlowMotionEnded);
    }

    session.player.step(dt);

    let mut wraps = 0;
    for enemy in session.enemies.iter_mut() {
        if enemy.step(dt, rng) {
            wraps += 1;
        }
    }
    for _ in 0..wraps {
        session.score += 1;
        log::info!("Score updated: {}", session.score);
        events.push(GameEvent::ScoreChanged(session.score));

        if MILESTONES.contains(&session.score) && !session.milestone_active() {
            match &mut session.overlay {
                // "New High Score!" keeps the screen; the milestone restarts its timer
                Some(overlay) if overlay.kind == OverlayKind::NewHighScore => {
                    overlay.remaining = SPLASH_DURATION;
                }
                other => *other = Some(Overlay::new(OverlayKind::Milestone(session.score))),
            }
            log::info!(
                "Milestone achieved: {} points! Entering slow motion mode.",
                session.score
            );
            events.push(GameEvent::MilestoneReached(session.score));
        }
    }

    apply_separation(&mut session.enemies, ENEMY_SIZE * SEPARATION_FACTOR, rng);

    let spawned = release_unlocked(
        &mut session.spawn_locks,
        session.score,
        &mut session.enemies,
        rng,
    );
    let total = session.enemies.len();
    events.extend(
        spawned
            .into_iter()
            .map(|kind| GameEvent::EnemySpawned { kind, total }),
    );

    let player = &session.player;
    let hit = session
        .enemies
        .iter()
        .any(|enemy| masks_collide(&hitboxes.player, player.pos, hitboxes.enemy(enemy.kind), enemy.pos));
    if hit {
        log::info!("Collision detected - Game over!");
        state.phase = GamePhase::Idle;
        events.push(GameEvent::Collision {
            score: session.score,
        });

        if session.score > state.high_score {
            state.high_score = session.score;
            session.high_score_updated = true;
            log::info!("New high score achieved: {}", state.high_score);
            events.push(GameEvent::HighScoreBeaten(state.high_score));
        }
    }

    if session.score > state.high_score
        && !session.high_score_splash_shown
        && !session.high_score_updated
    {
        session.overlay = Some(Overlay::new(OverlayKind::NewHighScore));
        session.high_score_splash_shown = true;
        log::info!("New high score surpassed! Entering slow motion mode for new high score.");
        events.push(GameEvent::HighScoreSplash(session.score));
    }

    events
}
