//! End-to-end game scenarios driven through the public API

use std::fs;
use std::path::Path;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use star_dodger::assets::SpriteSet;
use star_dodger::consts::{ENEMY_SIZE, FIELD_HEIGHT, PLAYER_SIZE};
use star_dodger::sim::{
    EnemyKind, GameEvent, GamePhase, GameState, Hitboxes, InputEvent, Key, handle_input, tick,
};
use star_dodger::{Game, HighScoreFile};

fn hitboxes() -> Hitboxes {
    Hitboxes::solid(PLAYER_SIZE as u32, ENEMY_SIZE as u32)
}

fn game_in(dir: &Path, seed: u64) -> Game {
    Game::from_parts(
        HighScoreFile::new(dir.join("highscore.txt")),
        SpriteSet::placeholders(),
        Pcg32::seed_from_u64(seed),
    )
}

/// Drop the first enemy onto the player and run one frame
fn crash(game: &mut Game, score: u32) {
    let state = game.state_mut();
    state.session.score = score;
    let target = state.session.player.pos + Vec2::new(10.0, 10.0);
    state.session.enemies[0].pos = target;
    game.update(&[], 0.0).unwrap();
}

#[test]
fn test_three_wraps_add_second_red() {
    let mut rng = Pcg32::seed_from_u64(1);
    let hitboxes = hitboxes();
    let mut state = GameState::new(0, &mut rng);
    handle_input(&mut state, InputEvent::KeyDown(Key::Start), &mut rng);

    assert_eq!(state.phase, GamePhase::Active);
    assert_eq!(state.session.score, 0);
    assert_eq!(state.session.enemies.len(), 1);
    assert_eq!(state.session.enemies[0].kind, EnemyKind::Red);

    for _ in 0..3 {
        state.session.enemies[0].pos.y = FIELD_HEIGHT;
        let events = tick(&mut state, 0.05, &hitboxes, &mut rng);
        assert!(events.iter().any(|e| matches!(e, GameEvent::ScoreChanged(_))));
    }

    assert_eq!(state.phase, GamePhase::Active);
    assert_eq!(state.session.score, 3);
    assert_eq!(state.session.enemies.len(), 2);
    assert!(
        state
            .session
            .enemies
            .iter()
            .all(|e| e.kind == EnemyKind::Red)
    );
    assert!(state.session.spawn_locks.red);
    assert!(!state.session.spawn_locks.yellow);
    assert!(!state.session.spawn_locks.green);
}

#[test]
fn test_collision_beats_stored_high_score() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("highscore.txt"), "10").unwrap();
    let mut game = game_in(dir.path(), 2);
    assert_eq!(game.state().high_score, 10);

    game.update(&[InputEvent::KeyDown(Key::Start)], 0.0).unwrap();
    crash(&mut game, 12);

    let state = game.state();
    assert_eq!(state.phase, GamePhase::Idle);
    assert_eq!(state.high_score, 12);
    assert!(state.session.high_score_updated);
    assert!(!state.session.high_score_splash_shown);
    assert!(state.session.overlay.is_none());
    assert_eq!(
        fs::read_to_string(dir.path().join("highscore.txt")).unwrap(),
        "12"
    );
}

#[test]
fn test_persisted_high_score_is_max_of_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");
    fs::write(&path, "20").unwrap();

    let mut game = game_in(dir.path(), 3);
    game.update(&[InputEvent::KeyDown(Key::Start)], 0.0).unwrap();
    crash(&mut game, 5);
    assert_eq!(game.state().phase, GamePhase::Idle);
    assert!(!game.state().session.high_score_updated);
    assert_eq!(fs::read_to_string(&path).unwrap(), "20");

    // Second game in the same process, then a fresh process
    game.update(&[InputEvent::KeyDown(Key::Start)], 0.0).unwrap();
    crash(&mut game, 31);
    assert_eq!(fs::read_to_string(&path).unwrap(), "31");

    let reloaded = game_in(dir.path(), 4);
    assert_eq!(reloaded.state().high_score, 31);
}

#[test]
fn test_restart_replaces_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = game_in(dir.path(), 5);
    game.update(&[InputEvent::KeyDown(Key::Start)], 0.0).unwrap();
    crash(&mut game, 19);
    assert!(game.state().session.enemies.len() > 1);

    game.update(&[InputEvent::KeyDown(Key::Start)], 0.0).unwrap();
    let state = game.state();
    assert_eq!(state.phase, GamePhase::Active);
    assert_eq!(state.session.score, 0);
    assert_eq!(state.session.enemies.len(), 1);
    assert!(!state.session.spawn_locks.red);
    assert!(!state.session.high_score_updated);
    assert_eq!(state.high_score, 19);
}

#[test]
fn test_spawn_latches_fire_once() {
    let mut rng = Pcg32::seed_from_u64(6);
    let hitboxes = hitboxes();
    let mut state = GameState::new(1000, &mut rng);
    state.start(&mut rng);

    let mut counts = Vec::new();
    for score in [2, 3, 3, 8, 9, 10, 17, 18, 25, 4, 30] {
        state.session.score = score;
        tick(&mut state, 0.0, &hitboxes, &mut rng);
        assert_eq!(state.phase, GamePhase::Active);
        counts.push(state.session.enemies.len());
    }
    assert_eq!(counts, vec![1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 4]);

    let kinds: Vec<EnemyKind> = state.session.enemies.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EnemyKind::Red,
            EnemyKind::Red,
            EnemyKind::Yellow,
            EnemyKind::Green
        ]
    );
}

#[test]
fn test_paused_game_does_not_move() {
    let mut rng = Pcg32::seed_from_u64(7);
    let hitboxes = hitboxes();
    let mut state = GameState::new(0, &mut rng);
    handle_input(&mut state, InputEvent::KeyDown(Key::Start), &mut rng);
    handle_input(&mut state, InputEvent::KeyDown(Key::Right), &mut rng);
    handle_input(&mut state, InputEvent::KeyDown(Key::Pause), &mut rng);
    assert_eq!(state.phase, GamePhase::Paused);

    let before = state.session.clone();
    for _ in 0..30 {
        assert!(tick(&mut state, 1.0 / 60.0, &hitboxes, &mut rng).is_empty());
    }
    assert_eq!(state.session.player.pos, before.player.pos);
    assert_eq!(state.session.enemies[0].pos, before.enemies[0].pos);

    handle_input(&mut state, InputEvent::KeyDown(Key::Pause), &mut rng);
    tick(&mut state, 1.0 / 60.0, &hitboxes, &mut rng);
    assert!(state.session.player.pos.x > before.player.pos.x);
}
