//! Property tests for motion, separation and player bounds

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use star_dodger::consts::{
    ENEMY_SIZE, FIELD_HEIGHT, FIELD_WIDTH, GREEN_BASE_SPEED, GREEN_PULSE_RATE, GREEN_SPEED_SWING,
    SEPARATION_FACTOR,
};
use star_dodger::sim::{Direction, Enemy, EnemyKind, Motion, Player, apply_separation};

fn kind_strategy() -> impl Strategy<Value = EnemyKind> {
    prop_oneof![
        Just(EnemyKind::Red),
        Just(EnemyKind::Yellow),
        Just(EnemyKind::Green),
    ]
}

/// Speed the enemy falls at during its next step of `dt`
fn speed_for_step(enemy: &Enemy, dt: f32) -> f32 {
    match enemy.motion {
        Motion::Pulse { elapsed } => {
            let elapsed = elapsed + dt;
            GREEN_BASE_SPEED + (elapsed * GREEN_PULSE_RATE).sin() * GREEN_SPEED_SWING
        }
        Motion::Constant | Motion::Sway { .. } => enemy.speed,
    }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Press(Direction),
    Release(Direction),
    Step(f32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let dir = prop_oneof![Just(Direction::Left), Just(Direction::Right)];
    prop_oneof![
        dir.clone().prop_map(Op::Press),
        dir.prop_map(Op::Release),
        (0.0f32..0.25).prop_map(Op::Step),
    ]
}

proptest! {
    #[test]
    fn enemies_wrap_exactly_when_they_pass_the_bottom(
        seed in any::<u64>(),
        kind in kind_strategy(),
        y in 0.0f32..=FIELD_HEIGHT,
        dt in 0.0f32..0.25,
        pulse_age in 0.0f32..30.0,
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut enemy = Enemy::spawn(kind, &mut rng);
        enemy.pos.y = y;
        if let Motion::Pulse { elapsed } = &mut enemy.motion {
            *elapsed = pulse_age;
        }
        let expected = y + speed_for_step(&enemy, dt) * dt > FIELD_HEIGHT;

        let wrapped = enemy.step(dt, &mut rng);
        prop_assert_eq!(wrapped, expected);
        if wrapped {
            prop_assert_eq!(enemy.pos.y, 0.0);
            prop_assert!(enemy.pos.x >= 0.0 && enemy.pos.x <= FIELD_WIDTH - ENEMY_SIZE);
        }
    }

    #[test]
    fn wrapped_enemies_land_on_the_field(
        seed in any::<u64>(),
        kind in kind_strategy(),
        steps in 1usize..400,
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut enemy = Enemy::spawn(kind, &mut rng);
        for _ in 0..steps {
            if enemy.step(1.0 / 30.0, &mut rng) {
                prop_assert_eq!(enemy.pos.y, 0.0);
                prop_assert!(enemy.pos.x >= 0.0 && enemy.pos.x <= FIELD_WIDTH - ENEMY_SIZE);
            } else {
                prop_assert!(enemy.pos.y <= FIELD_HEIGHT);
            }
        }
    }

    #[test]
    fn player_stays_within_field(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut player = Player::default();
        for op in ops {
            match op {
                Op::Press(dir) => player.press(dir),
                Op::Release(dir) => player.release(dir),
                Op::Step(dt) => player.step(dt),
            }
            prop_assert!(player.pos.x >= 0.0);
            prop_assert!(player.pos.x <= FIELD_WIDTH - player.size);
        }
    }

    #[test]
    fn separation_moves_close_pairs_apart(
        seed in any::<u64>(),
        x in 0.0f32..250.0,
        y in 0.0f32..550.0,
        angle in 0.0f32..std::f32::consts::TAU,
        gap in 0.5f32..74.0,
    ) {
        let min = ENEMY_SIZE * SEPARATION_FACTOR;
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut pair = vec![
            Enemy::spawn(EnemyKind::Red, &mut rng),
            Enemy::spawn(EnemyKind::Red, &mut rng),
        ];
        pair[0].pos = Vec2::new(x, y);
        pair[1].pos = pair[0].pos + Vec2::from_angle(angle) * gap;
        let before = pair[0].pos.distance(pair[1].pos);
        let away = (pair[1].pos - pair[0].pos).normalize();
        let anchor = pair[0].pos;

        apply_separation(&mut pair, min, &mut rng);

        let after = pair[0].pos.distance(pair[1].pos);
        prop_assert!(after > before);
        prop_assert!(after <= min + 0.01);
        // The first enemy holds still and the second moved away from it
        prop_assert!(pair[0].pos.distance(anchor) < 0.01);
        prop_assert!((pair[1].pos - anchor).dot(away) > before);
    }

    #[test]
    fn co_located_pair_is_displaced(seed in any::<u64>(), x in 0.0f32..250.0, y in 0.0f32..550.0) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut pair = vec![
            Enemy::spawn(EnemyKind::Yellow, &mut rng),
            Enemy::spawn(EnemyKind::Green, &mut rng),
        ];
        pair[0].pos = Vec2::new(x, y);
        pair[1].pos = Vec2::new(x, y);

        apply_separation(&mut pair, ENEMY_SIZE * SEPARATION_FACTOR, &mut rng);

        for enemy in &pair {
            prop_assert!(enemy.pos.is_finite());
        }
        prop_assert!(pair[0].pos.distance(pair[1].pos) > 1.0);
    }
}
