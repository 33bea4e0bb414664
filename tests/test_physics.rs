use side_scroller::config::*;
use side_scroller::entities::*;
use side_scroller::input::Input;
use side_scroller::physics::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn held(left: bool, right: bool, jump: bool) -> Input {
    Input { left, right, jump, shoot: false }
}

// ── Horizontal ────────────────────────────────────────────────────────────────

#[test]
fn idle_player_stays_on_ground() {
    let mut p = Player::default();
    apply_physics(&mut p, &Input::idle());
    assert_eq!(p.x, PLAYER_START_X);
    assert_eq!(p.y, GROUND_LINE);
    assert!(p.on_ground);
    assert_eq!(p.speed_y, 0.0);
}

#[test]
fn left_and_right_set_speed() {
    let mut p = Player::default();
    apply_physics(&mut p, &held(true, false, false));
    assert_eq!(p.speed_x, -PLAYER_SPEED);
    assert_eq!(p.x, PLAYER_START_X - PLAYER_SPEED);

    let mut p = Player::default();
    apply_physics(&mut p, &held(false, true, false));
    assert_eq!(p.speed_x, PLAYER_SPEED);
    assert_eq!(p.x, PLAYER_START_X + PLAYER_SPEED);
}

#[test]
fn right_wins_when_both_held() {
    let mut p = Player::default();
    apply_physics(&mut p, &held(true, true, false));
    assert_eq!(p.speed_x, PLAYER_SPEED);
}

#[test]
fn horizontal_speed_is_not_accumulated() {
    let mut p = Player::default();
    apply_physics(&mut p, &held(false, true, false));
    apply_physics(&mut p, &held(false, true, false));
    assert_eq!(p.x, PLAYER_START_X + 2.0 * PLAYER_SPEED);
    apply_physics(&mut p, &Input::idle());
    assert_eq!(p.speed_x, 0.0);
    assert_eq!(p.x, PLAYER_START_X + 2.0 * PLAYER_SPEED);
}

#[test]
fn player_can_walk_off_the_left_edge() {
    let mut p = Player::default();
    for _ in 0..20 {
        apply_physics(&mut p, &held(true, false, false));
    }
    assert_eq!(p.x, PLAYER_START_X - 20.0 * PLAYER_SPEED);
    assert!(p.x < 0.0);
}

// ── Vertical ──────────────────────────────────────────────────────────────────

#[test]
fn jump_launches_from_ground() {
    let mut p = Player::default();
    apply_physics(&mut p, &held(false, false, true));
    assert_eq!(p.speed_y, -JUMP_STRENGTH);
    assert!(approx(p.y, GROUND_LINE - JUMP_STRENGTH));
    assert!(!p.on_ground);

    // Gravity kicks in on the next tick
    apply_physics(&mut p, &Input::idle());
    assert!(approx(p.speed_y, -JUMP_STRENGTH + GRAVITY));
    assert!(approx(p.y, GROUND_LINE - JUMP_STRENGTH - JUMP_STRENGTH + GRAVITY));
}

#[test]
fn jump_is_ignored_in_the_air() {
    let mut p = Player::default();
    apply_physics(&mut p, &held(false, false, true));
    let before = p.speed_y;
    apply_physics(&mut p, &held(false, false, true));
    assert!(approx(p.speed_y, before + GRAVITY));
}

#[test]
fn jump_arc_lands_back_on_ground() {
    let mut p = Player::default();
    apply_physics(&mut p, &held(false, false, true));
    let mut landed = false;
    for _ in 0..100 {
        apply_physics(&mut p, &Input::idle());
        assert!(p.y <= GROUND_LINE);
        assert_eq!(p.on_ground, p.y == GROUND_LINE);
        if p.on_ground {
            landed = true;
            break;
        }
    }
    assert!(landed);
    assert_eq!(p.speed_y, 0.0);
}

#[test]
fn ground_clamp_holds_for_any_fall_speed() {
    for speed in [0.5_f32, 5.0, 80.0, 1_000.0, 1.0e6] {
        let mut p = Player {
            y: 100.0,
            speed_y: speed,
            on_ground: false,
            ..Player::default()
        };
        for _ in 0..200 {
            apply_physics(&mut p, &Input::idle());
            assert!(p.y <= GROUND_LINE);
            assert_eq!(p.on_ground, p.y == GROUND_LINE);
        }
        assert!(p.on_ground);
    }
}

// ── Projectiles & enemies ─────────────────────────────────────────────────────

#[test]
fn projectiles_move_right_and_leave_past_world_edge() {
    let mut shots = vec![
        Projectile { x: 100.0, y: 0.0 },
        Projectile { x: 790.0, y: 0.0 },
        Projectile { x: 795.0, y: 0.0 },
    ];
    advance_projectiles(&mut shots, WORLD_WIDTH);
    assert_eq!(shots.len(), 2);
    assert_eq!(shots[0].x, 100.0 + PROJECTILE_SPEED);
    assert_eq!(shots[1].x, 800.0); // exactly on the edge stays
    assert_eq!(shots[0].y, 0.0);
}

#[test]
fn enemies_move_left_and_leave_past_zero() {
    let mut enemies = vec![
        Enemy::new(500.0, GROUND_LINE),
        Enemy::new(3.0, GROUND_LINE),
        Enemy::new(2.0, GROUND_LINE),
    ];
    advance_enemies(&mut enemies);
    assert_eq!(enemies.len(), 2);
    assert_eq!(enemies[0].x, 500.0 - ENEMY_SPEED);
    assert_eq!(enemies[1].x, 0.0);
    assert_eq!(enemies[0].y, GROUND_LINE);
}
