use side_scroller::camera::*;
use side_scroller::config::*;
use side_scroller::entities::*;

fn player_at(x: f32, y: f32) -> Player {
    Player { x, y, ..Player::default() }
}

#[test]
fn world_equal_to_screen_never_scrolls() {
    let mut camera = Camera::new(WORLD_WIDTH, WORLD_HEIGHT, SCREEN_WIDTH, SCREEN_HEIGHT);
    for x in (-2_000..=2_000).step_by(125) {
        for y in (-1_000..=1_000).step_by(125) {
            camera.update(&player_at(x as f32, y as f32));
            assert_eq!(camera.offset_x, 0.0);
            assert_eq!(camera.offset_y, 0.0);
        }
    }
}

#[test]
fn larger_world_centres_on_player() {
    let mut camera = Camera::new(2_000.0, 1_200.0, SCREEN_WIDTH, SCREEN_HEIGHT);
    camera.update(&player_at(1_000.0, 500.0));
    assert_eq!(camera.offset_x, -600.0);
    assert_eq!(camera.offset_y, -200.0);
}

#[test]
fn larger_world_clamps_at_both_ends() {
    let mut camera = Camera::new(2_000.0, 1_200.0, SCREEN_WIDTH, SCREEN_HEIGHT);

    camera.update(&player_at(0.0, 0.0));
    assert_eq!(camera.offset_x, 0.0);
    assert_eq!(camera.offset_y, 0.0);

    camera.update(&player_at(5_000.0, 5_000.0));
    assert_eq!(camera.offset_x, -1_200.0);
    assert_eq!(camera.offset_y, -600.0);
}

#[test]
fn apply_translates_without_touching_the_entity() {
    let mut camera = Camera::new(2_000.0, 1_200.0, SCREEN_WIDTH, SCREEN_HEIGHT);
    camera.update(&player_at(1_000.0, 500.0));

    let enemy = Enemy::new(700.0, 300.0);
    let on_screen = camera.apply(EntityRef::Enemy(&enemy));

    assert_eq!(on_screen, Rect::new(100.0, 100.0, 40.0, 40.0));
    assert_eq!(enemy, Enemy::new(700.0, 300.0));
}
