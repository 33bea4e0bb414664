use side_scroller::config::*;
use side_scroller::entities::Enemy;
use side_scroller::error::LevelError;
use side_scroller::level::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn manager() -> LevelManager {
    LevelManager::generate(&level_templates(), &mut seeded_rng())
}

#[test]
fn reference_templates_match_configuration() {
    let templates = level_templates();
    let counts: Vec<usize> = templates.iter().map(|t| t.enemy_count).collect();
    assert_eq!(counts, vec![3, 6, 8]);
    assert!(templates.iter().all(|t| t.collectible_count == 1));
    assert_eq!(templates.len(), LEVELS);
}

#[test]
fn manifests_respect_spawn_ranges() {
    let levels = manager();
    for index in 0..levels.level_count() {
        let m = levels.manifest(index).unwrap();
        for &(x, y) in &m.enemy_spawns {
            assert!((500.0..=800.0).contains(&x));
            assert_eq!(y, GROUND_LINE);
        }
        for &(x, y) in &m.collectible_spawns {
            assert!((300.0..=800.0).contains(&x));
            assert_eq!(y, GROUND_LINE);
        }
    }
}

#[test]
fn same_seed_rolls_same_levels() {
    let a = manager();
    let b = manager();
    for index in 0..LEVELS {
        assert_eq!(a.manifest(index).unwrap(), b.manifest(index).unwrap());
    }
}

#[test]
fn load_rehydrates_identical_fresh_entities() {
    let mut levels = manager();
    let (first_enemies, first_items) = levels.load(0).unwrap();
    let (again_enemies, again_items) = levels.load(0).unwrap();

    assert_eq!(first_enemies, again_enemies);
    assert_eq!(first_items, again_items);
    assert_eq!(first_enemies.len(), 3);
    assert!(first_enemies.iter().all(|e| e.health == ENEMY_HEALTH));

    let spawns = &levels.manifest(0).unwrap().enemy_spawns;
    for (enemy, &(x, y)) in first_enemies.iter().zip(spawns) {
        assert_eq!((enemy.x, enemy.y), (x, y));
    }
}

#[test]
fn load_rejects_out_of_range_index() {
    let mut levels = manager();
    assert_eq!(
        levels.load(LEVELS).unwrap_err(),
        LevelError::IndexOutOfRange { index: 3, count: 3 }
    );
    assert_eq!(levels.current(), 0);
}

#[test]
fn advance_walks_levels_then_stops_at_the_last() {
    let mut levels = manager();
    assert_eq!(levels.current(), 0);
    assert!(!levels.is_final());

    let (enemies, _) = levels.advance().unwrap();
    assert_eq!(levels.current(), 1);
    assert_eq!(enemies.len(), 6);

    let (enemies, _) = levels.advance().unwrap();
    assert_eq!(levels.current(), 2);
    assert_eq!(enemies.len(), 8);
    assert!(levels.is_final());

    assert_eq!(levels.advance().unwrap_err(), LevelError::FinalLevel { index: 2 });
    assert_eq!(levels.current(), 2);
}

#[test]
fn errors_describe_themselves() {
    let err = LevelError::IndexOutOfRange { index: 7, count: 3 };
    assert_eq!(err.to_string(), "level index 7 out of range (have 3 levels)");
    let err = LevelError::FinalLevel { index: 2 };
    assert_eq!(err.to_string(), "cannot advance past the final level (index 2)");
}

#[test]
fn empty_sequence_has_nothing_to_load() {
    let mut levels = LevelManager::from_manifests(Vec::new());
    assert!(levels.is_final());
    assert!(matches!(levels.load(0), Err(LevelError::IndexOutOfRange { .. })));
}

#[test]
fn level_is_cleared_once_no_live_enemy_remains() {
    let mut levels = manager();
    let (mut enemies, _) = levels.load(0).unwrap();
    assert!(!LevelManager::is_cleared(&enemies));

    enemies.truncate(1);
    assert!(!LevelManager::is_cleared(&enemies));

    enemies[0].take_damage(ENEMY_HEALTH);
    assert!(LevelManager::is_cleared(&enemies));

    enemies.clear();
    assert!(LevelManager::is_cleared(&enemies));
    assert!(!LevelManager::is_cleared(&[Enemy::new(700.0, GROUND_LINE)]));
}
