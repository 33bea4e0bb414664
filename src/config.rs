/// Build-time simulation constants.
///
/// Nothing here is runtime-configurable; the front-end only chooses the RNG
/// seed and the frame rate.

use std::ops::RangeInclusive;

use crate::level::LevelTemplate;
use crate::scoring::LevelRewards;

// ── Screen & world ───────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// The world is exactly one screen, so the camera never scrolls.
pub const WORLD_WIDTH: f32 = SCREEN_WIDTH;
pub const WORLD_HEIGHT: f32 = SCREEN_HEIGHT;

/// Top edge of anything standing on the floor.
pub const GROUND_LINE: f32 = SCREEN_HEIGHT - 100.0;

// ── Motion ───────────────────────────────────────────────────────────────────

pub const GRAVITY: f32 = 0.8;
pub const PLAYER_SPEED: f32 = 5.0;
pub const JUMP_STRENGTH: f32 = 15.0;
pub const PROJECTILE_SPEED: f32 = 10.0;
pub const ENEMY_SPEED: f32 = 3.0;

// ── Sizes (width, height) ────────────────────────────────────────────────────

pub const PLAYER_SIZE: (f32, f32) = (50.0, 50.0);
pub const ENEMY_SIZE: (f32, f32) = (40.0, 40.0);
pub const PROJECTILE_SIZE: (f32, f32) = (10.0, 5.0);
pub const COLLECTIBLE_SIZE: (f32, f32) = (20.0, 20.0);

pub const PLAYER_START_X: f32 = 50.0;

// ── Vitals ───────────────────────────────────────────────────────────────────

pub const MAX_HEALTH: u32 = 100;
pub const STARTING_HEALTH: u32 = 100;
pub const STARTING_LIVES: u32 = 3;
pub const HEAL_AMOUNT: u32 = 20;
pub const ENEMY_HEALTH: i32 = 50;
pub const DAMAGE_PER_HIT: i32 = 25;

// ── Levels ───────────────────────────────────────────────────────────────────

pub const LEVELS: usize = 3;

pub const ENEMY_SPAWN_X: RangeInclusive<i32> = 500..=800;
pub const COLLECTIBLE_SPAWN_X: RangeInclusive<i32> = 300..=800;

const ENEMY_COUNTS: [usize; LEVELS] = [3, 6, 8];

/// Kill / pickup rewards, indexed by `level number - 1`.
pub const LEVEL_REWARDS: [LevelRewards; LEVELS] = [
    LevelRewards { enemy: 10, collectible: 5 },
    LevelRewards { enemy: 20, collectible: 10 },
    LevelRewards { enemy: 30, collectible: 15 },
];

/// The reference level sequence: one collectible per level and an
/// increasing enemy count.
pub fn level_templates() -> Vec<LevelTemplate> {
    ENEMY_COUNTS
        .iter()
        .map(|&enemy_count| LevelTemplate {
            enemy_count,
            enemy_spawn_x: ENEMY_SPAWN_X,
            collectible_count: 1,
            collectible_spawn_x: COLLECTIBLE_SPAWN_X,
            spawn_y: GROUND_LINE,
        })
        .collect()
}
