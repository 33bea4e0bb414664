/// Level sequence: declarative templates, the spawn manifests rolled from
/// them once per session, and the index state machine that walks through
/// them.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::entities::{Collectible, Enemy};
use crate::error::LevelError;

/// What a level contains, before any randomness is applied.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelTemplate {
    pub enemy_count: usize,
    pub enemy_spawn_x: RangeInclusive<i32>,
    pub collectible_count: usize,
    pub collectible_spawn_x: RangeInclusive<i32>,
    /// Every spawn sits on this line.
    pub spawn_y: f32,
}

/// Concrete spawn coordinates for one level. Generated once and replayed
/// unchanged on every load.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelManifest {
    pub enemy_spawns: Vec<(f32, f32)>,
    pub collectible_spawns: Vec<(f32, f32)>,
}

impl LevelManifest {
    pub fn generate(template: &LevelTemplate, rng: &mut impl Rng) -> Self {
        let enemy_spawns = (0..template.enemy_count)
            .map(|_| {
                let x = rng.gen_range(template.enemy_spawn_x.clone());
                (x as f32, template.spawn_y)
            })
            .collect();
        let collectible_spawns = (0..template.collectible_count)
            .map(|_| {
                let x = rng.gen_range(template.collectible_spawn_x.clone());
                (x as f32, template.spawn_y)
            })
            .collect();
        Self {
            enemy_spawns,
            collectible_spawns,
        }
    }

    /// Fresh entities for this level, in spawn order.
    pub fn instantiate(&self) -> (Vec<Enemy>, Vec<Collectible>) {
        let enemies = self
            .enemy_spawns
            .iter()
            .map(|&(x, y)| Enemy::new(x, y))
            .collect();
        let collectibles = self
            .collectible_spawns
            .iter()
            .map(|&(x, y)| Collectible { x, y })
            .collect();
        (enemies, collectibles)
    }
}

/// Result of checking a cleared level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Moved on to the level at this index.
    Advanced(usize),
    /// The final level was cleared.
    Complete,
}

/// Owns the manifests and the current level index.
#[derive(Clone, Debug)]
pub struct LevelManager {
    manifests: Vec<LevelManifest>,
    current: usize,
}

impl LevelManager {
    /// Roll every level's manifest up front.
    pub fn generate(templates: &[LevelTemplate], rng: &mut impl Rng) -> Self {
        let manifests = templates
            .iter()
            .map(|t| LevelManifest::generate(t, rng))
            .collect();
        Self::from_manifests(manifests)
    }

    pub fn from_manifests(manifests: Vec<LevelManifest>) -> Self {
        Self {
            manifests,
            current: 0,
        }
    }

    /// 0-based index of the level being played.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn level_count(&self) -> usize {
        self.manifests.len()
    }

    pub fn is_final(&self) -> bool {
        self.current + 1 >= self.manifests.len()
    }

    /// A level is cleared once none of its enemies are left alive on screen,
    /// whether they were shot or walked off the left edge.
    pub fn is_cleared(enemies: &[Enemy]) -> bool {
        enemies.iter().all(Enemy::is_dead)
    }

    pub fn manifest(&self, index: usize) -> Result<&LevelManifest, LevelError> {
        self.manifests.get(index).ok_or(LevelError::IndexOutOfRange {
            index,
            count: self.manifests.len(),
        })
    }

    /// Make `index` current and return its fresh entities.
    pub fn load(&mut self, index: usize) -> Result<(Vec<Enemy>, Vec<Collectible>), LevelError> {
        let spawned = self.manifest(index)?.instantiate();
        self.current = index;
        tracing::info!(
            level = index + 1,
            enemies = spawned.0.len(),
            collectibles = spawned.1.len(),
            "level loaded"
        );
        Ok(spawned)
    }

    /// Step to the next level. Rejected at the final index.
    pub fn advance(&mut self) -> Result<(Vec<Enemy>, Vec<Collectible>), LevelError> {
        if self.is_final() {
            return Err(LevelError::FinalLevel {
                index: self.current,
            });
        }
        self.load(self.current + 1)
    }
}
