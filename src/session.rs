/// The game session: owns every entity and drives one tick at a time.
///
/// All randomness is spent in [`GameSession::new`], when the level
/// manifests are rolled. Ticks, level loads and restarts are deterministic.

use rand::Rng;

use crate::camera::Camera;
use crate::collision;
use crate::config::{
    level_templates, SCREEN_HEIGHT, SCREEN_WIDTH, WORLD_HEIGHT, WORLD_WIDTH,
};
use crate::entities::{
    Collectible, EndReason, Enemy, EntityRef, GameStatus, Player, Projectile,
};
use crate::error::LevelError;
use crate::input::Input;
use crate::level::{LevelManager, Progress};
use crate::physics;
use crate::scoring::{ScoreEvent, ScoringTable};

#[derive(Clone, Debug)]
pub struct GameSession {
    player: Player,
    enemies: Vec<Enemy>,
    projectiles: Vec<Projectile>,
    collectibles: Vec<Collectible>,
    status: GameStatus,
    camera: Camera,
    /// Ticks processed since the last (re)start.
    frame: u64,
    levels: LevelManager,
    scoring: ScoringTable,
}

impl GameSession {
    /// Build a session over the reference level sequence, rolling all spawn
    /// positions from `rng` now.
    pub fn new(rng: &mut impl Rng) -> Result<Self, LevelError> {
        let levels = LevelManager::generate(&level_templates(), rng);
        Self::with_levels(levels, ScoringTable::default())
    }

    /// Build a session over an explicit level sequence and scoring table.
    pub fn with_levels(levels: LevelManager, scoring: ScoringTable) -> Result<Self, LevelError> {
        let mut session = Self {
            player: Player::default(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            collectibles: Vec::new(),
            status: GameStatus::Playing,
            camera: Camera::new(WORLD_WIDTH, WORLD_HEIGHT, SCREEN_WIDTH, SCREEN_HEIGHT),
            frame: 0,
            levels,
            scoring,
        };
        session.enter_level(0)?;
        session.camera.update(&session.player);
        Ok(session)
    }

    /// 0-based index of the current level.
    pub fn current_level(&self) -> usize {
        self.levels.current()
    }

    pub fn levels(&self) -> &LevelManager {
        &self.levels
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Live enemies, in spawn order.
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Ticks processed since the last (re)start.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    // ── Actions ──────────────────────────────────────────────────────────────

    /// Fire from the player's right edge. Ignored once the game is over.
    pub fn shoot(&mut self) {
        if self.is_game_over() {
            return;
        }
        let projectile = Projectile::fired_from(&self.player.rect());
        tracing::debug!(x = projectile.x, y = projectile.y, "projectile fired");
        self.projectiles.push(projectile);
    }

    /// Advance the simulation by one tick. A no-op once the game is over.
    pub fn tick(&mut self, input: &Input) {
        if self.is_game_over() {
            return;
        }
        self.frame += 1;

        if input.shoot {
            self.shoot();
        }

        // ── 1. Motion ────────────────────────────────────────────────────────
        physics::apply_physics(&mut self.player, input);
        physics::advance_enemies(&mut self.enemies);
        physics::advance_projectiles(&mut self.projectiles, WORLD_WIDTH);

        // ── 2. Collisions ────────────────────────────────────────────────────
        let level = self.current_level() + 1;
        collision::projectiles_vs_enemies(
            &mut self.projectiles,
            &mut self.enemies,
            &mut self.player,
            self.scoring.reward(level, ScoreEvent::EnemyKill),
        );
        let touched_enemy = collision::player_vs_enemies(&self.player, &self.enemies);
        // Pickups still count on the tick the player dies.
        collision::player_vs_collectibles(
            &mut self.player,
            &mut self.collectibles,
            self.scoring.reward(level, ScoreEvent::CollectiblePickup),
        );

        if touched_enemy {
            tracing::info!(level, score = self.player.score, "player defeated");
            self.status = GameStatus::GameOver(EndReason::Defeat);
        } else {
            // ── 3. Level progression ─────────────────────────────────────────
            self.check_progress();
        }

        // ── 4. Camera ────────────────────────────────────────────────────────
        self.camera.update(&self.player);
    }

    /// Throw away everything and start again from the first level. Spawn
    /// positions are the ones rolled when the session was created.
    pub fn restart(&mut self) {
        tracing::info!(score = self.player.score, "restarting session");
        self.player = Player::default();
        self.status = GameStatus::Playing;
        self.frame = 0;
        if let Err(err) = self.enter_level(0) {
            tracing::warn!(%err, "first level failed to load on restart");
        }
        self.camera.update(&self.player);
    }

    // ── Level flow ───────────────────────────────────────────────────────────

    /// Advance past every cleared level, or finish the game after the last.
    /// Levels without enemies are skipped in a loop, never by recursion.
    pub fn check_progress(&mut self) -> Option<Progress> {
        let mut progress = None;
        while LevelManager::is_cleared(&self.enemies) && !self.is_game_over() {
            match self.levels.advance() {
                Ok((enemies, collectibles)) => {
                    self.install(enemies, collectibles);
                    progress = Some(Progress::Advanced(self.current_level()));
                }
                Err(LevelError::FinalLevel { index }) => {
                    tracing::info!(level = index + 1, score = self.player.score, "all levels cleared");
                    self.status = GameStatus::GameOver(EndReason::Victory);
                    progress = Some(Progress::Complete);
                }
                Err(err) => {
                    tracing::warn!(%err, "level advance rejected");
                    break;
                }
            }
        }
        progress
    }

    fn enter_level(&mut self, index: usize) -> Result<(), LevelError> {
        let (enemies, collectibles) = self.levels.load(index)?;
        self.install(enemies, collectibles);
        Ok(())
    }

    /// Replace every live group; nothing from the previous level survives.
    fn install(&mut self, enemies: Vec<Enemy>, collectibles: Vec<Collectible>) {
        self.enemies = enemies;
        self.collectibles = collectibles;
        self.projectiles.clear();
    }

    // ── Read-only views for the render sink ──────────────────────────────────

    /// Every live entity, in draw order: player, enemies, collectibles,
    /// projectiles.
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        std::iter::once(EntityRef::Player(&self.player))
            .chain(self.enemies.iter().map(EntityRef::Enemy))
            .chain(self.collectibles.iter().map(EntityRef::Collectible))
            .chain(self.projectiles.iter().map(EntityRef::Projectile))
    }

    pub fn hud_lines(&self) -> [String; 4] {
        [
            format!("Health: {}", self.player.health),
            format!("Score: {}", self.player.score),
            format!("Level: {}", self.current_level() + 1),
            format!("Lives: {}", self.player.lives),
        ]
    }

    pub fn banner(&self) -> Option<&'static str> {
        self.status.end_reason().map(|reason| match reason {
            EndReason::Defeat => "Game Over",
            EndReason::Victory => "Congrats!",
        })
    }
}
