/// All simulated entity types: pure data plus the few invariant-keeping
/// mutators (healing, scoring, damage).

use crate::config::{
    COLLECTIBLE_SIZE, ENEMY_HEALTH, ENEMY_SIZE, GROUND_LINE, MAX_HEALTH, PLAYER_SIZE,
    PLAYER_START_X, PROJECTILE_SIZE, STARTING_HEALTH, STARTING_LIVES,
};

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in world pixels; `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

// ── Game status ──────────────────────────────────────────────────────────────

/// Why the session ended; picks which end banner is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// The player touched an enemy.
    Defeat,
    /// The final level was cleared.
    Victory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver(EndReason),
}

impl GameStatus {
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameStatus::GameOver(_))
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self {
            GameStatus::Playing => None,
            GameStatus::GameOver(reason) => Some(*reason),
        }
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub on_ground: bool,
    /// Always within `0..=MAX_HEALTH`.
    pub health: u32,
    /// Shown on the HUD only; nothing ever takes a life away.
    pub lives: u32,
    pub score: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_START_X,
            y: GROUND_LINE,
            speed_x: 0.0,
            speed_y: 0.0,
            on_ground: true,
            health: STARTING_HEALTH,
            lives: STARTING_LIVES,
            score: 0,
        }
    }
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_SIZE.0, PLAYER_SIZE.1)
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(MAX_HEALTH);
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

// ── Enemy ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub health: i32,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            health: ENEMY_HEALTH,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_SIZE.0, ENEMY_SIZE.1)
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Applies `damage` and returns `true` only on the hit that kills.
    /// Hits on an already-dead enemy change nothing.
    pub fn take_damage(&mut self, damage: i32) -> bool {
        if self.is_dead() {
            return false;
        }
        self.health = self.health.saturating_sub(damage.max(1));
        self.is_dead()
    }
}

// ── Projectile ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
}

impl Projectile {
    /// A projectile leaving from the shooter's right edge at mid height.
    pub fn fired_from(shooter: &Rect) -> Self {
        Self {
            x: shooter.right(),
            y: shooter.center_y(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PROJECTILE_SIZE.0, PROJECTILE_SIZE.1)
    }
}

// ── Collectible ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    pub x: f32,
    pub y: f32,
}

impl Collectible {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, COLLECTIBLE_SIZE.0, COLLECTIBLE_SIZE.1)
    }
}

// ── Closed entity variant ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Enemy,
    Projectile,
    Collectible,
}

/// Borrowed view of any live entity, handed to renderers.
#[derive(Clone, Copy, Debug)]
pub enum EntityRef<'a> {
    Player(&'a Player),
    Enemy(&'a Enemy),
    Projectile(&'a Projectile),
    Collectible(&'a Collectible),
}

impl EntityRef<'_> {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Player(_) => EntityKind::Player,
            EntityRef::Enemy(_) => EntityKind::Enemy,
            EntityRef::Projectile(_) => EntityKind::Projectile,
            EntityRef::Collectible(_) => EntityKind::Collectible,
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            EntityRef::Player(p) => p.rect(),
            EntityRef::Enemy(e) => e.rect(),
            EntityRef::Projectile(p) => p.rect(),
            EntityRef::Collectible(c) => c.rect(),
        }
    }
}
