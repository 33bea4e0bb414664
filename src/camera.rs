/// Scrolling camera: a translation that keeps the player centred without
/// showing anything outside the world.

use crate::entities::{EntityRef, Player, Rect};

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    world_width: f32,
    world_height: f32,
    screen_width: f32,
    screen_height: f32,
}

impl Camera {
    pub fn new(world_width: f32, world_height: f32, screen_width: f32, screen_height: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            world_width,
            world_height,
            screen_width,
            screen_height,
        }
    }

    /// Re-centre on `player`, clamped to `[-(world - screen), 0]` per axis.
    pub fn update(&mut self, player: &Player) {
        self.offset_x = clamp_axis(
            -player.x + (self.screen_width / 2.0).trunc(),
            self.world_width,
            self.screen_width,
        );
        self.offset_y = clamp_axis(
            -player.y + (self.screen_height / 2.0).trunc(),
            self.world_height,
            self.screen_height,
        );
    }

    /// Screen-space rectangle for `entity`. Never touches the entity.
    pub fn apply(&self, entity: EntityRef<'_>) -> Rect {
        self.apply_rect(&entity.rect())
    }

    pub fn apply_rect(&self, rect: &Rect) -> Rect {
        rect.translated(self.offset_x, self.offset_y)
    }
}

// Upper bound first, then the lower one, so a world smaller than the screen
// settles on the positive side.
fn clamp_axis(offset: f32, world: f32, screen: f32) -> f32 {
    offset.min(0.0).max(-(world - screen))
}
