/// Per-tick motion: the player's walk/jump/gravity step and the straight-line
/// travel of projectiles and enemies.

use crate::config::{
    ENEMY_SPEED, GRAVITY, GROUND_LINE, JUMP_STRENGTH, PLAYER_SPEED, PROJECTILE_SPEED,
};
use crate::entities::{Enemy, Player, Projectile};
use crate::input::Input;

/// Advance the player by one tick.
///
/// Horizontal speed is taken from the input each tick, never accumulated;
/// right wins when both directions are held. There is no horizontal clamp.
pub fn apply_physics(player: &mut Player, input: &Input) {
    player.speed_x = 0.0;
    if input.left {
        player.speed_x = -PLAYER_SPEED;
    }
    if input.right {
        player.speed_x = PLAYER_SPEED;
    }
    if input.jump && player.on_ground {
        player.speed_y = -JUMP_STRENGTH;
    }
    player.x += player.speed_x;

    if !player.on_ground {
        player.speed_y += GRAVITY;
    }
    player.y += player.speed_y;

    if player.y >= GROUND_LINE {
        player.y = GROUND_LINE;
        player.on_ground = true;
        player.speed_y = 0.0;
    } else {
        player.on_ground = false;
    }
}

/// Move every projectile right and drop those past `world_right`.
pub fn advance_projectiles(projectiles: &mut Vec<Projectile>, world_right: f32) {
    projectiles.retain_mut(|p| {
        p.x += PROJECTILE_SPEED;
        p.x <= world_right
    });
}

/// Move every enemy left and drop those past the left world edge.
/// Escaped enemies score nothing.
pub fn advance_enemies(enemies: &mut Vec<Enemy>) {
    enemies.retain_mut(|e| {
        e.x -= ENEMY_SPEED;
        e.x >= 0.0
    });
}
