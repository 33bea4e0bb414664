/// Pairwise overlap passes between entity groups.
///
/// The session runs them in this order every tick: projectiles against
/// enemies, the player against enemies, the player against collectibles.
/// Removal is done by retention, so an entity that is already gone can
/// never be removed (or scored) twice.

use crate::config::{DAMAGE_PER_HIT, HEAL_AMOUNT};
use crate::entities::{Collectible, Enemy, Player, Projectile};

/// Each projectile damages at most one enemy per tick: the first overlapping
/// enemy in spawn order. The projectile is consumed by the hit. Kills add
/// `kill_reward` to the player's score.
///
/// Returns the number of enemies killed.
pub fn projectiles_vs_enemies(
    projectiles: &mut Vec<Projectile>,
    enemies: &mut Vec<Enemy>,
    player: &mut Player,
    kill_reward: u32,
) -> usize {
    let mut kills = 0;
    projectiles.retain(|projectile| {
        let rect = projectile.rect();
        let Some(index) = enemies.iter().position(|e| e.rect().intersects(&rect)) else {
            return true;
        };
        if enemies[index].take_damage(DAMAGE_PER_HIT) {
            enemies.remove(index);
            player.add_score(kill_reward);
            kills += 1;
            tracing::debug!(reward = kill_reward, score = player.score, "enemy destroyed");
        }
        false
    });
    kills
}

/// Any contact with an enemy is fatal. Nothing is removed or damaged.
pub fn player_vs_enemies(player: &Player, enemies: &[Enemy]) -> bool {
    let rect = player.rect();
    enemies.iter().any(|e| e.rect().intersects(&rect))
}

/// Every collectible the player overlaps this tick is consumed: it heals
/// the player (capped) and adds `pickup_reward` to the score.
///
/// Returns the number of pickups.
pub fn player_vs_collectibles(
    player: &mut Player,
    collectibles: &mut Vec<Collectible>,
    pickup_reward: u32,
) -> usize {
    let rect = player.rect();
    let before = collectibles.len();
    collectibles.retain(|c| !c.rect().intersects(&rect));
    let picked = before - collectibles.len();
    for _ in 0..picked {
        player.heal(HEAL_AMOUNT);
        player.add_score(pickup_reward);
    }
    if picked > 0 {
        tracing::debug!(
            picked,
            health = player.health,
            score = player.score,
            "collectibles picked up"
        );
    }
    picked
}
