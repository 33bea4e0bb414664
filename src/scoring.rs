/// Per-level score rewards.

use crate::config::LEVEL_REWARDS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreEvent {
    EnemyKill,
    CollectiblePickup,
}

/// Rewards for one level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelRewards {
    pub enemy: u32,
    pub collectible: u32,
}

impl LevelRewards {
    pub fn for_event(&self, event: ScoreEvent) -> u32 {
        match event {
            ScoreEvent::EnemyKill => self.enemy,
            ScoreEvent::CollectiblePickup => self.collectible,
        }
    }
}

/// Read-only table keyed by 1-based level number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoringTable {
    rewards: Vec<LevelRewards>,
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self::new(LEVEL_REWARDS.to_vec())
    }
}

impl ScoringTable {
    pub fn new(rewards: Vec<LevelRewards>) -> Self {
        Self { rewards }
    }

    /// Rewards for `level` (1-based), or `None` past the table.
    pub fn rewards(&self, level: usize) -> Option<LevelRewards> {
        level
            .checked_sub(1)
            .and_then(|i| self.rewards.get(i))
            .copied()
    }

    /// Score for `event` happening during `level`. Unknown levels award
    /// nothing.
    pub fn reward(&self, level: usize, event: ScoreEvent) -> u32 {
        match self.rewards(level) {
            Some(r) => r.for_event(event),
            None => {
                tracing::warn!(level, ?event, "no scoring entry for level; awarding 0");
                0
            }
        }
    }
}
