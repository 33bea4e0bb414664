/// Player intent: the per-tick [`Input`] sample and the [`HeldKeys`]
/// tracker the front-end builds it from.

use std::collections::HashMap;
use std::hash::Hash;

/// One tick's worth of player intent.
///
/// `left`, `right` and `jump` are held states; `shoot` is true only on the
/// tick the fire key went down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub shoot: bool,
}

impl Input {
    pub fn idle() -> Self {
        Self::default()
    }
}

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A key counts as held if its last press/repeat arrived within this many
/// frames. Covers terminals that never send key-release events: at 60 FPS,
/// 8 frames (≈133 ms) outlasts the OS key-repeat interval.
pub const HOLD_WINDOW: u64 = 8;

/// Maps each held key to the frame it was last seen.
///
/// Terminals without key-release reporting deliver a held key as a stream of
/// presses, so a press of a key that is still held is treated as a repeat.
#[derive(Clone, Debug)]
pub struct HeldKeys<K> {
    last_seen: HashMap<K, u64>,
    window: u64,
}

impl<K: Hash + Eq + Copy> Default for HeldKeys<K> {
    fn default() -> Self {
        Self::new(HOLD_WINDOW)
    }
}

impl<K: Hash + Eq + Copy> HeldKeys<K> {
    pub fn new(window: u64) -> Self {
        Self {
            last_seen: HashMap::new(),
            window,
        }
    }

    /// Record a press at `frame`. Returns `true` only for a fresh press,
    /// i.e. when `key` was not already held.
    pub fn press(&mut self, key: K, frame: u64) -> bool {
        let fresh = !self.is_held(key, frame);
        self.last_seen.insert(key, frame);
        fresh
    }

    /// Refresh the timestamp so the key stays held.
    pub fn repeat(&mut self, key: K, frame: u64) {
        self.last_seen.insert(key, frame);
    }

    pub fn release(&mut self, key: K) {
        self.last_seen.remove(&key);
    }

    pub fn is_held(&self, key: K, frame: u64) -> bool {
        self.last_seen
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= self.window)
            .unwrap_or(false)
    }

    pub fn any_held(&self, keys: &[K], frame: u64) -> bool {
        keys.iter().any(|&k| self.is_held(k, frame))
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}
