//! Held-key repeat timers
//!
//! An explicit table from logical action to the session-clock time it last
//! fired. A held action is due when it has never fired, or when strictly more
//! than its interval has passed since it last did. The timestamp is only
//! written when the action actually moved the piece, so a blocked move is
//! retried every tick until it succeeds or the key is released.

use arrayvec::ArrayVec;

use crate::config::RepeatIntervals;
use crate::types::GameAction;

/// Number of actions that can be held at once
pub const MAX_HELD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeldKey {
    action: GameAction,
    last_fired_ms: Option<u64>,
}

/// Per-action repeat state, in press order
#[derive(Debug, Clone, Default)]
pub struct RepeatTimers {
    held: ArrayVec<HeldKey, MAX_HELD>,
}

impl RepeatTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repeat interval for `action`, or `None` if it never repeats
    pub fn interval_for(action: GameAction, intervals: &RepeatIntervals) -> Option<u32> {
        match action {
            GameAction::MoveLeft | GameAction::MoveRight => Some(intervals.move_ms),
            GameAction::SoftDrop => Some(intervals.soft_drop_ms),
            _ => None,
        }
    }

    /// Start tracking a held action.
    ///
    /// Returns `true` only for a newly held repeatable action; repeated
    /// presses of a key that is already held are absorbed.
    pub fn hold(&mut self, action: GameAction) -> bool {
        if !action.repeats() || self.is_held(action) {
            return false;
        }
        self.held
            .try_push(HeldKey {
                action,
                last_fired_ms: None,
            })
            .is_ok()
    }

    /// Forget a held action. Returns whether it was held.
    pub fn release(&mut self, action: GameAction) -> bool {
        match self.held.iter().position(|key| key.action == action) {
            Some(pos) => {
                self.held.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn is_held(&self, action: GameAction) -> bool {
        self.held.iter().any(|key| key.action == action)
    }

    pub fn last_fired_ms(&self, action: GameAction) -> Option<u64> {
        self.held
            .iter()
            .find(|key| key.action == action)
            .and_then(|key| key.last_fired_ms)
    }

    /// Held actions that should fire at `now_ms`, in press order
    pub fn due(&self, now_ms: u64, intervals: &RepeatIntervals) -> ArrayVec<GameAction, MAX_HELD> {
        self.held
            .iter()
            .filter(|key| {
                let Some(interval) = Self::interval_for(key.action, intervals) else {
                    return false;
                };
                match key.last_fired_ms {
                    None => true,
                    Some(last) => now_ms.saturating_sub(last) > u64::from(interval),
                }
            })
            .map(|key| key.action)
            .collect()
    }

    /// Record that `action` had an effect at `now_ms`
    pub fn mark_fired(&mut self, action: GameAction, now_ms: u64) {
        if let Some(key) = self.held.iter_mut().find(|key| key.action == action) {
            key.last_fired_ms = Some(now_ms);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Release everything
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
