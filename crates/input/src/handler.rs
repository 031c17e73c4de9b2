//! Held-key tracking for terminal environments.
//!
//! Terminals with the keyboard enhancement protocol report key releases;
//! most others only send a fresh press for every OS auto-repeat. The handler
//! turns both into a clean press/release stream for the game session, and
//! auto-releases a held key that has not been seen for a while.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Default time a held key survives without a fresh press or repeat event
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Most keys that can be held at once (left, right, soft drop)
pub const MAX_HELD: usize = 3;

/// A press/release edge for the game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Press(GameAction),
    Release(GameAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeldKey {
    action: GameAction,
    /// Milliseconds since the last press or repeat event for this key
    idle_ms: u32,
}

/// Tracks which repeatable keys are currently held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: ArrayVec<HeldKey, MAX_HELD>,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn is_held(&self, action: GameAction) -> bool {
        self.held.iter().any(|key| key.action == action)
    }

    /// Translate a terminal key event.
    ///
    /// Returns `None` for unmapped keys and for auto-repeats of a key that is
    /// already held; those only keep the key alive.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<KeyInput> {
        let action = handle_key_event(key)?;
        match key.kind {
            KeyEventKind::Release => self
                .handle_release(action)
                .then_some(KeyInput::Release(action)),
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_press(action),
        }
    }

    fn handle_press(&mut self, action: GameAction) -> Option<KeyInput> {
        if !action.repeats() {
            return Some(KeyInput::Press(action));
        }
        if let Some(key) = self.held.iter_mut().find(|key| key.action == action) {
            key.idle_ms = 0;
            return None;
        }
        let _ = self.held.try_push(HeldKey { action, idle_ms: 0 });
        Some(KeyInput::Press(action))
    }

    fn handle_release(&mut self, action: GameAction) -> bool {
        match self.held.iter().position(|key| key.action == action) {
            Some(pos) => {
                self.held.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Age held keys by `elapsed_ms` and return those that timed out.
    ///
    /// The caller forwards each returned action to the session as a release.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, MAX_HELD> {
        let mut released = ArrayVec::new();
        let timeout = self.key_release_timeout_ms;
        self.held.retain(|key| {
            key.idle_ms = key.idle_ms.saturating_add(elapsed_ms);
            if key.idle_ms > timeout {
                released.push(key.action);
                false
            } else {
                true
            }
        });
        released
    }

    /// Stop tracking `action` without emitting a release.
    ///
    /// Used when the session refused the press, so the next press or
    /// auto-repeat event for the key is forwarded again.
    pub fn forget(&mut self, action: GameAction) -> bool {
        self.handle_release(action)
    }

    /// Forget every held key and return them
    pub fn reset(&mut self) -> ArrayVec<GameAction, MAX_HELD> {
        self.held.drain(..).map(|key| key.action).collect()
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
