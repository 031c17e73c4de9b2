//! Session tuning knobs
//!
//! Every field has a default taken from the classic timing table in
//! `blockfall_types`, so a config file only needs to name what it changes.

use serde::{Deserialize, Serialize};

use crate::generator::RandomizerKind;
use crate::types::{
    BASE_FALL_MS, FALL_STEP_MS, MIN_FALL_MS, MOVE_REPEAT_MS, SOFT_DROP_REPEAT_MS,
};

/// Level-driven gravity curve: `max(min_ms, base_ms - (level - 1) * step_ms)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallCurve {
    pub base_ms: u32,
    pub step_ms: u32,
    pub min_ms: u32,
}

impl Default for FallCurve {
    fn default() -> Self {
        Self {
            base_ms: BASE_FALL_MS,
            step_ms: FALL_STEP_MS,
            min_ms: MIN_FALL_MS,
        }
    }
}

/// Repeat intervals for held keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepeatIntervals {
    /// Left/right
    pub move_ms: u32,
    pub soft_drop_ms: u32,
}

impl Default for RepeatIntervals {
    fn default() -> Self {
        Self {
            move_ms: MOVE_REPEAT_MS,
            soft_drop_ms: SOFT_DROP_REPEAT_MS,
        }
    }
}

/// Everything a [`GameSession`](crate::GameSession) needs besides its generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub randomizer: RandomizerKind,
    /// Fixed seed for reproducible games; OS entropy when absent
    pub seed: Option<u64>,
    pub fall: FallCurve,
    pub repeat: RepeatIntervals,
}

impl SessionConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_randomizer(mut self, randomizer: RandomizerKind) -> Self {
        self.randomizer = randomizer;
        self
    }
}
