//! Per-match configuration
//!
//! A `MatchConfig` is handed to `GameState` at construction and never changes
//! for the lifetime of the match. It deserializes with defaults for every
//! missing field, so an empty document is a valid config.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::units::Unit;

/// What an ability hook a unit kind does not override produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HookMode {
    /// Unoverridden hooks produce nothing.
    #[default]
    Silent,
    /// Unoverridden hooks produce a "Do Nothing" placeholder so resolution
    /// order shows up in the logs.
    Verbose,
}

/// Which stat decides who acts first when two units act at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriorityRule {
    /// Higher `current_attack` acts first.
    #[default]
    Attack,
    /// Higher `current_attack + current_health` acts first.
    TotalStats,
}

impl PriorityRule {
    pub fn score(&self, unit: &Unit) -> i64 {
        match self {
            PriorityRule::Attack => unit.current_attack() as i64,
            PriorityRule::TotalStats => unit.current_attack() as i64 + unit.current_health() as i64,
        }
    }

    /// `Greater` when `a` should act before `b`. `Equal` is left to the caller
    /// to break.
    pub fn compare(&self, a: &Unit, b: &Unit) -> Ordering {
        self.score(a).cmp(&self.score(b))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfig {
    pub hook_mode: HookMode,
    pub priority: PriorityRule,
    /// Seed for priority tie-breaks and random target selection.
    pub seed: u64,
}

impl MatchConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_hook_mode(mut self, hook_mode: HookMode) -> Self {
        self.hook_mode = hook_mode;
        self
    }

    pub fn with_priority(mut self, priority: PriorityRule) -> Self {
        self.priority = priority;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            hook_mode: HookMode::Silent,
            priority: PriorityRule::Attack,
            seed: 42,
        }
    }
}
