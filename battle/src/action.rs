//! Deferred actions
//!
//! An [`Action`] is a state mutation scheduled on the resolution queue and run
//! later against the whole match. The mutation itself is a plain [`Effect`]
//! value, so actions compare, log and serialize without inspecting code.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Trigger, UnitId};
use crate::units::Unit;

/// The state change an action performs when it runs.
///
/// Targets are unit handles or positions, looked up when the effect runs, not
/// when it was scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    /// Placeholder with no effect
    Nothing,
    /// Subtract `amount` from the target's temporary health, then queue its
    /// faint or hurt hook
    TakeDamage { target: UnitId, amount: i32 },
    /// Clear the target's roster slot
    RemoveUnit { target: UnitId },
    /// Buff `count` random friends on the source's side
    BuffRandom { count: usize, attack: i32, health: i32 },
    /// Buff the friends at fixed slots on the source's side
    BuffPositions {
        positions: Vec<usize>,
        attack: i32,
        health: i32,
    },
    /// Queue the target's hook for `trigger`
    Fire { target: UnitId, trigger: Trigger },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub effect: Effect,
    /// Unit whose ability produced this action.
    pub source: Option<UnitId>,
    /// Source's name when the action was built, for logs.
    pub source_name: Option<String>,
    pub description: String,
    /// Set by whoever enqueues the action.
    pub trigger: Trigger,
}

impl Action {
    pub fn new(effect: Effect, description: &str, source: Option<&Unit>) -> Self {
        Self {
            effect,
            source: source.map(|u| u.id()),
            source_name: source.map(|u| u.name().to_string()),
            description: description.to_string(),
            trigger: Trigger::Unlabeled,
        }
    }

    pub fn nothing(source: &Unit) -> Self {
        Self::new(Effect::Nothing, "Do Nothing", Some(source))
    }

    pub(crate) fn damage(target: &Unit, amount: i32) -> Self {
        Self::new(
            Effect::TakeDamage {
                target: target.id(),
                amount,
            },
            &format!("Take {} damage", amount),
            Some(target),
        )
    }

    pub fn remove_corpse(unit: &Unit) -> Self {
        Self::new(
            Effect::RemoveUnit { target: unit.id() },
            &format!("Remove corpse of {}", unit.name()),
            Some(unit),
        )
    }

    /// Give `count` random friends of `source` `+attack/+health`.
    pub fn buff_random(source: &Unit, attack: i32, health: i32, count: usize) -> Self {
        Self::new(
            Effect::BuffRandom {
                count,
                attack,
                health,
            },
            &format!("Give {} random friends +{}/+{}", count, attack, health),
            Some(source),
        )
    }

    /// Give the friends of `source` at `positions` `+attack/+health`.
    pub fn buff_positions(source: &Unit, attack: i32, health: i32, positions: &[usize]) -> Self {
        let plural = if positions.len() > 1 { "s" } else { "" };
        Self::new(
            Effect::BuffPositions {
                positions: positions.to_vec(),
                attack,
                health,
            },
            &format!(
                "Give friends at position{} {:?} +{}/+{}",
                plural, positions, attack, health
            ),
            Some(source),
        )
    }

    /// Have `target` run its `trigger` hook, on behalf of `source`.
    pub fn fire(source: &Unit, target: &Unit, trigger: Trigger) -> Self {
        Self::new(
            Effect::Fire {
                target: target.id(),
                trigger,
            },
            &format!("Trigger {} of {}", trigger, target.name()),
            Some(source),
        )
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }
}

/// Same source unit and same effect. Description and trigger label are
/// informational and do not take part.
impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.effect == other.effect
    }
}

impl Eq for Action {}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}->{}",
            self.trigger,
            self.source_name.as_deref().unwrap_or(""),
            self.description
        )
    }
}
