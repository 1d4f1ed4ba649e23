//! Resolution engine
//!
//! Drains the resolution queue strictly FIFO. Running an action may append
//! more actions to the tail, so simultaneous triggers resolve breadth-first.
//! After every step both rosters are re-validated, and a drain that needs more
//! than `MAX_RESOLUTION_STEPS` steps aborts the match.

use alloc::vec::Vec;

use crate::action::{Action, Effect};
use crate::error::{GameError, GameResult};
use crate::limits::ResolutionBudget;
use crate::state::GameState;
use crate::types::{Side, Trigger, UnitId};

impl GameState {
    /// Resolve the queue until it is empty.
    pub fn resolve(&mut self) -> GameResult<()> {
        let mut budget = ResolutionBudget::new();
        while !self.queue.is_empty() {
            budget.record_step()?;
            self.resolution_step()?;
            self.validate()?;
        }
        Ok(())
    }

    /// Pop and run the head of the queue.
    ///
    /// Returns `false` when the queue was already empty. The queue may be
    /// longer afterwards than before.
    pub fn resolution_step(&mut self) -> GameResult<bool> {
        let Some(action) = self.queue.pop_front() else {
            return Ok(false);
        };
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{}", self);
        }
        log::debug!("{}", action);

        self.apply(action)?;
        Ok(true)
    }

    fn apply(&mut self, action: Action) -> GameResult<()> {
        match action.effect {
            Effect::Nothing => Ok(()),
            Effect::TakeDamage { target, amount } => self.apply_damage(target, amount),
            Effect::RemoveUnit { target } => self.remove_unit(target),
            Effect::BuffRandom {
                count,
                attack,
                health,
            } => {
                let Some(side) = self.source_side(action.source) else {
                    return Ok(());
                };
                let targets = match side {
                    Side::Player => self.player.random_subset(count, &mut self.rng),
                    Side::Opponent => match self.opponent.as_ref() {
                        Some(roster) => roster.random_subset(count, &mut self.rng),
                        None => return Ok(()),
                    },
                };
                for id in targets {
                    self.buff(id, attack, health);
                }
                Ok(())
            }
            Effect::BuffPositions {
                positions,
                attack,
                health,
            } => {
                let Some(side) = self.source_side(action.source) else {
                    return Ok(());
                };
                let Some(roster) = self.roster(side) else {
                    return Ok(());
                };
                let mut targets = Vec::with_capacity(positions.len());
                for position in positions {
                    if let Some(unit) = roster.get(position as isize)? {
                        targets.push(unit.id());
                    }
                }
                for id in targets {
                    self.buff(id, attack, health);
                }
                Ok(())
            }
            Effect::Fire { target, trigger } => {
                let mode = self.config.hook_mode;
                let follow_up = self
                    .unit(target)
                    .filter(|_| self.locate(target).is_some())
                    .and_then(|unit| unit.ability(trigger, mode));
                self.enqueue(follow_up, trigger);
                Ok(())
            }
        }
    }

    /// Damage is tracked in temporary health. A unit that faints queues only
    /// its faint hook; a survivor queues its hurt hook, and outside combat the
    /// damage first becomes permanent.
    fn apply_damage(&mut self, target: UnitId, amount: i32) -> GameResult<()> {
        if amount < 0 {
            return Err(GameError::InvalidDamage { amount });
        }
        if amount == 0 {
            return Ok(());
        }

        let combat = self.is_combat_phase();
        let mode = self.config.hook_mode;
        let Some(unit) = self.unit_on_roster_mut(target) else {
            log::warn!("Damage aimed at {} which is no longer on a roster", target);
            return Ok(());
        };

        let stats = unit.stats_mut();
        stats.temp_health = stats.temp_health.saturating_sub(amount);

        let (follow_up, trigger) = if unit.is_fainted() {
            (unit.ability(Trigger::Faint, mode), Trigger::Faint)
        } else {
            if !combat {
                unit.stats_mut().fold_damage();
            }
            (unit.ability(Trigger::Hurt, mode), Trigger::Hurt)
        };
        self.enqueue(follow_up, trigger);
        Ok(())
    }

    fn remove_unit(&mut self, target: UnitId) -> GameResult<()> {
        let Some(side) = self.locate(target) else {
            return Ok(());
        };
        let removed = match self.roster_mut(side) {
            Some(roster) => roster.set_unit(target, None)?,
            None => return Ok(()),
        };
        self.bury(removed);
        Ok(())
    }

    /// Temporary during combat, permanent in the shop.
    fn buff(&mut self, id: UnitId, attack: i32, health: i32) {
        let combat = self.is_combat_phase();
        if let Some(unit) = self.unit_on_roster_mut(id) {
            if combat {
                unit.temp_buff(attack, health);
            } else {
                unit.perma_buff(attack, health);
            }
        }
    }

    /// Side an action's source belongs to, even if it has since fainted.
    fn source_side(&self, source: Option<UnitId>) -> Option<Side> {
        source.and_then(|id| self.unit(id)).and_then(|unit| unit.side())
    }
}
