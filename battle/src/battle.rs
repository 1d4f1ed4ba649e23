//! Combat controller
//!
//! Decides who acts first when two units act at the same time and drives
//! attack exchanges by queueing damage actions on the resolution engine.

use alloc::format;
use alloc::vec::Vec;
use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::PriorityRule;
use crate::error::{GameError, GameResult};
use crate::limits::RoundCounter;
use crate::rng::BattleRng;
use crate::state::GameState;
use crate::types::{Side, Trigger, UnitId};
use crate::units::Unit;

/// Result of a combat, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CombatOutcome {
    Victory,
    Defeat,
    Draw,
}

/// Order two simultaneous units as `(first, second)`.
///
/// The higher score under `rule` goes first; an exact tie is a coin flip on
/// `rng`.
pub fn priority<'a, R: BattleRng>(
    a: &'a Unit,
    b: &'a Unit,
    rule: PriorityRule,
    rng: &mut R,
) -> (&'a Unit, &'a Unit) {
    match rule.compare(a, b) {
        Ordering::Greater => (a, b),
        Ordering::Less => (b, a),
        Ordering::Equal => {
            if rng.gen_bool() {
                (a, b)
            } else {
                (b, a)
            }
        }
    }
}

impl GameState {
    /// The front units of both sides hit each other once.
    ///
    /// Both damage actions are queued before either runs, so the exchange is
    /// simultaneous. The queue is then drained.
    pub fn do_attack(&mut self) -> GameResult<()> {
        if !self.is_combat_phase() {
            return Err(GameError::NotInCombat);
        }
        let opponent = self.opponent.as_ref().ok_or(GameError::NotInCombat)?;
        let player_front = self.player.front().ok_or(GameError::NoCombatant {
            side: Side::Player,
        })?;
        let opponent_front = opponent.front().ok_or(GameError::NoCombatant {
            side: Side::Opponent,
        })?;

        let (first, second) = priority(
            player_front,
            opponent_front,
            self.config.priority,
            &mut self.rng,
        );
        log::info!("{} attacking {}", first, second);

        // A debuffed unit with negative attack deals no damage.
        let to_first = first.take_damage(second.current_attack().max(0))?;
        let to_second = second.take_damage(first.current_attack().max(0))?;
        let (first_id, second_id) = (first.id(), second.id());

        self.enqueue(to_first, Trigger::Attack);
        self.enqueue(to_second, Trigger::Attack);
        self.resolve()?;

        if log::log_enabled!(log::Level::Info) {
            let show = |id: UnitId| {
                self.unit(id)
                    .map(|u| format!("{}", u))
                    .unwrap_or_default()
            };
            log::info!("Attack finished: {}  {}", show(first_id), show(second_id));
        }
        Ok(())
    }

    /// Queue `trigger` on every unit of both active rosters, highest priority
    /// first.
    pub fn broadcast(&mut self, trigger: Trigger) {
        let mut ids = self.player.ids();
        if self.is_combat_phase() {
            if let Some(opponent) = self.opponent.as_ref() {
                ids.extend(opponent.ids());
            }
        }
        self.enqueue_in_priority(ids, trigger);
    }

    /// Queue `trigger` on the units in `slot` of each side.
    pub fn fire_slot(&mut self, slot: usize, trigger: Trigger) -> GameResult<()> {
        let index = slot as isize;
        let mut ids = Vec::with_capacity(2);
        if let Some(unit) = self.player.get(index)? {
            ids.push(unit.id());
        }
        if let Some(opponent) = self.opponent.as_ref() {
            if let Some(unit) = opponent.get(index)? {
                ids.push(unit.id());
            }
        }
        self.enqueue_in_priority(ids, trigger);
        Ok(())
    }

    /// Shuffle first so that a stable sort leaves ties in random order.
    fn enqueue_in_priority(&mut self, mut ids: Vec<UnitId>, trigger: Trigger) {
        self.rng.shuffle(&mut ids);
        let rule = self.config.priority;
        let mode = self.config.hook_mode;

        let mut ranked: Vec<(i64, UnitId)> = ids
            .into_iter()
            .filter_map(|id| self.unit(id).map(|u| (rule.score(u), id)))
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        for (_, id) in ranked {
            let action = self.unit(id).and_then(|u| u.ability(trigger, mode));
            self.enqueue(action, trigger);
        }
    }

    /// `None` while both sides still have units.
    pub fn outcome(&self) -> Option<CombatOutcome> {
        let player_alive = !self.player.is_empty();
        let opponent_alive = self.opponent.as_ref().is_some_and(|r| !r.is_empty());
        match (player_alive, opponent_alive) {
            (true, true) => None,
            (true, false) => Some(CombatOutcome::Victory),
            (false, true) => Some(CombatOutcome::Defeat),
            (false, false) => Some(CombatOutcome::Draw),
        }
    }

    /// Fight until one side is empty.
    ///
    /// Combat start hooks fire once. Each round then fires `before_attack` on
    /// both front units, exchanges attacks, and fires `on_friend_ahead_attack`
    /// on the units in the second slot.
    pub fn run_combat(&mut self) -> GameResult<CombatOutcome> {
        if !self.is_combat_phase() {
            return Err(GameError::NotInCombat);
        }

        self.broadcast(Trigger::CombatStart);
        self.resolve()?;

        let mut rounds = RoundCounter::new();
        loop {
            if let Some(outcome) = self.outcome() {
                log::info!("Combat over after {} rounds: {:?}", rounds.rounds(), outcome);
                return Ok(outcome);
            }
            if !rounds.record_round() {
                log::warn!(
                    "Combat still undecided after {} rounds, calling it a draw",
                    rounds.rounds()
                );
                return Ok(CombatOutcome::Draw);
            }

            self.fire_slot(0, Trigger::BeforeAttack)?;
            self.resolve()?;
            if self.outcome().is_some() {
                continue;
            }

            self.do_attack()?;
            self.fire_slot(1, Trigger::FriendAheadAttack)?;
            self.resolve()?;
        }
    }
}
