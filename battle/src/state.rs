use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use crate::action::Action;
use crate::config::MatchConfig;
use crate::error::GameResult;
use crate::rng::XorShiftRng;
use crate::roster::Roster;
use crate::types::{Phase, Side, Trigger, UnitId};
use crate::units::Unit;

/// The complete state of one match
///
/// Owns both rosters, the phase flag and the resolution queue. Units pruned
/// from a roster are kept in a graveyard so actions they scheduled before
/// fainting can still find their side.
#[derive(Debug)]
pub struct GameState {
    pub(crate) player: Roster,
    /// Absent in the shop phase unless supplied; always present in combat.
    pub(crate) opponent: Option<Roster>,
    pub(crate) phase: Phase,
    pub(crate) queue: VecDeque<Action>,
    pub(crate) graveyard: Vec<Unit>,
    pub(crate) config: MatchConfig,
    pub(crate) rng: XorShiftRng,
}

impl GameState {
    pub fn new(player: Roster, opponent: Option<Roster>, phase: Phase) -> Self {
        Self::with_config(player, opponent, phase, MatchConfig::default())
    }

    /// Build a match. A combat-phase match without an opponent gets an empty
    /// opponent roster.
    pub fn with_config(
        mut player: Roster,
        opponent: Option<Roster>,
        phase: Phase,
        config: MatchConfig,
    ) -> Self {
        player.attach(Side::Player);
        let mut opponent = match (phase, opponent) {
            (Phase::Combat, None) => Some(Roster::empty()),
            (_, opponent) => opponent,
        };
        if let Some(roster) = opponent.as_mut() {
            roster.attach(Side::Opponent);
        }

        let rng = XorShiftRng::seed_from_u64(config.seed);
        Self {
            player,
            opponent,
            phase,
            queue: VecDeque::new(),
            graveyard: Vec::new(),
            config,
            rng,
        }
    }

    /// Build a match straight from unit lists.
    pub fn from_units<P, O>(player: P, opponent: Option<O>, phase: Phase) -> GameResult<Self>
    where
        P: IntoIterator<Item = Option<Unit>>,
        O: IntoIterator<Item = Option<Unit>>,
    {
        let player = Roster::new(player)?;
        let opponent = opponent.map(Roster::new).transpose()?;
        Ok(Self::new(player, opponent, phase))
    }

    pub fn combat(player: Roster, opponent: Roster) -> Self {
        Self::new(player, Some(opponent), Phase::Combat)
    }

    pub fn shop(player: Roster) -> Self {
        Self::new(player, None, Phase::Shop)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_combat_phase(&self) -> bool {
        self.phase.is_combat()
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn player(&self) -> &Roster {
        &self.player
    }

    pub fn opponent(&self) -> Option<&Roster> {
        self.opponent.as_ref()
    }

    pub fn roster(&self, side: Side) -> Option<&Roster> {
        match side {
            Side::Player => Some(&self.player),
            Side::Opponent => self.opponent.as_ref(),
        }
    }

    pub fn roster_mut(&mut self, side: Side) -> Option<&mut Roster> {
        match side {
            Side::Player => Some(&mut self.player),
            Side::Opponent => self.opponent.as_mut(),
        }
    }

    /// Pending actions, head first.
    pub fn queue(&self) -> &VecDeque<Action> {
        &self.queue
    }

    /// Units pruned from a roster during this match, in pruning order.
    pub fn graveyard(&self) -> &[Unit] {
        &self.graveyard
    }

    pub fn rng_mut(&mut self) -> &mut XorShiftRng {
        &mut self.rng
    }

    fn rosters(&self) -> impl Iterator<Item = &Roster> {
        core::iter::once(&self.player).chain(self.opponent.iter())
    }

    /// Find a unit on either roster, falling back to the graveyard.
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.rosters()
            .find_map(|roster| roster.unit(id))
            .or_else(|| self.graveyard.iter().find(|u| u.id() == id))
    }

    /// A unit that still occupies a roster slot.
    pub(crate) fn unit_on_roster_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        if self.player.contains(id) {
            return self.player.unit_mut(id);
        }
        self.opponent.as_mut().and_then(|roster| roster.unit_mut(id))
    }

    /// Side whose roster currently holds `id`.
    pub fn locate(&self, id: UnitId) -> Option<Side> {
        if self.player.contains(id) {
            Some(Side::Player)
        } else if self.opponent.as_ref().is_some_and(|r| r.contains(id)) {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    /// Append `action` to the tail of the resolution queue, tagged with
    /// `trigger`. `None` is the "nothing to do" sentinel and is dropped.
    pub fn enqueue(&mut self, action: Option<Action>, trigger: Trigger) {
        if let Some(action) = action {
            self.queue.push_back(action.with_trigger(trigger));
        }
    }

    /// Validate both rosters, moving pruned units to the graveyard.
    pub fn validate(&mut self) -> GameResult<()> {
        let mut pruned = self.player.validate()?;
        if let Some(roster) = self.opponent.as_mut() {
            pruned.extend(roster.validate()?);
        }
        self.bury(pruned);
        Ok(())
    }

    pub(crate) fn bury(&mut self, units: Vec<Unit>) {
        for unit in units {
            log::debug!("{} left its roster", unit);
            self.graveyard.push(unit);
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            Phase::Combat => writeln!(f, "============= COMBAT =============")?,
            Phase::Shop => writeln!(f, "============== SHOP ==============")?,
        }
        writeln!(f, "{}", self.player)?;
        if let Some(opponent) = self.opponent.as_ref().filter(|_| self.is_combat_phase()) {
            writeln!(f, "{}", opponent)?;
        }
        writeln!(f)?;
        writeln!(f, "Resolution Queue:")?;
        for action in &self.queue {
            writeln!(f, "\t{}", action)?;
        }
        Ok(())
    }
}
