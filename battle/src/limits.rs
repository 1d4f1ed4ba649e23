//! Engine ceilings that keep a match from running forever

use crate::error::{GameError, GameResult};

/// Slots per roster.
pub const ROSTER_CAPACITY: usize = 5;
/// Queue pops allowed in one `resolve` call before it is treated as a loop.
pub const MAX_RESOLUTION_STEPS: u32 = 10_000;
/// Attack exchanges allowed in one `run_combat` call.
pub const MAX_ATTACK_ROUNDS: u32 = 500;
/// Highest unit level.
pub const MAX_LEVEL: u8 = 3;
/// Highest shop rank.
pub const MAX_RANK: u8 = 6;

/// Counts resolution steps against [`MAX_RESOLUTION_STEPS`].
#[derive(Debug, Clone, Default)]
pub struct ResolutionBudget {
    steps: u32,
}

impl ResolutionBudget {
    pub fn new() -> Self {
        Self { steps: 0 }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn is_exhausted(&self) -> bool {
        self.steps >= MAX_RESOLUTION_STEPS
    }

    /// Account for one step. Fails once the ceiling has already been reached.
    pub fn record_step(&mut self) -> GameResult<()> {
        if self.is_exhausted() {
            log::error!(
                "Resolution did not complete after {} iterations. Possible infinite loop?",
                self.steps
            );
            return Err(GameError::ResolutionOverrun { steps: self.steps });
        }
        self.steps += 1;
        Ok(())
    }
}

/// Counts attack exchanges against [`MAX_ATTACK_ROUNDS`].
#[derive(Debug, Clone, Default)]
pub struct RoundCounter {
    rounds: u32,
}

impl RoundCounter {
    pub fn new() -> Self {
        Self { rounds: 0 }
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns false once no further round may start.
    pub fn record_round(&mut self) -> bool {
        if self.rounds >= MAX_ATTACK_ROUNDS {
            return false;
        }
        self.rounds += 1;
        true
    }
}
