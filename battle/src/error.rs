//! Error types for match operations
//!
//! Every failure is an enum variant with the data needed to report it; nothing
//! is string-typed. All errors propagate synchronously to the caller of the
//! roster, state or combat operation that hit them.

use serde::{Deserialize, Serialize};

use crate::types::{Side, UnitId};

/// Broad category of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// Malformed input at construction time.
    Validation,
    /// Slot index or unit lookup outside the roster.
    Bounds,
    /// A rule of the game was broken (negative damage, attacking in the shop).
    Domain,
    /// The match cannot continue.
    Fatal,
}

/// Errors that can occur while building or resolving a match
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameError {
    /// More units than a roster can hold
    #[error("roster holds {count} units but capacity is {capacity}")]
    RosterOverflow { count: usize, capacity: usize },
    /// Slot index past either end of the roster
    #[error("slot index {index} is out of bounds for capacity {capacity}")]
    OutOfBounds { index: isize, capacity: usize },
    /// Unit is not a current occupant of the roster
    #[error("unit {unit} is not on this roster")]
    NotFound { unit: UnitId },
    /// Damage amounts are never negative
    #[error("cannot take negative damage ({amount})")]
    InvalidDamage { amount: i32 },
    /// Attack exchange requested outside the combat phase
    #[error("match is not in the combat phase")]
    NotInCombat,
    /// Front slot of a side is empty
    #[error("{side} has no unit in the front slot")]
    NoCombatant { side: Side },
    /// Resolution queue did not drain within the step ceiling
    #[error("resolution did not complete after {steps} steps, possible infinite trigger loop")]
    ResolutionOverrun { steps: u32 },
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::RosterOverflow { .. } => ErrorKind::Validation,
            GameError::OutOfBounds { .. } | GameError::NotFound { .. } => ErrorKind::Bounds,
            GameError::InvalidDamage { .. }
            | GameError::NotInCombat
            | GameError::NoCombatant { .. } => ErrorKind::Domain,
            GameError::ResolutionOverrun { .. } => ErrorKind::Fatal,
        }
    }

    /// Fatal errors abort the match; there is no recovery path.
    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::Fatal
    }
}

/// Result type alias for match operations
pub type GameResult<T> = Result<T, GameError>;
