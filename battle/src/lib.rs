//! Menagerie battle engine
//!
//! Two rosters of units whose abilities fire in response to game events. Hooks
//! never mutate the match directly: they return [`Action`]s, which go on a FIFO
//! resolution queue and run one at a time against the [`GameState`], possibly
//! queueing more actions. Rosters are re-validated after every step.
//!
//! ```
//! use menagerie_battle::{GameState, Roster, Unit, Behavior};
//!
//! #[derive(Debug)]
//! struct Sloth;
//! impl Behavior for Sloth {
//!     fn kind(&self) -> &'static str { "Sloth" }
//! }
//!
//! let player = Roster::from_units([Unit::new(Sloth).with_stats(3, 1)]).unwrap();
//! let opponent = Roster::from_units([Unit::new(Sloth)]).unwrap();
//! let mut state = GameState::combat(player, opponent);
//! state.do_attack().unwrap();
//! assert!(state.player().is_empty());
//! assert!(state.opponent().unwrap().is_empty());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod action;
pub mod battle;
pub mod config;
mod engine;
pub mod error;
pub mod limits;
pub mod rng;
pub mod roster;
pub mod state;
pub mod types;
pub mod units;

#[cfg(test)]
mod tests;

pub use action::{Action, Effect};
pub use battle::{priority, CombatOutcome};
pub use config::{HookMode, MatchConfig, PriorityRule};
pub use error::{ErrorKind, GameError, GameResult};
pub use limits::{MAX_RESOLUTION_STEPS, ROSTER_CAPACITY};
pub use rng::{BattleRng, XorShiftRng};
pub use roster::Roster;
pub use state::GameState;
pub use types::{Phase, Side, Stats, Trigger, UnitId};
pub use units::{Behavior, HookContext, Unit};
