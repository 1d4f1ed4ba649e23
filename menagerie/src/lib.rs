//! Menagerie - an auto-battler simulation engine
//!
//! Facade over the engine crates:
//!
//! - [`battle`]: rosters, deferred actions, the resolution queue and combat
//! - [`units`]: the default unit catalog
//!
//! ```
//! use menagerie::prelude::*;
//!
//! let team = |kinds: &[&str]| {
//!     Roster::from_units(kinds.iter().filter_map(|k| catalog::by_name(k))).unwrap()
//! };
//! let player = team(&["Pig", "Ant", "Sloth"]);
//! let opponent = team(&["Ant", "Fish", "Sloth"]);
//! let mut state = GameState::combat(player, opponent);
//! let outcome = state.run_combat().unwrap();
//! assert_eq!(state.outcome(), Some(outcome));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub use menagerie_battle as battle;
pub use menagerie_units as units;

pub mod prelude {
    pub use menagerie_battle::{
        Action, Behavior, CombatOutcome, Effect, GameError, GameResult, GameState, HookContext,
        HookMode, MatchConfig, Phase, PriorityRule, Roster, Side, Trigger, Unit,
    };
    pub use menagerie_units::catalog;
    pub use menagerie_units::{Ant, Fish, Pig, Sloth};
}
