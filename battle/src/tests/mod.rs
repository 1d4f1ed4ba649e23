mod roster;

use crate::action::{Action, Effect};
use crate::config::{HookMode, MatchConfig};
use crate::roster::Roster;
use crate::state::GameState;
use crate::types::{Phase, Trigger};
use crate::units::{Behavior, HookContext, Unit};

// ==========================================
// FIXTURE UNIT KINDS
// ==========================================

/// No abilities, 1/1.
#[derive(Debug)]
struct Grunt;

impl Behavior for Grunt {
    fn kind(&self) -> &'static str {
        "Grunt"
    }
}

/// Reports its hurt and faint hooks as labelled placeholders.
#[derive(Debug)]
struct Sentinel;

impl Behavior for Sentinel {
    fn kind(&self) -> &'static str {
        "Sentinel"
    }

    fn base_stats(&self) -> (i32, i32) {
        (1, 3)
    }

    fn on_hurt(&self, ctx: &HookContext<'_>) -> Option<Action> {
        Some(Action::new(Effect::Nothing, "hurt", Some(ctx.unit)))
    }

    fn on_faint(&self, ctx: &HookContext<'_>) -> Option<Action> {
        Some(Action::new(Effect::Nothing, "faint", Some(ctx.unit)))
    }
}

/// On faint, gives one random friend +2/+1.
#[derive(Debug)]
struct Martyr;

impl Behavior for Martyr {
    fn kind(&self) -> &'static str {
        "Martyr"
    }

    fn base_stats(&self) -> (i32, i32) {
        (2, 1)
    }

    fn on_faint(&self, ctx: &HookContext<'_>) -> Option<Action> {
        Some(Action::buff_random(ctx.unit, 2, 1, 1))
    }
}

/// Every buy triggers another buy, forever.
#[derive(Debug)]
struct Echo;

impl Behavior for Echo {
    fn kind(&self) -> &'static str {
        "Echo"
    }

    fn on_buy(&self, ctx: &HookContext<'_>) -> Option<Action> {
        Some(Action::fire(ctx.unit, ctx.unit, Trigger::Buy))
    }
}

/// At combat start, gives the front friend +1/+1.
#[derive(Debug)]
struct Rallier;

impl Behavior for Rallier {
    fn kind(&self) -> &'static str {
        "Rallier"
    }

    fn base_stats(&self) -> (i32, i32) {
        (1, 2)
    }

    fn on_combat_start(&self, ctx: &HookContext<'_>) -> Option<Action> {
        Some(Action::buff_positions(ctx.unit, 1, 1, &[0]))
    }
}

// ==========================================
// HELPER FUNCTIONS
// ==========================================

fn grunt(attack: i32, health: i32) -> Unit {
    Unit::new(Grunt).with_stats(attack, health)
}

fn named(name: &str, attack: i32, health: i32) -> Unit {
    grunt(attack, health).with_name(name)
}

fn roster(units: Vec<Unit>) -> Roster {
    Roster::from_units(units).expect("fixture roster fits")
}

fn combat_state(player: Vec<Unit>, opponent: Vec<Unit>) -> GameState {
    GameState::combat(roster(player), roster(opponent))
}

fn combat_state_with(player: Vec<Unit>, opponent: Vec<Unit>, config: MatchConfig) -> GameState {
    GameState::with_config(roster(player), Some(roster(opponent)), Phase::Combat, config)
}

fn shop_state(player: Vec<Unit>) -> GameState {
    GameState::shop(roster(player))
}

fn verbose() -> MatchConfig {
    MatchConfig::default().with_hook_mode(HookMode::Verbose)
}

/// `(trigger, description)` of every queued action, head first.
fn queued(state: &GameState) -> Vec<(Trigger, String)> {
    state
        .queue()
        .iter()
        .map(|a| (a.trigger, a.description.clone()))
        .collect()
}

/// Names of the units on a roster, front first.
fn names(roster: &Roster) -> Vec<String> {
    roster.iter().map(|u| u.name().to_string()).collect()
}
