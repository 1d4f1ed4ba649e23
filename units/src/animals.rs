use menagerie_battle::{Action, Behavior, Effect, HookContext};

/// 2/3. Levelling up is meant to buff the whole team; for now it does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fish;

impl Behavior for Fish {
    fn kind(&self) -> &'static str {
        "Fish"
    }

    fn base_stats(&self) -> (i32, i32) {
        (2, 3)
    }

    fn on_levelup(&self, ctx: &HookContext<'_>) -> Option<Action> {
        log::debug!("{} levelled up to {}", ctx.unit.name(), ctx.unit.level());
        None
    }
}

/// 2/1. Faint: give one random friend +2/+1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ant;

impl Behavior for Ant {
    fn kind(&self) -> &'static str {
        "Ant"
    }

    fn base_stats(&self) -> (i32, i32) {
        (2, 1)
    }

    fn on_faint(&self, ctx: &HookContext<'_>) -> Option<Action> {
        Some(Action::buff_random(ctx.unit, 2, 1, 1))
    }
}

/// 1/1, no ability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sloth;

impl Behavior for Sloth {
    fn kind(&self) -> &'static str {
        "Sloth"
    }
}

/// 3/1. Buy: refund gold. Gold lives in the shop economy, so the action is a
/// marker the shop layer can act on.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pig;

impl Behavior for Pig {
    fn kind(&self) -> &'static str {
        "Pig"
    }

    fn base_stats(&self) -> (i32, i32) {
        (3, 1)
    }

    fn on_buy(&self, ctx: &HookContext<'_>) -> Option<Action> {
        Some(Action::new(Effect::Nothing, "Refund gold", Some(ctx.unit)))
    }
}
