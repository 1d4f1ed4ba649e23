//! Units and the ability hook interface
//!
//! A [`Unit`] is stats plus identity plus a shared [`Behavior`]. The behavior
//! is where a unit kind's ability lives: one method per trigger point, each
//! with a default, so a kind only overrides the hooks its ability uses.

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::fmt;

use crate::action::Action;
use crate::config::HookMode;
use crate::error::{GameError, GameResult};
use crate::limits::{MAX_LEVEL, MAX_RANK};
use crate::types::{Side, Stats, Trigger, UnitId};

/// What a hook sees when it is asked for its action.
pub struct HookContext<'a> {
    pub unit: &'a Unit,
    pub mode: HookMode,
}

impl<'a> HookContext<'a> {
    /// The action an unoverridden hook returns under the current mode.
    pub fn default_action(&self) -> Option<Action> {
        match self.mode {
            HookMode::Silent => None,
            HookMode::Verbose => Some(Action::nothing(self.unit)),
        }
    }
}

/// Ability hooks of a unit kind.
///
/// Hooks build an [`Action`] describing what should happen; they never mutate
/// the match directly. Returning `None` means "nothing to enqueue".
pub trait Behavior: fmt::Debug + Send + Sync {
    /// Kind tag, also used as the unit's default name.
    fn kind(&self) -> &'static str;

    /// Base `(attack, health)` of a freshly created unit of this kind.
    fn base_stats(&self) -> (i32, i32) {
        (1, 1)
    }

    fn rank(&self) -> u8 {
        1
    }

    /// Called on every unit, in priority order, when combat starts.
    fn on_combat_start(&self, ctx: &HookContext<'_>) -> Option<Action> {
        ctx.default_action()
    }

    /// Called just before this unit's attack exchange.
    fn before_attack(&self, ctx: &HookContext<'_>) -> Option<Action> {
        ctx.default_action()
    }

    /// Called after this unit takes damage and survives it.
    fn on_hurt(&self, ctx: &HookContext<'_>) -> Option<Action> {
        ctx.default_action()
    }

    /// Called when this unit's current health reaches 0. The default removes
    /// the corpse from its roster.
    fn on_faint(&self, ctx: &HookContext<'_>) -> Option<Action> {
        Some(Action::remove_corpse(ctx.unit))
    }

    /// Called on the unit in the second slot after the front unit attacked.
    fn on_friend_ahead_attack(&self, ctx: &HookContext<'_>) -> Option<Action> {
        ctx.default_action()
    }

    fn on_friend_summoned(&self, ctx: &HookContext<'_>) -> Option<Action> {
        ctx.default_action()
    }

    fn on_shop_start(&self, ctx: &HookContext<'_>) -> Option<Action> {
        ctx.default_action()
    }

    fn on_buy(&self, ctx: &HookContext<'_>) -> Option<Action> {
        ctx.default_action()
    }

    fn on_sell(&self, ctx: &HookContext<'_>) -> Option<Action> {
        ctx.default_action()
    }

    /// Called just before this unit levels up.
    fn on_levelup(&self, ctx: &HookContext<'_>) -> Option<Action> {
        ctx.default_action()
    }

    fn on_friend_bought(&self, ctx: &HookContext<'_>) -> Option<Action> {
        ctx.default_action()
    }

    fn on_shop_end(&self, ctx: &HookContext<'_>) -> Option<Action> {
        ctx.default_action()
    }
}

/// A unit instance.
///
/// Not `Clone`: a copy is a different unit, see [`Unit::fresh_copy`].
/// `PartialEq` compares values (kind, name, stats, rank, level) and ignores
/// identity and roster.
pub struct Unit {
    id: UnitId,
    name: String,
    stats: Stats,
    rank: u8,
    level: u8,
    side: Option<Side>,
    behavior: Arc<dyn Behavior>,
}

impl Unit {
    /// Create a unit with its kind's default name and stats.
    pub fn new<B: Behavior + 'static>(behavior: B) -> Self {
        Self::from_behavior(Arc::new(behavior))
    }

    pub fn from_behavior(behavior: Arc<dyn Behavior>) -> Self {
        let (attack, health) = behavior.base_stats();
        let rank = behavior.rank().clamp(1, MAX_RANK);
        Self {
            id: UnitId::next(),
            name: behavior.kind().to_string(),
            stats: Stats::new(attack, health),
            rank,
            level: 1,
            side: None,
            behavior,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Override the kind's base stats.
    pub fn with_stats(mut self, attack: i32, health: i32) -> Self {
        self.stats.attack = attack;
        self.stats.health = health;
        self
    }

    pub fn with_temp(mut self, temp_attack: i32, temp_health: i32) -> Self {
        self.stats.temp_attack = temp_attack;
        self.stats.temp_health = temp_health;
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level.clamp(1, MAX_LEVEL);
        self
    }

    pub fn with_rank(mut self, rank: u8) -> Self {
        self.rank = rank.clamp(1, MAX_RANK);
        self
    }

    /// Same kind, name and stats under a new identity, not on any roster.
    pub fn fresh_copy(&self) -> Self {
        Self {
            id: UnitId::next(),
            name: self.name.clone(),
            stats: self.stats,
            rank: self.rank,
            level: self.level,
            side: None,
            behavior: Arc::clone(&self.behavior),
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &'static str {
        self.behavior.kind()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn attack(&self) -> i32 {
        self.stats.attack
    }

    pub fn health(&self) -> i32 {
        self.stats.health
    }

    pub fn temp_attack(&self) -> i32 {
        self.stats.temp_attack
    }

    pub fn temp_health(&self) -> i32 {
        self.stats.temp_health
    }

    pub fn current_attack(&self) -> i32 {
        self.stats.current_attack()
    }

    pub fn current_health(&self) -> i32 {
        self.stats.current_health()
    }

    pub fn is_fainted(&self) -> bool {
        self.stats.is_fainted()
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Side of the roster this unit was last placed on.
    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub(crate) fn set_side(&mut self, side: Option<Side>) {
        self.side = side;
    }

    pub(crate) fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    pub fn temp_buff(&mut self, attack: i32, health: i32) {
        self.stats.temp_buff(attack, health);
    }

    pub fn perma_buff(&mut self, attack: i32, health: i32) {
        self.stats.perma_buff(attack, health);
    }

    /// Build the action that applies `amount` damage to this unit.
    ///
    /// Zero damage produces no action. Negative damage is rejected.
    pub fn take_damage(&self, amount: i32) -> GameResult<Option<Action>> {
        if amount < 0 {
            return Err(GameError::InvalidDamage { amount });
        }
        if amount == 0 {
            return Ok(None);
        }
        Ok(Some(Action::damage(self, amount)))
    }

    /// Ask this unit's behavior for its action on `trigger`.
    ///
    /// Triggers without a hook (`Attack`, `Unlabeled`) produce nothing.
    pub fn ability(&self, trigger: Trigger, mode: HookMode) -> Option<Action> {
        let ctx = HookContext { unit: self, mode };
        let b = &self.behavior;
        match trigger {
            Trigger::CombatStart => b.on_combat_start(&ctx),
            Trigger::BeforeAttack => b.before_attack(&ctx),
            Trigger::Hurt => b.on_hurt(&ctx),
            Trigger::Faint => b.on_faint(&ctx),
            Trigger::FriendAheadAttack => b.on_friend_ahead_attack(&ctx),
            Trigger::FriendSummoned => b.on_friend_summoned(&ctx),
            Trigger::ShopStart => b.on_shop_start(&ctx),
            Trigger::Buy => b.on_buy(&ctx),
            Trigger::Sell => b.on_sell(&ctx),
            Trigger::LevelUp => b.on_levelup(&ctx),
            Trigger::FriendBought => b.on_friend_bought(&ctx),
            Trigger::ShopEnd => b.on_shop_end(&ctx),
            Trigger::Attack | Trigger::Unlabeled => None,
        }
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
            && self.name == other.name
            && self.stats == other.stats
            && self.rank == other.rank
            && self.level == other.level
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("name", &self.name)
            .field("stats", &self.stats)
            .field("rank", &self.rank)
            .field("level", &self.level)
            .field("side", &self.side)
            .finish()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        write!(f, "{}:", self.name)?;
        if s.temp_attack == 0 {
            write!(f, "{}", s.attack)?;
        } else {
            write!(f, "({}+{})", s.attack, s.temp_attack)?;
        }
        f.write_str("/")?;
        if s.temp_health == 0 {
            write!(f, "{}", s.health)
        } else {
            write!(f, "({}+{})", s.health, s.temp_health)
        }
    }
}
