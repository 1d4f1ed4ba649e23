use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_UNIT_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of a unit instance.
///
/// Two units with identical stats are still different units; everything that
/// needs "this exact unit" (roster lookups, action sources, damage targets)
/// goes through this handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Allocate a handle no other live unit in this process holds.
    pub fn next() -> Self {
        UnitId(NEXT_UNIT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which side of a match a roster (and its units) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "PLAYER",
            Side::Opponent => "OPPONENT",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Out of combat; damage and buffs are permanent.
    Shop,
    /// Damage accumulates in temporary health.
    Combat,
}

impl Phase {
    pub fn is_combat(&self) -> bool {
        matches!(self, Phase::Combat)
    }
}

/// Why an action was put on the resolution queue.
///
/// Every ability hook has a matching variant. `Attack` tags the damage exchange
/// of `do_attack`, and `Unlabeled` is used for actions enqueued by callers
/// outside any trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trigger {
    // Combat phase hooks
    CombatStart,
    BeforeAttack,
    Hurt,
    Faint,
    FriendAheadAttack,
    FriendSummoned,

    // Shop phase hooks
    ShopStart,
    Buy,
    Sell,
    LevelUp,
    FriendBought,
    ShopEnd,

    Attack,
    Unlabeled,
}

impl Trigger {
    /// All triggers that correspond to an ability hook.
    pub const HOOKS: [Trigger; 12] = [
        Trigger::CombatStart,
        Trigger::BeforeAttack,
        Trigger::Hurt,
        Trigger::Faint,
        Trigger::FriendAheadAttack,
        Trigger::FriendSummoned,
        Trigger::ShopStart,
        Trigger::Buy,
        Trigger::Sell,
        Trigger::LevelUp,
        Trigger::FriendBought,
        Trigger::ShopEnd,
    ];

    /// Label shown in resolution logs.
    pub fn label(&self) -> &'static str {
        match self {
            Trigger::CombatStart => "on_combat_start",
            Trigger::BeforeAttack => "before_attack",
            Trigger::Hurt => "on_hurt",
            Trigger::Faint => "on_faint",
            Trigger::FriendAheadAttack => "on_friend_ahead_attack",
            Trigger::FriendSummoned => "on_friend_summoned",
            Trigger::ShopStart => "on_shop_start",
            Trigger::Buy => "on_buy",
            Trigger::Sell => "on_sell",
            Trigger::LevelUp => "on_levelup",
            Trigger::FriendBought => "on_friend_bought",
            Trigger::ShopEnd => "on_shop_end",
            Trigger::Attack => "do_attack",
            Trigger::Unlabeled => "",
        }
    }

    pub fn is_hook(&self) -> bool {
        !matches!(self, Trigger::Attack | Trigger::Unlabeled)
    }
}

impl Default for Trigger {
    fn default() -> Self {
        Trigger::Unlabeled
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Base and temporary combat stats of a unit.
///
/// `temp_*` values are phase scoped. During combat `temp_health` also tracks
/// the damage a unit has taken. All arithmetic saturates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub attack: i32,
    pub health: i32,
    pub temp_attack: i32,
    pub temp_health: i32,
}

impl Stats {
    pub const fn new(attack: i32, health: i32) -> Self {
        Self {
            attack,
            health,
            temp_attack: 0,
            temp_health: 0,
        }
    }

    pub fn current_attack(&self) -> i32 {
        self.attack.saturating_add(self.temp_attack)
    }

    pub fn current_health(&self) -> i32 {
        self.health.saturating_add(self.temp_health)
    }

    /// A unit at zero or less current health has fainted.
    pub fn is_fainted(&self) -> bool {
        self.current_health() <= 0
    }

    pub fn temp_buff(&mut self, attack: i32, health: i32) {
        self.temp_attack = self.temp_attack.saturating_add(attack);
        self.temp_health = self.temp_health.saturating_add(health);
    }

    pub fn perma_buff(&mut self, attack: i32, health: i32) {
        self.attack = self.attack.saturating_add(attack);
        self.health = self.health.saturating_add(health);
    }

    /// Move accumulated damage out of `temp_health` into base health.
    ///
    /// Positive temporary health is left alone.
    pub fn fold_damage(&mut self) {
        if self.temp_health < 0 {
            self.health = self.health.saturating_add(self.temp_health);
            self.temp_health = 0;
        }
    }
}
