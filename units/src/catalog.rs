//! Unit lookup by kind name

use alloc::sync::Arc;
use alloc::vec::Vec;

use menagerie_battle::{Behavior, Unit};

use crate::animals::{Ant, Fish, Pig, Sloth};

/// Every kind in the catalog, in shop order.
pub const KINDS: [&str; 4] = ["Fish", "Ant", "Sloth", "Pig"];

fn behavior(kind: &str) -> Option<Arc<dyn Behavior>> {
    let behavior: Arc<dyn Behavior> = match kind {
        k if k.eq_ignore_ascii_case("fish") => Arc::new(Fish),
        k if k.eq_ignore_ascii_case("ant") => Arc::new(Ant),
        k if k.eq_ignore_ascii_case("sloth") => Arc::new(Sloth),
        k if k.eq_ignore_ascii_case("pig") => Arc::new(Pig),
        _ => return None,
    };
    Some(behavior)
}

/// Create a fresh unit of the named kind. Names match case-insensitively.
pub fn by_name(kind: &str) -> Option<Unit> {
    let unit = behavior(kind).map(Unit::from_behavior);
    if unit.is_none() {
        log::debug!("No unit kind named {:?} in the catalog", kind);
    }
    unit
}

/// One fresh unit of every kind, in [`KINDS`] order.
pub fn all() -> Vec<Unit> {
    KINDS.iter().filter_map(|kind| by_name(kind)).collect()
}
