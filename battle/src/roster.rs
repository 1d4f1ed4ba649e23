//! Fixed-capacity rosters
//!
//! A roster is [`ROSTER_CAPACITY`] ordered slots, index 0 at the front. Between
//! resolution steps it is always left-packed and free of fainted units; every
//! mutation goes back through [`Roster::validate`] to keep it that way.

use alloc::vec::Vec;
use core::fmt;

use crate::error::{GameError, GameResult};
use crate::limits::ROSTER_CAPACITY;
use crate::rng::BattleRng;
use crate::types::{Side, UnitId};
use crate::units::Unit;

#[derive(Debug)]
pub struct Roster {
    slots: Vec<Option<Unit>>,
    side: Option<Side>,
}

impl Roster {
    /// Build a roster from an ordered list of optional units.
    ///
    /// Empty entries do not count toward capacity, so a list of six `None`s is
    /// fine while six units is not. The result is already validated.
    pub fn new<I>(units: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = Option<Unit>>,
    {
        let slots: Vec<Option<Unit>> = units.into_iter().collect();
        let count = slots.iter().filter(|slot| slot.is_some()).count();
        if count > ROSTER_CAPACITY {
            return Err(GameError::RosterOverflow {
                count,
                capacity: ROSTER_CAPACITY,
            });
        }

        let mut roster = Self { slots, side: None };
        roster.validate()?;
        Ok(roster)
    }

    /// Build a roster from units with no gaps.
    pub fn from_units<I>(units: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = Unit>,
    {
        Self::new(units.into_iter().map(Some))
    }

    pub fn empty() -> Self {
        let mut slots = Vec::with_capacity(ROSTER_CAPACITY);
        slots.resize_with(ROSTER_CAPACITY, || None);
        Self { slots, side: None }
    }

    pub fn capacity(&self) -> usize {
        ROSTER_CAPACITY
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    /// Bind this roster to a side of a match. Every occupant, and every unit
    /// placed here later, points back at that side.
    pub(crate) fn attach(&mut self, side: Side) {
        self.side = Some(side);
        for unit in self.slots.iter_mut().flatten() {
            unit.set_side(Some(side));
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn slots(&self) -> &[Option<Unit>] {
        &self.slots
    }

    /// Occupants in slot order, skipping empty slots.
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.slots.iter_mut().flatten()
    }

    pub fn ids(&self) -> Vec<UnitId> {
        self.iter().map(|u| u.id()).collect()
    }

    pub fn front(&self) -> Option<&Unit> {
        self.slots.first().and_then(|slot| slot.as_ref())
    }

    /// Map a possibly negative index to a slot. Negative indices count from
    /// the back, so `-1` is the last slot.
    fn slot_index(&self, index: isize) -> GameResult<usize> {
        let capacity = ROSTER_CAPACITY as isize;
        let resolved = if index < 0 { capacity + index } else { index };
        if resolved < 0 || resolved >= capacity {
            return Err(GameError::OutOfBounds {
                index,
                capacity: ROSTER_CAPACITY,
            });
        }
        Ok(resolved as usize)
    }

    /// Occupant of a slot, `None` for an empty slot.
    pub fn get(&self, index: isize) -> GameResult<Option<&Unit>> {
        let i = self.slot_index(index)?;
        Ok(self.slots.get(i).and_then(|slot| slot.as_ref()))
    }

    pub fn get_mut(&mut self, index: isize) -> GameResult<Option<&mut Unit>> {
        let i = self.slot_index(index)?;
        Ok(self.slots.get_mut(i).and_then(|slot| slot.as_mut()))
    }

    /// Slot index of a unit, by identity.
    pub fn index_of(&self, unit: UnitId) -> GameResult<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().map(|u| u.id()) == Some(unit))
            .ok_or(GameError::NotFound { unit })
    }

    pub fn contains(&self, unit: UnitId) -> bool {
        self.index_of(unit).is_ok()
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.iter().find(|u| u.id() == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.iter_mut().find(|u| u.id() == id)
    }

    /// Put `value` into a slot and re-validate.
    ///
    /// Returns every unit that left the roster: the displaced occupant first,
    /// then any occupant pruned by validation.
    pub fn set(&mut self, index: isize, value: Option<Unit>) -> GameResult<Vec<Unit>> {
        let i = self.slot_index(index)?;
        self.replace(i, value)
    }

    /// Like [`Roster::set`], addressing the slot by the unit occupying it.
    pub fn set_unit(&mut self, unit: UnitId, value: Option<Unit>) -> GameResult<Vec<Unit>> {
        let i = self.index_of(unit)?;
        self.replace(i, value)
    }

    fn replace(&mut self, i: usize, mut value: Option<Unit>) -> GameResult<Vec<Unit>> {
        if let Some(unit) = value.as_mut() {
            unit.set_side(self.side);
        }
        let mut removed = Vec::new();
        if let Some(old) = core::mem::replace(&mut self.slots[i], value) {
            removed.push(old);
        }
        removed.extend(self.validate()?);
        Ok(removed)
    }

    /// Restore the roster invariant.
    ///
    /// Drops empty slots, prunes fainted occupants, then left-packs the
    /// survivors and pads with empty slots up to capacity. Returns the pruned
    /// units. Idempotent.
    pub fn validate(&mut self) -> GameResult<Vec<Unit>> {
        let survivors = self.iter().filter(|u| !u.is_fainted()).count();
        if survivors > ROSTER_CAPACITY {
            return Err(GameError::RosterOverflow {
                count: survivors,
                capacity: ROSTER_CAPACITY,
            });
        }

        let mut packed = Vec::with_capacity(ROSTER_CAPACITY);
        let mut pruned = Vec::new();
        for unit in self.slots.drain(..).flatten() {
            if unit.is_fainted() {
                pruned.push(unit);
            } else {
                packed.push(Some(unit));
            }
        }
        packed.resize_with(ROSTER_CAPACITY, || None);
        self.slots = packed;
        Ok(pruned)
    }

    /// Up to `n` distinct occupants in random order.
    ///
    /// Asking for more than are present returns all of them; this never fails.
    pub fn random_subset<R: BattleRng>(&self, n: usize, rng: &mut R) -> Vec<UnitId> {
        let mut ids = self.ids();
        rng.shuffle(&mut ids);
        ids.truncate(n);
        ids
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::empty()
    }
}

/// Rosters are equal when their occupants, read front to back with empty
/// slots skipped, are pairwise equal by value.
impl PartialEq for Roster {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for slot in &self.slots {
            match slot {
                Some(unit) => write!(f, "{} ", unit)?,
                None => f.write_str("_____ ")?,
            }
        }
        f.write_str("]")
    }
}
