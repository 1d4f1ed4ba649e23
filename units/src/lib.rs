//! Default unit catalog for Menagerie
//!
//! Concrete unit kinds implementing [`menagerie_battle::Behavior`], and a
//! lookup table to create them by name.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod animals;
pub mod catalog;

pub use animals::{Ant, Fish, Pig, Sloth};
