//! Shared primitives for the guild simulation workspace.
//!
//! This crate has no knowledge of contracts, heroes, or the day-advance
//! pipeline — it provides the type-safe building blocks `guild-engine`
//! is built from: typed ids, the `Copper` monetary unit, basis-point
//! fraction math, and the balance constants that tune the simulation.
#![allow(dead_code)]

mod constants;
mod id;
mod money;

#[cfg(feature = "cli")]
mod log;

pub use constants::*;
pub use id::*;
pub use money::*;

#[cfg(feature = "cli")]
pub use log::init_logging;

/// Identifies a domain entity that owns a typed id.
pub trait Unique<T = Self> {
    fn id(&self) -> Id<T>;
}
