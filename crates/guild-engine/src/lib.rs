//! Deterministic, event-sourced guild-management simulation reducer.
//!
//! Everything in this crate follows one contract: `(state, command, rng)`
//! in, `(state', events)` out, bit-for-bit reproducible for any two runs
//! that start from the same seed and feed the same commands in the same
//! order.
//!
//! ## State
//!
//! - [`state::GameState`] — the root aggregate: guild standing, economy,
//!   region stability, the four contract collections, and the hero roster
//! - [`canonical`] — canonical JSON projection used for hashing and saves
//! - [`hash`] — SHA-256 fingerprints of state and event streams
//!
//! ## Commands and events
//!
//! - [`command::Command`] — the closed set of inputs an adapter may submit
//! - [`validate`] — pure pre-mutation rejection checks
//! - [`event::Event`] / [`event::EventKind`] — the closed set of outputs
//! - [`sequence::SequenceContext`] — the only way a handler may emit events
//!
//! ## Mutation
//!
//! - [`reducer::step`] — the sole mutation boundary
//! - [`handlers`] — one handler per non-`AdvanceDay` command
//! - [`pipeline`] — the nine-phase day-advance pipeline and its sub-models
//! - [`invariants`] — post-step consistency checks, never rolled back
//! - [`rng::Rng`] — the only permitted source of randomness
mod canonical;
pub mod command;
pub mod enums;
pub mod event;
mod handlers;
mod hash;
mod invariants;
mod pipeline;
mod reducer;
mod rng;
mod save;
mod sequence;
pub mod state;
mod validate;

pub use canonical::canonical_events;
pub use canonical::canonical_state;
pub use command::Command;
pub use enums::*;
pub use event::DaySnapshot;
pub use event::Event;
pub use event::EventKind;
pub use hash::hash_events;
pub use hash::hash_state;
pub use invariants::verify_invariants;
pub use invariants::InvariantId;
pub use invariants::Violation;
pub use reducer::step;
pub use rng::Rng;
pub use rng::RngError;
pub use save::load_state;
pub use save::save_state;
pub use save::SerdeError;
pub use sequence::SequenceContext;
pub use state::GameState;
pub use validate::validate;
pub use validate::Rejection;
pub use validate::RejectionReason;
