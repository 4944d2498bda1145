//! The root aggregate and its six sub-aggregates (spec.md section 3).
//!
//! `GameState` is immutable from the outside: every mutation goes through
//! the reducer (`crate::reducer::step`), which receives a state by value
//! and returns a new one. Handlers and pipeline sub-models take `&mut
//! GameState` only within the scope of a single step — nothing outside
//! the reducer ever holds a mutable reference across steps.

pub mod contracts;
pub mod economy;
pub mod guild;
pub mod heroes;
pub mod meta;
pub mod region;

pub use contracts::ActiveContract;
pub use contracts::BoardContract;
pub use contracts::ContractDraft;
pub use contracts::Contracts;
pub use contracts::ReturnPacket;
pub use economy::Economy;
pub use guild::Guild;
pub use heroes::Hero;
pub use heroes::Heroes;
pub use meta::Meta;
pub use region::Region;

/// The authoritative root aggregate.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameState {
    pub meta: Meta,
    pub guild: Guild,
    pub region: Region,
    pub economy: Economy,
    pub contracts: Contracts,
    pub heroes: Heroes,
}

impl GameState {
    /// A fresh guild at rank F, day 0, with the seed fixed for the life
    /// of this state (spec.md section 3: "seed ... fixed at creation").
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            meta: Meta::new(seed),
            guild: Guild::new(),
            region: Region::new(),
            economy: Economy::default(),
            contracts: Contracts::new(),
            heroes: Heroes::new(),
        };
        state.meta.tax_amount_due = crate::pipeline::tax::amount_due(state.guild.rank);
        state
    }
}
