use crate::enums::HeroClass;
use crate::enums::HeroStatus;
use crate::enums::Rank;
use guild_core::Id;
use guild_core::Unique;

/// A hero on the guild's roster (spec.md section 3).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Hero {
    pub id: Id<Hero>,
    pub name: String,
    pub rank: Rank,
    pub class: HeroClass,
    pub greed: i64,
    pub honesty: i64,
    pub courage: i64,
    pub status: HeroStatus,
    pub history_completed: i64,
}

impl Unique<Hero> for Hero {
    fn id(&self) -> Id<Hero> {
        self.id
    }
}

impl Hero {
    /// Combat contribution used by Phase 5 resolution (spec.md section
    /// 4.5: `class_bonus` is 2 for warrior, 1 for mage and heal).
    pub fn class_bonus(&self) -> i64 {
        match self.class {
            HeroClass::Warrior => guild_core::CLASS_BONUS_WARRIOR,
            HeroClass::Mage | HeroClass::Heal => guild_core::CLASS_BONUS_OTHER,
        }
    }
}

/// The guild's hero roster and the day-scoped arrivals list (spec.md
/// section 3). `arrivals_today` is cleared at day start and is never
/// persisted (spec.md section 4.2).
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Heroes {
    pub roster: Vec<Hero>,
    pub arrivals_today: Vec<Id<Hero>>,
}

impl Heroes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hero(&self, id: Id<Hero>) -> Option<&Hero> {
        self.roster.iter().find(|h| h.id == id)
    }
    pub fn hero_mut(&mut self, id: Id<Hero>) -> Option<&mut Hero> {
        self.roster.iter_mut().find(|h| h.id == id)
    }
    pub fn remove(&mut self, id: Id<Hero>) {
        self.roster.retain(|h| h.id != id);
        self.arrivals_today.retain(|&a| a != id);
    }
}
