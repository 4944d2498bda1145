use serde::Deserialize;
use serde::Serialize;

/// Guild rank, F through S. The underlying integer (1..7) is also the
/// canonical on-disk representation (spec.md section 3: "integer 1..7").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    F = 1,
    E = 2,
    D = 3,
    C = 4,
    B = 5,
    A = 6,
    S = 7,
}

impl Rank {
    pub const fn all() -> [Rank; 7] {
        [
            Rank::F,
            Rank::E,
            Rank::D,
            Rank::C,
            Rank::B,
            Rank::A,
            Rank::S,
        ]
    }
    /// 0-based index into per-rank tables (`PAYOUT_BANDS_GOLD`,
    /// `TAX_RANK_MULTIPLIER`, `GUILD_RANK_THRESHOLDS`).
    pub const fn ordinal(self) -> usize {
        (self as u8 - 1) as usize
    }
    pub const fn level(self) -> i64 {
        self as i64
    }
    pub fn next(self) -> Option<Rank> {
        Rank::from_level(self.level() + 1)
    }
    pub fn from_level(level: i64) -> Option<Rank> {
        Some(match level {
            1 => Rank::F,
            2 => Rank::E,
            3 => Rank::D,
            4 => Rank::C,
            5 => Rank::B,
            6 => Rank::A,
            7 => Rank::S,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Rank::F => "F",
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
        };
        write!(f, "{}", s)
    }
}

/// A hero's combat archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroClass {
    Warrior,
    Mage,
    Heal,
}

impl std::fmt::Display for HeroClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HeroClass::Warrior => "WARRIOR",
            HeroClass::Mage => "MAGE",
            HeroClass::Heal => "HEAL",
        };
        write!(f, "{}", s)
    }
}

/// A hero's current engagement state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroStatus {
    Available,
    OnMission,
}

/// Trophy condition sampled at contract resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Ok,
    Damaged,
    None,
}

/// Resolution outcome of a WIP active contract (spec.md section 4.5,
/// Phase 5). `Death` is a reclassification of `Fail`, never a
/// reclassification of a missing fifth variant — see
/// `guild_core::MISSING_CHANCE_PERCENT` and DESIGN.md's reading of the
/// spec's open question on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Partial,
    Fail,
    Death,
}

/// Lifecycle state of an active contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActiveStatus {
    Wip,
    ReturnReady,
    Closed,
}

/// Lifecycle state of a posted board contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardStatus {
    Open,
    Locked,
    Completed,
}

/// Who keeps recovered trophies (spec.md GLOSSARY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalvagePolicy {
    Guild,
    Hero,
    Split,
}

/// Governs how strictly `CloseReturn` is required versus auto-closing
/// (spec.md section 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProofPolicy {
    Fast,
    Strict,
}

/// Which way an unposted draft resolved itself (spec.md section 4.5,
/// Phase 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutoResolveBucket {
    Good,
    Neutral,
    Bad,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_levels_round_trip() {
        for rank in Rank::all() {
            assert_eq!(Rank::from_level(rank.level()), Some(rank));
        }
    }

    #[test]
    fn rank_ordinal_is_zero_based() {
        assert_eq!(Rank::F.ordinal(), 0);
        assert_eq!(Rank::S.ordinal(), 6);
    }

    #[test]
    fn s_rank_has_no_next() {
        assert_eq!(Rank::S.next(), None);
        assert_eq!(Rank::F.next(), Some(Rank::E));
    }
}
