use serde::Deserialize;
use serde::Serialize;
use std::iter::Sum;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Sub;
use std::ops::SubAssign;

/// 100 copper = 1 gold (spec.md GLOSSARY). All authoritative state is in
/// copper; gold only appears in pricing-table literals that get converted
/// once, at draft-generation time.
pub const COPPER_PER_GOLD: i64 = 100;

/// The atomic monetary unit. Backed by `i64` so intermediate arithmetic
/// (escrow deltas, settlement payouts) can't overflow `u32`-ish ranges
/// used elsewhere in similar engines; state invariants enforce
/// non-negativity at the boundary rather than at the type.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Copper(pub i64);

impl Copper {
    pub const ZERO: Copper = Copper(0);

    pub fn from_gold(gold: i64) -> Self {
        Copper(gold * COPPER_PER_GOLD)
    }
    pub fn get(self) -> i64 {
        self.0
    }
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
    pub fn checked_sub(self, rhs: Copper) -> Option<Copper> {
        self.0.checked_sub(rhs.0).map(Copper)
    }
    /// Applies a basis-point fraction (10000 = 100%), flooring the result.
    /// This is the only place fractional money math happens; the result
    /// is always a whole number of copper (spec.md section 4.5, "Monetary
    /// math").
    pub fn mul_bp(self, bp: i64) -> Copper {
        Copper((self.0 * bp) / BASIS_POINTS_WHOLE)
    }
}

impl Add for Copper {
    type Output = Copper;
    fn add(self, rhs: Copper) -> Copper {
        Copper(self.0 + rhs.0)
    }
}
impl AddAssign for Copper {
    fn add_assign(&mut self, rhs: Copper) {
        self.0 += rhs.0;
    }
}
impl Sub for Copper {
    type Output = Copper;
    fn sub(self, rhs: Copper) -> Copper {
        Copper(self.0 - rhs.0)
    }
}
impl SubAssign for Copper {
    fn sub_assign(&mut self, rhs: Copper) {
        self.0 -= rhs.0;
    }
}
impl Sum for Copper {
    fn sum<I: Iterator<Item = Copper>>(iter: I) -> Self {
        iter.fold(Copper::ZERO, Add::add)
    }
}

impl std::fmt::Display for Copper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}c", self.0)
    }
}

/// `10000` basis points make a whole (100%). Used by every floor-division
/// fraction in the pricing and settlement sub-models.
pub const BASIS_POINTS_WHOLE: i64 = 10_000;

/// Floors `value * bp / 10000` without going through `Copper`, for the
/// handful of dimensionless fraction computations (e.g. theft reduction)
/// that aren't themselves money.
pub fn floor_bp(value: i64, bp: i64) -> i64 {
    (value * bp) / BASIS_POINTS_WHOLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gold_conversion() {
        assert_eq!(Copper::from_gold(5).get(), 500);
    }

    #[test]
    fn basis_point_floor() {
        // floor(777 * 5000 / 10000) = floor(388.5) = 388
        assert_eq!(Copper(777).mul_bp(5000).get(), 388);
    }

    #[test]
    fn arithmetic() {
        let a = Copper(100);
        let b = Copper(40);
        assert_eq!((a - b).get(), 60);
        assert_eq!((a + b).get(), 140);
        assert_eq!(a.checked_sub(Copper(200)), None);
    }

    #[test]
    fn sums() {
        let total: Copper = vec![Copper(1), Copper(2), Copper(3)].into_iter().sum();
        assert_eq!(total.get(), 6);
    }
}
