use guild_core::Copper;

/// The guild's treasury (spec.md section 3).
///
/// `reserved_copper` is the escrowed portion backing posted contracts'
/// obligations; it must never exceed `money_copper` (invariant
/// ECONOMY__AVAILABLE_NONNEGATIVE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Economy {
    pub money_copper: Copper,
    pub reserved_copper: Copper,
    pub trophies_stock: i64,
}

impl Economy {
    pub fn new(starting_money: Copper) -> Self {
        Self {
            money_copper: starting_money,
            reserved_copper: Copper::ZERO,
            trophies_stock: 0,
        }
    }

    /// Available (unreserved) funds. Never negative in a valid state.
    pub fn available(&self) -> Copper {
        self.money_copper - self.reserved_copper
    }
}

impl Default for Economy {
    fn default() -> Self {
        Self::new(Copper::from_gold(50))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_excludes_reserved() {
        let economy = Economy {
            money_copper: Copper(1000),
            reserved_copper: Copper(400),
            trophies_stock: 0,
        };
        assert_eq!(economy.available().get(), 600);
    }
}
