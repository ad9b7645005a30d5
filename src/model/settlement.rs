use serde::{Deserialize, Serialize};

/// Settlement size tier. Food consumption and army support both scale with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementTier {
    Village,
    Town,
    City,
    Metropolis,
}

impl SettlementTier {
    /// Food consumed per upkeep turn.
    pub fn food_consumption(self) -> u32 {
        match self {
            SettlementTier::Village => 1,
            SettlementTier::Town => 4,
            SettlementTier::City => 8,
            SettlementTier::Metropolis => 12,
        }
    }

    /// Number of armies a settlement of this tier can sustain.
    pub fn army_support(self) -> u32 {
        match self {
            SettlementTier::Village => 1,
            SettlementTier::Town => 2,
            SettlementTier::City => 3,
            SettlementTier::Metropolis => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub name: String,
    pub tier: SettlementTier,
    /// Set during every upkeep pass. Unfed settlements produce no gold next turn.
    pub was_fed_last_turn: bool,
}

impl Settlement {
    pub fn new(name: impl Into<String>, tier: SettlementTier) -> Self {
        Self {
            name: name.into(),
            tier,
            was_fed_last_turn: true,
        }
    }
}
