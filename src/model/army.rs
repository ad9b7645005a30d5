use serde::{Deserialize, Serialize};

/// Gold owed per army per upkeep turn.
pub const ARMY_GOLD_UPKEEP: u32 = 1;

/// Food consumed per army per upkeep turn.
pub const ARMY_FOOD_UPKEEP: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Army {
    pub name: String,
}

impl Army {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
