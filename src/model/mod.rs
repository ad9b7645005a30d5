pub mod army;
pub mod build;
pub mod kingdom;
pub mod resources;
pub mod settlement;

pub use army::{ARMY_FOOD_UPKEEP, ARMY_GOLD_UPKEEP, Army};
pub use build::BuildProject;
pub use kingdom::Kingdom;
pub use resources::{ResourceKind, ResourceLedger};
pub use settlement::{Settlement, SettlementTier};
