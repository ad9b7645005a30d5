use serde::{Deserialize, Serialize};

use super::army::Army;
use super::build::BuildProject;
use super::resources::{ResourceKind, ResourceLedger};
use super::settlement::Settlement;

/// Aggregate root for a kingdom's mutable state.
///
/// Phase controllers never mutate a `Kingdom` they hold directly; every
/// change goes through the ledger accessor's atomic update so the owner can
/// serialize writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kingdom {
    pub resources: ResourceLedger,
    pub unrest: u32,
    pub settlements: Vec<Settlement>,
    pub armies: Vec<Army>,
    pub build_queue: Vec<BuildProject>,
}

impl Kingdom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn food(&self) -> u32 {
        self.resources.amount(ResourceKind::Food)
    }

    pub fn gold(&self) -> u32 {
        self.resources.amount(ResourceKind::Gold)
    }

    /// Add unrest, saturating. Unrest has no upper cap but never goes negative.
    pub fn add_unrest(&mut self, amount: u32) {
        self.unrest = self.unrest.saturating_add(amount);
    }
}
