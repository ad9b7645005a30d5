use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A kind of kingdom resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Food,
    Gold,
    Lumber,
    Stone,
    Ore,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Food,
        ResourceKind::Gold,
        ResourceKind::Lumber,
        ResourceKind::Stone,
        ResourceKind::Ore,
    ];

    /// Storable resources carry over between turns; the rest decay to zero
    /// at the start of the next turn.
    pub fn is_storable(self) -> bool {
        matches!(self, ResourceKind::Food | ResourceKind::Gold)
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Food => "food",
            ResourceKind::Gold => "gold",
            ResourceKind::Lumber => "lumber",
            ResourceKind::Stone => "stone",
            ResourceKind::Ore => "ore",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Non-negative resource balances. Missing entries read as zero.
///
/// Zero balances are never stored, so equality compares values, not spending
/// history: a ledger spent down to zero equals one that never held the
/// resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLedger {
    balances: BTreeMap<ResourceKind, u32>,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self, kind: ResourceKind) -> u32 {
        self.balances.get(&kind).copied().unwrap_or(0)
    }

    pub fn set(&mut self, kind: ResourceKind, amount: u32) {
        if amount == 0 {
            self.balances.remove(&kind);
        } else {
            self.balances.insert(kind, amount);
        }
    }

    pub fn gain(&mut self, kind: ResourceKind, amount: u32) {
        let current = self.amount(kind);
        self.set(kind, current.saturating_add(amount));
    }

    /// Spend up to `amount`, flooring the balance at zero.
    /// Returns the shortfall (0 when the balance covered the full amount).
    pub fn spend(&mut self, kind: ResourceKind, amount: u32) -> u32 {
        let current = self.amount(kind);
        self.set(kind, current.saturating_sub(amount));
        amount.saturating_sub(current)
    }
}
