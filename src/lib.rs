//! Turn-based kingdom economy engine.
//!
//! A kingdom turn is a strictly ordered sequence of phases, each made of
//! named steps that complete at most once per turn. Phase controllers drive
//! the steps, a pure consumption calculator prices the economy, and all
//! state changes flow through the host's atomic ledger update. Shortages are
//! modeled outcomes (unrest), never errors.

pub mod economics;
pub mod flush;
pub mod model;
pub mod phase;

pub use economics::consumption::{
    FoodConsumption, army_support_capacity, calculate_consumption, unsupported_armies,
};
pub use model::{
    Army, BuildProject, Kingdom, ResourceKind, ResourceLedger, Settlement, SettlementTier,
};
pub use phase::{
    InMemoryLedger, LedgerAccessor, LedgerError, PhaseReporter, PhaseResult,
    StatusPhaseController, StepDefinition, StepStore, StepTracker, TracingReporter,
    UpkeepDisplay, UpkeepPhaseController,
};
