pub mod ledger;
pub mod reporter;
pub mod status;
pub mod steps;
pub mod upkeep;

pub use ledger::{InMemoryLedger, LedgerAccessor, LedgerError};
pub use reporter::{PhaseReporter, PhaseResult, TracingReporter};
pub use status::{STATUS_PHASE, StatusPhaseController, StatusStepsCompleted};
pub use steps::{StatusStep, StepDefinition, StepStore, StepTracker, UpkeepStep};
pub use upkeep::{
    UPKEEP_PHASE, UpkeepDisplay, UpkeepPhaseController, UpkeepStepsCompleted,
};
