//! Status phase: beginning-of-turn bookkeeping, currently resource decay.
//!
//! Non-storable resources (lumber, stone, ore) do not carry over between
//! turns; whatever was not spent last turn is lost here, before the turn's
//! gains are rolled.

use serde::Serialize;
use tracing::{debug, warn};

use super::ledger::{LedgerAccessor, LedgerError};
use super::reporter::{PhaseReporter, PhaseResult};
use super::steps::{StatusStep, StepStore, StepTracker};
use crate::model::ResourceKind;

pub const STATUS_PHASE: &str = "status";

/// Per-step completion flags for the Status phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusStepsCompleted {
    pub apply_decay: bool,
}

/// Controller for the Status phase of a kingdom turn.
pub struct StatusPhaseController<L, R, S = StepTracker> {
    ledger: L,
    reporter: R,
    steps: S,
}

impl<L, R> StatusPhaseController<L, R>
where
    L: LedgerAccessor,
    R: PhaseReporter,
{
    pub fn new(ledger: L, reporter: R) -> Self {
        Self::with_step_store(ledger, reporter, StepTracker::new())
    }
}

impl<L, R, S> StatusPhaseController<L, R, S>
where
    L: LedgerAccessor,
    R: PhaseReporter,
    S: StepStore,
{
    /// Use a host-supplied step store instead of the in-memory tracker.
    pub fn with_step_store(ledger: L, reporter: R, steps: S) -> Self {
        Self {
            ledger,
            reporter,
            steps,
        }
    }

    /// Initialize the phase's steps. Decay always requires an explicit
    /// invocation, even when every non-storable balance is already zero.
    pub async fn start_phase(&mut self) -> PhaseResult {
        self.reporter.report_start(STATUS_PHASE);
        self.steps.initialize_steps(&StatusStep::definitions());
        self.reporter.report_complete(STATUS_PHASE);
        PhaseResult::ok()
    }

    /// Zero every non-storable resource in one atomic update. The success
    /// message reports how much of each kind was lost.
    pub async fn apply_decay(&mut self) -> PhaseResult {
        if self.steps.step_complete(StatusStep::ApplyDecay.id()) {
            return PhaseResult::fail("Resource decay already applied this turn");
        }

        let lost = match self.decay_resources().await {
            Ok(lost) => lost,
            Err(err) => return PhaseResult::fail(err.to_string()),
        };

        self.steps.mark_step_complete(StatusStep::ApplyDecay.id());
        if lost.is_empty() {
            PhaseResult::ok()
        } else {
            let detail: Vec<String> = lost
                .iter()
                .map(|(kind, amount)| format!("{amount} {kind}"))
                .collect();
            PhaseResult::ok_with(format!("Decayed unspent resources: {}", detail.join(", ")))
        }
    }

    /// Current completion of the phase's steps, for rendering.
    pub fn display_data(&self) -> StatusStepsCompleted {
        StatusStepsCompleted {
            apply_decay: self.steps.step_complete(StatusStep::ApplyDecay.id()),
        }
    }

    async fn decay_resources(&self) -> Result<Vec<(ResourceKind, u32)>, LedgerError> {
        let Some(kingdom) = self.ledger.current_kingdom()? else {
            warn!(phase = STATUS_PHASE, "no kingdom loaded; skipping resource decay");
            return Ok(Vec::new());
        };

        let nothing_to_decay = ResourceKind::ALL
            .iter()
            .all(|&kind| kind.is_storable() || kingdom.resources.amount(kind) == 0);
        if nothing_to_decay {
            return Ok(Vec::new());
        }

        let lost = self
            .ledger
            .atomic_update(|kingdom| {
                let mut lost = Vec::new();
                for kind in ResourceKind::ALL {
                    if kind.is_storable() {
                        continue;
                    }
                    let amount = kingdom.resources.amount(kind);
                    if amount > 0 {
                        kingdom.resources.set(kind, 0);
                        lost.push((kind, amount));
                    }
                }
                lost
            })
            .await?;

        debug!(phase = STATUS_PHASE, kinds = lost.len(), "resources decayed");
        Ok(lost)
    }
}
