//! Upkeep phase: settlement feeding, military support, and build processing.
//!
//! Resource decay runs at the beginning of the turn in the Status phase
//! (`phase::status`), not here.
//!
//! Each step performs its domain effect through one atomic ledger update and
//! is guarded against double application within a turn: a step that already
//! completed rejects a second invocation with a failure result instead of
//! consuming resources twice. Shortages are not errors — they convert the
//! deficit into unrest and let the turn proceed.

use serde::Serialize;
use tracing::{debug, warn};

use super::ledger::{LedgerAccessor, LedgerError};
use super::reporter::{PhaseReporter, PhaseResult};
use super::steps::{StepStore, StepTracker, UpkeepStep};
use crate::economics::consumption::{
    army_support_capacity, calculate_consumption, unsupported_armies,
};
use crate::model::{ARMY_GOLD_UPKEEP, Kingdom, ResourceKind};

pub const UPKEEP_PHASE: &str = "upkeep";

/// Per-step completion flags, as shown to the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpkeepStepsCompleted {
    pub feed_settlements: bool,
    pub support_military: bool,
    pub process_builds: bool,
}

/// Read-only projection of upkeep state for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpkeepDisplay {
    pub current_food: u32,
    pub food_consumption: u32,
    pub food_shortage: u32,
    pub settlement_consumption: u32,
    pub army_consumption: u32,
    pub army_count: u32,
    pub army_support: u32,
    pub unsupported_count: u32,
    pub food_remaining_for_armies: u32,
    pub army_food_shortage: u32,
    pub settlement_food_shortage: u32,
    pub steps_completed: UpkeepStepsCompleted,
}

/// Controller for the Upkeep phase of a kingdom turn.
///
/// Ledger access and lifecycle reporting are constructor-injected; the
/// controller holds no kingdom state of its own beyond step completion.
pub struct UpkeepPhaseController<L, R, S = StepTracker> {
    ledger: L,
    reporter: R,
    steps: S,
}

impl<L, R> UpkeepPhaseController<L, R>
where
    L: LedgerAccessor,
    R: PhaseReporter,
{
    pub fn new(ledger: L, reporter: R) -> Self {
        Self::with_step_store(ledger, reporter, StepTracker::new())
    }
}

impl<L, R, S> UpkeepPhaseController<L, R, S>
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

    /// Initialize the phase's steps and auto-complete the ones with nothing
    /// to process: military support when there are no armies, build
    /// processing when the queue is empty. Settlement feeding is never
    /// auto-completed — the turn must contain a deliberate food decision.
    pub async fn start_phase(&mut self) -> PhaseResult {
        self.reporter.report_start(UPKEEP_PHASE);

        self.steps.initialize_steps(&UpkeepStep::definitions());

        let kingdom = match self.ledger.current_kingdom() {
            Ok(snapshot) => snapshot.unwrap_or_default(),
            Err(err) => {
                self.reporter.report_error(UPKEEP_PHASE, &err.to_string());
                return PhaseResult::fail(err.to_string());
            }
        };

        if kingdom.armies.is_empty() {
            self.steps.mark_step_complete(UpkeepStep::SupportMilitary.id());
            debug!(phase = UPKEEP_PHASE, "military support auto-completed (no armies)");
        }
        if kingdom.build_queue.is_empty() {
            self.steps.mark_step_complete(UpkeepStep::ProcessBuilds.id());
            debug!(phase = UPKEEP_PHASE, "build queue auto-completed (no projects)");
        }

        self.reporter.report_complete(UPKEEP_PHASE);
        PhaseResult::ok()
    }

    /// Feed settlements and armies from the food stock, all-or-nothing at
    /// the kingdom level: either every settlement is fed, or the whole
    /// shortfall becomes unrest and every settlement goes unfed.
    pub async fn feed_settlements(&mut self) -> PhaseResult {
        if self.steps.step_complete(UpkeepStep::FeedSettlements.id()) {
            return PhaseResult::fail("Settlements already fed this turn");
        }

        if let Err(err) = self.consume_food().await {
            return PhaseResult::fail(err.to_string());
        }

        self.steps.mark_step_complete(UpkeepStep::FeedSettlements.id());
        PhaseResult::ok()
    }

    /// Pay army upkeep (flat gold per army); an unpayable remainder becomes
    /// unrest.
    pub async fn support_military(&mut self) -> PhaseResult {
        if self.steps.step_complete(UpkeepStep::SupportMilitary.id()) {
            return PhaseResult::fail("Military already supported this turn");
        }

        if let Err(err) = self.pay_army_upkeep().await {
            return PhaseResult::fail(err.to_string());
        }

        self.steps.mark_step_complete(UpkeepStep::SupportMilitary.id());
        PhaseResult::ok()
    }

    /// Complete every queued build project in one pass, emptying the queue.
    /// The success message lists the completed structure ids.
    pub async fn process_builds(&mut self) -> PhaseResult {
        if self.steps.step_complete(UpkeepStep::ProcessBuilds.id()) {
            return PhaseResult::fail("Build queue already processed this turn");
        }

        let completed = match self.complete_queued_builds().await {
            Ok(ids) => ids,
            Err(err) => return PhaseResult::fail(err.to_string()),
        };

        self.steps.mark_step_complete(UpkeepStep::ProcessBuilds.id());
        if completed.is_empty() {
            PhaseResult::ok()
        } else {
            PhaseResult::ok_with(format!(
                "Completed {} build project(s): {}",
                completed.len(),
                completed.join(", ")
            ))
        }
    }

    /// Recompute consumption, support capacity, and shortages from a
    /// snapshot without mutating anything. `None` yields the all-zero
    /// default shape.
    pub fn display_data(&self, kingdom: Option<&Kingdom>) -> UpkeepDisplay {
        let Some(kingdom) = kingdom else {
            return UpkeepDisplay::default();
        };

        let consumption = calculate_consumption(&kingdom.settlements, &kingdom.armies);
        let army_support = army_support_capacity(&kingdom.settlements);
        let unsupported_count = unsupported_armies(&kingdom.armies, &kingdom.settlements);
        let current_food = kingdom.food();
        let food_remaining_for_armies = current_food.saturating_sub(consumption.settlement_food);

        UpkeepDisplay {
            current_food,
            food_consumption: consumption.total_food,
            food_shortage: consumption.total_food.saturating_sub(current_food),
            settlement_consumption: consumption.settlement_food,
            army_consumption: consumption.army_food,
            army_count: kingdom.armies.len() as u32,
            army_support,
            unsupported_count,
            food_remaining_for_armies,
            army_food_shortage: consumption.army_food.saturating_sub(food_remaining_for_armies),
            settlement_food_shortage: consumption.settlement_food.saturating_sub(current_food),
            steps_completed: UpkeepStepsCompleted {
                feed_settlements: self.steps.step_complete(UpkeepStep::FeedSettlements.id()),
                support_military: self.steps.step_complete(UpkeepStep::SupportMilitary.id()),
                process_builds: self.steps.step_complete(UpkeepStep::ProcessBuilds.id()),
            },
        }
    }

    async fn consume_food(&self) -> Result<(), LedgerError> {
        if self.ledger.current_kingdom()?.is_none() {
            warn!(phase = UPKEEP_PHASE, "no kingdom loaded; skipping food consumption");
            return Ok(());
        }

        let (total_food, shortfall) = self
            .ledger
            .atomic_update(|kingdom| {
                let consumption = calculate_consumption(&kingdom.settlements, &kingdom.armies);
                let shortfall = kingdom
                    .resources
                    .spend(ResourceKind::Food, consumption.total_food);
                let fed = shortfall == 0;
                for settlement in &mut kingdom.settlements {
                    settlement.was_fed_last_turn = fed;
                }
                if shortfall > 0 {
                    kingdom.add_unrest(shortfall);
                }
                (consumption.total_food, shortfall)
            })
            .await?;

        if shortfall > 0 {
            warn!(
                phase = UPKEEP_PHASE,
                needed = total_food,
                shortfall,
                "food shortage generated unrest"
            );
        } else {
            debug!(phase = UPKEEP_PHASE, consumed = total_food, "settlements fed");
        }
        Ok(())
    }

    async fn pay_army_upkeep(&self) -> Result<(), LedgerError> {
        let Some(kingdom) = self.ledger.current_kingdom()? else {
            warn!(phase = UPKEEP_PHASE, "no kingdom loaded; skipping military support");
            return Ok(());
        };
        if kingdom.armies.is_empty() {
            return Ok(());
        }

        let shortfall = self
            .ledger
            .atomic_update(|kingdom| {
                let cost = kingdom.armies.len() as u32 * ARMY_GOLD_UPKEEP;
                let shortfall = kingdom.resources.spend(ResourceKind::Gold, cost);
                if shortfall > 0 {
                    kingdom.add_unrest(shortfall);
                }
                shortfall
            })
            .await?;

        if shortfall > 0 {
            warn!(
                phase = UPKEEP_PHASE,
                shortfall, "military support shortage generated unrest"
            );
        }
        Ok(())
    }

    async fn complete_queued_builds(&self) -> Result<Vec<String>, LedgerError> {
        let Some(kingdom) = self.ledger.current_kingdom()? else {
            warn!(phase = UPKEEP_PHASE, "no kingdom loaded; skipping build queue");
            return Ok(Vec::new());
        };
        if kingdom.build_queue.is_empty() {
            return Ok(Vec::new());
        }

        // Snapshot-and-clear in a single update so no project can be lost
        // or completed twice.
        let completed = self
            .ledger
            .atomic_update(|kingdom| {
                std::mem::take(&mut kingdom.build_queue)
                    .into_iter()
                    .map(|project| project.structure_id)
                    .collect::<Vec<_>>()
            })
            .await?;

        debug!(
            phase = UPKEEP_PHASE,
            count = completed.len(),
            "build projects completed"
        );
        Ok(completed)
    }
}
