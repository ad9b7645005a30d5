//! Named-step tracking within a phase.
//!
//! Steps are addressed by stable string ids so a phase can reorder or skip
//! steps across versions without breaking saved state. The typed step enums
//! give controllers an exhaustive, ordered view over those ids while keeping
//! the external persistence contract string-keyed.

use std::collections::BTreeMap;

/// Immutable description of one step of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub id: &'static str,
    pub name: &'static str,
}

/// The three steps of the Upkeep phase, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpkeepStep {
    FeedSettlements,
    SupportMilitary,
    ProcessBuilds,
}

impl UpkeepStep {
    pub const ALL: [UpkeepStep; 3] = [
        UpkeepStep::FeedSettlements,
        UpkeepStep::SupportMilitary,
        UpkeepStep::ProcessBuilds,
    ];

    /// Stable id used for step persistence.
    pub fn id(self) -> &'static str {
        match self {
            UpkeepStep::FeedSettlements => "feed-settlements",
            UpkeepStep::SupportMilitary => "support-military",
            UpkeepStep::ProcessBuilds => "process-builds",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            UpkeepStep::FeedSettlements => "Feed Settlements",
            UpkeepStep::SupportMilitary => "Support Military",
            UpkeepStep::ProcessBuilds => "Process Build Queue",
        }
    }

    pub fn definition(self) -> StepDefinition {
        StepDefinition {
            id: self.id(),
            name: self.display_name(),
        }
    }

    /// Ordered definitions for phase initialization.
    pub fn definitions() -> [StepDefinition; 3] {
        Self::ALL.map(UpkeepStep::definition)
    }
}

/// The single step of the Status phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusStep {
    ApplyDecay,
}

impl StatusStep {
    pub const ALL: [StatusStep; 1] = [StatusStep::ApplyDecay];

    /// Stable id used for step persistence.
    pub fn id(self) -> &'static str {
        match self {
            StatusStep::ApplyDecay => "apply-decay",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            StatusStep::ApplyDecay => "Apply Resource Decay",
        }
    }

    pub fn definition(self) -> StepDefinition {
        StepDefinition {
            id: self.id(),
            name: self.display_name(),
        }
    }

    pub fn definitions() -> [StepDefinition; 1] {
        Self::ALL.map(StatusStep::definition)
    }
}

/// Backing store for step completion, durable for the current phase's
/// lifetime but not across process restarts.
pub trait StepStore {
    /// Reset completion state to incomplete for exactly the given steps,
    /// discarding state from any prior phase.
    fn initialize_steps(&mut self, steps: &[StepDefinition]);

    /// Idempotent: completing an already-complete step is a no-op. Ids not
    /// declared at initialization are ignored.
    fn mark_step_complete(&mut self, id: &str);

    /// Unknown ids read as incomplete rather than erroring; auto-completion
    /// checks are best-effort.
    fn step_complete(&self, id: &str) -> bool;
}

/// In-memory step store covering a single phase.
///
/// Completion is monotonic: within one phase a completed step never reverts
/// to incomplete. Only `initialize_steps` resets state.
#[derive(Debug, Clone, Default)]
pub struct StepTracker {
    completed: BTreeMap<String, bool>,
}

impl StepTracker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepStore for StepTracker {
    fn initialize_steps(&mut self, steps: &[StepDefinition]) {
        self.completed = steps.iter().map(|s| (s.id.to_string(), false)).collect();
    }

    fn mark_step_complete(&mut self, id: &str) {
        if let Some(done) = self.completed.get_mut(id) {
            *done = true;
        }
    }

    fn step_complete(&self, id: &str) -> bool {
        self.completed.get(id).copied().unwrap_or(false)
    }
}
