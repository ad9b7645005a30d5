use serde::{Deserialize, Serialize};

/// A structure under construction, enqueued by the structures layer.
///
/// The upkeep phase completes every queued project in a single pass; there is
/// no per-project cost or multi-turn progress tracked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildProject {
    pub structure_id: String,
}

impl BuildProject {
    pub fn new(structure_id: impl Into<String>) -> Self {
        Self {
            structure_id: structure_id.into(),
        }
    }
}
