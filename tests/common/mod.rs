// Each test binary compiles this module separately; not every suite uses
// every helper.
#![allow(dead_code)]

use std::sync::Mutex;

use kingdom_engine::model::*;
use kingdom_engine::phase::PhaseReporter;

/// A small border kingdom: 2 settlements, 1 army, 1 queued project.
pub fn build_test_kingdom() -> Kingdom {
    let mut kingdom = Kingdom::new();
    kingdom.resources.set(ResourceKind::Food, 10);
    kingdom.resources.set(ResourceKind::Gold, 5);
    kingdom
        .settlements
        .push(Settlement::new("Ironhold", SettlementTier::Town));
    kingdom
        .settlements
        .push(Settlement::new("Millbrook", SettlementTier::Village));
    kingdom.armies.push(Army::new("First Levy"));
    kingdom.build_queue.push(BuildProject::new("granary"));
    kingdom
}

/// Reporter that records every notification for later assertion.
#[derive(Default)]
pub struct RecordingReporter {
    pub events: Mutex<Vec<String>>,
}

impl PhaseReporter for RecordingReporter {
    fn report_start(&self, phase: &str) {
        self.events.lock().unwrap().push(format!("start:{phase}"));
    }

    fn report_complete(&self, phase: &str) {
        self.events.lock().unwrap().push(format!("complete:{phase}"));
    }

    fn report_error(&self, phase: &str, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("error:{phase}:{message}"));
    }
}

impl RecordingReporter {
    pub fn recorded(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}
