mod common;

use common::{RecordingReporter, build_test_kingdom};
use kingdom_engine::model::ResourceKind;
use kingdom_engine::phase::{InMemoryLedger, LedgerAccessor, StatusPhaseController};

#[tokio::test]
async fn turn_start_decay_spares_storable_resources() {
    let mut kingdom = build_test_kingdom();
    kingdom.resources.set(ResourceKind::Lumber, 6);
    kingdom.resources.set(ResourceKind::Ore, 2);
    let ledger = InMemoryLedger::new(kingdom);
    let reporter = RecordingReporter::default();
    let mut ctrl = StatusPhaseController::new(&ledger, &reporter);

    assert!(ctrl.start_phase().await.success);
    let result = ctrl.apply_decay().await;
    assert!(result.success);

    let after = ledger.current_kingdom().unwrap().unwrap();
    assert_eq!(after.food(), 10);
    assert_eq!(after.gold(), 5);
    assert_eq!(after.resources.amount(ResourceKind::Lumber), 0);
    assert_eq!(after.resources.amount(ResourceKind::Ore), 0);

    assert_eq!(
        reporter.recorded(),
        vec!["start:status".to_string(), "complete:status".to_string()]
    );
}

#[tokio::test]
async fn decay_is_guarded_against_double_application() {
    let mut kingdom = build_test_kingdom();
    kingdom.resources.set(ResourceKind::Stone, 4);
    let ledger = InMemoryLedger::new(kingdom);
    let reporter = RecordingReporter::default();
    let mut ctrl = StatusPhaseController::new(&ledger, &reporter);

    ctrl.start_phase().await;
    assert!(ctrl.apply_decay().await.success);

    let second = ctrl.apply_decay().await;
    assert!(!second.success);
    assert_eq!(
        second.message.as_deref(),
        Some("Resource decay already applied this turn")
    );
}
