//! Seam between phase controllers and whoever owns kingdom state.
//!
//! The host supplies the concrete accessor (in production a document store
//! binding, in tests [`InMemoryLedger`]); controllers are generic over it and
//! never depend on a concrete store.

use std::sync::Mutex;

use thiserror::Error;

use crate::model::Kingdom;

/// Errors surfaced by a ledger accessor.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The backing store is inaccessible (e.g. poisoned by a panicked writer).
    #[error("kingdom ledger unavailable: {0}")]
    Unavailable(String),
    /// No kingdom is currently loaded.
    #[error("no kingdom loaded")]
    NoKingdom,
}

/// Read and read-modify-write access to the kingdom aggregate.
///
/// The owner guarantees a single in-flight mutation at a time. Controllers
/// only touch kingdom state inside the update callback and never hold it
/// across an await boundary, so updates cannot be lost even when the owner
/// serializes concurrent callers internally.
#[allow(async_fn_in_trait)]
pub trait LedgerAccessor {
    /// Snapshot of the current kingdom, or `None` when no kingdom is loaded.
    fn current_kingdom(&self) -> Result<Option<Kingdom>, LedgerError>;

    /// Apply one atomic mutation and return the callback's result.
    async fn atomic_update<F, T>(&self, mutate: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut Kingdom) -> T + Send,
        T: Send;
}

impl<T: LedgerAccessor> LedgerAccessor for &T {
    fn current_kingdom(&self) -> Result<Option<Kingdom>, LedgerError> {
        (**self).current_kingdom()
    }

    async fn atomic_update<F, U>(&self, mutate: F) -> Result<U, LedgerError>
    where
        F: FnOnce(&mut Kingdom) -> U + Send,
        U: Send,
    {
        (**self).atomic_update(mutate).await
    }
}

/// Mutex-backed ledger for tests and headless hosts.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    state: Mutex<Option<Kingdom>>,
}

impl InMemoryLedger {
    pub fn new(kingdom: Kingdom) -> Self {
        Self {
            state: Mutex::new(Some(kingdom)),
        }
    }

    /// A ledger with no kingdom loaded.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl LedgerAccessor for InMemoryLedger {
    fn current_kingdom(&self) -> Result<Option<Kingdom>, LedgerError> {
        let state = self
            .state
            .lock()
            .map_err(|e| LedgerError::Unavailable(e.to_string()))?;
        Ok(state.clone())
    }

    async fn atomic_update<F, T>(&self, mutate: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut Kingdom) -> T + Send,
        T: Send,
    {
        let mut state = self
            .state
            .lock()
            .map_err(|e| LedgerError::Unavailable(e.to_string()))?;
        let kingdom = state.as_mut().ok_or(LedgerError::NoKingdom)?;
        Ok(mutate(kingdom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResourceKind;

    #[tokio::test]
    async fn atomic_update_applies_exactly_once() {
        let ledger = InMemoryLedger::new(Kingdom::new());
        ledger
            .atomic_update(|kingdom| kingdom.resources.gain(ResourceKind::Gold, 5))
            .await
            .unwrap();

        let snapshot = ledger.current_kingdom().unwrap().unwrap();
        assert_eq!(snapshot.gold(), 5);
    }

    #[tokio::test]
    async fn update_returns_callback_result() {
        let ledger = InMemoryLedger::new(Kingdom::new());
        let unrest = ledger
            .atomic_update(|kingdom| {
                kingdom.add_unrest(3);
                kingdom.unrest
            })
            .await
            .unwrap();
        assert_eq!(unrest, 3);
    }

    #[tokio::test]
    async fn empty_ledger_reads_none_and_rejects_updates() {
        let ledger = InMemoryLedger::empty();
        assert!(ledger.current_kingdom().unwrap().is_none());

        let result = ledger.atomic_update(|_| ()).await;
        assert!(matches!(result, Err(LedgerError::NoKingdom)));
    }

    #[test]
    fn snapshot_is_detached_from_store() {
        let ledger = InMemoryLedger::new(Kingdom::new());
        let mut snapshot = ledger.current_kingdom().unwrap().unwrap();
        snapshot.add_unrest(10);

        let fresh = ledger.current_kingdom().unwrap().unwrap();
        assert_eq!(fresh.unrest, 0);
    }
}
