use std::collections::BTreeMap;
use std::sync::RwLock;

use stockbook_core::{ItemName, Quantity};
use stockbook_inventory::InventoryLedger;

use super::r#trait::{LedgerStore, StoreError};

/// In-memory snapshot store for tests/dev.
///
/// Behaves like a file that does not exist until the first `save`.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    snapshot: RwLock<Option<BTreeMap<ItemName, Quantity>>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything has been saved yet.
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.read().map(|s| s.is_some()).unwrap_or(false)
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn load(&self, ledger: &mut InventoryLedger) -> Result<(), StoreError> {
        let snapshot = match self.snapshot.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };

        match snapshot {
            Some(entries) => super::install_snapshot(ledger, entries, "memory"),
            None => {
                tracing::warn!("no saved inventory snapshot; starting fresh");
                ledger.clear();
            }
        }
        Ok(())
    }

    fn save(&self, ledger: &InventoryLedger) -> Result<(), StoreError> {
        let mut guard = match self.snapshot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(ledger.entries().clone());
        Ok(())
    }
}
