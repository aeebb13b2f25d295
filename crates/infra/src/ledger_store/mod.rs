//! Whole-ledger persistence.
//!
//! A store copies the complete mapping in or out on request; there are no
//! incremental writes and no locking.

use std::collections::BTreeMap;

use stockbook_core::{ItemName, Quantity};
use stockbook_inventory::InventoryLedger;

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryLedgerStore;
pub use json_file::{DEFAULT_LEDGER_FILE, JsonLedgerFile};
pub use r#trait::{LedgerStore, StoreError};

/// Install a loaded snapshot, warning about each entry that cannot be stocked.
fn install_snapshot(
    ledger: &mut InventoryLedger,
    entries: BTreeMap<ItemName, Quantity>,
    source: &str,
) {
    for (item, quantity) in ledger.replace_all(entries) {
        tracing::warn!(%item, quantity, source, "dropping non-positive quantity from loaded inventory");
    }
}
