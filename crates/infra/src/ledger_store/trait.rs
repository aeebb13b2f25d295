use std::path::PathBuf;

use stockbook_inventory::InventoryLedger;
use thiserror::Error;

/// Errors surfaced by ledger stores.
///
/// A missing backing file is *not* an error: `load` treats it as an empty
/// ledger. Everything here is fatal for the calling operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error on {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load/save boundary for an [`InventoryLedger`].
pub trait LedgerStore {
    /// Replace the ledger's contents with the stored snapshot.
    ///
    /// If nothing has been stored yet the ledger is left empty. On error the
    /// ledger is unchanged.
    fn load(&self, ledger: &mut InventoryLedger) -> Result<(), StoreError>;

    /// Overwrite the stored snapshot with the ledger's current contents.
    /// The ledger itself is not modified.
    fn save(&self, ledger: &InventoryLedger) -> Result<(), StoreError>;
}

impl<S> LedgerStore for &S
where
    S: LedgerStore + ?Sized,
{
    fn load(&self, ledger: &mut InventoryLedger) -> Result<(), StoreError> {
        (**self).load(ledger)
    }

    fn save(&self, ledger: &InventoryLedger) -> Result<(), StoreError> {
        (**self).save(ledger)
    }
}
