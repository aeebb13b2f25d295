//! JSON file store.
//!
//! Document format: one flat object, item name -> integer quantity, e.g.
//!
//! ```json
//! {
//!     "apple": 7
//! }
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use stockbook_core::{ItemName, Quantity};
use stockbook_inventory::InventoryLedger;

use super::r#trait::{LedgerStore, StoreError};

/// File name used when the caller does not pick one.
pub const DEFAULT_LEDGER_FILE: &str = "inventory_data.json";

const INDENT: &[u8] = b"    ";

/// Ledger persisted as a pretty-printed JSON object at `path`.
///
/// Saves truncate and rewrite the file in place; an interrupted write can
/// leave it incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonLedgerFile {
    path: PathBuf,
}

impl JsonLedgerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonLedgerFile {
    fn default() -> Self {
        Self::new(DEFAULT_LEDGER_FILE)
    }
}

impl LedgerStore for JsonLedgerFile {
    fn load(&self, ledger: &mut InventoryLedger) -> Result<(), StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "no existing inventory file found; starting fresh");
                ledger.clear();
                return Ok(());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let entries: BTreeMap<ItemName, Quantity> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;

        super::install_snapshot(ledger, entries, &self.path.display().to_string());
        tracing::debug!(path = %self.path.display(), items = ledger.len(), "inventory loaded");
        Ok(())
    }

    fn save(&self, ledger: &InventoryLedger) -> Result<(), StoreError> {
        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);

        let mut ser =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
        ledger
            .entries()
            .serialize(&mut ser)
            .map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;

        writer.flush().map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), items = ledger.len(), "inventory saved");
        Ok(())
    }
}
