//! Infrastructure layer: ledger persistence.

pub mod ledger_store;

pub use ledger_store::{
    DEFAULT_LEDGER_FILE, InMemoryLedgerStore, JsonLedgerFile, LedgerStore, StoreError,
};
