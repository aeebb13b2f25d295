//! Inventory domain module.
//!
//! This crate contains the stock ledger rules, implemented purely as
//! deterministic domain logic (no file IO, no logging setup).

pub mod activity;
pub mod ledger;

pub use activity::{ActivityEntry, ActivityLog};
pub use ledger::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryLedger, SUMMARY_HEADER};
