//! Fixed demonstration sequence.
//!
//! Recoverable failures (bad input, unknown item, overflow) are logged and
//! skipped; only persistence failures abort the run.

use std::io::Write;

use anyhow::Context;

use stockbook_core::{DomainError, ItemName, parse_quantity};
use stockbook_infra::LedgerStore;
use stockbook_inventory::{ActivityLog, InventoryLedger};

/// Outcome of a boundary call that never aborts the caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Skipped,
}

/// Parse untrusted `(item, quantity)` text and add it to the ledger.
pub fn record_addition(
    ledger: &mut InventoryLedger,
    raw_item: &str,
    raw_quantity: &str,
    log: Option<&mut ActivityLog>,
) -> Outcome {
    let parsed = ItemName::new(raw_item).and_then(|item| Ok((item, parse_quantity(raw_quantity)?)));
    let (item, quantity) = match parsed {
        Ok(pair) => pair,
        Err(err) => {
            tracing::warn!(item = raw_item, quantity = raw_quantity, error = %err, "invalid stock addition ignored");
            return Outcome::Skipped;
        }
    };

    match ledger.add(&item, quantity, log) {
        Ok(()) => Outcome::Applied,
        Err(err) => {
            report(&err);
            Outcome::Skipped
        }
    }
}

/// Remove stock, logging instead of failing when the item is unknown.
pub fn record_removal(ledger: &mut InventoryLedger, item: &str, quantity: i64) -> Outcome {
    match ledger.remove(item, quantity) {
        Ok(()) => Outcome::Applied,
        Err(err) => {
            report(&err);
            Outcome::Skipped
        }
    }
}

fn report(err: &DomainError) {
    match err {
        DomainError::NotFound(item) => {
            tracing::warn!(%item, "attempted to remove a non-existent item")
        }
        DomainError::QuantityOverflow { item } => {
            tracing::error!(%item, "invalid quantity while adjusting stock")
        }
        other => tracing::warn!(error = %other, "stock operation rejected"),
    }
}

/// Render item names as a quoted list, e.g. `['banana', 'fig']`.
pub fn format_item_list(items: &[ItemName]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Run the scripted session against `ledger`, persisting through `store` and
/// writing the query report to `out`.
///
/// On success the ledger holds the reloaded snapshot; printing the summary
/// is left to the caller.
pub fn run<S, W>(
    ledger: &mut InventoryLedger,
    store: &S,
    log: &mut ActivityLog,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: LedgerStore + ?Sized,
    W: Write,
{
    record_addition(ledger, "apple", "10", Some(&mut *log));
    record_addition(ledger, "banana", "-2", Some(&mut *log));
    record_addition(ledger, "123", "ten", Some(&mut *log));
    record_removal(ledger, "apple", 3);
    record_removal(ledger, "orange", 1);

    writeln!(out, "Apple stock: {}", ledger.quantity_of("apple"))?;

    writeln!(out, "Low items: {}", format_item_list(&ledger.low_stock_default()))?;

    store.save(ledger).context("failed to save inventory")?;
    store.load(ledger).context("failed to reload inventory")?;

    for line in log.lines() {
        tracing::debug!(%line, "activity");
    }
    tracing::info!(items = ledger.len(), recorded = log.len(), "demonstration complete");
    Ok(())
}
