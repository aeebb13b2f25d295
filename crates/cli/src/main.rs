use anyhow::Context;
use stockbook_infra::JsonLedgerFile;
use stockbook_inventory::{ActivityLog, InventoryLedger};

fn main() -> anyhow::Result<()> {
    stockbook_observability::init();

    let store = JsonLedgerFile::default();
    let mut ledger = InventoryLedger::new();
    let mut log = ActivityLog::new();

    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        stockbook_cli::demo::run(&mut ledger, &store, &mut log, &mut out).with_context(|| {
            format!("demonstration failed (ledger file: {})", store.path().display())
        })?;
    }

    ledger.print_summary().context("failed to print inventory summary")
}
