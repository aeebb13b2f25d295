//! Caller-owned activity log of stock additions.

use chrono::{DateTime, Utc};

use stockbook_core::{ItemName, Quantity};

/// One recorded `add` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub recorded_at: DateTime<Utc>,
    pub item: ItemName,
    pub quantity: Quantity,
}

impl core::fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: Recorded {} units of {}",
            self.recorded_at, self.quantity, self.item
        )
    }
}

/// Append-only sequence of [`ActivityEntry`] values.
///
/// Owned by the caller and passed into `InventoryLedger::add` by mutable
/// borrow; the ledger never keeps it. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, item: ItemName, quantity: Quantity, recorded_at: DateTime<Utc>) {
        self.entries.push(ActivityEntry {
            recorded_at,
            item,
            quantity,
        });
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Human-readable lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }
}
