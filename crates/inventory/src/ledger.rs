use std::collections::BTreeMap;
use std::io::{self, Write};

use chrono::Utc;

use stockbook_core::{DomainError, DomainResult, ItemName, Quantity};

use crate::activity::ActivityLog;

/// Threshold used by [`InventoryLedger::low_stock_default`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5;

/// First line written by [`InventoryLedger::write_summary`].
pub const SUMMARY_HEADER: &str = "=== Inventory Summary ===";

/// In-memory stock ledger: item name -> quantity on hand.
///
/// Invariant: every stored quantity is strictly positive. Any mutation that
/// would leave an entry at `<= 0` drops the entry instead. Iteration order is
/// ascending item name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryLedger {
    stock: BTreeMap<ItemName, Quantity>,
}

impl InventoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from already-decoded entries (e.g. a loaded file).
    ///
    /// Entries with quantity `<= 0` are discarded.
    pub fn from_entries(entries: BTreeMap<ItemName, Quantity>) -> Self {
        let mut ledger = Self::new();
        ledger.replace_all(entries);
        ledger
    }

    /// Replace the whole mapping.
    ///
    /// Entries with quantity `<= 0` are not kept; they are returned so the
    /// caller can report them.
    pub fn replace_all(
        &mut self,
        mut entries: BTreeMap<ItemName, Quantity>,
    ) -> Vec<(ItemName, Quantity)> {
        let mut dropped = Vec::new();
        entries.retain(|item, qty| {
            if *qty > 0 {
                return true;
            }
            dropped.push((item.clone(), *qty));
            false
        });
        self.stock = entries;
        dropped
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.stock.clear();
    }

    /// Add `quantity` (which may be negative) to the stock of `item`.
    ///
    /// A missing item counts as 0. If the result is `<= 0` the item is removed.
    /// When `log` is given, a timestamped entry is appended to it.
    pub fn add(
        &mut self,
        item: &ItemName,
        quantity: Quantity,
        log: Option<&mut ActivityLog>,
    ) -> DomainResult<()> {
        let current = self.quantity_of(item.as_str());
        let updated = current
            .checked_add(quantity)
            .ok_or_else(|| DomainError::overflow(item.as_str()))?;

        self.store(item.clone(), updated);

        if let Some(log) = log {
            log.record(item.clone(), quantity, Utc::now());
        }
        Ok(())
    }

    /// Subtract `quantity` from the stock of `item`.
    ///
    /// Fails with [`DomainError::NotFound`] if the item is not tracked. If the
    /// remaining stock is `<= 0` the item is removed.
    pub fn remove(&mut self, item: &str, quantity: Quantity) -> DomainResult<()> {
        let Some((name, current)) = self.stock.get_key_value(item) else {
            return Err(DomainError::not_found(item));
        };

        let updated = current
            .checked_sub(quantity)
            .ok_or_else(|| DomainError::overflow(item))?;

        let name = name.clone();
        self.store(name, updated);
        Ok(())
    }

    /// Current quantity of `item`, or 0 when it is not tracked.
    pub fn quantity_of(&self, item: &str) -> Quantity {
        self.stock.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    /// Items whose quantity is strictly below `threshold`.
    pub fn low_stock(&self, threshold: Quantity) -> Vec<ItemName> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// [`low_stock`](Self::low_stock) with [`DEFAULT_LOW_STOCK_THRESHOLD`].
    pub fn low_stock_default(&self) -> Vec<ItemName> {
        self.low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = (&ItemName, Quantity)> + '_ {
        self.stock.iter().map(|(item, qty)| (item, *qty))
    }

    /// Borrow the underlying mapping (used for serialization).
    pub fn entries(&self) -> &BTreeMap<ItemName, Quantity> {
        &self.stock
    }

    /// Write the human-readable summary: a header, then `item: quantity` per line.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{SUMMARY_HEADER}")?;
        for (item, qty) in self.items() {
            writeln!(out, "{item}: {qty}")?;
        }
        Ok(())
    }

    /// [`write_summary`](Self::write_summary) to stdout.
    pub fn print_summary(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_summary(&mut handle)
    }

    fn store(&mut self, item: ItemName, quantity: Quantity) {
        if quantity <= 0 {
            self.stock.remove(item.as_str());
        } else {
            self.stock.insert(item, quantity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn name(raw: &str) -> ItemName {
        ItemName::new(raw).unwrap()
    }

    fn ledger_of(entries: &[(&str, Quantity)]) -> InventoryLedger {
        InventoryLedger::from_entries(entries.iter().map(|(k, v)| (name(k), *v)).collect())
    }

    #[test]
    fn add_accumulates_from_zero() {
        let mut ledger = InventoryLedger::new();
        ledger.add(&name("apple"), 10, None).unwrap();
        ledger.add(&name("apple"), 5, None).unwrap();
        assert_eq!(ledger.quantity_of("apple"), 15);
    }

    #[test]
    fn negative_add_on_absent_item_leaves_no_entry() {
        let mut ledger = InventoryLedger::new();
        ledger.add(&name("banana"), -2, None).unwrap();
        assert!(!ledger.contains("banana"));
        assert_eq!(ledger.quantity_of("banana"), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn negative_add_below_zero_drops_item() {
        let mut ledger = ledger_of(&[("apple", 3)]);
        ledger.add(&name("apple"), -3, None).unwrap();
        assert!(!ledger.contains("apple"));
    }

    #[test]
    fn add_appends_to_supplied_log() {
        let mut ledger = InventoryLedger::new();
        let mut log = ActivityLog::new();
        ledger.add(&name("apple"), 10, Some(&mut log)).unwrap();
        ledger.add(&name("banana"), -2, Some(&mut log)).unwrap();
        ledger.add(&name("pear"), 1, None).unwrap();

        assert_eq!(log.len(), 2);
        assert!(log.lines().next().unwrap().ends_with("Recorded 10 units of apple"));
        assert!(log.lines().nth(1).unwrap().ends_with("Recorded -2 units of banana"));
    }

    #[test]
    fn add_overflow_is_rejected_without_change() {
        let mut ledger = ledger_of(&[("bolts", Quantity::MAX)]);
        let mut log = ActivityLog::new();
        let err = ledger.add(&name("bolts"), 1, Some(&mut log)).unwrap_err();
        assert_eq!(err, DomainError::overflow("bolts"));
        assert_eq!(ledger.quantity_of("bolts"), Quantity::MAX);
        assert!(log.is_empty());
    }

    #[test]
    fn remove_subtracts_and_keeps_positive_remainder() {
        let mut ledger = ledger_of(&[("apple", 10)]);
        ledger.remove("apple", 3).unwrap();
        assert_eq!(ledger.quantity_of("apple"), 7);
    }

    #[test]
    fn remove_to_zero_or_below_deletes_key() {
        let mut ledger = ledger_of(&[("apple", 7), ("pear", 2)]);
        ledger.remove("apple", 7).unwrap();
        ledger.remove("pear", 50).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.quantity_of("apple"), 0);
    }

    #[test]
    fn remove_absent_item_is_not_found_and_no_op() {
        let mut ledger = ledger_of(&[("apple", 7)]);
        let before = ledger.clone();
        match ledger.remove("orange", 1) {
            Err(DomainError::NotFound(item)) => assert_eq!(item, "orange"),
            other => panic!("expected not found, got {other:?}"),
        }
        assert_eq!(ledger, before);
    }

    #[test]
    fn remove_overflow_is_rejected_without_change() {
        let mut ledger = ledger_of(&[("apple", 7)]);
        let err = ledger.remove("apple", Quantity::MIN).unwrap_err();
        assert!(matches!(err, DomainError::QuantityOverflow { .. }));
        assert_eq!(ledger.quantity_of("apple"), 7);
    }

    #[test]
    fn low_stock_uses_strict_threshold() {
        let ledger = ledger_of(&[("apple", 7), ("banana", 3), ("cherry", 5)]);
        assert_eq!(ledger.low_stock_default(), vec![name("banana")]);
        assert_eq!(ledger.low_stock(6), vec![name("banana"), name("cherry")]);
        assert!(ledger.low_stock(1).is_empty());
    }

    #[test]
    fn replace_all_drops_non_positive_entries() {
        let mut ledger = ledger_of(&[("apple", 7)]);
        let mut incoming = BTreeMap::new();
        incoming.insert(name("pear"), 4);
        incoming.insert(name("plum"), 0);
        incoming.insert(name("quince"), -3);

        let dropped = ledger.replace_all(incoming);

        assert_eq!(dropped, vec![(name("plum"), 0), (name("quince"), -3)]);
        assert_eq!(ledger, ledger_of(&[("pear", 4)]));
        assert!(!ledger.contains("apple"));
    }

    #[test]
    fn summary_lists_header_then_items() {
        let ledger = ledger_of(&[("banana", 3), ("apple", 7)]);
        let mut out = Vec::new();
        ledger.write_summary(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "=== Inventory Summary ===\napple: 7\nbanana: 3\n"
        );
    }

    #[test]
    fn demonstration_scenario() {
        let mut ledger = InventoryLedger::new();
        ledger.add(&name("apple"), 10, None).unwrap();
        assert_eq!(ledger.quantity_of("apple"), 10);

        ledger.add(&name("banana"), -2, None).unwrap();
        assert_eq!(ledger.quantity_of("banana"), 0);

        ledger.remove("apple", 3).unwrap();
        assert_eq!(ledger.quantity_of("apple"), 7);

        assert!(ledger.remove("orange", 1).is_err());
        assert_eq!(ledger, ledger_of(&[("apple", 7)]));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: positive additions sum per item.
        #[test]
        fn positive_adds_sum_per_item(
            ops in prop::collection::vec(("[a-e]", 1i64..10_000i64), 1..50)
        ) {
            let mut ledger = InventoryLedger::new();
            let mut expected: BTreeMap<String, i64> = BTreeMap::new();

            for (item, qty) in &ops {
                ledger.add(&name(item), *qty, None).unwrap();
                *expected.entry(item.clone()).or_default() += qty;
            }

            for (item, total) in expected {
                prop_assert_eq!(ledger.quantity_of(&item), total);
            }
        }

        /// Property: no stored quantity is ever <= 0, whatever mix of adds/removes runs.
        #[test]
        fn stored_quantities_stay_positive(
            ops in prop::collection::vec(("[a-d]", -100i64..100i64, any::<bool>()), 0..80)
        ) {
            let mut ledger = InventoryLedger::new();
            for (item, qty, via_remove) in ops {
                if via_remove {
                    let _ = ledger.remove(&item, qty);
                } else {
                    ledger.add(&name(&item), qty, None).unwrap();
                }
                prop_assert!(ledger.items().all(|(_, q)| q > 0));
            }
        }

        /// Property: low_stock returns exactly the items below the threshold.
        #[test]
        fn low_stock_is_exact(
            entries in prop::collection::btree_map("[a-z]{1,6}", 1i64..20i64, 0..20),
            threshold in 0i64..25i64
        ) {
            let ledger = InventoryLedger::from_entries(
                entries.iter().map(|(k, v)| (name(k), *v)).collect(),
            );

            let low: Vec<String> = ledger
                .low_stock(threshold)
                .into_iter()
                .map(ItemName::into_inner)
                .collect();
            let expected: Vec<String> = entries
                .iter()
                .filter(|(_, q)| **q < threshold)
                .map(|(k, _)| k.clone())
                .collect();

            prop_assert_eq!(low, expected);
        }
    }
}
