use uuid::Uuid;

use crate::config::ConfigManager;
use crate::domain::{Transaction, TransactionDraft};
use crate::errors::LedgerError;
use crate::month::MonthSelector;
use crate::report::MonthlyReport;
use crate::storage::JsonStorage;
use crate::store::LedgerStore;

/// Facade that coordinates ledger state, month selection, and reporting.
///
/// The presentation layer mutates through this type and asks for a fresh
/// [`MonthlyReport`] after every mutation; snapshots are never patched in
/// place.
pub struct Tracker {
    store: LedgerStore,
    selector: MonthSelector,
}

impl Tracker {
    /// Starts at the current calendar month.
    pub fn new(store: LedgerStore) -> Self {
        Self::with_selector(store, MonthSelector::now())
    }

    pub fn with_selector(store: LedgerStore, selector: MonthSelector) -> Self {
        Self { store, selector }
    }

    /// Opens the tracker against the configured ledger location.
    pub fn open_default() -> Result<Self, LedgerError> {
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        let storage = JsonStorage::new(manager.ledger_path(&config));
        Ok(Self::new(LedgerStore::open(Box::new(storage))))
    }

    pub fn append(&mut self, draft: TransactionDraft) -> Transaction {
        self.store.append(draft)
    }

    pub fn delete(&mut self, id: Uuid) -> Option<Transaction> {
        self.store.delete(id)
    }

    pub fn shift(&mut self, offset: i32) -> (i32, u32) {
        self.selector.shift(offset)
    }

    pub fn current(&self) -> (i32, u32) {
        self.selector.current()
    }

    pub fn month_label(&self) -> String {
        self.selector.label()
    }

    /// Read-only snapshot of the whole ledger, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        self.store.all()
    }

    /// Recomputes the aggregates for the selected month.
    pub fn report(&self) -> MonthlyReport {
        let (year, month) = self.selector.current();
        MonthlyReport::build(self.store.all(), year, month)
    }
}
