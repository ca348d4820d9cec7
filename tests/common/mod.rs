use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use tally_core::{
    domain::{Category, TransactionDraft, TransactionKind},
    storage::JsonStorage,
    store::LedgerStore,
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a store backed by a unique temporary ledger file for each test.
pub fn setup_store() -> (LedgerStore, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("ledger.json");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    let store = LedgerStore::open(Box::new(JsonStorage::new(path.clone())));
    (store, path)
}

/// Opens a second store over the same ledger file, as a new session would.
pub fn reopen_store(path: &Path) -> LedgerStore {
    LedgerStore::open(Box::new(JsonStorage::new(path.to_path_buf())))
}

pub fn draft(
    kind: TransactionKind,
    amount: Decimal,
    category: Category,
    description: &str,
    date: (i32, u32, u32),
) -> TransactionDraft {
    TransactionDraft::new(
        kind,
        amount,
        category,
        description,
        NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid test date"),
    )
}
