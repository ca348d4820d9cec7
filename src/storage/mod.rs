pub mod json_backend;

use crate::{domain::Ledger, errors::LedgerError};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends capable of storing the ledger.
pub trait StorageBackend: Send + Sync {
    /// Persists the full collection, replacing whatever was stored before.
    fn save(&self, ledger: &Ledger) -> Result<()>;

    /// Reads the persisted collection. `Ok(None)` means nothing usable is
    /// stored (absent or discarded-as-corrupt); errors are reserved for
    /// failures the caller may want to report, such as unreadable files.
    fn load(&self) -> Result<Option<Ledger>>;
}

pub use json_backend::JsonStorage;
