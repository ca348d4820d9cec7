use uuid::Uuid;

use crate::domain::{Ledger, Transaction, TransactionDraft};
use crate::storage::StorageBackend;

/// Authoritative owner of the transaction collection.
///
/// Every mutation writes the full collection through to the backend.
/// Persistence is best-effort: a failed write is logged and the in-memory
/// state stays authoritative for the rest of the session.
pub struct LedgerStore {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
}

impl LedgerStore {
    /// Opens the store, reading whatever the backend has persisted.
    /// Absent or unreadable data yields an empty ledger.
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let ledger = match storage.load() {
            Ok(Some(ledger)) => ledger,
            Ok(None) => Ledger::new(),
            Err(err) => {
                tracing::warn!(%err, "failed to read persisted ledger, starting empty");
                Ledger::new()
            }
        };
        Self { ledger, storage }
    }

    /// Appends a validated draft under a fresh id and returns the stored
    /// record. Input validation belongs to the boundary that collected the
    /// draft.
    pub fn append(&mut self, draft: TransactionDraft) -> Transaction {
        let transaction = draft.into_transaction(Uuid::new_v4());
        let stored = transaction.clone();
        self.ledger.append(transaction);
        self.persist();
        stored
    }

    /// Removes the transaction with the given id, returning it. An absent
    /// id is a no-op: nothing is removed and nothing is rewritten.
    pub fn delete(&mut self, id: Uuid) -> Option<Transaction> {
        let removed = self.ledger.remove(id);
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    /// Read-only view of the collection; callers mutate only through
    /// [`LedgerStore::append`] and [`LedgerStore::delete`].
    pub fn all(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.ledger) {
            tracing::warn!(%err, "failed to persist ledger, keeping in-memory state");
        }
    }
}
