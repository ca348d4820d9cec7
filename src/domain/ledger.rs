use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::Transaction;

/// Insertion-ordered collection of every transaction a user has recorded.
///
/// The ledger itself knows nothing about persistence or months; it only
/// guards insertion order. Mutation happens exclusively through the
/// owning [`crate::store::LedgerStore`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends at the end, preserving insertion order, and returns the id.
    pub fn append(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    /// Removes the transaction with the given id, keeping the order of the
    /// remaining entries. Returns `None` when the id is absent.
    pub fn remove(&mut self, id: Uuid) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        Some(self.transactions.remove(index))
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, TransactionDraft, TransactionKind};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn txn(day: u32) -> Transaction {
        TransactionDraft::new(
            TransactionKind::Expense,
            dec!(10),
            Category::Food,
            "",
            NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
        )
        .into_transaction(Uuid::new_v4())
    }

    #[test]
    fn remove_preserves_order_of_remaining_entries() {
        let mut ledger = Ledger::new();
        let first = ledger.append(txn(1));
        let second = ledger.append(txn(2));
        let third = ledger.append(txn(3));

        ledger.remove(second).expect("second entry exists");

        let ids: Vec<Uuid> = ledger.transactions().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first, third]);
    }

    #[test]
    fn remove_of_absent_id_returns_none() {
        let mut ledger = Ledger::new();
        ledger.append(txn(1));
        assert!(ledger.remove(Uuid::new_v4()).is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn empty_document_parses_to_empty_ledger() {
        let ledger: Ledger = serde_json::from_str("{}").unwrap();
        assert!(ledger.is_empty());
    }
}
