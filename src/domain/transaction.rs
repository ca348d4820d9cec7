use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::errors::LedgerError;

/// Whether a transaction adds to or draws from the balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// One recorded income or expense event.
///
/// The persisted field names (`type`, `amount` as a plain JSON number,
/// `date` as `YYYY-MM-DD`) are part of the storage format and must not
/// change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Transaction data captured at the input boundary, before an id exists.
///
/// Drafts are validated where they are collected; the store assumes
/// validated input.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionKind,
        amount: Decimal,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            amount,
            category,
            description: description.into(),
            date,
        }
    }

    /// Rejects drafts that violate ledger invariants. The description may
    /// be empty.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.amount < Decimal::ZERO {
            return Err(LedgerError::InvalidInput(
                "amount must not be negative".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn into_transaction(self, id: Uuid) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
        }
    }
}
