//! Pure derivations over the ledger for a selected month.
//!
//! Nothing here mutates state or touches storage; every function is a
//! deterministic view of `(transactions, year, month)` recomputed after
//! each mutation and discarded afterwards.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Category, Transaction, TransactionKind};

/// Income, expense, and balance sums for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

/// Summed expense amount for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

impl CategoryTotal {
    /// Fraction of the month's expenses this category accounts for, or
    /// `None` when there are no expenses to take a share of.
    pub fn share_of(&self, expenses: Decimal) -> Option<Decimal> {
        if expenses.is_zero() {
            None
        } else {
            Some(self.total / expenses)
        }
    }
}

/// Transactions whose date falls inside the given calendar month, in
/// original ledger order. Membership is decided on the parsed calendar
/// date, never on a string prefix of it.
pub fn filter_by_month(transactions: &[Transaction], year: i32, month: u32) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| txn.date.year() == year && txn.date.month() == month)
        .cloned()
        .collect()
}

pub fn compute_totals(filtered: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for txn in filtered {
        match txn.kind {
            TransactionKind::Income => totals.income += txn.amount,
            TransactionKind::Expense => totals.expenses += txn.amount,
        }
    }
    totals.balance = totals.income - totals.expenses;
    totals
}

/// Per-category expense sums, descending by total. Ties keep the category
/// that was encountered first in the filtered sequence ahead.
pub fn category_breakdown(filtered: &[Transaction]) -> Vec<CategoryTotal> {
    let mut entries: Vec<CategoryTotal> = Vec::new();
    for txn in filtered {
        if txn.kind != TransactionKind::Expense {
            continue;
        }
        match entries.iter_mut().find(|entry| entry.category == txn.category) {
            Some(entry) => entry.total += txn.amount,
            None => entries.push(CategoryTotal {
                category: txn.category,
                total: txn.amount,
            }),
        }
    }
    entries.sort_by(|a, b| b.total.cmp(&a.total));
    entries
}

/// Transactions ordered for display, most recent date first. The sort is
/// stable, so entries sharing a date keep their relative order.
pub fn sort_for_display(filtered: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = filtered.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Snapshot handed to the presentation boundary after every mutation.
///
/// Consumers treat it as immutable; a new report is built instead of
/// patching an old one.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub totals: Totals,
    pub breakdown: Vec<CategoryTotal>,
    /// Filtered transactions already in display order, date descending.
    pub entries: Vec<Transaction>,
}

impl MonthlyReport {
    pub fn build(transactions: &[Transaction], year: i32, month: u32) -> Self {
        let filtered = filter_by_month(transactions, year, month);
        let totals = compute_totals(&filtered);
        let breakdown = category_breakdown(&filtered);
        let entries = sort_for_display(&filtered);
        Self {
            year,
            month,
            totals,
            breakdown,
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
