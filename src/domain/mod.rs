pub mod category;
pub mod ledger;
pub mod transaction;

pub use category::Category;
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
