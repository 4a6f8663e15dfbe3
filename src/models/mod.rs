mod errors;
mod investment;
mod reference;
mod transaction;

use serde::Deserialize;

pub use errors::{InvestmentError, TransactionError};
pub use investment::Investment;
pub use reference::{Account, Category};
pub use transaction::{Transaction, TransactionRecord};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
    /// Reserved; never counted by balances, reports or projections.
    Investment
}
