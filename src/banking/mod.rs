mod bank_account;
mod errors;

use rust_decimal::Decimal;

pub use bank_account::{AccountKind, BankAccount};
pub use errors::BankingError;

/// Anything holding a balance that can be deposited to and withdrawn from.
pub trait Withdrawable {
    fn deposit(&mut self, amount: Decimal) -> Result<(), BankingError>;
    fn withdraw(&mut self, amount: Decimal) -> Result<(), BankingError>;
    fn current_balance(&self) -> Decimal;
}
