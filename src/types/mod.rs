mod amount;
mod errors;
#[cfg(test)]
mod tests;

pub use amount::Amount;
pub use errors::AmountError;

pub type AccountId = u64;
pub type CategoryId = u64;
pub type TransactionId = u64;
pub type UserId = u64;
