use rust_decimal::Decimal;
use thiserror::Error;

use crate::banking::BankAccount;

#[derive(Debug, Error)]
pub enum BankingError {
    #[error("Amount [{amount}] must be positive for account [{number}]")]
    InvalidAmount {
        number: String,
        amount: Decimal
    },
    #[error("Insufficient funds to withdraw [{amount}] from account [{number}]")]
    InsufficientFunds {
        number: String,
        amount: Decimal
    },
    #[error("Withdrawal of [{amount}] exceeds the limit of account [{number}]")]
    LimitExceeded {
        number: String,
        amount: Decimal
    },
    #[error("Interest does not apply to account [{number}]")]
    InterestNotApplicable {
        number: String
    },
    #[error("Numeric overflow occurred for account [{number}]")]
    Overflow {
        number: String
    }
}

impl BankingError {
    pub fn invalid_amount(account: &BankAccount, amount: Decimal) -> Self {
        Self::InvalidAmount { number: account.number.clone(), amount }
    }

    pub fn insufficient_funds(account: &BankAccount, amount: Decimal) -> Self {
        Self::InsufficientFunds { number: account.number.clone(), amount }
    }

    pub fn limit_exceeded(account: &BankAccount, amount: Decimal) -> Self {
        Self::LimitExceeded { number: account.number.clone(), amount }
    }

    pub fn interest_not_applicable(account: &BankAccount) -> Self {
        Self::InterestNotApplicable { number: account.number.clone() }
    }

    pub fn overflow(account: &BankAccount) -> Self {
        Self::Overflow { number: account.number.clone() }
    }
}
