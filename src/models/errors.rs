use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::TransactionId;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Transaction id is required")]
    IdRequired,
    #[error("User is required for transaction [{transaction_id}]")]
    UserRequired {
        transaction_id: TransactionId
    },
    #[error("Account is required for transaction [{transaction_id}]")]
    AccountRequired {
        transaction_id: TransactionId
    },
    #[error("Category is required for transaction [{transaction_id}]")]
    CategoryRequired {
        transaction_id: TransactionId
    },
    #[error("Kind is required for transaction [{transaction_id}]")]
    KindRequired {
        transaction_id: TransactionId
    },
    #[error("Amount is required for transaction [{transaction_id}]")]
    AmountRequired {
        transaction_id: TransactionId
    },
    #[error("Date is required for transaction [{transaction_id}]")]
    DateRequired {
        transaction_id: TransactionId
    },
    #[error("Amount [{amount}] must not be negative for transaction [{transaction_id}]")]
    NegativeAmount {
        transaction_id: TransactionId,
        amount: Decimal
    }
}

impl TransactionError {
    pub fn user_required(transaction_id: TransactionId) -> Self {
        Self::UserRequired { transaction_id }
    }

    pub fn account_required(transaction_id: TransactionId) -> Self {
        Self::AccountRequired { transaction_id }
    }

    pub fn category_required(transaction_id: TransactionId) -> Self {
        Self::CategoryRequired { transaction_id }
    }

    pub fn kind_required(transaction_id: TransactionId) -> Self {
        Self::KindRequired { transaction_id }
    }

    pub fn amount_required(transaction_id: TransactionId) -> Self {
        Self::AmountRequired { transaction_id }
    }

    pub fn date_required(transaction_id: TransactionId) -> Self {
        Self::DateRequired { transaction_id }
    }

    pub fn negative_amount(transaction_id: TransactionId, amount: Decimal) -> Self {
        Self::NegativeAmount { transaction_id, amount }
    }
}

#[derive(Debug, Error)]
pub enum InvestmentError {
    #[error("Numeric overflow simulating investment [{name}] over {months} months")]
    Overflow {
        name: String,
        months: u32
    }
}
