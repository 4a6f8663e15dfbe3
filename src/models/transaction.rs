use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::errors::TransactionError;
use crate::models::TransactionKind;
use crate::types::{AccountId, Amount, CategoryId, TransactionId, UserId};

/// Represents a single, not yet validated row of transaction input.
///
/// Every field is optional so that CSV rows with gaps still deserialize; the
/// gaps are reported as construction errors when the record is converted into
/// a [`Transaction`]. The amount is read from its text form so it never passes
/// through a float.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionRecord {
    pub id: Option<TransactionId>,
    #[serde(rename = "user")]
    pub user_id: Option<UserId>,
    #[serde(rename = "account")]
    pub account_id: Option<AccountId>,
    #[serde(rename = "category")]
    pub category_id: Option<CategoryId>,
    pub kind: Option<TransactionKind>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>
}

/// A validated, immutable ledger entry.
///
/// The only way to obtain one is `Transaction::try_from(record)`, which
/// guarantees every reference is present and the amount is non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: TransactionId,
    user_id: UserId,
    account_id: AccountId,
    category_id: CategoryId,
    kind: TransactionKind,
    amount: Amount,
    date: NaiveDate,
    description: String
}

impl Transaction {
    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The `(year, month)` bucket this transaction falls into.
    pub fn period(&self) -> (i32, u32) {
        (self.date.year(), self.date.month())
    }

    /// Signed effect on a balance: income adds, expense subtracts, investment is ignored.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount.value(),
            TransactionKind::Expense => -self.amount.value(),
            TransactionKind::Investment => Decimal::ZERO
        }
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = TransactionError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let Some(id) = record.id else {
            return Err(TransactionError::IdRequired)
        };

        let user_id = record.user_id.ok_or_else(|| TransactionError::user_required(id))?;
        let account_id = record.account_id.ok_or_else(|| TransactionError::account_required(id))?;
        let category_id = record.category_id.ok_or_else(|| TransactionError::category_required(id))?;
        let kind = record.kind.ok_or_else(|| TransactionError::kind_required(id))?;
        let date = record.date.ok_or_else(|| TransactionError::date_required(id))?;

        let Some(value) = record.amount else {
            return Err(TransactionError::amount_required(id))
        };

        let amount = Amount::new(value).map_err(|_| TransactionError::negative_amount(id, value))?;

        Ok(Self {
            id,
            user_id,
            account_id,
            category_id,
            kind,
            amount,
            date,
            description: record.description.unwrap_or_default()
        })
    }
}
