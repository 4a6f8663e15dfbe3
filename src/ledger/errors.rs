use thiserror::Error;

use crate::ledger::Period;
use crate::types::{AccountId, UserId};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Numeric overflow computing the balance of account [{account_id}]")]
    BalanceOverflow {
        account_id: AccountId
    },
    #[error("Numeric overflow aggregating period [{period}] for user [{user_id}]")]
    ReportOverflow {
        user_id: UserId,
        period: Period
    }
}

impl LedgerError {
    pub fn balance_overflow(account_id: AccountId) -> Self {
        Self::BalanceOverflow { account_id }
    }

    pub fn report_overflow(user_id: UserId, period: Period) -> Self {
        Self::ReportOverflow { user_id, period }
    }
}
