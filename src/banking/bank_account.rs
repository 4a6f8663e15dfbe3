use rust_decimal::Decimal;
use tracing::debug;

use crate::banking::errors::BankingError;
use crate::banking::Withdrawable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountKind {
    /// Allows the balance to go negative down to `-limit`.
    Checking {
        limit: Decimal
    },
    /// Never goes negative; grows through `apply_interest`.
    Savings {
        interest_rate: Decimal
    }
}

/// A bank account with its own balance, independent of the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    pub id: u64,
    pub number: String,
    balance: Decimal,
    kind: AccountKind
}

impl BankAccount {
    pub fn checking(id: u64, number: impl Into<String>, balance: Decimal, limit: Decimal) -> Self {
        Self { id, number: number.into(), balance, kind: AccountKind::Checking { limit } }
    }

    pub fn savings(id: u64, number: impl Into<String>, balance: Decimal, interest_rate: Decimal) -> Self {
        Self { id, number: number.into(), balance, kind: AccountKind::Savings { interest_rate } }
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Adds one period of interest to a savings account and returns the amount credited.
    ///
    /// Every call credits interest again; nothing prevents applying the same
    /// period twice.
    ///
    /// # Errors
    /// Returns `BankingError` if the account is not a savings account or the
    /// balance overflows.
    pub fn apply_interest(&mut self) -> Result<Decimal, BankingError> {
        let AccountKind::Savings { interest_rate } = self.kind else {
            return Err(BankingError::interest_not_applicable(self))
        };

        let interest = self.balance.checked_mul(interest_rate)
            .ok_or_else(|| BankingError::overflow(self))?;

        self.balance = self.balance.checked_add(interest)
            .ok_or_else(|| BankingError::overflow(self))?;

        debug!("Interest [{interest}] applied to account [{}], balance [{}]", self.number, self.balance);

        Ok(interest)
    }

    fn available_funds(&self) -> Result<Decimal, BankingError> {
        match self.kind {
            AccountKind::Checking { limit } => self.balance.checked_add(limit)
                .ok_or_else(|| BankingError::overflow(self)),
            AccountKind::Savings { .. } => Ok(self.balance)
        }
    }
}

impl Withdrawable for BankAccount {
    fn deposit(&mut self, amount: Decimal) -> Result<(), BankingError> {
        if amount <= Decimal::ZERO {
            return Err(BankingError::invalid_amount(self, amount))
        }

        self.balance = self.balance.checked_add(amount)
            .ok_or_else(|| BankingError::overflow(self))?;

        debug!("Deposit [{amount}] to account [{}], balance [{}]", self.number, self.balance);

        Ok(())
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), BankingError> {
        if amount <= Decimal::ZERO {
            return Err(BankingError::invalid_amount(self, amount))
        }

        if self.available_funds()? < amount {
            return Err(match self.kind {
                AccountKind::Checking { .. } => BankingError::limit_exceeded(self, amount),
                AccountKind::Savings { .. } => BankingError::insufficient_funds(self, amount)
            })
        }

        self.balance = self.balance.checked_sub(amount)
            .ok_or_else(|| BankingError::overflow(self))?;

        debug!("Withdrawal [{amount}] from account [{}], balance [{}]", self.number, self.balance);

        Ok(())
    }

    fn current_balance(&self) -> Decimal {
        self.balance
    }
}
