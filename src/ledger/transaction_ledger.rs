use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::debug;

use crate::ledger::errors::LedgerError;
use crate::ledger::report::{MonthlyReport, ReportOrder};
use crate::models::{Account, Category, Transaction};
use crate::types::{AccountId, UserId};

/// The authoritative, append-only transaction store.
///
/// Transactions keep their insertion order, which is what gives
/// [`MonthlyReport`] its stable discovery ordering. Nothing is ever removed or
/// updated once appended.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    accounts: Vec<Account>,
    categories: Vec<Category>
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, transaction: Transaction) {
        debug!("Transaction [{}]:[{:?}] for account [{}] appended", transaction.id(), transaction.kind(), transaction.account_id());
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transactions_for(&self, user_id: UserId) -> Vec<&Transaction> {
        self.transactions.iter()
            .filter(|transaction| transaction.user_id() == user_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Income minus expense over every transaction on `account_id`.
    ///
    /// Unknown accounts are not an error, they simply have a zero balance.
    ///
    /// # Errors
    /// Returns `LedgerError::BalanceOverflow` if the running total overflows.
    pub fn balance_of(&self, account_id: AccountId) -> Result<Decimal, LedgerError> {
        self.transactions.iter()
            .filter(|transaction| transaction.account_id() == account_id)
            .map(Transaction::signed_amount)
            .try_fold(Decimal::ZERO, |balance, amount| balance.checked_add(amount))
            .ok_or_else(|| LedgerError::balance_overflow(account_id))
    }

    pub fn monthly_report(&self, user_id: UserId) -> Result<MonthlyReport, LedgerError> {
        self.monthly_report_with(user_id, ReportOrder::Discovery)
    }

    pub fn monthly_report_with(&self, user_id: UserId, order: ReportOrder) -> Result<MonthlyReport, LedgerError> {
        MonthlyReport::build(user_id, self.transactions.iter(), order)
    }

    /// Distinct owners in the order they first appear.
    pub fn user_ids(&self) -> Vec<UserId> {
        let mut seen = HashSet::new();

        self.transactions.iter()
            .map(Transaction::user_id)
            .filter(|user_id| seen.insert(*user_id))
            .collect()
    }

    pub fn register_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub fn register_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}
