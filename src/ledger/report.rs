use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;

use crate::ledger::errors::LedgerError;
use crate::models::{Transaction, TransactionKind};
use crate::types::UserId;

/// A calendar month bucket.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Period {
    pub year: i32,
    pub month: u32
}

impl Display for Period {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:02}/{}", self.month, self.year)
    }
}

/// Order in which report buckets are listed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum ReportOrder {
    /// First-seen month first, following ledger insertion order.
    #[default]
    Discovery,
    Chronological
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub period: Period,
    pub income: Decimal,
    pub expense: Decimal,
    /// Always `income - expense` for this bucket.
    pub net: Decimal,
    pub transaction_count: usize
}

impl PeriodSummary {
    fn new(period: Period) -> Self {
        Self {
            period,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
            net: Decimal::ZERO,
            transaction_count: 0
        }
    }

    /// Adds `transaction` to the bucket, or `None` if a total overflows.
    fn record(&mut self, transaction: &Transaction) -> Option<()> {
        let amount = transaction.amount().value();

        match transaction.kind() {
            TransactionKind::Income => self.income = self.income.checked_add(amount)?,
            TransactionKind::Expense => self.expense = self.expense.checked_add(amount)?,
            TransactionKind::Investment => {}
        }

        self.net = self.income.checked_sub(self.expense)?;
        self.transaction_count += 1;

        Some(())
    }
}

/// Per-month income/expense aggregates for a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub user_id: UserId,
    pub periods: Vec<PeriodSummary>
}

impl MonthlyReport {
    pub(crate) fn build<'a>(user_id: UserId, transactions: impl Iterator<Item = &'a Transaction>, order: ReportOrder) -> Result<Self, LedgerError> {
        let mut periods: Vec<PeriodSummary> = Vec::new();
        let mut index_by_period = HashMap::<Period, usize>::new();

        for transaction in transactions.filter(|transaction| transaction.user_id() == user_id) {
            let (year, month) = transaction.period();
            let period = Period { year, month };

            let index = *index_by_period.entry(period).or_insert_with(|| {
                periods.push(PeriodSummary::new(period));
                periods.len() - 1
            });

            periods[index].record(transaction)
                .ok_or_else(|| LedgerError::report_overflow(user_id, period))?;
        }

        if order == ReportOrder::Chronological {
            periods.sort_by_key(|summary| summary.period);
        }

        Ok(Self { user_id, periods })
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn period(&self, period: Period) -> Option<&PeriodSummary> {
        self.periods.iter().find(|summary| summary.period == period)
    }
}
