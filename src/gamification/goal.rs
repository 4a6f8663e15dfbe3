use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::Amount;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GoalStatus {
    Pending,
    Achieved
}

/// A savings target. Once achieved it stays achieved.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    title: String,
    target: Amount,
    deadline: Option<NaiveDate>,
    status: GoalStatus
}

impl Goal {
    pub fn new(title: impl Into<String>, target: Amount) -> Self {
        Self {
            title: title.into(),
            target,
            deadline: None,
            status: GoalStatus::Pending
        }
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn target(&self) -> Decimal {
        self.target.value()
    }

    pub fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    pub fn status(&self) -> GoalStatus {
        self.status
    }

    pub fn is_achieved(&self) -> bool {
        self.status == GoalStatus::Achieved
    }

    /// Latches the goal when `balance` reaches the target.
    ///
    /// Returns `true` only for the call that performs the `Pending -> Achieved`
    /// transition, so callers can hang one-off side effects on it.
    pub(crate) fn check_progress(&mut self, balance: Decimal) -> bool {
        match self.status {
            GoalStatus::Pending if balance >= self.target.value() => {
                self.status = GoalStatus::Achieved;
                true
            },
            _ => false
        }
    }
}
