use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::gamification::errors::GamificationError;
use crate::types::Amount;

const DEFAULT_DESCRIPTION: &str = "Automatic savings challenge.";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ChallengeStatus {
    Pending,
    Completed
}

/// A time-boxed savings challenge.
///
/// Completion is driven from outside through [`Challenge::complete`]; the
/// window and value are carried as data for completion rules to inspect.
#[derive(Debug, Clone, PartialEq)]
pub struct Challenge {
    title: String,
    description: String,
    value: Amount,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: ChallengeStatus
}

impl Challenge {
    pub fn new(title: impl Into<String>, value: Amount, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            value,
            start_date,
            end_date,
            status: ChallengeStatus::Pending
        }
    }

    /// A one-month challenge starting on `start_date`.
    ///
    /// # Errors
    /// Returns `GamificationError::ChallengeWindowOutOfRange` if the end date
    /// falls outside the supported calendar.
    pub fn starting_on(title: impl Into<String>, value: Amount, start_date: NaiveDate) -> Result<Self, GamificationError> {
        let end_date = start_date.checked_add_months(Months::new(1))
            .ok_or(GamificationError::ChallengeWindowOutOfRange { start_date })?;

        Ok(Self::new(title, value, start_date, end_date))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> Decimal {
        self.value.value()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn status(&self) -> ChallengeStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == ChallengeStatus::Completed
    }

    pub fn complete(&mut self) -> Result<(), GamificationError> {
        if self.status == ChallengeStatus::Completed {
            return Err(GamificationError::ChallengeAlreadyCompleted { title: self.title.clone() })
        }

        self.status = ChallengeStatus::Completed;

        Ok(())
    }
}
