use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::models::Transaction;
use crate::projection::errors::ProjectionError;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const RESULT_DECIMAL_PLACES: u32 = 2;

/// Outcome of estimating how long it takes to reach a savings target.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GoalEstimate {
    /// Number of months at the current pace; `0` when the target is already met.
    Months(u64),
    /// Net-to-date is zero or negative, so the target is never reached.
    Unreachable
}

impl GoalEstimate {
    /// Numeric form where `-1` stands for unreachable.
    pub fn as_sentinel(&self) -> i64 {
        match self {
            GoalEstimate::Months(months) => i64::try_from(*months).unwrap_or(i64::MAX),
            GoalEstimate::Unreachable => -1
        }
    }
}

/// Linear balance projections derived from transaction history.
///
/// Every operation is a pure function of its arguments. The history is never
/// divided by an elapsed month count: what gets extrapolated is the
/// net-to-date, multiplied by the requested horizon.
pub struct ProjectionService;

impl ProjectionService {
    /// Total income minus total expense over the whole supplied history.
    ///
    /// # Errors
    /// Returns `ProjectionError::HistoryOverflow` if the running total overflows.
    pub fn net_to_date<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Result<Decimal, ProjectionError> {
        transactions.into_iter()
            .map(Transaction::signed_amount)
            .try_fold(Decimal::ZERO, |net, amount| net.checked_add(amount))
            .ok_or(ProjectionError::HistoryOverflow)
    }

    pub fn project_balance<'a>(transactions: impl IntoIterator<Item = &'a Transaction>, months: u32) -> Result<Decimal, ProjectionError> {
        let net = Self::net_to_date(transactions)?;

        net.checked_mul(Decimal::from(months))
            .ok_or(ProjectionError::ProjectionOverflow { net, months })
    }

    /// Discounts `amount` to real terms using compound monthly inflation.
    ///
    /// The annual rate is converted to its effective monthly rate
    /// `(1 + annual_rate)^(1/12) - 1` and `amount` is divided by
    /// `(1 + monthly_rate)^months`. The result is rounded half-up to cents.
    ///
    /// # Errors
    /// Returns `ProjectionError` if:
    /// - `annual_rate` is -1 or lower.
    /// - The discount factor overflows.
    pub fn adjust_for_inflation(amount: Decimal, annual_rate: Decimal, months: u32) -> Result<Decimal, ProjectionError> {
        if annual_rate <= Decimal::NEGATIVE_ONE {
            return Err(ProjectionError::InvalidRate(annual_rate))
        }

        if annual_rate.is_zero() || months == 0 {
            return Ok(round_half_up(amount))
        }

        let overflow = || ProjectionError::Overflow { amount, months };

        let monthly_growth = Decimal::ONE.checked_add(annual_rate)
            .and_then(|growth| growth.checked_powd(Decimal::ONE / MONTHS_PER_YEAR))
            .ok_or_else(overflow)?;

        let discount_factor = monthly_growth
            .checked_powi(i64::from(months))
            .ok_or_else(overflow)?;

        let real_value = amount.checked_div(discount_factor).ok_or_else(overflow)?;

        Ok(round_half_up(real_value))
    }

    /// Estimates how many months of the current net-to-date it takes to reach `target`.
    ///
    /// Quotients too large for `u64` saturate at `u64::MAX`.
    pub fn months_to_goal<'a>(target: Decimal, transactions: impl IntoIterator<Item = &'a Transaction>) -> Result<GoalEstimate, ProjectionError> {
        let net = Self::net_to_date(transactions)?;

        if net <= Decimal::ZERO {
            return Ok(GoalEstimate::Unreachable)
        }

        if target <= net {
            return Ok(GoalEstimate::Months(0))
        }

        let months = target.checked_div(net)
            .map(|ratio| ratio.ceil())
            .and_then(|months| months.to_u64())
            .unwrap_or(u64::MAX);

        Ok(GoalEstimate::Months(months))
    }
}

fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RESULT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
