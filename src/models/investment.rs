use rust_decimal::{Decimal, MathematicalOps};

use crate::models::errors::InvestmentError;

/// A lump sum growing at a fixed monthly rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Investment {
    pub id: u64,
    pub name: String,
    pub initial_value: Decimal,
    /// Monthly rate, e.g. `0.01` for 1% a month.
    pub rate: Decimal
}

impl Investment {
    pub fn new(id: u64, name: impl Into<String>, initial_value: Decimal, rate: Decimal) -> Self {
        Self { id, name: name.into(), initial_value, rate }
    }

    /// Compounded value after `months`: `initial × (1 + rate)^months`.
    pub fn simulate_return(&self, months: u32) -> Result<Decimal, InvestmentError> {
        Decimal::ONE.checked_add(self.rate)
            .and_then(|growth| growth.checked_powi(i64::from(months)))
            .and_then(|factor| self.initial_value.checked_mul(factor))
            .ok_or_else(|| InvestmentError::Overflow { name: self.name.clone(), months })
    }
}
