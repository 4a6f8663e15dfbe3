use rust_decimal::Decimal;

use crate::gamification::errors::GamificationError;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RewardStatus {
    Available,
    Redeemed
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reward {
    description: String,
    value: Decimal,
    status: RewardStatus
}

impl Reward {
    pub fn new(description: impl Into<String>, value: Decimal) -> Self {
        Self {
            description: description.into(),
            value,
            status: RewardStatus::Available
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn status(&self) -> RewardStatus {
        self.status
    }

    pub fn is_redeemed(&self) -> bool {
        self.status == RewardStatus::Redeemed
    }

    pub fn redeem(&mut self) -> Result<(), GamificationError> {
        if self.status == RewardStatus::Redeemed {
            return Err(GamificationError::RewardAlreadyRedeemed { description: self.description.clone() })
        }

        self.status = RewardStatus::Redeemed;

        Ok(())
    }
}
