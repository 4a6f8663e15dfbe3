use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::gamification::Challenge;
use crate::types::Amount;

const DEFAULT_GOAL_BONUS: Decimal = dec!(100.00);

/// Value granted with every goal reward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardPolicy {
    pub goal_bonus: Decimal
}

impl RewardPolicy {
    pub fn new(goal_bonus: Amount) -> Self {
        Self { goal_bonus: goal_bonus.value() }
    }
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self { goal_bonus: DEFAULT_GOAL_BONUS }
    }
}

/// Decides whether a challenge counts as completed during evaluation.
pub trait CompletionRule {
    fn is_completed(&self, challenge: &Challenge) -> bool;
}

/// Trusts the challenge's own latch, which only changes through `Challenge::complete`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualCompletion;

impl CompletionRule for ManualCompletion {
    fn is_completed(&self, challenge: &Challenge) -> bool {
        challenge.is_completed()
    }
}
