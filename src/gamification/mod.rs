mod challenge;
mod engine;
mod errors;
mod goal;
mod notification;
mod policy;
mod reward;

pub use challenge::{Challenge, ChallengeStatus};
pub use engine::GamificationEngine;
pub use errors::GamificationError;
pub use goal::{Goal, GoalStatus};
pub use notification::{Notification, NotificationStatus};
pub use policy::{CompletionRule, ManualCompletion, RewardPolicy};
pub use reward::{Reward, RewardStatus};

/// Position of a goal in the engine, assigned by `add_goal`.
pub type GoalId = usize;
/// Position of a challenge in the engine, assigned by `add_challenge`.
pub type ChallengeId = usize;
