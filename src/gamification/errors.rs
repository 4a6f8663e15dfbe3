use chrono::NaiveDate;
use thiserror::Error;

use crate::gamification::ChallengeId;

#[derive(Debug, Error)]
pub enum GamificationError {
    #[error("Challenge [{title}] is already completed")]
    ChallengeAlreadyCompleted {
        title: String
    },
    #[error("Reward [{description}] has already been redeemed")]
    RewardAlreadyRedeemed {
        description: String
    },
    #[error("Notification [{message}] has already been read")]
    NotificationAlreadyRead {
        message: String
    },
    #[error("A one-month challenge cannot start on [{start_date}]")]
    ChallengeWindowOutOfRange {
        start_date: NaiveDate
    },
    #[error("Challenge [{0}] was not found")]
    ChallengeNotFound(ChallengeId),
    #[error("Reward [{0}] was not found")]
    RewardNotFound(usize),
    #[error("Notification [{0}] was not found")]
    NotificationNotFound(usize)
}
