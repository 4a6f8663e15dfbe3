use chrono::{DateTime, Utc};

use crate::gamification::errors::GamificationError;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NotificationStatus {
    Unread,
    Read
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    message: String,
    created_at: DateTime<Utc>,
    status: NotificationStatus
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Utc::now(),
            status: NotificationStatus::Unread
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> NotificationStatus {
        self.status
    }

    pub fn is_read(&self) -> bool {
        self.status == NotificationStatus::Read
    }

    pub fn mark_read(&mut self) -> Result<(), GamificationError> {
        if self.status == NotificationStatus::Read {
            return Err(GamificationError::NotificationAlreadyRead { message: self.message.clone() })
        }

        self.status = NotificationStatus::Read;

        Ok(())
    }
}
