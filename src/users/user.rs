use sha2::{Digest, Sha256};

use crate::types::UserId;

/// Owner of transactions. The ledger only ever sees the `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    password_hash: Option<String>
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password_hash: None
        }
    }

    pub fn set_password(&mut self, password: &str) {
        self.password_hash = Some(hash_password(password));
    }

    pub fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }

    /// A user without a password never authenticates.
    pub fn authenticate(&self, password: &str) -> bool {
        self.password_hash.as_deref() == Some(hash_password(password).as_str())
    }
}

fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
