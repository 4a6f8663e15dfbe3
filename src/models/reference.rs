use crate::types::{AccountId, CategoryId};

/// A place money is held (wallet, bank). Transactions point at it by id only.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub name: String
}

impl Account {
    pub fn new(id: AccountId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// A classification label for transactions (salary, groceries).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub icon: Option<String>
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), icon: None }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}
