use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The fixed set of participants. There is no sign-up; ids are "1" and "2".
#[derive(Debug, Clone)]
pub struct UserRoster {
    users: Vec<User>,
}

impl UserRoster {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn find(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id.as_str() == id)
    }

    /// Resolve a raw id coming from a request
    pub fn require(&self, id: &str) -> Result<&User, DomainError> {
        self.find(id)
            .ok_or_else(|| DomainError::UserNotFound(format!("Invalid User ID: {}", id)))
    }
}

impl Default for UserRoster {
    fn default() -> Self {
        Self::new(vec![
            User::new(UserId::from_string("1"), "Noah"),
            User::new(UserId::from_string("2"), "Justin"),
        ])
    }
}
