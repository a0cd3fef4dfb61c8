use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
}

/// A user account as stored by the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub inactive: bool,
    #[serde(default)]
    pub emails: Vec<String>,
}

impl UserRecord {
    /// Display name, falling back to the id for accounts without a profile.
    pub fn name(&self) -> &str {
        if self.profile.name.is_empty() {
            &self.id
        } else {
            &self.profile.name
        }
    }
}

/// Identity lookup provided by the account layer.
pub trait UserStore {
    fn user(&self, id: &str) -> Option<UserRecord>;
}

/// In-memory user directory for tests and demo setups.
#[derive(Default)]
pub struct MemoryUsers {
    users: HashMap<String, UserRecord>,
}

impl MemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user: UserRecord) {
        self.users.insert(user.id.clone(), user);
    }
}

impl UserStore for MemoryUsers {
    fn user(&self, id: &str) -> Option<UserRecord> {
        self.users.get(id).cloned()
    }
}
