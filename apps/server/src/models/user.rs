use serde::{Deserialize, Serialize};

/// A person tickets can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    /// First character of the name, shown as the card avatar
    pub fn initial(&self) -> Option<char> {
        self.name.trim_start().chars().next()
    }
}
