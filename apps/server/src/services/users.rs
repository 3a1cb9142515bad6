use std::collections::HashMap;

use crate::models::User;

/// Column label and assignee name for tickets whose user cannot be resolved
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// Lookup of users by id.
///
/// Both the grouping pass and the card renderer resolve assignees through
/// this type so an unknown user id is handled the same way everywhere.
pub struct UserDirectory<'a> {
    by_id: HashMap<&'a str, &'a User>,
    /// Position of the first user carrying each name
    name_rank: HashMap<&'a str, usize>,
}

impl<'a> UserDirectory<'a> {
    pub fn new(users: &'a [User]) -> Self {
        let mut by_id = HashMap::with_capacity(users.len());
        let mut name_rank = HashMap::with_capacity(users.len());

        for (position, user) in users.iter().enumerate() {
            by_id.entry(user.id.as_str()).or_insert(user);
            name_rank.entry(user.name.as_str()).or_insert(position);
        }

        Self { by_id, name_rank }
    }

    pub fn resolve(&self, user_id: &str) -> Option<&'a User> {
        self.by_id.get(user_id).copied()
    }

    /// Name of the assignee, or [`UNASSIGNED_LABEL`]
    pub fn display_name(&self, user_id: &str) -> &'a str {
        match self.resolve(user_id) {
            Some(user) => user.name.as_str(),
            None => UNASSIGNED_LABEL,
        }
    }

    pub fn initial(&self, user_id: &str) -> Option<char> {
        self.resolve(user_id).and_then(User::initial)
    }

    /// Column position for a user-name label; unknown names sort last
    pub fn rank_of_name(&self, name: &str) -> usize {
        self.name_rank.get(name).copied().unwrap_or(usize::MAX)
    }
}
