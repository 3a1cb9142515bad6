use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ticket::Ticket;
use super::user::User;
use crate::error::{AppError, AppResult};
use crate::services::users::UNASSIGNED_LABEL;

/// Payload returned by the data source: `{ "tickets": [...], "users": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
}

impl Dataset {
    pub fn new(tickets: Vec<Ticket>, users: Vec<User>) -> Self {
        Self { tickets, users }
    }

    /// Parses and validates a raw payload.
    ///
    /// Missing fields and wrong types are rejected rather than defaulted.
    pub fn from_slice(bytes: &[u8]) -> AppResult<Self> {
        let dataset: Dataset =
            serde_json::from_slice(bytes).map_err(|e| AppError::MalformedData(e.to_string()))?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Rejects duplicate ticket or user ids, and users named like the
    /// unassigned column
    pub fn validate(&self) -> AppResult<()> {
        let mut ticket_ids = HashSet::new();
        for ticket in &self.tickets {
            if !ticket_ids.insert(ticket.id.as_str()) {
                return Err(AppError::MalformedData(format!(
                    "duplicate ticket id '{}'",
                    ticket.id
                )));
            }
        }

        let mut user_ids = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id.as_str()) {
                return Err(AppError::MalformedData(format!(
                    "duplicate user id '{}'",
                    user.id
                )));
            }
            if user.name == UNASSIGNED_LABEL {
                return Err(AppError::MalformedData(format!(
                    "user '{}' uses the reserved name '{}'",
                    user.id, UNASSIGNED_LABEL
                )));
            }
        }

        Ok(())
    }
}

/// A dataset together with the moment it was fetched
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub dataset: Dataset,
    pub fetched_at: DateTime<Utc>,
}

impl BoardSnapshot {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            fetched_at: Utc::now(),
        }
    }
}
