use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

/// Ticket identifier.
///
/// The upstream endpoint sends string ids (`"CAM-1"`); integer ids are
/// accepted too and kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TicketId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTicketId {
    Text(String),
    Number(i64),
}

impl<'de> Deserialize<'de> for TicketId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawTicketId::deserialize(deserializer) {
            Ok(RawTicketId::Text(id)) => Ok(Self(id)),
            Ok(RawTicketId::Number(id)) => Ok(Self(id.to_string())),
            Err(_) => Err(serde::de::Error::custom(
                "ticket id must be a string or an integer",
            )),
        }
    }
}

/// Ticket as delivered by the data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    /// Opaque workflow state, e.g. "Todo" or "In progress"
    pub status: String,
    /// Raw priority level; only 0..=4 converts to a [`Priority`]
    pub priority: i64,
    #[serde(rename = "userId", alias = "assignedUserId")]
    pub assigned_user_id: String,
    #[serde(rename = "tag", alias = "tags")]
    pub tags: Vec<String>,
}

impl Ticket {
    /// Checked conversion of the raw priority level
    pub fn priority_level(&self) -> AppResult<Priority> {
        Priority::from_level(self.priority).ok_or_else(|| AppError::InvalidPriority {
            ticket_id: self.id.to_string(),
            priority: self.priority,
        })
    }

    /// The tag shown on the card
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

/// Priority levels, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    NoPriority,
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// All levels in ascending order (index == level)
    pub const ALL: [Priority; 5] = [
        Priority::NoPriority,
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn from_level(level: i64) -> Option<Self> {
        usize::try_from(level)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn level(self) -> i64 {
        match self {
            Priority::NoPriority => 0,
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
            Priority::Urgent => 4,
        }
    }

    /// Column label used when grouping by priority
    pub fn label(self) -> &'static str {
        match self {
            Priority::NoPriority => "No priority",
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
