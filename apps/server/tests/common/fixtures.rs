//! Test fixtures and data builders
//!
//! Provides reusable tickets, users and payloads.

#![allow(dead_code)]

use serde_json::{json, Value};
use ticketboard::models::{Dataset, Ticket, TicketId, User};

/// Builds test tickets with sensible defaults
pub struct TicketBuilder {
    id: String,
    title: String,
    status: String,
    priority: i64,
    user_id: String,
    tags: Vec<String>,
}

impl TicketBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: format!("Ticket {}", id),
            status: "Todo".to_string(),
            priority: 0,
            user_id: "usr-1".to_string(),
            tags: vec!["Feature Request".to_string()],
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_user(mut self, user_id: &str) -> Self {
        self.user_id = user_id.to_string();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> Ticket {
        Ticket {
            id: TicketId::new(self.id),
            title: self.title,
            status: self.status,
            priority: self.priority,
            assigned_user_id: self.user_id,
            tags: self.tags,
        }
    }
}

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn ids(tickets: &[Ticket]) -> Vec<&str> {
    tickets.iter().map(|t| t.id.as_str()).collect()
}

/// The two-ticket scenario: "B" (priority 2) then "A" (priority 4), both Todo,
/// both assigned to Alice.
pub fn scenario_dataset() -> Dataset {
    Dataset::new(
        vec![
            TicketBuilder::new("1")
                .with_title("B")
                .with_priority(2)
                .with_user("u1")
                .with_tags(&["bug"])
                .build(),
            TicketBuilder::new("2")
                .with_title("A")
                .with_priority(4)
                .with_user("u1")
                .with_tags(&["feat"])
                .build(),
        ],
        vec![user("u1", "Alice")],
    )
}

/// A board resembling the upstream sample data
pub fn sample_dataset() -> Dataset {
    Dataset::new(
        vec![
            TicketBuilder::new("CAM-1")
                .with_title("Update User Profile Page UI")
                .with_status("Todo")
                .with_priority(4)
                .with_user("usr-1")
                .build(),
            TicketBuilder::new("CAM-2")
                .with_title("Add Multi-Language Support")
                .with_status("In progress")
                .with_priority(3)
                .with_user("usr-2")
                .build(),
            TicketBuilder::new("CAM-3")
                .with_title("Optimize Database Queries for Performance")
                .with_status("In progress")
                .with_priority(1)
                .with_user("usr-2")
                .build(),
            TicketBuilder::new("CAM-4")
                .with_title("Implement Email Notification System")
                .with_status("Todo")
                .with_priority(3)
                .with_user("usr-1")
                .build(),
            TicketBuilder::new("CAM-5")
                .with_title("Enhance Search Functionality")
                .with_status("Backlog")
                .with_priority(0)
                .with_user("usr-5")
                .build(),
            TicketBuilder::new("CAM-6")
                .with_title("Conduct Security Vulnerability Assessment")
                .with_status("Backlog")
                .with_priority(1)
                .with_user("usr-4")
                .with_tags(&[])
                .build(),
        ],
        vec![
            user("usr-1", "Anoop sharma"),
            user("usr-2", "Yogesh"),
            user("usr-3", "Shankar Kumar"),
            user("usr-4", "Ramesh"),
        ],
    )
}

/// Raw upstream-shaped JSON for the sample dataset
pub fn sample_payload() -> Value {
    serde_json::to_value(sample_dataset()).expect("sample dataset serializes")
}

/// Minimal valid payload using the upstream field names
pub fn upstream_payload() -> Value {
    json!({
        "tickets": [
            {
                "id": "CAM-1",
                "title": "Update User Profile Page UI",
                "tag": ["Feature request"],
                "userId": "usr-1",
                "status": "Todo",
                "priority": 4
            }
        ],
        "users": [
            { "id": "usr-1", "name": "Anoop sharma", "available": false }
        ]
    })
}
