use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ticket::{Ticket, TicketId};
use super::view::{BoardView, GroupingMode, OrderingMode};

/// One board column: a group label and the tickets filed under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub label: String,
    pub tickets: Vec<Ticket>,
}

impl Column {
    pub fn new(label: impl Into<String>, tickets: Vec<Ticket>) -> Self {
        Self {
            label: label.into(),
            tickets,
        }
    }
}

/// Tickets partitioned into labelled columns.
///
/// Column order is meaningful (it is the left-to-right order on the board)
/// and labels are unique for any validated dataset. A board is always derived from a snapshot and a
/// view; it is never updated incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedBoard {
    columns: Vec<Column>,
}

impl GroupedBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from columns that already carry unique labels
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn tickets(&self, label: &str) -> Option<&[Ticket]> {
        self.columns
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.tickets.as_slice())
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn ticket_count(&self) -> usize {
        self.columns.iter().map(|c| c.tickets.len()).sum()
    }

    /// All tickets, column by column
    pub fn iter_tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.columns.iter().flat_map(|c| c.tickets.iter())
    }

    /// Appends a ticket to the column named `label`, opening the column at
    /// the end of the board the first time the label is seen.
    pub(crate) fn push(&mut self, label: &str, ticket: Ticket) {
        match self.columns.iter_mut().find(|c| c.label == label) {
            Some(column) => column.tickets.push(ticket),
            None => self.columns.push(Column::new(label, vec![ticket])),
        }
    }

    /// Appends a column without merging it into one with the same label
    pub(crate) fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Reorders whole columns; ties keep their current order
    pub(crate) fn sort_columns_by_key<K: Ord>(&mut self, mut key: impl FnMut(&Column) -> K) {
        self.columns.sort_by_key(|c| key(c));
    }
}

/// Board response for API
#[derive(Debug, Clone, Serialize)]
pub struct BoardResponse {
    pub grouping: GroupingMode,
    pub ordering: OrderingMode,
    pub fetched_at: DateTime<Utc>,
    pub total_tickets: usize,
    pub columns: Vec<ColumnResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnResponse {
    pub label: String,
    pub count: usize,
    pub cards: Vec<CardResponse>,
}

/// A rendered ticket card
#[derive(Debug, Clone, Serialize)]
pub struct CardResponse {
    pub id: TicketId,
    pub title: String,
    pub status: String,
    pub priority: i64,
    /// Absent when the raw priority is outside 0-4
    pub priority_label: Option<&'static str>,
    /// Resolved user name, or the unassigned label
    pub assignee: String,
    /// Avatar letter; absent for unresolved users
    pub assignee_initial: Option<char>,
    /// First tag, the one shown on the card
    pub tag: Option<String>,
    pub tags: Vec<String>,
}

/// Selectable modes for the grouping and ordering controls
#[derive(Debug, Clone, Serialize)]
pub struct BoardOptionsResponse {
    pub grouping: Vec<ModeOption>,
    pub ordering: Vec<ModeOption>,
    pub defaults: BoardView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModeOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl BoardOptionsResponse {
    pub fn new(defaults: BoardView) -> Self {
        Self {
            grouping: GroupingMode::ALL
                .iter()
                .map(|mode| ModeOption {
                    value: mode.as_str(),
                    label: mode.display_name(),
                })
                .collect(),
            ordering: OrderingMode::ALL
                .iter()
                .map(|mode| ModeOption {
                    value: mode.as_str(),
                    label: mode.display_name(),
                })
                .collect(),
            defaults,
        }
    }
}
