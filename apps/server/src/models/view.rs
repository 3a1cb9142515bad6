use serde::{Deserialize, Deserializer, Serialize};

/// Dimension used to split tickets into columns
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    /// One column per status value
    #[default]
    Status,
    /// One column per assignee
    User,
    /// One column per priority level
    Priority,
}

impl GroupingMode {
    pub const ALL: [GroupingMode; 3] = [
        GroupingMode::Status,
        GroupingMode::User,
        GroupingMode::Priority,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingMode::Status => "status",
            GroupingMode::User => "user",
            GroupingMode::Priority => "priority",
        }
    }

    /// Label shown in the grouping selector
    pub fn display_name(&self) -> &'static str {
        match self {
            GroupingMode::Status => "Status",
            GroupingMode::User => "User",
            GroupingMode::Priority => "Priority",
        }
    }
}

impl std::fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GroupingMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// Key used to order tickets inside a column
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderingMode {
    /// Urgent first, "No priority" last
    #[default]
    Priority,
    /// Alphabetical by title
    Title,
}

impl OrderingMode {
    pub const ALL: [OrderingMode; 2] = [OrderingMode::Priority, OrderingMode::Title];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderingMode::Priority => "priority",
            OrderingMode::Title => "title",
        }
    }

    /// Label shown in the ordering selector
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderingMode::Priority => "Priority",
            OrderingMode::Title => "Title",
        }
    }
}

impl std::fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrderingMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

// Query strings, config files and flags all accept the same spellings
impl<'de> Deserialize<'de> for GroupingMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_from_str(deserializer)
    }
}

impl<'de> Deserialize<'de> for OrderingMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_from_str(deserializer)
    }
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = String::deserialize(deserializer)?;
    value.parse().map_err(serde::de::Error::custom)
}

/// Error returned when parsing an unknown grouping or ordering name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode '{0}'")]
pub struct UnknownMode(pub String);

/// The current board selection.
///
/// Passed by value into the grouping and ordering functions; changing a
/// selector means building a new view and recomputing the board from scratch.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BoardView {
    pub grouping: GroupingMode,
    pub ordering: OrderingMode,
}

impl BoardView {
    pub fn new(grouping: GroupingMode, ordering: OrderingMode) -> Self {
        Self { grouping, ordering }
    }
}

/// Query parameters for the board endpoint
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    pub grouping: Option<GroupingMode>,
    pub ordering: Option<OrderingMode>,
}

impl BoardQuery {
    /// Fills omitted selectors from the configured defaults
    pub fn resolve(&self, defaults: BoardView) -> BoardView {
        BoardView {
            grouping: self.grouping.unwrap_or(defaults.grouping),
            ordering: self.ordering.unwrap_or(defaults.ordering),
        }
    }
}
