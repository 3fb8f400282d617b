use crate::core::UserId;
use crate::error::TickdeckError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned ticket identifier
///
/// Identifiers are immutable once assigned. `0` is never handed out by the
/// server; it marks an unset reference (a detail query for it is skipped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(pub i64);

impl TicketId {
    /// Whether this id refers to no ticket
    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TicketId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A unit of trackable work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Server-assigned identity, immutable
    pub id: TicketId,
    /// Non-empty description of the work
    pub description: String,
    /// Assigned user, `None` means unassigned
    pub assignee_id: Option<UserId>,
    /// Completion flag
    pub completed: bool,
}

impl Ticket {
    /// Create a ticket from its parts
    #[must_use]
    pub fn new(
        id: TicketId,
        description: impl Into<String>,
        assignee_id: Option<UserId>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            assignee_id,
            completed,
        }
    }
}

/// Partial update merged into an existing [`Ticket`]
///
/// `None` fields are left untouched; `assignee_id` uses a nested `Option`
/// so a patch can distinguish "don't change the assignee" from
/// "set it to unassigned".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketPatch {
    pub description: Option<String>,
    pub assignee_id: Option<Option<UserId>>,
    pub completed: Option<bool>,
}

impl TicketPatch {
    /// Patch that sets or clears the assignee
    #[must_use]
    pub const fn assignee(assignee_id: Option<UserId>) -> Self {
        Self {
            description: None,
            assignee_id: Some(assignee_id),
            completed: None,
        }
    }

    /// Patch that sets the completion flag
    #[must_use]
    pub const fn completed(completed: bool) -> Self {
        Self {
            description: None,
            assignee_id: None,
            completed: Some(completed),
        }
    }

    /// Merge this patch into a ticket, field by field
    pub fn apply(&self, ticket: &mut Ticket) {
        if let Some(description) = &self.description {
            ticket.description.clone_from(description);
        }
        if let Some(assignee_id) = self.assignee_id {
            ticket.assignee_id = assignee_id;
        }
        if let Some(completed) = self.completed {
            ticket.completed = completed;
        }
    }
}

/// Status filter applied to the ticket list view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Pass every ticket
    #[default]
    All,
    /// Keep only completed tickets
    Completed,
    /// Keep only tickets that are not completed
    Incomplete,
}

impl StatusFilter {
    /// Whether a ticket passes this filter
    #[must_use]
    pub const fn matches(self, ticket: &Ticket) -> bool {
        match self {
            Self::All => true,
            Self::Completed => ticket.completed,
            Self::Incomplete => !ticket.completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TickdeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "incomplete" => Ok(Self::Incomplete),
            other => Err(TickdeckError::InvalidFilter {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Incomplete => "incomplete",
        };
        write!(f, "{name}")
    }
}
