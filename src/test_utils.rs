//! Test utilities for tickdeck
//!
//! Common fixtures shared by the unit tests to reduce duplication.

#![cfg(test)]

use crate::core::{Ticket, TicketId, User, UserId};

/// Create a test ticket from bare parts
pub fn ticket(id: i64, description: &str, assignee_id: Option<i64>, completed: bool) -> Ticket {
    Ticket::new(
        TicketId(id),
        description,
        assignee_id.map(UserId),
        completed,
    )
}

/// A small mixed collection: open and completed, assigned and unassigned
pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        ticket(1, "Bug in login", None, false),
        ticket(2, "Write onboarding docs", Some(1), true),
        ticket(3, "Fix signup bug", Some(2), true),
        ticket(4, "Refactor ticket store", None, false),
    ]
}

/// A small user collection matching the assignees in [`sample_tickets`]
pub fn sample_users() -> Vec<User> {
    vec![
        User::new(UserId(1), "Alice"),
        User::new(UserId(2), "Bob"),
        User::new(UserId(3), "Carol"),
    ]
}
