//! Derived view logic over the ticket collection
//!
//! A pure projection recomputed on demand: status filter first, then a
//! case-insensitive substring match on the description. Output order
//! preserves the order of the input collection.

use crate::core::{StatusFilter, Ticket};

/// Project the ticket collection through the status filter and search query
///
/// An empty (or whitespace-only) query passes every ticket. Safe to call
/// repeatedly; no side effects.
#[must_use]
pub fn filter_tickets(tickets: &[Ticket], filter: StatusFilter, search_query: &str) -> Vec<Ticket> {
    let query = search_query.trim().to_lowercase();

    tickets
        .iter()
        .filter(|ticket| filter.matches(ticket))
        .filter(|ticket| query.is_empty() || ticket.description.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TicketId, UserId};

    fn sample() -> Vec<Ticket> {
        vec![
            Ticket::new(TicketId(1), "Bug in login", None, false),
            Ticket::new(TicketId(2), "Write docs", Some(UserId(1)), true),
            Ticket::new(TicketId(3), "Fix signup bug", Some(UserId(2)), true),
            Ticket::new(TicketId(4), "Refactor store", None, false),
        ]
    }

    #[test]
    fn all_filter_passes_everything_in_order() {
        let tickets = sample();
        let result = filter_tickets(&tickets, StatusFilter::All, "");
        assert_eq!(result, tickets);
    }

    #[test]
    fn completed_filter_keeps_exactly_the_completed_subset() {
        let tickets = sample();
        let result = filter_tickets(&tickets, StatusFilter::Completed, "");
        let ids: Vec<i64> = result.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(result.iter().all(|t| t.completed));
    }

    #[test]
    fn incomplete_filter_keeps_the_complement() {
        let tickets = sample();
        let result = filter_tickets(&tickets, StatusFilter::Incomplete, "");
        let ids: Vec<i64> = result.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 4]);
        assert!(result.iter().all(|t| !t.completed));
    }

    #[test]
    fn search_is_case_insensitive() {
        let tickets = sample();
        let result = filter_tickets(&tickets, StatusFilter::All, "bug");
        let ids: Vec<i64> = result.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 3]);

        let upper = filter_tickets(&tickets, StatusFilter::All, "BUG");
        assert_eq!(result, upper);
    }

    #[test]
    fn status_filter_composes_with_search() {
        let tickets = sample();
        let result = filter_tickets(&tickets, StatusFilter::Completed, "bug");
        let ids: Vec<i64> = result.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn blank_query_passes_everything() {
        let tickets = sample();
        let result = filter_tickets(&tickets, StatusFilter::All, "   ");
        assert_eq!(result.len(), tickets.len());
    }
}
