use crate::core::{StatusFilter, Ticket, TicketId, TicketPatch, view};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Snapshot of the tickets store
///
/// `tickets` is the local mirror of all known tickets, ordered by arrival.
/// The invariant is at most one ticket per id.
#[derive(Debug, Clone, Default)]
pub struct TicketsState {
    pub tickets: Vec<Ticket>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: StatusFilter,
    pub search_query: String,
}

/// Shared handle to the tickets store
///
/// Clones are cheap and observe the same state. Setters are synchronous;
/// no lock is ever held across an await point.
#[derive(Debug, Clone, Default)]
pub struct TicketsStore {
    inner: Arc<Mutex<TicketsState>>,
}

impl TicketsStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the full state
    #[must_use]
    pub fn state(&self) -> TicketsState {
        self.lock().clone()
    }

    /// Snapshot the ticket collection
    #[must_use]
    pub fn tickets(&self) -> Vec<Ticket> {
        self.lock().tickets.clone()
    }

    /// Replace the collection with a server response
    ///
    /// Keeps the first occurrence when the response repeats an id, so the
    /// one-ticket-per-id invariant holds regardless of input.
    pub fn set_tickets(&self, tickets: Vec<Ticket>) {
        let mut seen = HashSet::new();
        let tickets = tickets
            .into_iter()
            .filter(|ticket| seen.insert(ticket.id))
            .collect();
        self.lock().tickets = tickets;
    }

    /// Append a ticket to the collection
    ///
    /// If a ticket with the same id is already mirrored, it is replaced in
    /// place instead of appended.
    pub fn add_ticket(&self, ticket: Ticket) {
        let mut state = self.lock();
        match state.tickets.iter_mut().find(|t| t.id == ticket.id) {
            Some(existing) => *existing = ticket,
            None => state.tickets.push(ticket),
        }
    }

    /// Merge a partial update into the ticket matching `id`
    ///
    /// A no-op when no ticket matches: nothing is created, nothing thrown.
    /// All other tickets are left untouched.
    pub fn update_ticket(&self, id: TicketId, patch: &TicketPatch) {
        let mut state = self.lock();
        if let Some(ticket) = state.tickets.iter_mut().find(|t| t.id == id) {
            patch.apply(ticket);
        }
    }

    pub fn set_loading(&self, loading: bool) {
        self.lock().loading = loading;
    }

    pub fn set_error(&self, error: Option<String>) {
        self.lock().error = error;
    }

    pub fn set_filter(&self, filter: StatusFilter) {
        self.lock().filter = filter;
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        self.lock().search_query = query.into();
    }

    /// Project the collection through the store's filter and search query
    #[must_use]
    pub fn filtered_tickets(&self) -> Vec<Ticket> {
        let state = self.lock();
        view::filter_tickets(&state.tickets, state.filter, &state.search_query)
    }

    fn lock(&self) -> MutexGuard<'_, TicketsState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
