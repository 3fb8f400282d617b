use crate::api::TicketsApi;
use crate::cache::{Lookup, QueryCache};
use crate::core::{Ticket, TicketId, TicketPatch, UserId};
use crate::error::{Result, TickdeckError};
use crate::store::TicketsStore;
use crate::sync::ListKey;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Synchronized view over the ticket collection
///
/// Cheap to clone; clones share the store and both caches.
#[derive(Clone)]
pub struct TicketSync {
    api: Arc<dyn TicketsApi>,
    store: TicketsStore,
    list_cache: Arc<QueryCache<ListKey, Vec<Ticket>>>,
    detail_cache: Arc<QueryCache<TicketId, Ticket>>,
}

impl TicketSync {
    /// Create the sync layer over an API implementation and a store
    #[must_use]
    pub fn new(api: Arc<dyn TicketsApi>, store: TicketsStore, stale_after: Duration) -> Self {
        Self {
            api,
            store,
            list_cache: Arc::new(QueryCache::new(stale_after)),
            detail_cache: Arc::new(QueryCache::new(stale_after)),
        }
    }

    /// The underlying store, for UI state (filter, search) and snapshots
    #[must_use]
    pub fn store(&self) -> &TicketsStore {
        &self.store
    }

    /// Fetch the ticket list, serving cached results within the staleness
    /// window
    ///
    /// A stale entry is returned immediately while a background refetch
    /// runs (stale-while-revalidate). Failures are recorded in the store's
    /// `error` field and re-raised.
    pub async fn list(&self) -> Result<Vec<Ticket>> {
        match self.list_cache.lookup(&ListKey) {
            Lookup::Fresh(tickets) | Lookup::Pending(tickets) => Ok(tickets),
            Lookup::Stale(tickets) => {
                debug!("ticket list stale, refreshing in background");
                self.spawn_list_refresh();
                Ok(tickets)
            },
            Lookup::Miss => self.refresh_list().await,
        }
    }

    /// Fetch one ticket by id, through the detail cache
    ///
    /// Skipped entirely (no call issued) when `id` is unset/zero.
    /// Detail reads do not touch the store's loading/error flags.
    pub async fn get(&self, id: TicketId) -> Result<Option<Ticket>> {
        if id.is_unset() {
            return Ok(None);
        }
        match self.detail_cache.lookup(&id) {
            Lookup::Fresh(ticket) | Lookup::Pending(ticket) => Ok(Some(ticket)),
            Lookup::Stale(ticket) => {
                debug!(%id, "ticket detail stale, refreshing in background");
                self.spawn_detail_refresh(id);
                Ok(Some(ticket))
            },
            Lookup::Miss => self.refresh_detail(id).await.map(Some),
        }
    }

    /// Create a ticket from a description
    ///
    /// The description is trimmed and must be non-empty; validation fails
    /// before any network call. On success the server-assigned ticket is
    /// appended to the store and the list cache is invalidated.
    pub async fn create(&self, description: &str) -> Result<Ticket> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TickdeckError::EmptyDescription);
        }

        let ticket = self.api.create_ticket(description).await?;
        self.store.add_ticket(ticket.clone());
        self.invalidate_list();
        Ok(ticket)
    }

    /// Assign a user to a ticket
    pub async fn assign(&self, ticket_id: TicketId, user_id: UserId) -> Result<()> {
        self.api.assign_ticket(ticket_id, user_id).await?;
        self.store
            .update_ticket(ticket_id, &TicketPatch::assignee(Some(user_id)));
        self.invalidate_ticket(ticket_id);
        Ok(())
    }

    /// Clear a ticket's assignee
    pub async fn unassign(&self, ticket_id: TicketId) -> Result<()> {
        self.api.unassign_ticket(ticket_id).await?;
        self.store
            .update_ticket(ticket_id, &TicketPatch::assignee(None));
        self.invalidate_ticket(ticket_id);
        Ok(())
    }

    /// Mark a ticket completed
    pub async fn complete(&self, ticket_id: TicketId) -> Result<()> {
        self.api.complete_ticket(ticket_id).await?;
        self.store
            .update_ticket(ticket_id, &TicketPatch::completed(true));
        self.invalidate_ticket(ticket_id);
        Ok(())
    }

    /// Mark a ticket incomplete again
    pub async fn reopen(&self, ticket_id: TicketId) -> Result<()> {
        self.api.reopen_ticket(ticket_id).await?;
        self.store
            .update_ticket(ticket_id, &TicketPatch::completed(false));
        self.invalidate_ticket(ticket_id);
        Ok(())
    }

    /// Foreground list fetch: brackets the store's loading/error flags,
    /// replaces the mirror on success, records the failure message on error
    async fn refresh_list(&self) -> Result<Vec<Ticket>> {
        self.store.set_loading(true);
        self.store.set_error(None);

        let result = self.api.list_tickets().await;
        self.store.set_loading(false);

        match result {
            Ok(tickets) => {
                self.store.set_tickets(tickets.clone());
                self.list_cache.store(ListKey, tickets.clone());
                Ok(tickets)
            },
            Err(err) => {
                self.store.set_error(Some(err.to_string()));
                self.list_cache.end_refresh(&ListKey);
                Err(err)
            },
        }
    }

    async fn refresh_detail(&self, id: TicketId) -> Result<Ticket> {
        match self.api.get_ticket(id).await {
            Ok(ticket) => {
                self.detail_cache.store(id, ticket.clone());
                Ok(ticket)
            },
            Err(err) => {
                self.detail_cache.end_refresh(&id);
                Err(err)
            },
        }
    }

    fn spawn_list_refresh(&self) {
        let sync = self.clone();
        tokio::spawn(async move {
            if let Err(err) = sync.refresh_list().await {
                warn!(error = %err, "background ticket list refresh failed");
            }
        });
    }

    fn spawn_detail_refresh(&self, id: TicketId) {
        let sync = self.clone();
        tokio::spawn(async move {
            if let Err(err) = sync.refresh_detail(id).await {
                warn!(error = %err, %id, "background ticket detail refresh failed");
            }
        });
    }

    /// Post-mutation invalidation for creates: only the list is affected
    fn invalidate_list(&self) {
        self.list_cache.invalidate(&ListKey);
        if self.list_cache.begin_refresh(&ListKey) {
            self.spawn_list_refresh();
        }
    }

    /// Post-mutation invalidation for per-ticket writes: the list and the
    /// ticket's detail entry are both marked invalid, and a refetch is
    /// enqueued for each entry that has ever been read
    fn invalidate_ticket(&self, id: TicketId) {
        self.invalidate_list();
        self.detail_cache.invalidate(&id);
        if self.detail_cache.begin_refresh(&id) {
            self.spawn_detail_refresh(id);
        }
    }
}
