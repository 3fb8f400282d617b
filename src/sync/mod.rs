//! Server-sync layer
//!
//! Bridges the API client and the entity stores: queries go through the
//! staleness-window caches (stale-while-revalidate), mutations follow a
//! three-phase protocol: call the server, patch the store only after the
//! server confirmed, then invalidate the affected cache entries and enqueue
//! their refetch on the event loop.
//!
//! The layer owns no entity data; it populates and invalidates store and
//! cache state. Concurrent mutations on the same ticket are not serialized:
//! the last successful response wins in the store, and the enqueued
//! refetches reconverge the mirror with the server.

mod tickets;
mod users;

pub use tickets::TicketSync;
pub use users::UserSync;

use crate::api::{HttpApi, TicketsApi, UsersApi};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::store::{TicketsStore, UsersStore};
use std::sync::Arc;

/// Cache key for a whole-collection query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListKey;

/// One handle bundling the synchronized entity views
///
/// Explicitly constructed and passed to consumers; tests build as many
/// isolated contexts as they need, each with its own stores and caches.
#[derive(Clone)]
pub struct AppContext {
    pub tickets: TicketSync,
    pub users: UserSync,
}

impl AppContext {
    /// Build a context talking to a live server
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let api = Arc::new(HttpApi::new(config)?);
        Ok(Self::with_api(api.clone(), api, config))
    }

    /// Build a context over explicit API implementations
    ///
    /// This is the injection seam: tests pass mock APIs here.
    #[must_use]
    pub fn with_api(
        tickets_api: Arc<dyn TicketsApi>,
        users_api: Arc<dyn UsersApi>,
        config: &ClientConfig,
    ) -> Self {
        Self {
            tickets: TicketSync::new(
                tickets_api,
                TicketsStore::new(),
                config.cache.tickets_stale_after(),
            ),
            users: UserSync::new(
                users_api,
                UsersStore::new(),
                config.cache.users_stale_after(),
            ),
        }
    }
}
