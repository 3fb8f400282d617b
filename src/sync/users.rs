use crate::api::UsersApi;
use crate::cache::{Lookup, QueryCache};
use crate::core::{User, UserId};
use crate::error::Result;
use crate::store::UsersStore;
use crate::sync::ListKey;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Synchronized view over the user collection
///
/// Users are read-only, so this half of the sync layer has no mutations
/// and uses a longer staleness window than tickets.
#[derive(Clone)]
pub struct UserSync {
    api: Arc<dyn UsersApi>,
    store: UsersStore,
    list_cache: Arc<QueryCache<ListKey, Vec<User>>>,
    detail_cache: Arc<QueryCache<UserId, User>>,
}

impl UserSync {
    /// Create the sync layer over an API implementation and a store
    #[must_use]
    pub fn new(api: Arc<dyn UsersApi>, store: UsersStore, stale_after: Duration) -> Self {
        Self {
            api,
            store,
            list_cache: Arc::new(QueryCache::new(stale_after)),
            detail_cache: Arc::new(QueryCache::new(stale_after)),
        }
    }

    /// The underlying store, for assignee lookups and snapshots
    #[must_use]
    pub fn store(&self) -> &UsersStore {
        &self.store
    }

    /// Fetch the user list, serving cached results within the staleness
    /// window
    pub async fn list(&self) -> Result<Vec<User>> {
        match self.list_cache.lookup(&ListKey) {
            Lookup::Fresh(users) | Lookup::Pending(users) => Ok(users),
            Lookup::Stale(users) => {
                debug!("user list stale, refreshing in background");
                self.spawn_list_refresh();
                Ok(users)
            },
            Lookup::Miss => self.refresh_list().await,
        }
    }

    /// Fetch one user by id, through the detail cache
    ///
    /// Skipped entirely (no call issued) when `id` is unset/zero.
    pub async fn get(&self, id: UserId) -> Result<Option<User>> {
        if id.is_unset() {
            return Ok(None);
        }
        match self.detail_cache.lookup(&id) {
            Lookup::Fresh(user) | Lookup::Pending(user) => Ok(Some(user)),
            Lookup::Stale(user) => {
                debug!(%id, "user detail stale, refreshing in background");
                self.spawn_detail_refresh(id);
                Ok(Some(user))
            },
            Lookup::Miss => self.refresh_detail(id).await.map(Some),
        }
    }

    async fn refresh_list(&self) -> Result<Vec<User>> {
        self.store.set_loading(true);
        self.store.set_error(None);

        let result = self.api.list_users().await;
        self.store.set_loading(false);

        match result {
            Ok(users) => {
                self.store.set_users(users.clone());
                self.list_cache.store(ListKey, users.clone());
                Ok(users)
            },
            Err(err) => {
                self.store.set_error(Some(err.to_string()));
                self.list_cache.end_refresh(&ListKey);
                Err(err)
            },
        }
    }

    async fn refresh_detail(&self, id: UserId) -> Result<User> {
        match self.api.get_user(id).await {
            Ok(user) => {
                self.detail_cache.store(id, user.clone());
                Ok(user)
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
                warn!(error = %err, "background user list refresh failed");
            }
        });
    }

    fn spawn_detail_refresh(&self, id: UserId) {
        let sync = self.clone();
        tokio::spawn(async move {
            if let Err(err) = sync.refresh_detail(id).await {
                warn!(error = %err, %id, "background user detail refresh failed");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockUsersApi;
    use crate::error::TickdeckError;
    use crate::test_utils::sample_users;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const WINDOW: Duration = Duration::from_secs(600);

    fn sync_with(api: MockUsersApi) -> UserSync {
        UserSync::new(Arc::new(api), UsersStore::new(), WINDOW)
    }

    #[tokio::test(start_paused = true)]
    async fn list_within_window_issues_exactly_one_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut api = MockUsersApi::new();
        api.expect_list_users().returning(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(sample_users())
        });
        let sync = sync_with(api);

        sync.list().await.expect("first list");
        sync.list().await.expect("second list");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(sync.store().users().len(), sample_users().len());
    }

    #[tokio::test(start_paused = true)]
    async fn users_stay_fresh_longer_than_tickets_would() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut api = MockUsersApi::new();
        api.expect_list_users().returning(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(sample_users())
        });
        let sync = sync_with(api);

        sync.list().await.expect("seed list");
        // Past the tickets window, still inside the users window.
        tokio::time::advance(Duration::from_secs(301)).await;
        sync.list().await.expect("still cached");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn get_with_unset_id_issues_no_call() {
        let mut api = MockUsersApi::new();
        api.expect_get_user().times(0);
        let sync = sync_with(api);

        assert_eq!(sync.get(UserId(0)).await.expect("skip"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_list_records_error_in_store() {
        let mut api = MockUsersApi::new();
        api.expect_list_users()
            .times(1)
            .returning(|| Err(TickdeckError::transport("dns failure")));
        let sync = sync_with(api);

        sync.list().await.expect_err("list fails");

        let state = sync.store().state();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("network error: dns failure"));
    }
}
