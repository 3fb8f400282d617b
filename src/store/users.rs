use crate::core::{User, UserId};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Snapshot of the users store
#[derive(Debug, Clone, Default)]
pub struct UsersState {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Shared handle to the users store
///
/// Users are read-only from the client's perspective, so the store only
/// supports full replacement on fetch, no partial updates.
#[derive(Debug, Clone, Default)]
pub struct UsersStore {
    inner: Arc<Mutex<UsersState>>,
}

impl UsersStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the full state
    #[must_use]
    pub fn state(&self) -> UsersState {
        self.lock().clone()
    }

    /// Snapshot the user collection
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    /// Replace the collection with a server response
    pub fn set_users(&self, users: Vec<User>) {
        self.lock().users = users;
    }

    pub fn set_loading(&self, loading: bool) {
        self.lock().loading = loading;
    }

    pub fn set_error(&self, error: Option<String>) {
        self.lock().error = error;
    }

    /// Find a user by id; `None` for ids not mirrored locally
    #[must_use]
    pub fn user_by_id(&self, id: UserId) -> Option<User> {
        self.lock().users.iter().find(|user| user.id == id).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, UsersState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_users;

    #[test]
    fn user_by_id_finds_the_matching_record() {
        let store = UsersStore::new();
        store.set_users(sample_users());

        let user = store.user_by_id(UserId(2)).expect("user 2 exists");
        assert_eq!(user.name, "Bob");
    }

    #[test]
    fn user_by_id_returns_none_for_unknown_ids() {
        let store = UsersStore::new();
        store.set_users(sample_users());
        assert_eq!(store.user_by_id(UserId(42)), None);
    }

    #[test]
    fn set_users_replaces_the_collection() {
        let store = UsersStore::new();
        store.set_users(sample_users());
        store.set_users(vec![User::new(UserId(9), "Iris")]);

        let users = store.users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Iris");
    }
}
