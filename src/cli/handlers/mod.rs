//! Command handlers
//!
//! One handler per CLI command. Handlers receive the constructed
//! [`AppContext`](crate::sync::AppContext) and the output formatter; they
//! contain presentation logic only.

mod list;
mod ticket;
mod users;

pub use list::handle_list;
pub use ticket::{
    handle_assign, handle_done, handle_new, handle_reopen, handle_show, handle_unassign,
};
pub use users::handle_users;

use crate::core::UserId;
use crate::store::UsersStore;

/// Human-readable label for a ticket's assignee
///
/// Falls back to `user#<id>` when the user is not mirrored locally.
fn assignee_label(users: &UsersStore, assignee_id: Option<UserId>) -> String {
    match assignee_id {
        None => "unassigned".to_string(),
        Some(id) => users
            .user_by_id(id)
            .map_or_else(|| format!("user#{id}"), |user| user.name),
    }
}

/// Status glyph for list output
const fn status_glyph(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_users;

    #[test]
    fn assignee_label_resolves_known_users() {
        let store = UsersStore::new();
        store.set_users(sample_users());

        assert_eq!(assignee_label(&store, Some(UserId(1))), "Alice");
        assert_eq!(assignee_label(&store, Some(UserId(42))), "user#42");
        assert_eq!(assignee_label(&store, None), "unassigned");
    }
}
