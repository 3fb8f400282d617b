//! Entity stores holding the last-known server state plus UI-only state
//!
//! Stores are plain state containers with synchronous setters. They are
//! explicitly constructed and injected wherever needed: a handle clones
//! cheaply and every clone sees the same state, so tests can instantiate
//! isolated instances instead of sharing process-wide state.

mod tickets;
mod users;

pub use tickets::{TicketsState, TicketsStore};
pub use users::{UsersState, UsersStore};
