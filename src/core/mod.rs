//! Core domain model for tickdeck
//!
//! The entity model mirrors the REST surface of the tracked server: tickets
//! with an optional assignee and a completion flag, and read-only users.
//! Everything here is plain data: no I/O, no caching.

mod ticket;
mod user;
pub mod view;

pub use ticket::{StatusFilter, Ticket, TicketId, TicketPatch};
pub use user::{User, UserId};
