//! Typed API client for the ticket tracker's REST surface
//!
//! This layer does one thing: turn REST operations into typed results.
//! No retries, no caching; that policy lives in the sync layer. The trait
//! pair is the seam the sync layer is tested through; [`HttpApi`] is the
//! production implementation over HTTP.

mod http;

pub use http::HttpApi;

use crate::core::{Ticket, TicketId, User, UserId};
use crate::error::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Ticket operations exposed by the server
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TicketsApi: Send + Sync {
    /// `GET /tickets`
    async fn list_tickets(&self) -> Result<Vec<Ticket>>;

    /// `GET /tickets/{id}`
    async fn get_ticket(&self, id: TicketId) -> Result<Ticket>;

    /// `POST /tickets`, returning the server-assigned ticket
    async fn create_ticket(&self, description: &str) -> Result<Ticket>;

    /// `PUT /tickets/{id}/assign/{userId}`
    async fn assign_ticket(&self, ticket_id: TicketId, user_id: UserId) -> Result<()>;

    /// `PUT /tickets/{id}/unassign`
    async fn unassign_ticket(&self, ticket_id: TicketId) -> Result<()>;

    /// `PUT /tickets/{id}/complete`
    async fn complete_ticket(&self, ticket_id: TicketId) -> Result<()>;

    /// `DELETE /tickets/{id}/complete`, marking the ticket incomplete again
    async fn reopen_ticket(&self, ticket_id: TicketId) -> Result<()>;
}

/// User operations exposed by the server (read-only)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// `GET /users`
    async fn list_users(&self) -> Result<Vec<User>>;

    /// `GET /users/{id}`
    async fn get_user(&self, id: UserId) -> Result<User>;
}
