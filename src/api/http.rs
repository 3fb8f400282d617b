use crate::api::{TicketsApi, UsersApi};
use crate::config::ClientConfig;
use crate::core::{Ticket, TicketId, User, UserId};
use crate::error::{Result, TickdeckError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Serialize)]
struct CreateTicketRequest<'a> {
    description: &'a str,
}

/// HTTP implementation of the API traits, backed by reqwest
///
/// Every request carries a JSON content-type header and is bounded by the
/// configured per-call timeout; a timeout surfaces as the transport error
/// kind like any other failure to produce a response.
#[derive(Debug, Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Build the client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.api.timeout())
            .build()
            .map_err(|e| TickdeckError::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, %url, "issuing API request");
        self.http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Fail non-success responses with a status error embedding the HTTP
    /// status line
    fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(TickdeckError::ApiStatus {
            status: status.as_u16(),
            message: format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            ),
        })
    }

    fn transport_error(err: reqwest::Error) -> TickdeckError {
        TickdeckError::transport(err.to_string())
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(Self::transport_error)?;
        let response = Self::check_status(response)?;
        // A body that fails to parse counts as a transport failure: no
        // usable response was produced.
        response.json().await.map_err(Self::transport_error)
    }

    async fn send_no_content(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await.map_err(Self::transport_error)?;
        let response = Self::check_status(response)?;
        if response.status() != StatusCode::NO_CONTENT {
            debug!(status = %response.status(), "expected 204, ignoring body");
        }
        Ok(())
    }
}

#[async_trait]
impl TicketsApi for HttpApi {
    async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        self.send_json(self.request(Method::GET, "/tickets")).await
    }

    async fn get_ticket(&self, id: TicketId) -> Result<Ticket> {
        self.send_json(self.request(Method::GET, &format!("/tickets/{id}")))
            .await
    }

    async fn create_ticket(&self, description: &str) -> Result<Ticket> {
        let body = CreateTicketRequest { description };
        self.send_json(self.request(Method::POST, "/tickets").json(&body))
            .await
    }

    async fn assign_ticket(&self, ticket_id: TicketId, user_id: UserId) -> Result<()> {
        self.send_no_content(
            self.request(Method::PUT, &format!("/tickets/{ticket_id}/assign/{user_id}")),
        )
        .await
    }

    async fn unassign_ticket(&self, ticket_id: TicketId) -> Result<()> {
        self.send_no_content(self.request(Method::PUT, &format!("/tickets/{ticket_id}/unassign")))
            .await
    }

    async fn complete_ticket(&self, ticket_id: TicketId) -> Result<()> {
        self.send_no_content(self.request(Method::PUT, &format!("/tickets/{ticket_id}/complete")))
            .await
    }

    async fn reopen_ticket(&self, ticket_id: TicketId) -> Result<()> {
        self.send_no_content(
            self.request(Method::DELETE, &format!("/tickets/{ticket_id}/complete")),
        )
        .await
    }
}

#[async_trait]
impl UsersApi for HttpApi {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.send_json(self.request(Method::GET, "/users")).await
    }

    async fn get_user(&self, id: UserId) -> Result<User> {
        self.send_json(self.request(Method::GET, &format!("/users/{id}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn base_url_is_normalized() {
        let mut config = ClientConfig::default();
        config.api.base_url = "http://localhost:3000/api/".to_string();

        let api = HttpApi::new(&config).expect("client builds");
        assert_eq!(api.base_url, "http://localhost:3000/api");
    }
}
