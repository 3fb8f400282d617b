//! tickdeck - A cached client core for REST ticket trackers
//!
//! This crate provides the client-side data/state layer of a ticket
//! tracker, with features including:
//! - Typed API client over the tracker's REST surface
//! - Staleness-window query caching with stale-while-revalidate reads
//! - Confirmed-write mutations with automatic cache invalidation
//! - Injected entity stores holding last-known server state plus UI state
//! - Pure filter/search projection over the ticket collection

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
// Allow some pedantic lints that don't improve code quality
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Consistency Model
//!
//! All state lives behind cheaply cloneable handles sharing one mirror of
//! the server. Queries serve cached data within a staleness window and
//! revalidate stale data in the background; mutations patch the store only
//! after the server confirmed the write, then invalidate the affected
//! cache entries and enqueue their refetch. Nothing here retries: errors
//! propagate to the caller and are mirrored in the stores' `error` fields.
//!
//! # Example
//!
//! ```rust,ignore
//! use tickdeck::config::ClientConfig;
//! use tickdeck::sync::AppContext;
//!
//! let config = ClientConfig::load()?;
//! let ctx = AppContext::new(&config)?;
//!
//! // Cached within the staleness window
//! let tickets = ctx.tickets.list().await?;
//!
//! // Patches the store after server confirmation, then refetches
//! ctx.tickets.assign(tickets[0].id, user_id).await?;
//! ```

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod store;
pub mod sync;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TickdeckError};
