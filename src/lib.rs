//! # Treeline API Client
//!
//! A typed Rust client for the Treeline continuous-integration service's
//! REST API (`/rest/v2`).
//!
//! All resource accessors funnel through a single request path: the
//! [`http::Session`] owns one pooled blocking transport and attaches the
//! static auth headers, and the [`pagination::Executor`] turns one logical
//! "fetch this collection" call into however many physical requests the
//! server's `Link: rel="next"` cursor demands, classifying failures along
//! the way.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use treeline_api::{Credential, QueryParams, TreelineClient};
//!
//! fn main() -> treeline_api::Result<()> {
//!     let auth = Credential::new("some.user", "abc123");
//!     let client = TreelineClient::new("https://ci.treeline.dev", Some(auth))?;
//!
//!     // Paginated: follows the server's next-page links.
//!     let projects = client.all_projects(None)?;
//!
//!     // Capped: stops paginating once 50 records are accumulated.
//!     let hosts = client.all_hosts(Some(QueryParams::new().limit(50)))?;
//!
//!     println!("{} projects, {} hosts", projects.len(), hosts.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │               TreelineClient (accessors)                │
//! │  all_projects()  build_by_id()  tasks_by_build()  ...   │
//! └───────────────────────────┬─────────────────────────────┘
//! ┌───────────────────────────┴─────────────────────────────┐
//! │            pagination::Executor (per request)           │
//! │  timing → error classification → Link-header cursor     │
//! └───────────────────────────┬─────────────────────────────┘
//! ┌───────────────────────────┴─────────────────────────────┐
//! │              http::Session (per client)                 │
//! │  pooled transport · auth headers · raw GET · build_url  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The client performs no retries and no local recovery: a transport or
//! service failure on any page surfaces immediately to the caller.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types for the client
pub mod error;

/// Query parameter types
pub mod types;

/// Credential type and auth header names
pub mod auth;

/// Session manager: one pooled transport per client
pub mod http;

/// Paginating request executor
pub mod pagination;

/// Config-file credential discovery
pub mod config;

/// Domain records returned by the API
pub mod models;

/// The high-level client with resource accessors
pub mod client;

/// Small helpers (API datetime formatting)
pub mod util;

pub use auth::Credential;
pub use client::TreelineClient;
pub use error::{Error, Result};
pub use types::QueryParams;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
