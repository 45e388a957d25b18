//! Session manager
//!
//! One reusable outbound connection context per client instance. The
//! session performs exactly one HTTP GET per invocation and never
//! interprets status codes; classification lives in [`crate::pagination`].

mod session;

pub use session::{RawResponse, Session};

#[cfg(test)]
mod tests;
