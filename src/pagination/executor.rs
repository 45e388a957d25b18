//! The request executor: timing, classification, and the cursor loop

use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::http::{RawResponse, Session};
use crate::pagination::link::next_link;
use crate::types::QueryParams;

/// Requests slower than this are logged at `info` instead of `debug`
const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(10);

/// Executes requests through a [`Session`], one page at a time
///
/// The executor performs no retries and keeps no state between calls; a
/// failure on any page discards the accumulator and propagates immediately.
#[derive(Debug)]
pub struct Executor {
    session: Session,
}

impl Executor {
    /// Wrap a session
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// The underlying session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Build the absolute URL for a resource path
    pub fn build_url(&self, resource_path: &str) -> String {
        self.session.build_url(resource_path)
    }

    /// Issue exactly one request and classify the response
    ///
    /// The single choke point every physical request passes through; a
    /// retry or circuit-breaking layer would hook in here. Duration is
    /// logged but never affects control flow.
    pub fn call_once(&self, url: &str, params: Option<&QueryParams>) -> Result<RawResponse> {
        let start = Instant::now();
        let response = self.session.get(url, params)?;
        let raw = RawResponse::from_response(response)?;
        let elapsed = start.elapsed();

        if elapsed > SLOW_REQUEST_THRESHOLD {
            info!(url, seconds = elapsed.as_secs_f64(), "slow api request");
        } else {
            debug!(url, seconds = elapsed.as_secs_f64(), "api request");
        }

        classify(raw)
    }

    /// Fetch a complete logical collection, following next-page links
    ///
    /// The first request carries `params`; next-page URLs are served by the
    /// server fully self-describing, so the original params are not resent.
    /// When `params` carries a record cap, the loop stops before issuing a
    /// page fetch the cap would make wasted; a page already fetched is
    /// never truncated.
    pub fn fetch_all(&self, url: &str, params: Option<&QueryParams>) -> Result<Vec<Value>> {
        let limit = params.and_then(QueryParams::record_limit);

        let response = self.call_once(url, params)?;
        let mut records = parse_page(&response.body)?;
        let mut cursor = next_link(&response.headers);

        while let Some(next_url) = cursor {
            if limit.is_some_and(|limit| records.len() >= limit) {
                break;
            }

            let response = self.call_once(&next_url, None)?;
            records.extend(parse_page(&response.body)?);
            cursor = next_link(&response.headers);
        }

        Ok(records)
    }

    /// Fetch a single resource; no pagination attempted
    pub fn fetch_single(&self, url: &str, params: Option<&QueryParams>) -> Result<Value> {
        let response = self.call_once(url, params)?;
        serde_json::from_str(&response.body)
            .map_err(|e| Error::payload(format!("expected a JSON document: {e}")))
    }
}

/// Classify a response before it is trusted
///
/// A structured server message takes priority over the generic status
/// failure because it is more specific.
fn classify(response: RawResponse) -> Result<RawResponse> {
    if response.status.as_u16() >= 400 {
        if let Ok(Value::Object(body)) = serde_json::from_str::<Value>(&response.body) {
            if let Some(message) = body.get("error").and_then(Value::as_str) {
                return Err(Error::service(response.status.as_u16(), message));
            }
        }
        return Err(Error::transport(response.status.as_u16(), response.body));
    }

    Ok(response)
}

/// Parse one page body into records
///
/// An empty body is a valid page that contributes nothing; anything else
/// must be a JSON list.
fn parse_page(body: &str) -> Result<Vec<Value>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(body).map_err(|e| Error::payload(format!("expected a JSON list: {e}")))
}
