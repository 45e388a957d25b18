//! The session: pooled transport, auth headers, raw GET, URL building

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use url::Url;

use crate::auth::{Credential, API_KEY_HEADER, API_USER_HEADER};
use crate::error::{Error, Result};
use crate::types::QueryParams;

/// Fixed API version prefix appended to the server origin
pub const API_ROUTE: &str = "/rest/v2";

/// A session bound to one server origin
///
/// Owns the pooled transport for the lifetime of the client. Constructed
/// once, immutable afterwards; safe to share behind `&` across sequential
/// call sequences. Construction performs no network I/O.
pub struct Session {
    http: Client,
    api_server: String,
}

impl Session {
    /// Bind a session to `api_server`, attaching auth headers when a
    /// credential is supplied
    ///
    /// The origin must parse as an absolute URL; it is normalized before
    /// any request URL is built from it.
    pub fn new(api_server: impl Into<String>, credential: Option<&Credential>) -> Result<Self> {
        let origin = Url::parse(&api_server.into())?;

        let mut headers = HeaderMap::new();
        if let Some(auth) = credential {
            headers.insert(
                API_USER_HEADER,
                HeaderValue::from_str(auth.user())
                    .map_err(|_| Error::config("credential user is not a valid header value"))?,
            );
            let mut key = HeaderValue::from_str(auth.api_key())
                .map_err(|_| Error::config("credential api key is not a valid header value"))?;
            key.set_sensitive(true);
            headers.insert(API_KEY_HEADER, key);
        }

        let http = Client::builder()
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_server: origin.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Issue one GET against `url` with `params` appended to the query
    /// string
    ///
    /// Returns the raw response unconditionally; status codes are not
    /// inspected here. Errors only on network-level failure.
    pub fn get(&self, url: &str, params: Option<&QueryParams>) -> Result<Response> {
        let mut request = self.http.get(url);
        if let Some(params) = params {
            if !params.is_empty() {
                request = request.query(params.entries());
            }
        }
        Ok(request.send()?)
    }

    /// Build the absolute URL for a resource path
    ///
    /// Pure concatenation of origin, version prefix, and `resource_path`.
    pub fn build_url(&self, resource_path: &str) -> String {
        format!("{}{}{}", self.api_server, API_ROUTE, resource_path)
    }

    /// The server origin this session is bound to
    pub fn api_server(&self) -> &str {
        &self.api_server
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("api_server", &self.api_server)
            .finish_non_exhaustive()
    }
}

/// Owned snapshot of one response: status, headers, drained body
///
/// Produced by the executor after reading the body so the headers (the
/// pagination cursor lives there) stay available alongside it.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body as text, possibly empty
    pub body: String,
}

impl RawResponse {
    /// Drain a response into an owned snapshot
    pub fn from_response(response: Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text()?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }
}
