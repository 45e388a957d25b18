//! Tests for the session manager

use super::*;
use crate::auth::Credential;
use crate::types::QueryParams;
use pretty_assertions::assert_eq;

#[test]
fn test_build_url() {
    let session = Session::new("http://host", None).unwrap();
    assert_eq!(
        session.build_url("/projects/foo"),
        "http://host/rest/v2/projects/foo"
    );
}

#[test]
fn test_build_url_trims_trailing_slash() {
    let session = Session::new("http://host/", None).unwrap();
    assert_eq!(session.build_url("/hosts"), "http://host/rest/v2/hosts");
    assert_eq!(session.api_server(), "http://host");
}

#[test]
fn test_new_rejects_invalid_origin() {
    let err = Session::new("not a url", None).unwrap_err();
    assert!(matches!(err, crate::error::Error::InvalidUrl(_)));

    // A bare host without a scheme is relative and rejected too.
    assert!(Session::new("ci.example.com", None).is_err());
}

#[test]
fn test_get_attaches_auth_headers() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/rest/v2/hosts")
        .match_header("Api-User", "some.user")
        .match_header("Api-Key", "abc123")
        .with_status(200)
        .with_body("[]")
        .create();

    let auth = Credential::new("some.user", "abc123");
    let session = Session::new(server.url(), Some(&auth)).unwrap();
    let response = session.get(&session.build_url("/hosts"), None).unwrap();

    assert_eq!(response.status().as_u16(), 200);
    mock.assert();
}

#[test]
fn test_anonymous_get_sends_no_auth_headers() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/rest/v2/hosts")
        .match_header("Api-User", mockito::Matcher::Missing)
        .match_header("Api-Key", mockito::Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create();

    let session = Session::new(server.url(), None).unwrap();
    let response = session.get(&session.build_url("/hosts"), None).unwrap();

    assert_eq!(response.status().as_u16(), 200);
    mock.assert();
}

#[test]
fn test_get_appends_query_params() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/rest/v2/hosts")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("status".into(), "running".into()),
            mockito::Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create();

    let session = Session::new(server.url(), None).unwrap();
    let params = QueryParams::new().param("status", "running").limit(10);
    let response = session
        .get(&session.build_url("/hosts"), Some(&params))
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    mock.assert();
}

#[test]
fn test_get_returns_raw_response_on_failure_status() {
    // The session never interprets status codes; a 500 is still Ok here.
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/rest/v2/hosts")
        .with_status(500)
        .with_body("boom")
        .create();

    let session = Session::new(server.url(), None).unwrap();
    let response = session.get(&session.build_url("/hosts"), None).unwrap();

    assert_eq!(response.status().as_u16(), 500);
}

#[test]
fn test_raw_response_snapshot() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/rest/v2/hosts")
        .with_status(200)
        .with_header("link", "<http://host/next>; rel=\"next\"")
        .with_body("[1, 2]")
        .create();

    let session = Session::new(server.url(), None).unwrap();
    let response = session.get(&session.build_url("/hosts"), None).unwrap();
    let raw = RawResponse::from_response(response).unwrap();

    assert_eq!(raw.status.as_u16(), 200);
    assert_eq!(raw.body, "[1, 2]");
    assert!(raw.headers.contains_key("link"));
}
