use reqwest::Method;

use super::*;
use crate::config::BackendConfig;

fn client() -> ApiClient {
    ApiClient::new(BackendConfig::new("https://example.test/", "anon-key")).unwrap()
}

#[test]
fn url_builders_cover_all_three_surfaces() {
    let api = client();
    assert_eq!(api.rest_url("projects"), "https://example.test/rest/v1/projects");
    assert_eq!(api.auth_url("token"), "https://example.test/auth/v1/token");
    assert_eq!(
        api.function_url("send-confirmation"),
        "https://example.test/functions/v1/send-confirmation"
    );
}

#[test]
fn anonymous_requests_bear_the_anon_key() {
    let api = client();
    let request = api
        .request(Method::GET, &api.rest_url("projects"), None)
        .build()
        .unwrap();

    assert_eq!(request.headers().get("apikey").unwrap(), "anon-key");
    assert_eq!(request.headers().get("authorization").unwrap(), "Bearer anon-key");
}

#[test]
fn session_token_replaces_the_bearer_but_not_the_apikey() {
    let api = client();
    let request = api
        .request(Method::POST, &api.auth_url("logout"), Some("session-token"))
        .build()
        .unwrap();

    assert_eq!(request.headers().get("apikey").unwrap(), "anon-key");
    assert_eq!(request.headers().get("authorization").unwrap(), "Bearer session-token");
}

#[test]
fn query_pairs_are_encoded_onto_the_url() {
    let api = client();
    let request = api
        .request(Method::GET, &api.rest_url("usage_logs"), None)
        .query(&[("select", "*"), ("recorded_at", "gte.2026-08-01T00:00:00Z")])
        .build()
        .unwrap();

    let url = request.url().as_str();
    assert!(url.starts_with("https://example.test/rest/v1/usage_logs?"));
    assert!(url.contains("select=*"));
    assert!(url.contains("recorded_at=gte.2026-08-01T00%3A00%3A00Z"));
}
