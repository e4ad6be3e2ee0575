use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::transport::{ScriptedTransport, UnavailableTransport};

fn client(transport: &Arc<ScriptedTransport>) -> ApiClient {
    ApiClient::new(transport.clone(), "https://api.test")
}

fn bearer_client(transport: &Arc<ScriptedTransport>, session: &Session) -> ApiClient {
    client(transport)
        .with_timeout(Duration::from_millis(5000))
        .with_auth(AuthPolicy::Bearer(session.clone()))
}

// =============================================================
// post_json
// =============================================================

#[test]
fn post_json_returns_parsed_success_body() {
    let transport = Arc::new(ScriptedTransport::new().respond(200, &json!({ "ok": true })));
    let result = block_on(client(&transport).post_json("/x", &json!({ "a": 1 })));
    assert_eq!(result, Ok(json!({ "ok": true })));
}

#[test]
fn post_json_sends_exactly_one_request() {
    let transport = Arc::new(ScriptedTransport::new().respond(500, &json!({})));
    let result = block_on(client(&transport).post_json("/x", &json!({})));
    assert!(result.is_err());
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn post_json_empty_success_body_is_null() {
    let transport = Arc::new(ScriptedTransport::new().respond_raw(204, ""));
    assert_eq!(block_on(client(&transport).post_json("/x", &json!({}))), Ok(serde_json::Value::Null));
}

#[test]
fn post_json_non_json_success_body_is_string() {
    let transport = Arc::new(ScriptedTransport::new().respond_raw(200, "created"));
    assert_eq!(block_on(client(&transport).post_json("/x", &json!({}))), Ok(json!("created")));
}

#[test]
fn failure_with_message_is_application_error() {
    let transport = Arc::new(ScriptedTransport::new().respond(409, &json!({ "message": "Email already registered" })));
    let err = block_on(client(&transport).post_json("/x", &json!({}))).unwrap_err();
    assert_eq!(err, ApiError::Application("Email already registered".to_owned()));
}

#[test]
fn failure_without_message_is_network_error() {
    for body in [json!({}), json!({ "message": "" }), json!({ "message": 42 }), json!(["x"])] {
        let transport = Arc::new(ScriptedTransport::new().respond(400, &body));
        let err = block_on(client(&transport).post_json("/x", &json!({}))).unwrap_err();
        assert_eq!(err, ApiError::Network, "body {body}");
    }
}

#[test]
fn failure_with_unparseable_body_is_network_error() {
    let transport = Arc::new(ScriptedTransport::new().respond_raw(502, "<html>Bad Gateway</html>"));
    let err = block_on(client(&transport).post_json("/x", &json!({}))).unwrap_err();
    assert_eq!(err.to_string(), NETWORK_ERROR);
}

#[test]
fn transport_failure_is_network_error() {
    let transport = Arc::new(ScriptedTransport::new().fail(TransportError::Timeout(Duration::from_millis(5))));
    let err = block_on(client(&transport).post_json("/x", &json!({}))).unwrap_err();
    assert_eq!(err, ApiError::Network);
}

#[test]
fn unavailable_transport_is_network_error() {
    let client = ApiClient::new(Arc::new(UnavailableTransport), "");
    let err = block_on(client.post_json("/x", &json!({}))).unwrap_err();
    assert_eq!(err, ApiError::Network);
}

// =============================================================
// request building
// =============================================================

#[test]
fn request_without_body_has_no_content_type() {
    let transport = Arc::new(ScriptedTransport::new().respond(200, &json!({})));
    block_on(client(&transport).send(Method::Get, "/me", None)).unwrap();
    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "https://api.test/me");
    assert_eq!(request.body, None);
    assert_eq!(request.header("Content-Type"), None);
}

#[test]
fn send_with_body_sets_json_content_type() {
    let transport = Arc::new(ScriptedTransport::new().respond(200, &json!({})));
    let body = json!({ "k": "v" });
    block_on(client(&transport).send(Method::Put, "/thing", Some(&body))).unwrap();
    let request = &transport.requests()[0];
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.body.as_deref(), Some(r#"{"k":"v"}"#));
}

// =============================================================
// bearer policy
// =============================================================

#[test]
fn bearer_attaches_stored_token() {
    let session = Session::in_memory();
    session.set_token("abc123");
    let transport = Arc::new(ScriptedTransport::new().respond(200, &json!({})));
    block_on(bearer_client(&transport, &session).send(Method::Get, "/me", None)).unwrap();
    assert_eq!(transport.requests()[0].header("Authorization"), Some("Bearer abc123"));
}

#[test]
fn bearer_without_token_sends_unmodified() {
    let session = Session::in_memory();
    let transport = Arc::new(ScriptedTransport::new().respond(200, &json!({})));
    block_on(bearer_client(&transport, &session).send(Method::Get, "/me", None)).unwrap();
    assert_eq!(transport.requests()[0].header("Authorization"), None);
}

#[test]
fn bearer_reads_token_at_send_time() {
    let session = Session::in_memory();
    let transport = Arc::new(ScriptedTransport::new().respond(200, &json!({})).respond(200, &json!({})));
    let client = bearer_client(&transport, &session);
    block_on(client.send(Method::Get, "/a", None)).unwrap();
    session.set_token("later");
    block_on(client.send(Method::Get, "/b", None)).unwrap();
    let requests = transport.requests();
    assert_eq!(requests[0].header("Authorization"), None);
    assert_eq!(requests[1].header("Authorization"), Some("Bearer later"));
}

#[test]
fn bearer_401_clears_token_and_signals_unauthenticated() {
    let session = Session::in_memory();
    session.set_token("stale");
    let transport = Arc::new(ScriptedTransport::new().respond(401, &json!({ "message": "expired" })));
    let result = block_on(bearer_client(&transport, &session).send(Method::Get, "/me", None));
    assert_eq!(result, Err(ApiError::Unauthenticated));
    assert_eq!(session.token(), None);
}

#[test]
fn bearer_401_through_post_json_is_still_unauthenticated() {
    let session = Session::in_memory();
    session.set_token("stale");
    let transport = Arc::new(ScriptedTransport::new().respond(401, &json!({ "message": "expired" })));
    let result = block_on(bearer_client(&transport, &session).post_json("/x", &json!({})));
    assert_eq!(result, Err(ApiError::Unauthenticated));
    assert_eq!(session.token(), None);
}

#[test]
fn bearer_other_failures_pass_through_and_keep_token() {
    let session = Session::in_memory();
    session.set_token("abc");
    let transport = Arc::new(ScriptedTransport::new().respond_raw(403, "forbidden"));
    let result = block_on(bearer_client(&transport, &session).send(Method::Get, "/admin", None));
    assert_eq!(result, Err(ApiError::Status { status: 403, body: "forbidden".to_owned() }));
    assert_eq!(session.token().as_deref(), Some("abc"));
}

#[test]
fn bearer_transport_failure_keeps_token() {
    let session = Session::in_memory();
    session.set_token("abc");
    let transport = Arc::new(ScriptedTransport::new().fail(TransportError::Timeout(Duration::from_millis(5000))));
    let result = block_on(bearer_client(&transport, &session).send(Method::Get, "/me", None));
    assert_eq!(result, Err(ApiError::Network));
    assert_eq!(session.token().as_deref(), Some("abc"));
}

#[test]
fn unauthenticated_client_does_not_treat_401_specially() {
    let transport = Arc::new(ScriptedTransport::new().respond_raw(401, ""));
    let result = block_on(client(&transport).send(Method::Get, "/me", None));
    assert_eq!(result, Err(ApiError::Status { status: 401, body: String::new() }));
}

#[test]
fn response_success_is_2xx_only() {
    assert!(HttpResponse { status: 200, body: String::new() }.is_success());
    assert!(HttpResponse { status: 299, body: String::new() }.is_success());
    assert!(!HttpResponse { status: 301, body: String::new() }.is_success());
}
