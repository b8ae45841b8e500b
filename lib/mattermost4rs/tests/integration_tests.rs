//! Integration tests for `ApiClient` over `HyperClient` using wiremock.

use std::time::Duration;

use assert2::{check, let_assert};
use mattermost4rs::{ApiClient, Error, GenericType, HyperClient};
use serde::{Deserialize, Serialize};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, header_exists, method, path},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct User {
    id: String,
    username: String,
}

const USERS: GenericType<Vec<User>> = GenericType::new();

fn alice() -> User {
    User {
        id: "u1".to_string(),
        username: "alice".to_string(),
    }
}

fn api(server: &MockServer) -> ApiClient<HyperClient> {
    ApiClient::new(HyperClient::new(), server.uri()).expect("api client")
}

#[tokio::test]
async fn test_get_entity() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/users/me"))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(alice())
                .insert_header("Etag", "\"abc\""),
        )
        .mount(&server)
        .await;

    let response = api(&server)
        .get::<User>("users/me", None)
        .await
        .expect("response");

    check!(response.raw_response().status() == 200);
    check!(response.etag() == Some("\"abc\""));
    check!(!response.has_error());
    check!(response.read_entity().expect("user") == alice());
    check!(response.read_entity().expect("user again") == alice());
}

#[tokio::test]
async fn test_get_sends_etag() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/users/me"))
        .and(header("If-None-Match", "\"abc\""))
        .respond_with(ResponseTemplate::new(304).insert_header("Etag", "\"abc\""))
        .mount(&server)
        .await;

    let response = api(&server)
        .get::<User>("users/me", Some("\"abc\""))
        .await
        .expect("response");

    check!(response.raw_response().status() == 304);
    check!(response.etag() == Some("\"abc\""));
    check!(!response.has_error());
    let_assert!(Err(err) = response.read_entity());
    check!(err.is_deserialization());
}

#[tokio::test]
async fn test_get_generic_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![
            alice(),
            User {
                id: "u2".to_string(),
                username: "bob".to_string(),
            },
        ]))
        .mount(&server)
        .await;

    let response = api(&server)
        .get_generic("/users", USERS, None)
        .await
        .expect("response");

    let users = response.into_entity().expect("users");
    check!(users.len() == 2);
    check!(users[1].username == "bob");
}

#[tokio::test]
async fn test_error_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/users/nobody"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "id": "api.x",
            "message": "bad",
            "status_code": 400,
            "request_id": "r1"
        })))
        .mount(&server)
        .await;

    let response = api(&server)
        .get::<User>("users/nobody", None)
        .await
        .expect("response");

    check!(response.has_error());
    let api_error = response.read_error().expect("error payload");
    check!(api_error.id == "api.x");
    check!(api_error.request_id.as_deref() == Some("r1"));

    let_assert!(Err(Error::Api(api_error)) = response.into_result());
    check!(api_error.status_code == 400);
}

#[tokio::test]
async fn test_error_detection_is_content_based() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/users/u1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(alice()))
        .mount(&server)
        .await;

    let response = api(&server)
        .get::<User>("users/u1", None)
        .await
        .expect("response");

    check!(response.raw_response().is_client_error());
    check!(!response.has_error());
    check!(response.into_result().expect("user") == alice());
}

#[tokio::test]
async fn test_post_entity() {
    let server = MockServer::start().await;

    let patch = serde_json::json!({"username": "alice"});
    Mock::given(method("POST"))
        .and(path("/api/v4/users"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&patch))
        .respond_with(ResponseTemplate::new(201).set_body_json(alice()))
        .mount(&server)
        .await;

    let response = api(&server)
        .post::<_, User>("users", &patch)
        .await
        .expect("response");

    check!(response.raw_response().status() == 201);
    check!(response.into_result().expect("user") == alice());
}

#[tokio::test]
async fn test_put_entity() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v4/users/u1/patch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alice()))
        .mount(&server)
        .await;

    let response = api(&server)
        .put::<_, User>("users/u1/patch", &serde_json::json!({"nickname": "al"}))
        .await
        .expect("response");

    check!(response.read_entity().expect("user").id == "u1");
}

#[tokio::test]
async fn test_delete_json_status_ok() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v4/posts/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "OK"})))
        .mount(&server)
        .await;

    let response = api(&server).delete("posts/p1").await.expect("response");

    check!(response.read_entity().expect("status"));
    check!(!response.has_error());
}

#[tokio::test]
async fn test_delete_plain_status_ok() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v4/channels/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("ok", "text/plain; charset=utf-8"))
        .mount(&server)
        .await;

    let response = api(&server).delete("channels/c1").await.expect("response");

    check!(response.read_entity().expect("status"));
}

#[tokio::test]
async fn test_delete_failure_keeps_error_payload() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v4/posts/p2"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "id": "api.context.permissions.app_error",
            "message": "You do not have the appropriate permissions.",
            "status_code": 403,
            "status": "error"
        })))
        .mount(&server)
        .await;

    let response = api(&server).delete("posts/p2").await.expect("response");

    check!(!response.read_entity().expect("status"));
    check!(response.has_error());
    check!(response.read_error().expect("error payload").status_code == 403);
}

#[tokio::test]
async fn test_post_status_not_ok() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v4/users/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "fail"})))
        .mount(&server)
        .await;

    let response = api(&server)
        .post_status("users/logout", &serde_json::json!({}))
        .await
        .expect("response");

    check!(!response.read_entity().expect("status"));
}

#[tokio::test]
async fn test_user_agent_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/system/ping"))
        .and(header("User-Agent", mattermost4rs::DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "OK"})))
        .mount(&server)
        .await;

    let response = api(&server)
        .execute(mattermost4rs::Method::GET, "system/ping", None, None)
        .await
        .expect("response");

    check!(response.status() == 200);
}

#[tokio::test]
async fn test_custom_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/system/ping"))
        .and(header("User-Agent", "chat-bot/2.1"))
        .and(header_exists("Accept"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let http = HyperClient::builder().user_agent("chat-bot/2.1").build();
    let api = ApiClient::new(http, server.uri()).expect("api client");

    let response = api
        .execute(mattermost4rs::Method::GET, "system/ping", None, None)
        .await
        .expect("response");

    check!(response.status() == 200);
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/users/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(alice())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let http = HyperClient::builder()
        .timeout(Duration::from_millis(100))
        .build();
    let api = ApiClient::new(http, server.uri()).expect("api client");

    let_assert!(Err(err) = api.get::<User>("users/me", None).await);
    check!(err.is_timeout());
}

#[tokio::test]
async fn test_connection_refused() {
    let api = ApiClient::new(HyperClient::new(), "http://127.0.0.1:1").expect("api client");

    let_assert!(Err(err) = api.get::<User>("users/me", None).await);
    check!(err.is_connection());
}
