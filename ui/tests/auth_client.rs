//! AuthClient against an in-process backend speaking the login endpoints' protocol

use std::collections::HashMap;

use axum::extract::{Multipart, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

use ui::features::login::{Credentials, LoginMode};
use ui::services::client::{AuthApi, AuthClient, ClientError, LoginPayload};
use ui::services::config::ApiConfig;

const TOKEN: &str = "token-123";

async fn form_fields(mut multipart: Multipart) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        fields.insert(name, field.text().await.unwrap());
    }
    fields
}

fn has_token(headers: &HeaderMap) -> bool {
    headers
        .get("X-XSRF-TOKEN")
        .and_then(|value| value.to_str().ok())
        == Some(TOKEN)
}

async fn password_login(headers: HeaderMap, multipart: Multipart) -> Response {
    if !has_token(&headers) {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }

    let fields = form_fields(multipart).await;
    let expected = [
        ("username", "user@example.com"),
        ("password", "hunter2"),
        ("remember-me", "true"),
    ];
    if expected
        .iter()
        .all(|(name, value)| fields.get(*name).map(String::as_str) == Some(*value))
    {
        Json(json!({
            "status": "success",
            "message": "Login successful",
            "UserInfo": { "id": 7, "firstName": "Ada", "lastName": "Lovelace", "mail": "user@example.com" },
            "isAuthenticated": true
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "status": "error", "msg": "Bad credentials" })),
        )
            .into_response()
    }
}

async fn code_login(multipart: Multipart) -> Response {
    let fields = form_fields(multipart).await;
    match fields.get("verification-code").map(String::as_str) {
        Some("code123") => Json(json!({
            "status": "success",
            "UserInfo": { "id": 8, "mail": "user@example.com" }
        }))
        .into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "status": "error", "msg": "Wrong code" })),
        )
            .into_response(),
    }
}

async fn verification_code(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("email").map(String::as_str) {
        Some("user@example.com") => Json(json!({ "status": "success" })).into_response(),
        Some(_) => Json(json!({ "status": "error", "msg": "Unknown email" })).into_response(),
        None => (StatusCode::BAD_REQUEST, "missing email").into_response(),
    }
}

async fn check_login() -> Json<serde_json::Value> {
    Json(json!({ "id": 0 }))
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/login/login-process", post(password_login))
        .route("/api/login/login-code", post(code_login))
        .route("/api/login/verification-code", get(verification_code))
        .route("/api/login/check-login", get(check_login))
        .route("/broken/login", post(|| async { "<html>oops</html>" }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base_url: &str) -> AuthClient {
    AuthClient::new(ApiConfig::with_base_url(base_url))
        .unwrap()
        .with_xsrf_token(TOKEN)
}

fn payload(secret: &str, mode: LoginMode) -> LoginPayload {
    let credentials = Credentials {
        email: "user@example.com".to_string(),
        secret: secret.to_string(),
        remember_me: true,
    };
    LoginPayload::from_credentials(&credentials, mode)
}

#[tokio::test]
async fn test_password_login_success() {
    let base_url = spawn_backend().await;

    let response = client(&base_url)
        .login_with_password(&payload("hunter2", LoginMode::Password))
        .await
        .unwrap();

    assert!(response.is_success());
    let user = response.user_info.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
    assert_eq!(response.is_authenticated, Some(true));
}

#[tokio::test]
async fn test_password_login_rejected_with_message() {
    let base_url = spawn_backend().await;

    let response = client(&base_url)
        .login_with_password(&payload("wrong", LoginMode::Password))
        .await
        .unwrap();

    assert!(!response.is_success());
    assert_eq!(response.display_message(), "Bad credentials");
}

#[tokio::test]
async fn test_missing_csrf_header_is_forbidden() {
    let base_url = spawn_backend().await;
    let client = AuthClient::new(ApiConfig::with_base_url(&base_url)).unwrap();

    let response = client
        .login_with_password(&payload("hunter2", LoginMode::Password))
        .await
        .unwrap();

    assert_eq!(response.display_message(), "Login failed: Forbidden");
}

#[tokio::test]
async fn test_code_login_sends_verification_code_field() {
    let base_url = spawn_backend().await;
    let client = client(&base_url);

    let accepted = client
        .login_with_verification_code(&payload("code123", LoginMode::VerificationCode))
        .await
        .unwrap();
    assert_eq!(accepted.user_info.map(|u| u.id), Some(8));

    let refused = client
        .login_with_verification_code(&payload("000000", LoginMode::VerificationCode))
        .await
        .unwrap();
    assert_eq!(refused.display_message(), "Wrong code");
}

#[tokio::test]
async fn test_verification_code_request() {
    let base_url = spawn_backend().await;
    let client = client(&base_url);

    let sent = client
        .request_verification_code("user@example.com")
        .await
        .unwrap();
    assert!(!sent.is_error());

    let refused = client
        .request_verification_code("other@example.com")
        .await
        .unwrap();
    assert!(refused.is_error());
    assert_eq!(refused.msg.as_deref(), Some("Unknown email"));
}

#[tokio::test]
async fn test_anonymous_session_is_none() {
    let base_url = spawn_backend().await;
    assert_eq!(client(&base_url).check_login().await.unwrap(), None);
}

#[tokio::test]
async fn test_undecodable_success_body_is_decode_error() {
    let base_url = spawn_backend().await;
    let api = ApiConfig {
        login_path: "/broken/login".to_string(),
        ..ApiConfig::with_base_url(&base_url)
    };
    let client = AuthClient::new(api).unwrap();

    let result = client
        .login_with_password(&payload("hunter2", LoginMode::Password))
        .await;

    assert!(matches!(result, Err(ClientError::Decode { .. })));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let result = client(&base_url)
        .login_with_password(&payload("hunter2", LoginMode::Password))
        .await;

    assert!(matches!(result, Err(ClientError::Network { .. })));
}
