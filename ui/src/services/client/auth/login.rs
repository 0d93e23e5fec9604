use tracing::{error, info, instrument, warn};

use crate::services::client::types::*;
use crate::services::client::{AuthClient, ClientError, ClientResult};

/// Core login implementation shared by the password and verification-code endpoints
#[instrument(skip(client, payload), fields(mode = ?payload.mode, username = %payload.username), err)]
pub async fn login_impl(
    client: &AuthClient,
    login_url: &str,
    payload: &LoginPayload,
) -> ClientResult<LoginResponse> {
    info!("Submitting login to {}", login_url);

    let request = client
        .http_client
        .post(login_url)
        .multipart(payload.to_multipart());

    let response = client
        .prepare(request)
        .send()
        .await
        .map_err(|e| ClientError::network("Failed to call login endpoint", e))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::network("Failed to read login response", e))?;

    let login_response = interpret_login_body(login_url, status, &body)?;
    if login_response.is_success() {
        info!("Login accepted by {}", login_url);
    } else {
        warn!(
            "Login rejected with status {}: {}",
            status,
            login_response.display_message()
        );
    }
    Ok(login_response)
}

/// Decode a login response body.
///
/// The failure handler answers with the same JSON shape as the success
/// handler, so the body is decoded whatever the HTTP status. A non-JSON
/// body on an error status becomes a rejected login carrying the raw text.
pub fn interpret_login_body(
    endpoint: &str,
    status: u16,
    body: &str,
) -> ClientResult<LoginResponse> {
    match serde_json::from_str::<LoginResponse>(body) {
        Ok(response) => Ok(response),
        Err(e) if (200..300).contains(&status) => {
            error!("Login endpoint returned an undecodable body: {}", e);
            Err(ClientError::Decode {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })
        }
        Err(_) => {
            let text = body.trim();
            Ok(LoginResponse::error(&if text.is_empty() {
                format!("Login failed with status {}", status)
            } else {
                format!("Login failed: {}", text)
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_json_on_unauthorized_is_decoded() {
        let body = r#"{"status":"error","msg":"bad credentials"}"#;
        let response = interpret_login_body("/login", 401, body).unwrap();

        assert!(!response.is_success());
        assert_eq!(response.display_message(), "bad credentials");
    }

    #[test]
    fn test_plain_text_error_becomes_rejection() {
        let response = interpret_login_body("/login", 500, "Internal Server Error").unwrap();
        assert_eq!(response.display_message(), "Login failed: Internal Server Error");

        let response = interpret_login_body("/login", 403, "").unwrap();
        assert_eq!(response.display_message(), "Login failed with status 403");
    }

    #[test]
    fn test_undecodable_success_body_is_an_error() {
        let result = interpret_login_body("/login", 200, "<html></html>");
        assert!(matches!(result, Err(ClientError::Decode { .. })));
    }
}
