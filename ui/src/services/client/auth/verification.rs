use tracing::{info, instrument, warn};

use crate::services::client::types::*;
use crate::services::client::{AuthClient, ClientError, ClientResult};

/// Ask the backend to email a one-time login code
#[instrument(skip(client), err)]
pub async fn request_verification_code_impl(
    client: &AuthClient,
    code_url: &str,
    email: &str,
) -> ClientResult<VerificationCodeResponse> {
    info!("Requesting verification code for {}", email);

    let request = client.http_client.get(code_url).query(&[("email", email)]);

    let response = client
        .prepare(request)
        .send()
        .await
        .map_err(|e| ClientError::network("Failed to call verification-code endpoint", e))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::network("Failed to read verification-code response", e))?;

    match serde_json::from_str::<VerificationCodeResponse>(&body) {
        Ok(code_response) => {
            if code_response.is_error() {
                warn!(
                    "Verification code refused: {}",
                    code_response.msg.as_deref().unwrap_or("no message")
                );
            }
            Ok(code_response)
        }
        Err(e) if (200..300).contains(&status) => Err(ClientError::Decode {
            endpoint: code_url.to_string(),
            message: e.to_string(),
        }),
        Err(_) => Ok(VerificationCodeResponse {
            status: ResponseStatus::Error,
            msg: Some(format!("Verification code request failed with status {}", status)),
        }),
    }
}
