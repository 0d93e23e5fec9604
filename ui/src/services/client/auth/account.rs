use tracing::{info, instrument};

use crate::services::client::types::UserInfo;
use crate::services::client::{AuthClient, ClientError, ClientResult};

/// Ask the backend who the session cookie belongs to.
///
/// Returns `None` when there is no session: either an error status or the
/// empty DTO the backend sends for anonymous callers.
#[instrument(skip(client), err)]
pub async fn check_login_impl(
    client: &AuthClient,
    check_url: &str,
) -> ClientResult<Option<UserInfo>> {
    let response = client
        .prepare(client.http_client.get(check_url))
        .send()
        .await
        .map_err(|e| ClientError::network("Failed to call check-login endpoint", e))?;

    if !response.status().is_success() {
        info!("No active session (status {})", response.status());
        return Ok(None);
    }

    let user: UserInfo = response.json().await.map_err(|e| ClientError::Decode {
        endpoint: check_url.to_string(),
        message: e.to_string(),
    })?;

    if user.is_anonymous() {
        Ok(None)
    } else {
        info!("Existing session found for user {}", user.id);
        Ok(Some(user))
    }
}
