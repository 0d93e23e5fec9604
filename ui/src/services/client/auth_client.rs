use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};

use super::auth::{check_login_impl, login_impl, request_verification_code_impl};
use super::csrf::{current_xsrf_token, XSRF_HEADER_NAME};
use super::errors::{ClientError, ClientResult};
use super::traits::AuthApi;
use super::types::*;
use crate::services::config::ApiConfig;

/// HTTP client for the chat backend's login endpoints
#[derive(Clone)]
pub struct AuthClient {
    pub(crate) http_client: Client,
    api: ApiConfig,
    fixed_xsrf_token: Option<String>,
}

impl AuthClient {
    /// Create a new auth client for the given API configuration
    pub fn new(api: ApiConfig) -> ClientResult<Self> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| ClientError::network("Failed to create HTTP client", e))?;

        // Fail early on a base URL the endpoints cannot be joined to
        Self::join(&api.base_url, &api.login_path)?;

        Ok(Self {
            http_client,
            api,
            fixed_xsrf_token: None,
        })
    }

    /// Always send this CSRF token instead of reading it from the document cookies
    pub fn with_xsrf_token(mut self, token: impl Into<String>) -> Self {
        self.fixed_xsrf_token = Some(token.into());
        self
    }

    /// Absolute URL for one of the configured endpoint paths
    pub fn endpoint(&self, path: &str) -> ClientResult<String> {
        Self::join(&self.api.base_url, path)
    }

    fn join(base_url: &str, path: &str) -> ClientResult<String> {
        let url = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&url).map_err(|e| ClientError::InvalidUrl {
            url: url.clone(),
            message: e.to_string(),
        })?;
        Ok(url)
    }

    /// Attach browser credentials and the CSRF header to a request
    pub(crate) fn prepare(&self, request: RequestBuilder) -> RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        match self.fixed_xsrf_token.clone().or_else(current_xsrf_token) {
            Some(token) => request.header(XSRF_HEADER_NAME, token),
            None => request,
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for AuthClient {
    async fn login_with_password(&self, payload: &LoginPayload) -> ClientResult<LoginResponse> {
        let url = self.endpoint(&self.api.login_path)?;
        login_impl(self, &url, payload).await
    }

    async fn login_with_verification_code(
        &self,
        payload: &LoginPayload,
    ) -> ClientResult<LoginResponse> {
        let url = self.endpoint(&self.api.code_login_path)?;
        login_impl(self, &url, payload).await
    }

    async fn request_verification_code(
        &self,
        email: &str,
    ) -> ClientResult<VerificationCodeResponse> {
        let url = self.endpoint(&self.api.verification_code_path)?;
        request_verification_code_impl(self, &url, email).await
    }

    async fn check_login(&self) -> ClientResult<Option<UserInfo>> {
        let url = self.endpoint(&self.api.check_login_path)?;
        check_login_impl(self, &url).await
    }
}
