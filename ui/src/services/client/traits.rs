//! Seams between the login controller and the authentication backend

use async_trait::async_trait;

use super::errors::ClientResult;
use super::types::{LoginPayload, LoginResponse, UserInfo, VerificationCodeResponse};

/// Remote authentication operations used by the login screen.
///
/// WASM-first: futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Log in with email and password
    async fn login_with_password(&self, payload: &LoginPayload) -> ClientResult<LoginResponse>;

    /// Log in with email and a one-time verification code
    async fn login_with_verification_code(
        &self,
        payload: &LoginPayload,
    ) -> ClientResult<LoginResponse>;

    /// Ask the backend to send a verification code to `email`
    async fn request_verification_code(&self, email: &str)
        -> ClientResult<VerificationCodeResponse>;

    /// User owning the current session cookie, if any
    async fn check_login(&self) -> ClientResult<Option<UserInfo>>;
}
