// Client-side access to the chat backend's authentication API
//
// This module provides:
// - password and verification-code login over multipart forms
// - verification code requests
// - session checks against the JWT cookie
// - CSRF token forwarding for the cookie CSRF repository

pub mod auth;
pub mod auth_client;
pub mod csrf;
pub mod errors;
pub mod traits;
pub mod types;

pub use auth_client::AuthClient;
pub use errors::{ClientError, ClientResult};
pub use traits::AuthApi;
pub use types::{
    LoginPayload, LoginResponse, ResponseStatus, UserInfo, VerificationCodeResponse,
};
