use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::features::login::{Credentials, LoginMode};

/// Form field carrying the email address on both login endpoints
pub const USERNAME_FIELD: &str = "username";
/// Form field carrying the secret in password mode
pub const PASSWORD_FIELD: &str = "password";
/// Form field carrying the secret in verification-code mode
pub const VERIFICATION_CODE_FIELD: &str = "verification-code";
/// Form field carrying the stringified remember flag
pub const REMEMBER_ME_FIELD: &str = "remember-me";

/// Status reported by every authentication endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
    #[serde(other)]
    Unknown,
}

/// User profile returned on a successful login.
///
/// Only the fields of the backend's user DTO are named; anything else the
/// server sends is kept in `extra` so the profile can be republished as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UserInfo {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserInfo {
    /// The backend answers `check-login` with an empty DTO (id 0) when no session exists
    pub fn is_anonymous(&self) -> bool {
        self.id == 0
    }

    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self
                .mail
                .clone()
                .or_else(|| {
                    self.extra
                        .get("name")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| format!("user #{}", self.id)),
        }
    }
}

/// Response of the password and verification-code login endpoints
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub status: ResponseStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(rename = "UserInfo", default)]
    pub user_info: Option<UserInfo>,
    /// Sent by the backend next to `status`; decoded so the response can be
    /// re-serialized unchanged, while success is decided by `status` alone
    #[serde(rename = "isAuthenticated", default)]
    pub is_authenticated: Option<bool>,
}

impl LoginResponse {
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    /// User-facing text, preferring `msg` like the failure handler does
    pub fn display_message(&self) -> String {
        self.msg
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "Login failed".to_string())
    }

    /// Create an error login response
    pub fn error(message: &str) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: None,
            msg: Some(message.to_string()),
            user_info: None,
            is_authenticated: Some(false),
        }
    }
}

/// Response of the send-code endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VerificationCodeResponse {
    pub status: ResponseStatus,
    #[serde(default)]
    pub msg: Option<String>,
}

impl VerificationCodeResponse {
    pub fn is_error(&self) -> bool {
        self.status == ResponseStatus::Error
    }
}

/// Multipart body sent to one of the two login endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct LoginPayload {
    pub mode: LoginMode,
    pub username: String,
    pub secret: String,
    pub remember_me: bool,
}

impl LoginPayload {
    pub fn from_credentials(credentials: &Credentials, mode: LoginMode) -> Self {
        Self {
            mode,
            username: credentials.email.clone(),
            secret: credentials.secret.clone(),
            remember_me: credentials.remember_me,
        }
    }

    /// Name of the field holding the secret, which depends on the mode
    pub fn secret_field(&self) -> &'static str {
        match self.mode {
            LoginMode::Password => PASSWORD_FIELD,
            LoginMode::VerificationCode => VERIFICATION_CODE_FIELD,
        }
    }

    /// The three string fields in submission order
    pub fn fields(&self) -> [(&'static str, String); 3] {
        [
            (USERNAME_FIELD, self.username.clone()),
            (self.secret_field(), self.secret.clone()),
            (REMEMBER_ME_FIELD, self.remember_me.to_string()),
        ]
    }

    pub fn to_multipart(&self) -> reqwest::multipart::Form {
        self.fields()
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name, value)
            })
    }
}
