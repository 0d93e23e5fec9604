// Core types for the login screen - no dioxus imports needed here
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which secret the user supplies alongside the email
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum LoginMode {
    #[default]
    Password,
    VerificationCode,
}

impl LoginMode {
    pub fn toggled(self) -> Self {
        match self {
            LoginMode::Password => LoginMode::VerificationCode,
            LoginMode::VerificationCode => LoginMode::Password,
        }
    }

    pub fn secret_label(self) -> &'static str {
        match self {
            LoginMode::Password => "Password",
            LoginMode::VerificationCode => "Verification code",
        }
    }

    /// Label of the link switching to the other mode
    pub fn switch_label(self) -> &'static str {
        match self {
            LoginMode::Password => "Log in with a verification code",
            LoginMode::VerificationCode => "Log in with a password",
        }
    }
}

/// Transient form values
#[derive(Clone, PartialEq, Default)]
pub struct Credentials {
    pub email: String,
    pub secret: String,
    pub remember_me: bool,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("secret", &if self.secret.is_empty() { "" } else { "<redacted>" })
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// Fields the user has interacted with since the last reset
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct TouchedFields {
    pub email: bool,
    pub secret: bool,
}

/// Result slot of the latest submission
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SubmissionState {
    /// Generation of the submission whose result is awaited; 0 when none
    pub generation: u64,
    pub pending: bool,
    /// User-facing message of the latest finished submission
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginState {
    pub mode: LoginMode,
    pub credentials: Credentials,
    pub touched: TouchedFields,
    /// Seconds left before another verification code may be requested
    pub cooldown: u32,
    pub submission: SubmissionState,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum LoginAction {
    SetEmail(String),
    SetSecret(String),
    SetRememberMe(bool),
    TouchEmail,
    TouchSecret,

    ToggleMode,
    Reset,

    StartCooldown(u32),
    TickCooldown,

    BeginSubmission { generation: u64 },
    FinishSubmission { generation: u64, message: Option<String> },
}

impl LoginState {
    /// Apply an action in place so Dioxus signals keep their identity
    pub fn reduce_in_place(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetEmail(email) => {
                self.credentials.email = email;
            }
            LoginAction::SetSecret(secret) => {
                self.credentials.secret = secret;
            }
            LoginAction::SetRememberMe(remember) => {
                self.credentials.remember_me = remember;
            }
            LoginAction::TouchEmail => {
                self.touched.email = true;
            }
            LoginAction::TouchSecret => {
                self.touched.secret = true;
            }

            LoginAction::ToggleMode => {
                self.mode = self.mode.toggled();
                self.reset();
            }
            LoginAction::Reset => {
                self.reset();
            }

            LoginAction::StartCooldown(seconds) => {
                self.cooldown = seconds;
            }
            LoginAction::TickCooldown => {
                self.cooldown = self.cooldown.saturating_sub(1);
            }

            LoginAction::BeginSubmission { generation } => {
                self.submission = SubmissionState {
                    generation,
                    pending: true,
                    message: None,
                };
            }
            LoginAction::FinishSubmission { generation, message } => {
                if generation != self.submission.generation {
                    debug!(
                        "Dropping result of superseded submission {} (current {})",
                        generation, self.submission.generation
                    );
                    return;
                }
                self.submission.pending = false;
                self.submission.message = message;
            }
        }
    }

    /// Clear values, touched state, cooldown and outcome; the mode is kept
    fn reset(&mut self) {
        self.credentials = Credentials::default();
        self.touched = TouchedFields::default();
        self.cooldown = 0;
        self.submission = SubmissionState::default();
    }

    pub fn cooldown_active(&self) -> bool {
        self.cooldown > 0
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> LoginState {
        let mut state = LoginState::default();
        for action in [
            LoginAction::SetEmail("user@example.com".to_string()),
            LoginAction::SetSecret("secret".to_string()),
            LoginAction::SetRememberMe(true),
            LoginAction::TouchEmail,
            LoginAction::TouchSecret,
            LoginAction::StartCooldown(42),
            LoginAction::BeginSubmission { generation: 3 },
            LoginAction::FinishSubmission {
                generation: 3,
                message: Some("bad credentials".to_string()),
            },
        ] {
            state.reduce_in_place(action);
        }
        state
    }

    #[test]
    fn test_toggle_mode_clears_everything() {
        for mode in [LoginMode::Password, LoginMode::VerificationCode] {
            let mut state = filled_state();
            state.mode = mode;

            state.reduce_in_place(LoginAction::ToggleMode);

            assert_eq!(state.mode, mode.toggled());
            assert_eq!(state.credentials, Credentials::default());
            assert_eq!(state.touched, TouchedFields::default());
            assert_eq!(state.cooldown, 0);
            assert_eq!(state.submission, SubmissionState::default());
        }
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut state = filled_state();
        state.mode = LoginMode::VerificationCode;

        state.reduce_in_place(LoginAction::Reset);

        assert_eq!(state.mode, LoginMode::VerificationCode);
        assert_eq!(state.credentials.email, "");
        assert!(!state.credentials.remember_me);
        assert!(!state.cooldown_active());
    }

    #[test]
    fn test_cooldown_never_goes_negative() {
        let mut state = LoginState::default();
        state.reduce_in_place(LoginAction::StartCooldown(2));
        for _ in 0..5 {
            state.reduce_in_place(LoginAction::TickCooldown);
        }
        assert_eq!(state.cooldown, 0);
    }

    #[test]
    fn test_superseded_submission_result_is_ignored() {
        let mut state = LoginState::default();
        state.reduce_in_place(LoginAction::BeginSubmission { generation: 1 });
        state.reduce_in_place(LoginAction::BeginSubmission { generation: 2 });

        state.reduce_in_place(LoginAction::FinishSubmission {
            generation: 1,
            message: Some("stale".to_string()),
        });
        assert!(state.is_submitting());
        assert_eq!(state.submission.message, None);

        state.reduce_in_place(LoginAction::FinishSubmission {
            generation: 2,
            message: Some("fresh".to_string()),
        });
        assert!(!state.is_submitting());
        assert_eq!(state.submission.message.as_deref(), Some("fresh"));
    }

    #[test]
    fn test_result_after_reset_is_ignored() {
        let mut state = LoginState::default();
        state.reduce_in_place(LoginAction::BeginSubmission { generation: 5 });
        state.reduce_in_place(LoginAction::Reset);

        state.reduce_in_place(LoginAction::FinishSubmission {
            generation: 5,
            message: Some("late".to_string()),
        });
        assert_eq!(state.submission, SubmissionState::default());
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let credentials = Credentials {
            email: "user@example.com".to_string(),
            secret: "hunter2".to_string(),
            remember_me: false,
        };
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("user@example.com"));
        assert!(!rendered.contains("hunter2"));
    }
}
