use crate::features::login::LoginState;
use crate::utils::validation::is_valid_email;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum EmailValidation {
    Empty,
    Invalid,
    Valid,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SecretValidation {
    Empty,
    Valid,
}

impl LoginState {
    /// Required + email-format rule on the email field
    pub fn validate_email(&self) -> EmailValidation {
        let email = self.credentials.email.as_str();
        if email.is_empty() {
            EmailValidation::Empty
        } else if is_valid_email(email) {
            EmailValidation::Valid
        } else {
            EmailValidation::Invalid
        }
    }

    /// Required rule on the password / verification code field
    pub fn validate_secret(&self) -> SecretValidation {
        if self.credentials.secret.is_empty() {
            SecretValidation::Empty
        } else {
            SecretValidation::Valid
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.validate_email() == EmailValidation::Valid
            && self.validate_secret() == SecretValidation::Valid
    }

    /// Submit stays disabled while the form is invalid or a submission is pending
    pub fn can_submit(&self) -> bool {
        self.is_form_valid() && !self.is_submitting()
    }

    /// Email and secret inputs are locked while a submission is pending
    pub fn inputs_locked(&self) -> bool {
        self.is_submitting()
    }

    /// The send-code button is disabled while the cooldown runs
    pub fn can_request_code(&self) -> bool {
        !self.cooldown_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::login::LoginAction;

    fn state(email: &str, secret: &str) -> LoginState {
        let mut state = LoginState::default();
        state.reduce_in_place(LoginAction::SetEmail(email.to_string()));
        state.reduce_in_place(LoginAction::SetSecret(secret.to_string()));
        state
    }

    #[test]
    fn test_submit_blocked_without_at_sign() {
        let state = state("user.example.com", "secret");
        assert_eq!(state.validate_email(), EmailValidation::Invalid);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_submit_blocked_with_empty_secret() {
        let state = state("user@example.com", "");
        assert_eq!(state.validate_secret(), SecretValidation::Empty);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_submit_allowed_when_valid() {
        let state = state("user@example.com", "code123");
        assert!(state.can_submit());
    }

    #[test]
    fn test_submit_blocked_while_pending() {
        let mut state = state("user@example.com", "code123");
        state.reduce_in_place(LoginAction::BeginSubmission { generation: 1 });
        assert!(state.is_form_valid());
        assert!(!state.can_submit());
    }

    #[test]
    fn test_inputs_locked_until_submission_finishes() {
        let mut state = state("user@example.com", "code123");
        assert!(!state.inputs_locked());

        state.reduce_in_place(LoginAction::BeginSubmission { generation: 1 });
        assert!(state.inputs_locked());

        state.reduce_in_place(LoginAction::FinishSubmission {
            generation: 1,
            message: Some("bad credentials".to_string()),
        });
        assert!(!state.inputs_locked());
    }

    #[test]
    fn test_empty_email() {
        assert_eq!(state("", "x").validate_email(), EmailValidation::Empty);
    }

    #[test]
    fn test_code_request_blocked_during_cooldown() {
        let mut state = LoginState::default();
        assert!(state.can_request_code());
        state.reduce_in_place(LoginAction::StartCooldown(60));
        assert!(!state.can_request_code());
    }
}
