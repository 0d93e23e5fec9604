use crate::features::login::{EmailValidation, SecretValidation};

/// Email-format rule shared by every form that takes an address.
///
/// Basic email validation: exactly one @, a non-empty local part and a
/// domain containing at least one dot.
pub fn is_valid_email(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local_part = parts[0];
    let domain_part = parts[1];

    !local_part.is_empty() && domain_part.contains('.') && domain_part.len() > 2
}

pub fn email_validation_class(validation: &EmailValidation, touched: bool) -> &'static str {
    match (validation, touched) {
        (EmailValidation::Valid, true) => "input-field input-valid",
        (EmailValidation::Invalid | EmailValidation::Empty, true) => "input-field input-invalid",
        _ => "input-field",
    }
}

pub fn secret_validation_class(validation: &SecretValidation, touched: bool) -> &'static str {
    match (validation, touched) {
        (SecretValidation::Valid, true) => "input-field input-valid",
        (SecretValidation::Empty, true) => "input-field input-invalid",
        _ => "input-field",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("user.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("user@.c"));
    }

    #[test]
    fn test_classes_only_flag_touched_fields() {
        assert_eq!(
            email_validation_class(&EmailValidation::Invalid, false),
            "input-field"
        );
        assert_eq!(
            email_validation_class(&EmailValidation::Invalid, true),
            "input-field input-invalid"
        );
        assert_eq!(
            secret_validation_class(&SecretValidation::Valid, true),
            "input-field input-valid"
        );
    }
}
