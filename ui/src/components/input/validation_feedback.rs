use crate::features::login::{EmailValidation, SecretValidation};
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct EmailValidationFeedbackProps {
    pub validation: EmailValidation,
    pub touched: bool,
}

/// Field errors stay hidden until the user has left the field once
#[component]
pub fn EmailValidationFeedback(props: EmailValidationFeedbackProps) -> Element {
    if !props.touched {
        return rsx! {};
    }

    match props.validation {
        EmailValidation::Empty => rsx! {
            div {
                class: "validation-feedback invalid",
                "⚠ Email is required"
            }
        },
        EmailValidation::Invalid => rsx! {
            div {
                class: "validation-feedback invalid",
                "⚠ Please enter a valid email address"
            }
        },
        EmailValidation::Valid => rsx! {},
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SecretValidationFeedbackProps {
    pub validation: SecretValidation,
    pub touched: bool,
    /// "Password" or "Verification code"
    pub label: &'static str,
}

#[component]
pub fn SecretValidationFeedback(props: SecretValidationFeedbackProps) -> Element {
    match (props.validation, props.touched) {
        (SecretValidation::Empty, true) => rsx! {
            div {
                class: "validation-feedback invalid",
                "⚠ {props.label} is required"
            }
        },
        _ => rsx! {},
    }
}
