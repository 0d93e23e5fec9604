use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::components::input::{
    EmailValidationFeedback, InputType, SecretValidationFeedback, ValidatedInput,
};
use crate::features::login::{
    CodeRequestOutcome, LoginAction, LoginController, LoginMode, LoginOutcome, LoginState,
};
use crate::services::browser::NavigateHandle;
use crate::services::config::RouterLinks;
use crate::utils::validation::{email_validation_class, secret_validation_class};
use crate::{console_error, console_info, console_warn};

/// Controller shared between the screen and its form
#[derive(Clone)]
pub struct ControllerHandle(pub Rc<LoginController>);

impl PartialEq for ControllerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormProps {
    pub state: Signal<LoginState>,
    pub dispatch: EventHandler<LoginAction>,
    pub controller: ControllerHandle,
    pub navigator: NavigateHandle,
    pub links: RouterLinks,
}

#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let current = state();
    let mode = current.mode;

    let submit_controller = props.controller.clone();
    let code_controller = props.controller.clone();
    let toggle_controller = props.controller.clone();
    let reset_controller = props.controller.clone();

    let secret_input_type = match mode {
        LoginMode::Password => InputType::Password,
        LoginMode::VerificationCode => InputType::Text,
    };
    let secret_placeholder = match mode {
        LoginMode::Password => "Enter your password",
        LoginMode::VerificationCode => "Enter the code sent to your email",
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit: move |event| {
                event.prevent_default();
                let snapshot = state();
                if !snapshot.can_submit() {
                    dispatch.call(LoginAction::TouchEmail);
                    dispatch.call(LoginAction::TouchSecret);
                    return;
                }

                let controller = submit_controller.clone();
                spawn(async move {
                    match controller.0.submit(&snapshot).await {
                        Ok(LoginOutcome::Authenticated(user)) => {
                            console_info!("Logged in as {}", user.display_name());
                        }
                        Ok(LoginOutcome::Rejected(message)) => {
                            console_warn!("Login rejected: {}", message);
                        }
                        Ok(LoginOutcome::Superseded) => {}
                        Err(e) => {
                            console_error!("Login failed: {}", e);
                        }
                    }
                });
            },

            h2 {
                class: "form-title",
                "Log in"
            }

            // Email
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "username",
                    "Email"
                }
                ValidatedInput {
                    name: "username",
                    value: current.credentials.email.clone(),
                    placeholder: "you@example.com".to_string(),
                    input_type: InputType::Email,
                    input_class: email_validation_class(&current.validate_email(), current.touched.email).to_string(),
                    disabled: current.inputs_locked(),
                    on_change: move |email: String| dispatch.call(LoginAction::SetEmail(email)),
                    on_blur: move |_| dispatch.call(LoginAction::TouchEmail),
                }
                EmailValidationFeedback {
                    validation: current.validate_email(),
                    touched: current.touched.email,
                }
            }

            // Password or verification code
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "secret",
                    "{mode.secret_label()}"
                }
                div {
                    class: "secret-row",
                    ValidatedInput {
                        name: "secret",
                        value: current.credentials.secret.clone(),
                        placeholder: secret_placeholder.to_string(),
                        input_type: secret_input_type,
                        input_class: secret_validation_class(&current.validate_secret(), current.touched.secret).to_string(),
                        disabled: current.inputs_locked(),
                        on_change: move |secret: String| dispatch.call(LoginAction::SetSecret(secret)),
                        on_blur: move |_| dispatch.call(LoginAction::TouchSecret),
                    }
                    if mode == LoginMode::VerificationCode {
                        button {
                            class: "send-code-button",
                            r#type: "button",
                            disabled: !current.can_request_code(),
                            onclick: move |_| {
                                let email = state().credentials.email;
                                let controller = code_controller.clone();
                                spawn(async move {
                                    match controller.0.request_verification_code(&email).await {
                                        Ok(CodeRequestOutcome::Sent) => {
                                            console_info!("Verification code requested for {}", email);
                                        }
                                        Ok(CodeRequestOutcome::Refused(message)) => {
                                            console_warn!("Verification code refused: {}", message);
                                        }
                                        Ok(CodeRequestOutcome::MissingEmail) => {}
                                        Err(e) => {
                                            console_error!("Verification code request failed: {}", e);
                                        }
                                    }
                                });
                            },
                            if current.cooldown_active() {
                                "Resend in {current.cooldown}s"
                            } else {
                                "Send code"
                            }
                        }
                    }
                }
                SecretValidationFeedback {
                    validation: current.validate_secret(),
                    touched: current.touched.secret,
                    label: mode.secret_label(),
                }
            }

            div {
                class: "remember-section",
                label {
                    class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        name: "remember-me",
                        checked: current.credentials.remember_me,
                        onchange: move |event| dispatch.call(LoginAction::SetRememberMe(event.checked())),
                    }
                    "Remember me"
                }
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| toggle_controller.0.toggle_mode(),
                    "{mode.switch_label()}"
                }
            }

            div {
                class: "button-section",
                button {
                    class: "login-button",
                    r#type: "submit",
                    disabled: !current.can_submit(),
                    if current.is_submitting() {
                        "Logging in..."
                    } else {
                        "Log in"
                    }
                }
                button {
                    class: "secondary-button",
                    r#type: "button",
                    onclick: move |_| reset_controller.0.reset(),
                    "Clear"
                }
            }

            if current.is_submitting() {
                LoadingIndicator {
                    message: "Checking your credentials...".to_string()
                }
            }

            {current.submission.message.clone().map(|message| rsx! {
                div {
                    class: "login-message error",
                    "{message}"
                }
            })}

            // Secondary destinations; the first entry is where a login lands
            div {
                class: "login-links",
                {props.links.iter().skip(1).cloned().map(|link| {
                    let navigator = props.navigator.clone();
                    let path = link.path.clone();
                    rsx! {
                        a {
                            key: "{link.path}",
                            href: "{link.path}",
                            onclick: move |event: MouseEvent| {
                                event.prevent_default();
                                navigator.0.navigate_to(&path);
                            },
                            "{link.label}"
                        }
                    }
                })}
            }
        }
    }
}
