//! Login form controller.
//!
//! Mediates between the form state, client-side validation and the remote
//! authentication API. State changes go through `dispatch` so the view's
//! signal stays the single source of truth; the controller only keeps the
//! countdown guard and the submission generation counter.
//!
//! Submissions are last-write-wins: each one takes a fresh generation, and
//! a response only updates the form, publishes the user or navigates when
//! its generation is still the current one. Reset, mode toggle and teardown
//! advance the generation, so anything still in flight is ignored.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{error, info, instrument, warn};

use super::countdown::{countdown, CountdownGuard};
use super::types::{LoginAction, LoginMode, LoginState};
use crate::services::browser::{Alert, Navigate, Spawner};
use crate::services::client::{AuthApi, LoginPayload, UserInfo};
use crate::services::config::{LoginConfig, RouterLinks};
use crate::services::errors::LoginError;
use crate::services::user_info::SharedUserInfo;

/// Alert shown when a code is requested before an email was typed
pub const MISSING_EMAIL_PROMPT: &str =
    "Please enter your email address to receive the verification code.";

const MISSING_USER_INFO: &str = "Login succeeded but no user information was returned";
const CODE_REFUSED: &str = "The verification code could not be sent";

pub type Dispatch = Rc<dyn Fn(LoginAction)>;

/// External services the controller talks to
pub struct LoginCollaborators {
    pub api: Rc<dyn AuthApi>,
    pub alerts: Rc<dyn Alert>,
    pub navigator: Rc<dyn Navigate>,
    pub user_info: SharedUserInfo,
    pub spawner: Spawner,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CodeRequestOutcome {
    /// No email typed; the prompt was alerted and nothing was sent
    MissingEmail,
    Sent,
    /// Backend answered with an error status; its message was alerted
    Refused(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated(UserInfo),
    Rejected(String),
    /// A newer submission, a reset or a teardown replaced this one
    Superseded,
}

pub struct LoginController {
    api: Rc<dyn AuthApi>,
    alerts: Rc<dyn Alert>,
    navigator: Rc<dyn Navigate>,
    user_info: SharedUserInfo,
    spawner: Spawner,
    dispatch: Dispatch,
    cooldown_secs: u32,
    router_links: RouterLinks,
    countdown: RefCell<Option<CountdownGuard>>,
    generation: Cell<u64>,
}

impl LoginController {
    pub fn new(collaborators: LoginCollaborators, dispatch: Dispatch, config: &LoginConfig) -> Self {
        Self {
            api: collaborators.api,
            alerts: collaborators.alerts,
            navigator: collaborators.navigator,
            user_info: collaborators.user_info,
            spawner: collaborators.spawner,
            dispatch,
            cooldown_secs: config.cooldown_secs,
            router_links: config.router_links.clone(),
            countdown: RefCell::new(None),
            generation: Cell::new(0),
        }
    }

    /// Fresh form: empty email and secret, remember unchecked, password mode
    pub fn initial_state() -> LoginState {
        LoginState::default()
    }

    /// Switch between password and verification-code login, then reset
    pub fn toggle_mode(&self) {
        self.cancel_countdown();
        self.supersede();
        (self.dispatch)(LoginAction::ToggleMode);
    }

    /// Clear the form, the cooldown and any pending outcome
    pub fn reset(&self) {
        self.cancel_countdown();
        self.supersede();
        (self.dispatch)(LoginAction::Reset);
    }

    /// Stop background work when the screen goes away
    pub fn teardown(&self) {
        self.cancel_countdown();
        self.supersede();
    }

    pub fn countdown_running(&self) -> bool {
        self.countdown
            .borrow()
            .as_ref()
            .is_some_and(|guard| !guard.is_cancelled())
    }

    /// Request a one-time login code for `email`.
    ///
    /// Only presence of the email is checked here. The cooldown restarts
    /// before the request is sent and keeps running whatever the answer.
    #[instrument(skip(self), err)]
    pub async fn request_verification_code(
        &self,
        email: &str,
    ) -> Result<CodeRequestOutcome, LoginError> {
        if email.is_empty() {
            self.alerts.alert(MISSING_EMAIL_PROMPT);
            return Ok(CodeRequestOutcome::MissingEmail);
        }

        self.start_cooldown();

        match self.api.request_verification_code(email).await {
            Ok(response) if response.is_error() => {
                let message = response.msg.unwrap_or_else(|| CODE_REFUSED.to_string());
                self.alerts.alert(&message);
                Ok(CodeRequestOutcome::Refused(message))
            }
            Ok(_) => {
                info!("Verification code sent to {}", email);
                Ok(CodeRequestOutcome::Sent)
            }
            Err(e) => {
                error!("Verification code request failed: {}", e);
                self.alerts
                    .alert(&format!("Failed to request a verification code: {}", e));
                Err(e.into())
            }
        }
    }

    /// Submit the form with the endpoint matching the current mode
    #[instrument(skip(self, state), fields(mode = ?state.mode))]
    pub async fn submit(&self, state: &LoginState) -> Result<LoginOutcome, LoginError> {
        info!("Login form submitted: {:?}", state.credentials);

        if !state.is_form_valid() {
            warn!("Login form submitted while invalid; nothing sent");
            return Err(LoginError::InvalidForm);
        }

        let payload = LoginPayload::from_credentials(&state.credentials, state.mode);
        let generation = self.next_generation();
        (self.dispatch)(LoginAction::BeginSubmission { generation });

        let result = match state.mode {
            LoginMode::Password => self.api.login_with_password(&payload).await,
            LoginMode::VerificationCode => self.api.login_with_verification_code(&payload).await,
        };

        if generation != self.generation.get() {
            info!("Submission {} was superseded; ignoring its result", generation);
            return Ok(LoginOutcome::Superseded);
        }

        match result {
            Ok(response) if response.is_success() => match response.user_info {
                Some(user) => {
                    info!(
                        "{}",
                        response.message.as_deref().unwrap_or("Login successful")
                    );
                    self.complete_login(user.clone());
                    self.finish(generation, None);
                    Ok(LoginOutcome::Authenticated(user))
                }
                None => {
                    error!("{}", MISSING_USER_INFO);
                    self.finish(generation, Some(MISSING_USER_INFO.to_string()));
                    Ok(LoginOutcome::Rejected(MISSING_USER_INFO.to_string()))
                }
            },
            Ok(response) => {
                let message = response.display_message();
                self.finish(generation, Some(message.clone()));
                Ok(LoginOutcome::Rejected(message))
            }
            Err(e) => {
                let error = LoginError::from(e);
                self.finish(generation, Some(error.user_message()));
                Err(error)
            }
        }
    }

    /// Skip the form when the session cookie still identifies a user.
    ///
    /// Returns whether the user was published and navigation happened.
    #[instrument(skip(self), err)]
    pub async fn restore_session(&self) -> Result<bool, LoginError> {
        let generation = self.generation.get();
        let user = self.api.check_login().await?;

        match user {
            Some(user) if generation == self.generation.get() => {
                info!("Restoring session for user {}", user.id);
                self.complete_login(user);
                Ok(true)
            }
            Some(_) => {
                info!("Session check finished after the form was used; ignoring it");
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn complete_login(&self, user: UserInfo) {
        self.user_info.publish(user);
        self.navigator
            .navigate_to(&self.router_links.post_login().path);
    }

    fn finish(&self, generation: u64, message: Option<String>) {
        (self.dispatch)(LoginAction::FinishSubmission { generation, message });
    }

    fn start_cooldown(&self) {
        self.cancel_countdown();

        let seconds = self.cooldown_secs;
        (self.dispatch)(LoginAction::StartCooldown(seconds));

        let dispatch = self.dispatch.clone();
        let (task, guard) = countdown(seconds, move |_| dispatch(LoginAction::TickCooldown));
        (self.spawner)(task);
        *self.countdown.borrow_mut() = Some(guard);
    }

    fn cancel_countdown(&self) {
        if let Some(guard) = self.countdown.borrow_mut().take() {
            guard.cancel();
        }
    }

    fn next_generation(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    fn supersede(&self) {
        self.next_generation();
    }
}
