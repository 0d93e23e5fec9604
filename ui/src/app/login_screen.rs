use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::forms::{ControllerHandle, LoginForm};
use crate::features::login::{Dispatch, LoginAction, LoginCollaborators, LoginController};
use crate::services::browser::{dioxus_spawner, NavigateHandle, WindowAlert};
use crate::services::client::AuthClient;
use crate::services::config::LoginConfig;
use crate::services::errors::LoginError;
use crate::services::user_info::SharedUserInfo;
use crate::{console_error, console_info, console_warn};

const LOGIN_CSS: Asset = asset!("/assets/styling/login.css");

#[derive(Props, PartialEq, Clone)]
pub struct LoginScreenProps {
    /// Router-backed navigation supplied by the application
    pub navigator: NavigateHandle,
}

fn build_controller(
    navigator: &NavigateHandle,
    user_info: SharedUserInfo,
    dispatch: EventHandler<LoginAction>,
) -> Result<(LoginConfig, ControllerHandle), LoginError> {
    let config = LoginConfig::load()?;
    let client = AuthClient::new(config.api.clone())?;

    let collaborators = LoginCollaborators {
        api: Rc::new(client),
        alerts: Rc::new(WindowAlert),
        navigator: navigator.0.clone(),
        user_info,
        spawner: dioxus_spawner(),
    };
    let dispatch: Dispatch = Rc::new(move |action| dispatch.call(action));
    let controller = LoginController::new(collaborators, dispatch, &config);

    Ok((config, ControllerHandle(Rc::new(controller))))
}

/// Login screen. Expects a `SharedUserInfo` in context.
#[component]
pub fn LoginScreen(props: LoginScreenProps) -> Element {
    let user_info = use_context::<SharedUserInfo>();
    let mut state = use_signal(LoginController::initial_state);

    // In-place reduction keeps the signal identity stable across actions
    let dispatch = EventHandler::new(move |action: LoginAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let setup = use_hook(|| build_controller(&props.navigator, user_info, dispatch));

    let restore = setup.as_ref().ok().map(|(_, controller)| controller.clone());
    use_effect(move || {
        if let Some(controller) = restore.clone() {
            spawn(async move {
                match controller.0.restore_session().await {
                    Ok(true) => console_info!("Existing session restored"),
                    Ok(false) => {}
                    Err(e) => console_warn!("Could not check for an existing session: {}", e),
                }
            });
        }
    });

    let teardown = setup.as_ref().ok().map(|(_, controller)| controller.clone());
    use_drop(move || {
        if let Some(controller) = teardown {
            controller.0.teardown();
        }
    });

    let body = match setup {
        Ok((config, controller)) => rsx! {
            LoginForm {
                state: state,
                dispatch: dispatch,
                controller: controller,
                navigator: props.navigator.clone(),
                links: config.router_links,
            }
        },
        Err(e) => {
            console_error!("Login screen is misconfigured: {}", e);
            rsx! {
                div {
                    class: "login-message error",
                    "{e.user_message()}"
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LOGIN_CSS }

        div {
            class: "login-container",
            {body}
        }
    }
}
