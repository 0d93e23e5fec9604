//! Shared UI for the login screen: form state and controller, the
//! authentication client, and the Dioxus components that render them.

pub mod app;
pub use app::{LoginScreen, LoginScreenProps};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;

pub use components::display::{use_current_user, UserBadge};
pub use services::browser::{NavigateHandle, RouterNavigator};
pub use services::user_info::SharedUserInfo;
