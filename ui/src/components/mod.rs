//! User Interface Components
//!
//! Reusable Dioxus components for the login screen:
//!
//! - **forms**: The login form itself
//! - **display**: Loading indicator and the current-user badge
//! - **input**: Validated input fields and their feedback lines

pub mod display;
pub mod forms;
pub mod input;
