//! Process-wide holder for the authenticated user.
//!
//! The login screen publishes into it; the rest of the application
//! subscribes. It is handed around through Dioxus context rather than living
//! in a global, and starts empty until the first publish.

use std::rc::Rc;

use tokio::sync::watch;
use tracing::info;

use crate::services::client::UserInfo;

#[derive(Clone)]
pub struct SharedUserInfo {
    sender: Rc<watch::Sender<Option<UserInfo>>>,
}

impl SharedUserInfo {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Rc::new(sender),
        }
    }

    /// Replace the current user and wake every subscriber
    pub fn publish(&self, user: UserInfo) {
        info!("Publishing authenticated user {}", user.id);
        // send_replace succeeds even while nobody is subscribed
        self.sender.send_replace(Some(user));
    }

    pub fn current(&self) -> Option<UserInfo> {
        self.sender.borrow().clone()
    }

    /// Receiver that sees the current value and every later publish
    pub fn subscribe(&self) -> watch::Receiver<Option<UserInfo>> {
        self.sender.subscribe()
    }
}

impl Default for SharedUserInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for SharedUserInfo {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.sender, &other.sender)
    }
}
