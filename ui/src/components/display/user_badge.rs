use dioxus::prelude::*;

use crate::services::client::UserInfo;
use crate::services::user_info::SharedUserInfo;

/// Current user from the shared holder, refreshed on every publish.
///
/// Requires a `SharedUserInfo` in context.
pub fn use_current_user() -> Signal<Option<UserInfo>> {
    let shared = use_context::<SharedUserInfo>();
    let mut user = use_signal(|| shared.current());

    use_future(move || {
        let mut updates = shared.subscribe();
        async move {
            while updates.changed().await.is_ok() {
                let latest = updates.borrow_and_update().clone();
                user.set(latest);
            }
        }
    });

    user
}

#[component]
pub fn UserBadge() -> Element {
    let user = use_current_user();

    match user() {
        Some(user) => rsx! {
            div {
                class: "user-badge",
                span { class: "user-name", "{user.display_name()}" }
                {user.mail.clone().map(|mail| rsx! {
                    span { class: "user-mail", "{mail}" }
                })}
            }
        },
        None => rsx! {
            div {
                class: "user-badge anonymous",
                "Not logged in"
            }
        },
    }
}
