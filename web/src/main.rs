use dioxus::prelude::*;
use ui::{LoginScreen, NavigateHandle, RouterNavigator, SharedUserInfo, UserBadge};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Every screen reads the authenticated user from here
    use_context_provider(SharedUserInfo::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/chatrooms")]
    Chatrooms {},
    #[route("/create-account")]
    CreateAccount {},
    #[route("/forget-password")]
    ForgetPassword {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn Login() -> Element {
    let navigator = use_navigator();
    let handle = use_hook(|| NavigateHandle::new(RouterNavigator::<Route>::new(navigator)));

    rsx! {
        LoginScreen { navigator: handle }
    }
}

#[component]
fn Chatrooms() -> Element {
    rsx! {
        div {
            class: "page",
            h1 { "Chatrooms" }
            UserBadge {}
        }
    }
}

#[component]
fn CreateAccount() -> Element {
    rsx! {
        div {
            class: "page",
            h1 { "Create an account" }
            Link { to: Route::Login {}, "Back to login" }
        }
    }
}

#[component]
fn ForgetPassword() -> Element {
    rsx! {
        div {
            class: "page",
            h1 { "Forgot password?" }
            Link { to: Route::Login {}, "Back to login" }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "page",
            h1 { "Page not found" }
            p { "/{path}" }
            Link { to: Route::Login {}, "Back to login" }
        }
    }
}
