use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
}

/// Spinner line announced to assistive technology while a request is pending
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        div {
            class: "loading-indicator",
            role: "status",
            "aria-live": "polite",
            span { class: "spinner" }
            "{props.message}"
        }
    }
}
