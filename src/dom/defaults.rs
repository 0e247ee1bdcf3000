use dioxus::prelude::*;

/// Loader attached when no loader template or component is provided.
#[component]
pub fn DefaultLoader() -> Element {
    rsx! {
        span { class: "skeleton", "Loading..." }
    }
}

/// Error view attached when no error template or component is provided.
#[component]
pub fn DefaultError() -> Element {
    rsx! {
        span { class: "bg-error text-error-content rounded-xs", "ERROR" }
    }
}
