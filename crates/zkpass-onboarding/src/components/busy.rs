//! Busy indicator shown during delayed transitions.

use dioxus::prelude::*;

#[component]
pub fn BusyIndicator(message: String) -> Element {
    rsx! {
        div {
            class: "demo-card busy-container",

            div { class: "busy-spinner" }
            p {
                class: "busy-text",
                "{message}"
            }
        }
    }
}
