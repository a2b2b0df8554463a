//! Generic step card rendered from the static catalog.

use dioxus::prelude::*;

use crate::state::{OnboardingState, OnboardingStep};

use super::app::advance;

#[component]
pub fn StepCard(state: Signal<OnboardingState>, step: OnboardingStep) -> Element {
    let def = step.definition();

    rsx! {
        div {
            class: "demo-card",

            if let Some(icon) = &def.icon {
                div {
                    class: "demo-icon-wrapper",
                    svg {
                        width: "{icon.size}",
                        height: "{icon.size}",
                        view_box: "0 0 24 24",
                        fill: "none",
                        path {
                            d: "{icon.path}",
                            fill: "var(--primary-color)",
                        }
                    }
                }
            }

            if step == OnboardingStep::Welcome {
                h1 { class: "demo-title demo-title-brand", "{def.title}" }
            } else {
                h2 { class: "demo-title", "{def.title}" }
            }

            p {
                class: "demo-description",
                "{def.body}"
            }

            if def.show_balance {
                div {
                    class: "balance-panel",
                    p { class: "balance-label", "Your Balance" }
                    p { class: "balance-value", "0.5 ETH" }
                }
            }

            for action in def.actions {
                button {
                    class: action.style.class_name(),
                    onclick: move |_| advance(state, action),
                    "{action.label}"
                }
            }
        }
    }
}
