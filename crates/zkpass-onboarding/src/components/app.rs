//! Root application component and sequencer operations.

use dioxus::prelude::*;
use tokio::time::sleep;
use zkpass_ui::ThemedRoot;

use crate::catalog::{Action, Transition};
use crate::state::OnboardingState;

use super::busy::BusyIndicator;
use super::step_card::StepCard;

/// Run one action descriptor against the sequencer state.
///
/// Delayed actions enter the busy phase synchronously and schedule the step
/// change after the descriptor's delay; the ticket check makes the completion
/// a no-op if a reset or newer transition happened while the timer ran.
pub fn advance(mut state: Signal<OnboardingState>, action: &'static Action) {
    match action.transition {
        Transition::Immediate => {
            tracing::info!(target_step = action.target.name(), "immediate transition");
            state.write().go_direct(action.target);
        }
        Transition::Delayed {
            delay,
            busy_message,
        } => {
            let ticket = state.write().begin_transition(busy_message);
            tracing::info!(
                target_step = action.target.name(),
                delay_ms = delay.as_millis() as u64,
                "delayed transition scheduled"
            );
            spawn(async move {
                sleep(delay).await;
                if state.write().finish_transition(ticket, action.target) {
                    tracing::info!(step = action.target.name(), "transition complete");
                } else {
                    tracing::debug!(
                        step = action.target.name(),
                        "stale transition ignored"
                    );
                }
            });
        }
    }
}

/// Return to the welcome screen, cancelling any pending transition.
pub fn restart(mut state: Signal<OnboardingState>) {
    tracing::info!("demo restarted");
    state.write().reset();
}

/// Root application component.
#[component]
pub fn App() -> Element {
    // Set theme inside the component where the Dioxus runtime is available
    use_hook(|| {
        *zkpass_ui::CURRENT_THEME.write() = zkpass_ui::Theme::Midnight;
    });

    let state = use_signal(OnboardingState::new);

    let busy = state.read().busy;
    let busy_message = state.read().busy_message.clone();
    let step = state.read().step;

    rsx! {
        ThemedRoot {
            div {
                class: "onboarding-shell",

                if busy {
                    BusyIndicator { message: busy_message }
                } else {
                    StepCard { state, step }
                }

                if step.shows_restart() {
                    button {
                        class: "restart-link",
                        onclick: move |_| restart(state),
                        "Restart Demo"
                    }
                }
            }
        }
    }
}
