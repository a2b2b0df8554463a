//! UI components for the onboarding flow.

mod app;
mod busy;
mod step_card;

pub use app::{App, advance, restart};
pub use busy::BusyIndicator;
pub use step_card::StepCard;
