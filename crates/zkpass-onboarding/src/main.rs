//! Entry point for the zkPass onboarding demo.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

use zkpass_onboarding::components::App;

const STYLES_CSS: &str = include_str!("../assets/styles.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting zkPass onboarding demo");

    // Optional window geometry overrides (set for tiling multiple instances)
    let win_w = std::env::var("ZKPASS_WIN_W")
        .ok()
        .and_then(|v| v.parse::<f64>().ok());
    let win_h = std::env::var("ZKPASS_WIN_H")
        .ok()
        .and_then(|v| v.parse::<f64>().ok());

    let mut wb = WindowBuilder::new()
        .with_title("zkPass Onboarding Demo")
        .with_maximized(false);

    if let (Some(w), Some(h)) = (win_w, win_h) {
        wb = wb.with_inner_size(LogicalSize::new(w, h));
    } else {
        wb = wb.with_inner_size(LogicalSize::new(900.0, 700.0));
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(zkpass_ui::document_head(STYLES_CSS).to_string()),
        )
        .launch(App);
}
