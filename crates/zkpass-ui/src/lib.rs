//! Shared UI layer for the zkPass onboarding demo.
//!
//! Provides the theme system and the design-token stylesheet consumed by the
//! demo app at launch.

use std::sync::OnceLock;

pub mod theme;

pub use theme::{CURRENT_THEME, Theme, ThemedRoot};

/// Shared CSS containing design tokens, theme definitions, role classes, and
/// keyframe animations (fade-in, spin, float, pulse).
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");

static DOCUMENT_HEAD: OnceLock<String> = OnceLock::new();

/// Build the `<style>` head block injected into the window at startup.
///
/// Guarded by a [`OnceLock`] so repeated initialization is a no-op: the first
/// call assembles and caches the block, later calls return the cached value
/// unchanged.
pub fn document_head(app_css: &str) -> &'static str {
    DOCUMENT_HEAD
        .get_or_init(|| format!("<style>{}</style><style>{}</style>", SHARED_CSS, app_css))
}
