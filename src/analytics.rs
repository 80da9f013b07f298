//! Best-effort analytics emission.
//!
//! One process-wide switch, seeded from configuration at startup and
//! mutable only through [`set_enabled`]. Every emission consults it first.
//! Events are structured tracing records on a dedicated target; a
//! deployment forwards or drops them at the subscriber; nothing here
//! affects content resolution or rendering.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::content::model::Language;

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Seed the switch from configuration. Called once at startup.
pub fn init(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// The single runtime mutation path for the switch.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
    tracing::info!(enabled, "analytics switch changed");
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Emit one named event with a flat key-value payload. Fire-and-forget.
pub fn emit(event: &str, fields: &[(&str, &str)]) {
    if !is_enabled() {
        return;
    }
    tracing::info!(
        target: "deepam::analytics",
        event,
        payload = ?fields,
        "analytics event"
    );
}

pub fn page_view(path: &str, lang: Language) {
    emit("page_view", &[("path", path), ("language", lang.as_str())]);
}

pub fn article_view(id: &str, lang: Language) {
    emit("article_view", &[("article_id", id), ("language", lang.as_str())]);
}

pub fn language_toggle(from: Language, to: Language) {
    emit(
        "language_toggle",
        &[("from", from.as_str()), ("to", to.as_str())],
    );
}
