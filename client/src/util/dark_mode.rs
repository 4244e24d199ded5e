//! Dark mode sources, application, and persistence.
//!
//! Reads the user's preference from `localStorage` and the system
//! color-scheme media query, applies a `data-theme` attribute to the
//! `<html>` element, and writes toggles back to `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR and
//! native paths safely no-op so server rendering stays deterministic and
//! the page degrades silently to the light default.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage;

const STORAGE_KEY: &str = "livetext_dark";

/// Read the stored override from localStorage.
///
/// Returns `None` when no preference has ever been saved (or the store is
/// unavailable), which callers treat as "follow the system".
pub fn stored_preference() -> Option<bool> {
    storage::load_json::<bool>(STORAGE_KEY)
}

/// Read the ambient system signal: does the platform prefer dark?
pub fn ambient_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark_mode: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if dark_mode { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark_mode;
    }
}

/// Persist a freshly toggled preference to localStorage.
pub fn persist(dark_mode: bool) {
    storage::save_json(STORAGE_KEY, &dark_mode);
}
