//! Top navigation bar with the brand mark and the dark-mode toggle.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::dark_mode;

/// Navigation bar. The toggle flips the shared theme state, updates the
/// document attribute, and persists the new preference.
#[component]
pub fn NavBar() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    let on_toggle = move |_| {
        let next = theme.get_untracked().toggled();
        dark_mode::apply(next.dark_mode);
        dark_mode::persist(next.dark_mode);
        theme.set(next);
    };

    view! {
        <nav class="navbar">
            <div class="navbar__brand">
                <span class="navbar__logo" aria-hidden="true">"⚡"</span>
                <span class="navbar__wordmark">"LiveText"</span>
            </div>
            <button
                class="navbar__theme-toggle"
                on:click=on_toggle
                aria-label="Toggle dark mode"
            >
                {move || toggle_glyph(theme.get().dark_mode)}
            </button>
        </nav>
    }
}

/// Sun while dark (clicking returns to light), moon while light.
fn toggle_glyph(dark_mode: bool) -> &'static str {
    if dark_mode { "☀" } else { "☾" }
}
