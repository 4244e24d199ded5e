//! Landing page for LiveText.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page resolves the theme preference exactly once on mount and holds
//! back all content until that read completes, so the first visible frame
//! never flashes the wrong theme. Everything below the gate is static
//! marketing copy composed from `components`.

use leptos::prelude::*;

use crate::components::cta::CallToAction;
use crate::components::features::Features;
use crate::components::footer::PageFooter;
use crate::components::hero::Hero;
use crate::components::live_preview::LivePreview;
use crate::components::navbar::NavBar;
use crate::components::testimonials::Testimonials;
use crate::state::theme::ThemeState;
use crate::util::dark_mode;

/// Landing page. Resolves the theme preference, then renders the
/// marketing sections.
#[component]
pub fn HomePage() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    // One-shot resolution: stored override first, ambient signal second.
    // Re-runs after `set` observe the resolved state and bail.
    Effect::new(move || {
        if theme.get().is_resolved() {
            return;
        }
        let next = ThemeState::resolve(
            dark_mode::stored_preference(),
            dark_mode::ambient_preference(),
        );
        dark_mode::apply(next.dark_mode);
        theme.set(next);
    });

    view! {
        <Show when=move || theme.get().is_resolved()>
            <div class="landing">
                <NavBar/>
                <main>
                    <Hero/>
                    <LivePreview/>
                    <Features/>
                    <Testimonials/>
                    <CallToAction/>
                </main>
                <PageFooter/>
            </div>
        </Show>
    }
}
