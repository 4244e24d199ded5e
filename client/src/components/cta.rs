//! Closing call-to-action banner.

use leptos::prelude::*;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <h2 class="cta__title">"Ready to write together?"</h2>
            <p class="cta__subtitle">
                "Start your first document in seconds. No sign-up required."
            </p>
            <button class="button button--inverted">"Get started"</button>
        </section>
    }
}
