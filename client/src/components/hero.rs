//! Hero section: headline, tagline, and primary calls to action.

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">
                "Collaborate "
                <span class="hero__accent">"Instantly"</span>
                ". Write "
                <span class="hero__accent">"Together"</span>
                "."
            </h1>
            <p class="hero__tagline">
                "LiveText is your real-time text editor for seamless team \
                 writing, coding, and brainstorming. No lag. No limits."
            </p>
            <div class="hero__actions">
                <button class="button button--primary">
                    "Get Started - It's Free"
                </button>
                <button class="button button--ghost">"Watch Demo"</button>
            </div>
        </section>
    }
}
