//! Feature grid: the three marketing pillars.

#[cfg(test)]
#[path = "features_test.rs"]
mod features_test;

use leptos::prelude::*;

/// Fixed copy for one feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// The feature cards, in display order.
pub fn feature_list() -> [Feature; 3] {
    [
        Feature {
            icon: "👥",
            title: "Live Collaboration",
            blurb: "Edit together with typing indicators and presence avatars in real-time.",
        },
        Feature {
            icon: "🔀",
            title: "Version History",
            blurb: "Track every change and revert with confidence. Never lose your work again.",
        },
        Feature {
            icon: "⚡",
            title: "Blazing Fast",
            blurb: "Built with cutting-edge WebSockets for instant updates across all devices.",
        },
    ]
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <h2 class="features__title">"Why Teams Love LiveText"</h2>
            <p class="features__subtitle">
                "Everything you need for productive collaboration, all in one place."
            </p>
            <div class="features__grid">
                {feature_list()
                    .into_iter()
                    .map(|feature| view! { <FeatureCard feature=feature/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <span class="feature-card__icon" aria-hidden="true">{feature.icon}</span>
            <h3 class="feature-card__title">{feature.title}</h3>
            <p class="feature-card__blurb">{feature.blurb}</p>
        </div>
    }
}
