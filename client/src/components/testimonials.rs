//! Testimonial cards with quote, name, and role.

#[cfg(test)]
#[path = "testimonials_test.rs"]
mod testimonials_test;

use leptos::prelude::*;

/// Fixed copy for one testimonial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

/// The testimonials, in display order.
pub fn testimonial_list() -> [Testimonial; 2] {
    [
        Testimonial {
            name: "Jane Doe",
            role: "Software Engineer",
            quote: "LiveText has transformed how our remote team collaborates on \
                    documentation. The real-time editing is flawless!",
        },
        Testimonial {
            name: "John Smith",
            role: "Product Manager",
            quote: "The version history feature saved us countless hours when we \
                    needed to revert to an earlier draft. Incredible tool!",
        },
    ]
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <h2 class="testimonials__title">"What Our Users Say"</h2>
            <div class="testimonials__grid">
                {testimonial_list()
                    .into_iter()
                    .map(|testimonial| view! { <TestimonialCard testimonial=testimonial/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="testimonial-card">
            <div class="testimonial-card__header">
                <span class="testimonial-card__badge" aria-hidden="true">
                    {initials(testimonial.name)}
                </span>
                <div>
                    <h4 class="testimonial-card__name">{testimonial.name}</h4>
                    <p class="testimonial-card__role">{testimonial.role}</p>
                </div>
            </div>
            <p class="testimonial-card__quote">{format!("\u{201c}{}\u{201d}", testimonial.quote)}</p>
        </div>
    }
}

/// Initials badge text: first character of each whitespace-separated word.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
