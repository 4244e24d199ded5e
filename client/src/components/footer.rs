//! Page footer with brand mark, copyright, and social links.

use leptos::prelude::*;

#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__logo" aria-hidden="true">"⚡"</span>
                <span class="footer__wordmark">"LiveText"</span>
            </div>
            <p class="footer__copyright">
                "© 2025 LiveText. Built for creators, by creators."
            </p>
            <div class="footer__social">
                <a class="footer__link" href="#" aria-label="Twitter">"Twitter"</a>
                <a class="footer__link" href="#" aria-label="GitHub">"GitHub"</a>
            </div>
        </footer>
    }
}
