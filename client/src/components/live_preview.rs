//! Live-preview mock: presence avatars over a fake editor pane.
//!
//! DESIGN
//! ======
//! Everything here is decoration: the presence roster, connection pill,
//! and code snippet are fixed at build time and exist to show what a
//! session looks like, not to be one.

#[cfg(test)]
#[path = "live_preview_test.rs"]
mod live_preview_test;

use leptos::prelude::*;

/// Presence roster for the mock; the flag marks who is "currently editing".
const EDITORS: [(&str, bool); 3] = [("Sara", true), ("Omar", false), ("You", false)];

#[component]
pub fn LivePreview() -> impl IntoView {
    view! {
        <section class="preview">
            <div class="preview__card">
                <div class="preview__header">
                    <div class="preview__presence">
                        <div class="preview__avatars">
                            {EDITORS
                                .iter()
                                .map(|&(name, active)| view! { <Avatar name=name active=active/> })
                                .collect_view()}
                        </div>
                        <span class="preview__summary">{editing_summary(EDITORS.len())}</span>
                    </div>
                    <span class="preview__status">"Connected"</span>
                </div>
                <div class="preview__editor">
                    <div class="preview__chrome" aria-hidden="true">
                        <span class="preview__dot preview__dot--close"></span>
                        <span class="preview__dot preview__dot--minimize"></span>
                        <span class="preview__dot preview__dot--zoom"></span>
                    </div>
                    <div class="preview__code">
                        <p class="preview__comment">"// Real-time editing preview"</p>
                        <p>
                            <span class="preview__keyword">"function"</span>
                            " "
                            <span class="preview__ident">"greet"</span>
                            "() {"
                        </p>
                        <p class="preview__indent">
                            <span class="preview__keyword">"return"</span>
                            " "
                            <span class="preview__string">"\"Hello, team!\""</span>
                            ";"
                        </p>
                        <p>"}"</p>
                        <div class="preview__typing" aria-hidden="true"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Circular badge with the editor's first initial; the active editor gets
/// a highlight ring and a richer tooltip.
#[component]
fn Avatar(name: &'static str, #[prop(optional)] active: bool) -> impl IntoView {
    view! {
        <span class="avatar" class:avatar--active=active title=avatar_title(name, active)>
            {initial(name)}
        </span>
    }
}

/// First character of the name, `"?"` when empty.
fn initial(name: &str) -> String {
    name.chars().next().map_or_else(|| "?".to_owned(), |c| c.to_string())
}

/// Tooltip text for an avatar.
fn avatar_title(name: &str, active: bool) -> String {
    if active {
        format!("{name} is currently editing")
    } else {
        name.to_owned()
    }
}

/// Presence summary under the avatar strip.
fn editing_summary(count: usize) -> String {
    if count == 1 {
        "1 person editing".to_owned()
    } else {
        format!("{count} people editing")
    }
}
