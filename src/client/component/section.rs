use dioxus::prelude::*;

/// Inline error for a page section that failed to load.
#[component]
pub fn SectionError(message: String) -> Element {
    rsx!(div {
        class: "section-error",
        "{message}"
    })
}
