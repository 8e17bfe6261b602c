use dioxus::prelude::*;

use crate::client::{component::page::NotFoundPage, constant::SITE_NAME};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not found | {SITE_NAME}" }
        NotFoundPage { message: format!("Nothing lives at /{}", path) }
    }
}
