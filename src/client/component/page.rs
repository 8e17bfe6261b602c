use dioxus::prelude::*;

use crate::client::{model::error::ApiError, router::Route};

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "page {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        Page {
            class: "page-center",
            span { class: "spinner" }
        }
    )
}

#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        Page {
            class: "page-center",
            h1 { class: "error-status", "{status}" }
            p { "{message}" }
        }
    )
}

#[component]
pub fn NotFoundPage(message: Option<String>) -> Element {
    let message = message.unwrap_or_else(|| "This page does not exist".to_string());

    rsx!(
        Page {
            class: "page-center",
            h1 { class: "error-status", "404" }
            p { "{message}" }
            Link { to: Route::Games {}, class: "btn btn-outline", "Browse games" }
        }
    )
}

/// Renders the not-found view for 404s and `ErrorPage` for everything else.
#[component]
pub fn ApiErrorPage(error: ApiError) -> Element {
    if error.is_not_found() {
        rsx!(NotFoundPage { message: error.message })
    } else {
        rsx!(ErrorPage { status: error.status, message: error.message })
    }
}
