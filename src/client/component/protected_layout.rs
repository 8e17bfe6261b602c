use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

/// Layout for pages that need a session. Redirects to `/login` once the
/// session check resolves without a user; nothing protected renders meanwhile.
#[component]
pub fn RequiresLoggedIn() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        if matches!(&*auth_context.read(), AuthState::NotLoggedIn) {
            nav.push(Route::Login {});
        }
    });

    let state = auth_context.read();

    rsx! {
        match &*state {
            AuthState::Initializing => rsx! { LoadingPage {} },
            AuthState::Authenticated(_) => rsx! { Outlet::<Route> {} },
            AuthState::Error(error) => rsx! {
                ErrorPage { status: error.status, message: error.message.clone() }
            },
            // Redirecting via the effect
            AuthState::NotLoggedIn => rsx! {},
        }
    }
}
