use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn Login() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        if matches!(&*auth_context.read(), AuthState::Authenticated(_)) {
            nav.push(Route::Feed {});
        }
    });

    let state = auth_context.read();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match &*state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "page-center",
                    h1 { {SITE_NAME} }
                    p { class: "muted", "Log in to track games, follow players and see your feed." }
                    a {
                        href: "/api/auth/login",
                        class: "btn btn-outline",
                        Icon { width: 24, height: 24, icon: FaDiscord }
                        " Login with Discord"
                    }
                }
            }
        }
    }
}
