use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{
        fa_brands_icons::FaDiscord,
        fa_solid_icons::{FaGamepad, FaUsers},
    },
    Icon,
};

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[component]
pub fn Header() -> Element {
    let auth_context = use_context::<AuthContext>();
    let state = auth_context.read();

    let resolved = state.is_resolved();
    let user = state.user().cloned();

    rsx!(header {
        class: "site-header",
        Link {
            to: Route::Games {},
            class: "brand",
            Icon { width: 24, height: 24, icon: FaGamepad }
            span { {SITE_NAME} }
        }
        nav {
            class: "nav-links",
            Link { to: Route::Games {}, "Games" }
            Link {
                to: Route::Social {},
                Icon { width: 16, height: 16, icon: FaUsers }
                " Social"
            }
            if user.is_some() {
                Link { to: Route::Feed {}, "Feed" }
            }
        }
        div {
            class: "nav-actions",
            if let Some(user) = user {
                if let Some(username) = user.username.clone() {
                    Link {
                        to: Route::Profile { username },
                        class: "btn btn-outline",
                        "{user.name}"
                    }
                } else {
                    Link {
                        to: Route::SocialEdit {},
                        class: "btn btn-outline",
                        "{user.name}"
                    }
                }
                a {
                    href: "/api/auth/logout",
                    class: "btn btn-outline",
                    "Logout"
                }
            } else if resolved {
                a {
                    href: "/api/auth/login",
                    class: "btn btn-outline",
                    Icon { width: 18, height: 18, icon: FaDiscord }
                    " Login"
                }
            }
        }
    })
}
