use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME,
    model::auth::AuthContext,
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::{api::user::get_user, model::auth::AuthState};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let auth_context = use_context_provider(AuthContext::new);

    // Resolve the session once on first load
    #[cfg(feature = "web")]
    {
        let mut auth_context = auth_context;
        let user = use_resource(get_user);
        use_effect(move || {
            if let Some(result) = &*user.read_unchecked() {
                auth_context.set(AuthState::from(result.clone()));
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Find games, communities and people to play with"
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
