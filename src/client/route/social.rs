use dioxus::prelude::*;

use crate::{
    client::{
        component::{page::LoadingPage, Page, PlayerCard, SectionError},
        constant::SITE_NAME,
        model::{auth::AuthContext, error::ApiError},
        router::Route,
    },
    model::player::PlayerDto,
};

#[cfg(feature = "web")]
use crate::client::api::player::get_suggested_players;

/// Player discovery: recently active players plus shortcuts to the viewer's
/// own profile.
#[component]
pub fn Social() -> Element {
    let auth_context = use_context::<AuthContext>();
    let mut players = use_signal(|| None::<Result<Vec<PlayerDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_suggested_players);

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                players.set(Some(result.clone()));
            }
        });
    }

    let state = auth_context.read();
    let logged_in = state.user().is_some();
    let username = state.username().map(str::to_string);

    rsx! {
        Title { "Social | {SITE_NAME}" }
        Page {
            h1 { "Players" }
            if logged_in {
                div {
                    class: "toolbar",
                    if let Some(username) = username {
                        Link { to: Route::Profile { username }, class: "btn btn-outline", "View profile" }
                    }
                    Link { to: Route::SocialEdit {}, class: "btn btn-outline", "Edit profile" }
                    Link { to: Route::Feed {}, class: "btn btn-outline", "Feed" }
                }
            } else {
                p {
                    class: "muted",
                    Link { to: Route::Login {}, "Log in" }
                    " to follow players and build your feed."
                }
            }
            h2 { "Recently active" }
            match players() {
                None => rsx! { LoadingPage {} },
                Some(Err(error)) => rsx! { SectionError { message: error.message } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "muted", "No active players yet." }
                },
                Some(Ok(list)) => rsx! {
                    for player in list {
                        PlayerCard { key: "{player.id}", player, show_game: true }
                    }
                },
            }
        }
    }
}
