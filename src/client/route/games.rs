use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            GameCard, Page, SearchBox,
        },
        constant::{GENRE_FILTERS, PLATFORM_FILTERS, SEARCH_DEBOUNCE_MS, SITE_NAME},
        model::error::ApiError,
    },
    model::game::GameDto,
};

#[cfg(feature = "web")]
use crate::client::api::game::{get_games, GameQuery};

#[component]
pub fn Games() -> Element {
    let mut search = use_signal(String::new);
    let mut genre = use_signal(String::new);
    let mut platform = use_signal(String::new);
    let mut games = use_signal(|| None::<Result<Vec<GameDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            get_games(GameQuery {
                q: search(),
                genre: genre(),
                platform: platform(),
            })
            .await
        });

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                games.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Games | {SITE_NAME}" }
        Page {
            div {
                class: "toolbar",
                SearchBox {
                    placeholder: "Search games",
                    delay_ms: SEARCH_DEBOUNCE_MS,
                    on_search: move |text: String| search.set(text),
                }
                select {
                    class: "select",
                    value: "{genre}",
                    onchange: move |evt| genre.set(evt.value()),
                    option { value: "", "All genres" }
                    for g in GENRE_FILTERS.iter() {
                        option { value: "{g}", "{g}" }
                    }
                }
                select {
                    class: "select",
                    value: "{platform}",
                    onchange: move |evt| platform.set(evt.value()),
                    option { value: "", "All platforms" }
                    for p in PLATFORM_FILTERS.iter() {
                        option { value: "{p}", "{p}" }
                    }
                }
            }
            match games() {
                None => rsx! { LoadingPage {} },
                Some(Err(error)) => rsx! {
                    ErrorPage { status: error.status, message: error.message }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "muted", "No games match these filters." }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "grid",
                        for game in list {
                            GameCard { key: "{game.id}", game }
                        }
                    }
                },
            }
        }
    }
}
