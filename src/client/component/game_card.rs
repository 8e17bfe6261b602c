use dioxus::prelude::*;

use crate::{client::router::Route, model::game::GameDto};

#[component]
pub fn GameCard(game: GameDto) -> Element {
    rsx!(
        Link {
            to: Route::GameDetail { slug: game.slug.clone() },
            class: "card game-card",
            if let Some(cover) = game.cover_url.clone() {
                img { class: "cover", src: "{cover}", alt: "{game.title}" }
            } else {
                div { class: "cover cover-placeholder", "{game.title}" }
            }
            div {
                class: "card-body",
                h3 { "{game.title}" }
                div {
                    class: "chips",
                    for genre in game.genres.iter() {
                        span { class: "chip", "{genre}" }
                    }
                }
                p {
                    class: "muted",
                    {game.platforms.join(" · ")}
                }
            }
        }
    )
}
