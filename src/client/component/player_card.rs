use dioxus::prelude::*;

use crate::{
    client::router::Route,
    model::player::{PlayerDto, PlayerStatus},
};

/// Status pill; each status has its own label and colour.
#[component]
pub fn StatusBadge(status: PlayerStatus) -> Element {
    let class = match status {
        PlayerStatus::Online => "badge badge-online",
        PlayerStatus::Looking => "badge badge-looking",
        PlayerStatus::Offline => "badge badge-offline",
    };

    rsx!(span { class, {status.label()} })
}

/// A player row. Links to the profile when the player has one.
#[component]
pub fn PlayerCard(player: PlayerDto, show_game: bool) -> Element {
    rsx!(
        div {
            class: "card player-card",
            div {
                class: "player-identity",
                if let Some(username) = player.username.clone() {
                    Link {
                        to: Route::Profile { username },
                        strong { "{player.display_name}" }
                    }
                } else {
                    strong { "{player.display_name}" }
                }
                span { class: "muted", "{player.platform}" }
            }
            if show_game {
                if let (Some(slug), Some(title)) = (player.game_slug.clone(), player.game_title.clone()) {
                    Link { to: Route::GameDetail { slug }, class: "muted", "{title}" }
                }
            }
            StatusBadge { status: player.status }
        }
    )
}
