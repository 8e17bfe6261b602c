use dioxus::prelude::*;

use crate::{
    client::router::Route,
    model::feed::{EventDto, EventKind},
};

fn kind_label(kind: EventKind) -> &'static str {
    match kind {
        EventKind::StatusChanged => "Status",
        EventKind::GuidePublished => "Guide",
        EventKind::CommunityJoined => "Community",
        EventKind::Followed => "Follow",
        EventKind::GameUpdate => "Update",
    }
}

#[component]
pub fn EventList(events: Vec<EventDto>, empty_message: String) -> Element {
    if events.is_empty() {
        return rsx!(p { class: "muted", "{empty_message}" });
    }

    rsx!(ul {
        class: "event-list",
        for event in events {
            li {
                key: "{event.id}",
                class: "event",
                span { class: "chip", {kind_label(event.kind)} }
                div {
                    class: "event-body",
                    if let Some(author) = event.author.clone() {
                        if let Some(username) = author.username.clone() {
                            Link { to: Route::Profile { username }, strong { "{author.display_name}" } }
                        } else {
                            strong { "{author.display_name}" }
                        }
                    }
                    p { "{event.title}" }
                    if let Some(description) = event.description.clone() {
                        p { class: "muted", "{description}" }
                    }
                    if let Some(game) = event.game.clone() {
                        Link { to: Route::GameDetail { slug: game.slug }, class: "muted", "{game.title}" }
                    }
                }
                time {
                    class: "muted",
                    {event.created_at.format("%Y-%m-%d %H:%M").to_string()}
                }
            }
        }
    })
}
