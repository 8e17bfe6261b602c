use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ApiErrorPage, LoadingPage},
            GameCard, Markdown, Page, PlayerCard, SectionError,
        },
        constant::SITE_NAME,
        model::{auth::AuthContext, error::ApiError},
    },
    model::{
        api::SectionDto,
        community::CommunityDto,
        game::{GameDetailDto, PlayStatus, UserGameDto},
    },
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        community::join_community,
        game::{get_game, set_game_status},
    },
    model::game::SetGameStatusDto,
};

#[component]
pub fn GameDetail(slug: String) -> Element {
    let mut detail = use_signal(|| None::<Result<GameDetailDto, ApiError>>);

    // Refetch when navigating between game pages
    #[cfg(feature = "web")]
    {
        let future = use_resource(use_reactive!(|(slug,)| async move { get_game(&slug).await }));

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                detail.set(Some(result.clone()));
            }
        });
    }

    match detail() {
        None => rsx! { LoadingPage {} },
        Some(Err(error)) => rsx! { ApiErrorPage { error } },
        Some(Ok(detail)) => rsx! { GameDetailView { detail } },
    }
}

#[component]
fn GameDetailView(detail: GameDetailDto) -> Element {
    let auth_context = use_context::<AuthContext>();
    let logged_in = auth_context.read().user().is_some();
    let game = detail.game.clone();

    rsx! {
        Title { "{game.title} | {SITE_NAME}" }
        Page {
            section {
                class: "game-hero",
                if let Some(cover) = game.cover_url.clone() {
                    img { class: "cover", src: "{cover}", alt: "{game.title}" }
                }
                div {
                    h1 { "{game.title}" }
                    if let Some(description) = game.description.clone() {
                        p { "{description}" }
                    }
                    div {
                        class: "chips",
                        for tag in game.genres.iter().chain(game.tags.iter()) {
                            span { class: "chip", "{tag}" }
                        }
                    }
                    p { class: "muted", {game.platforms.join(" · ")} }
                    if logged_in {
                        match detail.viewer_status.clone() {
                            SectionDto::Error { error } => rsx! { SectionError { message: error } },
                            SectionDto::Ok { data } => rsx! { StatusControl { slug: game.slug.clone(), current: data } },
                        }
                    }
                }
            }

            section {
                h2 { "Communities" }
                match detail.communities.clone() {
                    SectionDto::Error { error } => rsx! { SectionError { message: error } },
                    SectionDto::Ok { data } if data.is_empty() => rsx! { p { class: "muted", "No communities yet." } },
                    SectionDto::Ok { data } => rsx! {
                        for community in data {
                            CommunityRow { key: "{community.id}", community, can_join: logged_in }
                        }
                    },
                }
            }

            section {
                h2 { "Players" }
                match detail.players.clone() {
                    SectionDto::Error { error } => rsx! { SectionError { message: error } },
                    SectionDto::Ok { data } if data.is_empty() => rsx! { p { class: "muted", "Nobody is playing yet." } },
                    SectionDto::Ok { data } => rsx! {
                        for player in data {
                            PlayerCard { key: "{player.id}", player, show_game: false }
                        }
                    },
                }
            }

            section {
                h2 { "Guides" }
                match detail.guides.clone() {
                    SectionDto::Error { error } => rsx! { SectionError { message: error } },
                    SectionDto::Ok { data } if data.is_empty() => rsx! { p { class: "muted", "No guides yet." } },
                    SectionDto::Ok { data } => rsx! {
                        for guide in data {
                            article {
                                key: "{guide.id}",
                                class: "card",
                                h3 { "{guide.title}" }
                                Markdown { source: guide.content }
                            }
                        }
                    },
                }
            }

            section {
                h2 { "Play together" }
                match detail.play_guides.clone() {
                    SectionDto::Error { error } => rsx! { SectionError { message: error } },
                    SectionDto::Ok { data } if data.is_empty() => rsx! { p { class: "muted", "No cross-play guides yet." } },
                    SectionDto::Ok { data } => rsx! {
                        for guide in data {
                            article {
                                key: "{guide.id}",
                                class: "card",
                                h3 { "{guide.title}" }
                                p { class: "muted", "{guide.from_platform} → {guide.to_platform}" }
                                if let Some(summary) = guide.summary.clone() {
                                    p { "{summary}" }
                                }
                                ol {
                                    for step in guide.steps.iter() {
                                        li { "{step}" }
                                    }
                                }
                            }
                        }
                    },
                }
            }

            section {
                h2 { "Updates" }
                match detail.versions.clone() {
                    SectionDto::Error { error } => rsx! { SectionError { message: error } },
                    SectionDto::Ok { data } if data.is_empty() => rsx! { p { class: "muted", "No updates recorded." } },
                    SectionDto::Ok { data } => rsx! {
                        ul {
                            for version in data {
                                li {
                                    key: "{version.id}",
                                    strong { "{version.version}" }
                                    " "
                                    span { class: "muted", {version.released_at.format("%Y-%m-%d").to_string()} }
                                    if let Some(notes) = version.notes.clone() {
                                        p { "{notes}" }
                                    }
                                }
                            }
                        }
                    },
                }
            }

            section {
                h2 { "Similar games" }
                match detail.similar_games.clone() {
                    SectionDto::Error { error } => rsx! { SectionError { message: error } },
                    SectionDto::Ok { data } if data.is_empty() => rsx! { p { class: "muted", "No similar games found." } },
                    SectionDto::Ok { data } => rsx! {
                        div {
                            class: "grid",
                            for similar in data {
                                GameCard { key: "{similar.id}", game: similar }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn CommunityRow(community: CommunityDto, can_join: bool) -> Element {
    let mut joined = use_signal(|| false);
    let mut join_error = use_signal(|| None::<String>);

    let community_id = community.id;

    rsx! {
        div {
            class: "card community-row",
            div {
                a { href: "{community.invite_url}", target: "_blank", strong { "{community.name}" } }
                p {
                    class: "muted",
                    "{community.online_count} online"
                    if let Some(language) = community.language.clone() {
                        " · {language}"
                    }
                }
            }
            if can_join {
                button {
                    class: "btn btn-outline",
                    disabled: joined(),
                    onclick: move |_| {
                        spawn(async move {
                            #[cfg(feature = "web")]
                            match join_community(community_id).await {
                                Ok(()) => joined.set(true),
                                Err(e) => join_error.set(Some(e.message)),
                            }
                        });
                    },
                    if joined() { "Joined" } else { "Join" }
                }
            }
            if let Some(error) = join_error() {
                SectionError { message: error }
            }
        }
    }
}

#[component]
fn StatusControl(slug: String, current: Option<UserGameDto>) -> Element {
    let mut status = use_signal(|| current.as_ref().map(|c| c.status));
    let mut favorite = use_signal(|| current.as_ref().is_some_and(|c| c.favorite));
    let mut save_error = use_signal(|| None::<String>);

    let save = use_callback(move |(next_status, next_favorite): (PlayStatus, bool)| {
        let slug = slug.clone();
        spawn(async move {
            #[cfg(feature = "web")]
            {
                let payload = SetGameStatusDto {
                    status: next_status,
                    favorite: next_favorite,
                };
                match set_game_status(&slug, &payload).await {
                    Ok(saved) => {
                        status.set(Some(saved.status));
                        favorite.set(saved.favorite);
                        save_error.set(None);
                    }
                    Err(e) => save_error.set(Some(e.message)),
                }
            }
        });
    });

    let selected = status().map(|s| s.as_str()).unwrap_or_default();

    rsx! {
        div {
            class: "status-control",
            select {
                class: "select",
                value: "{selected}",
                onchange: move |evt| {
                    if let Some(next) = PlayStatus::parse(&evt.value()) {
                        save.call((next, favorite()));
                    }
                },
                option { value: "", disabled: true, "Track this game" }
                for option_status in PlayStatus::ALL {
                    option { value: "{option_status.as_str()}", {option_status.label()} }
                }
            }
            label {
                input {
                    r#type: "checkbox",
                    checked: favorite(),
                    disabled: status().is_none(),
                    onchange: move |evt| {
                        if let Some(current) = status() {
                            save.call((current, evt.checked()));
                        }
                    },
                }
                " Favorite"
            }
            if let Some(error) = save_error() {
                SectionError { message: error }
            }
        }
    }
}
