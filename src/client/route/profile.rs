use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ApiErrorPage, LoadingPage},
            EventList, GameCard, Page, SectionError,
        },
        constant::SITE_NAME,
        model::{auth::AuthContext, error::ApiError},
        router::Route,
    },
    model::profile::ProfileDto,
};

#[cfg(feature = "web")]
use crate::client::api::profile::{follow, get_profile, unfollow};

#[component]
pub fn Profile(username: String) -> Element {
    let mut profile = use_signal(|| None::<Result<ProfileDto, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(use_reactive!(|(username,)| async move {
            get_profile(&username).await
        }));

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                profile.set(Some(result.clone()));
            }
        });
    }

    match profile() {
        None => rsx! { LoadingPage {} },
        Some(Err(error)) => rsx! { ApiErrorPage { error } },
        Some(Ok(data)) => rsx! { ProfileView { profile: data } },
    }
}

#[component]
fn ProfileView(profile: ProfileDto) -> Element {
    let auth_context = use_context::<AuthContext>();
    let logged_in = auth_context.read().user().is_some();

    let mut following = use_signal(|| profile.is_following);
    let mut followers = use_signal(|| profile.stats.followers);
    let mut follow_error = use_signal(|| None::<String>);

    let username = profile.username.clone();
    let stats = profile.stats.clone();

    rsx! {
        Title { "{profile.display_name} | {SITE_NAME}" }
        Page {
            section {
                class: "profile-header",
                if let Some(avatar) = profile.avatar_url.clone() {
                    img { class: "avatar", src: "{avatar}", alt: "{profile.display_name}" }
                }
                div {
                    h1 { "{profile.display_name}" }
                    p { class: "muted", "@{profile.username}" }
                    if let Some(bio) = profile.bio.clone() {
                        p { "{bio}" }
                    }
                    ul {
                        class: "stats",
                        li { strong { "{stats.games}" } " games" }
                        li { strong { "{stats.communities}" } " communities" }
                        li { strong { "{stats.guides}" } " guides" }
                        li { strong { "{followers}" } " followers" }
                        li { strong { "{stats.following}" } " following" }
                    }
                    if profile.is_self {
                        Link { to: Route::SocialEdit {}, class: "btn btn-outline", "Edit profile" }
                    } else if logged_in {
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| {
                                let username = username.clone();
                                let currently = following();
                                spawn(async move {
                                    #[cfg(feature = "web")]
                                    {
                                        let result = if currently {
                                            unfollow(&username).await
                                        } else {
                                            follow(&username).await
                                        };
                                        match result {
                                            Ok(()) => {
                                                following.set(!currently);
                                                let count = followers();
                                                followers.set(if currently { count.saturating_sub(1) } else { count + 1 });
                                                follow_error.set(None);
                                            }
                                            Err(e) => follow_error.set(Some(e.message)),
                                        }
                                    }
                                });
                            },
                            if following() { "Unfollow" } else { "Follow" }
                        }
                    }
                    if let Some(error) = follow_error() {
                        SectionError { message: error }
                    }
                }
            }

            if !profile.favorite_games.is_empty() {
                section {
                    h2 { "Favorites" }
                    div {
                        class: "grid",
                        for game in profile.favorite_games.clone() {
                            GameCard { key: "{game.id}", game }
                        }
                    }
                }
            }

            section {
                h2 { "Games" }
                if profile.games.is_empty() {
                    p { class: "muted", "No tracked games." }
                }
                ul {
                    for tracked in profile.games.clone() {
                        li {
                            key: "{tracked.game.id}",
                            Link { to: Route::GameDetail { slug: tracked.game.slug.clone() }, "{tracked.game.title}" }
                            " · "
                            span { class: "muted", {tracked.status.label()} }
                        }
                    }
                }
            }

            section {
                h2 { "Communities" }
                if profile.communities.is_empty() {
                    p { class: "muted", "Not in any communities." }
                }
                ul {
                    for community in profile.communities.clone() {
                        li {
                            key: "{community.id}",
                            a { href: "{community.invite_url}", target: "_blank", "{community.name}" }
                        }
                    }
                }
            }

            section {
                h2 { "Guides" }
                if profile.guides.is_empty() {
                    p { class: "muted", "No guides written." }
                }
                ul {
                    for guide in profile.guides.clone() {
                        li { key: "{guide.id}", "{guide.title}" }
                    }
                }
            }

            section {
                h2 { "Recent activity" }
                EventList { events: profile.events.clone(), empty_message: "No activity yet." }
            }
        }
    }
}
