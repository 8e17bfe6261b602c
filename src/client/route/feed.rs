use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            EventList, Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::feed::FeedDto,
};

#[cfg(feature = "web")]
use crate::client::api::feed::get_feed;

/// Activity from followed players. A failed load renders an error page, never
/// an empty feed.
#[component]
pub fn Feed() -> Element {
    let mut feed = use_signal(|| None::<Result<FeedDto, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_feed);

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                feed.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Feed | {SITE_NAME}" }
        match feed() {
            None => rsx! { LoadingPage {} },
            Some(Err(error)) => rsx! {
                ErrorPage { status: error.status, message: error.message }
            },
            Some(Ok(feed)) => rsx! {
                Page {
                    h1 { "Your feed" }
                    p {
                        class: "muted",
                        "Following {feed.following_count} players · "
                        Link { to: Route::Profile { username: feed.username.clone() }, "your profile" }
                    }
                    if feed.following_count == 0 {
                        p {
                            "Follow players from the "
                            Link { to: Route::Social {}, "social page" }
                            " to see their activity here."
                        }
                    } else {
                        EventList {
                            events: feed.events,
                            empty_message: "No activity from the players you follow yet.",
                        }
                    }
                }
            },
        }
    }
}
