use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page, SectionError,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::profile::{ProfileDto, UpdateProfileDto},
};

#[cfg(feature = "web")]
use crate::client::api::profile::{get_own_profile, update_profile};

const DISPLAY_NAME_MAX_LEN: usize = 50;
const BIO_MAX_LEN: usize = 500;

#[component]
pub fn SocialEdit() -> Element {
    let mut profile = use_signal(|| None::<Result<ProfileDto, ApiError>>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_own_profile);

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                profile.set(Some(result.clone()));
            }
        });
    }

    rsx! {
        Title { "Edit profile | {SITE_NAME}" }
        match profile() {
            None => rsx! { LoadingPage {} },
            Some(Err(error)) => rsx! {
                ErrorPage { status: error.status, message: error.message }
            },
            Some(Ok(profile)) => rsx! { ProfileForm { profile } },
        }
    }
}

#[component]
fn ProfileForm(profile: ProfileDto) -> Element {
    let nav = navigator();
    let mut display_name = use_signal(|| profile.display_name.clone());
    let mut bio = use_signal(|| profile.bio.clone().unwrap_or_default());
    let mut avatar_url = use_signal(|| profile.avatar_url.clone().unwrap_or_default());
    let mut saving = use_signal(|| false);
    let mut save_error = use_signal(|| None::<String>);

    let username = profile.username.clone();

    let too_long = display_name().chars().count() > DISPLAY_NAME_MAX_LEN
        || bio().chars().count() > BIO_MAX_LEN;

    rsx! {
        Page {
            h1 { "Edit profile" }
            p { class: "muted", "Username: {username}" }
            form {
                class: "form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    let payload = UpdateProfileDto {
                        display_name: Some(display_name()),
                        bio: Some(bio()),
                        avatar_url: Some(avatar_url()),
                    };
                    let username = username.clone();
                    saving.set(true);
                    spawn(async move {
                        #[cfg(feature = "web")]
                        match update_profile(&payload).await {
                            Ok(_) => {
                                nav.push(Route::Profile { username });
                            }
                            Err(e) => save_error.set(Some(e.message)),
                        }
                        saving.set(false);
                    });
                },
                label {
                    "Display name"
                    input {
                        class: "input",
                        value: "{display_name}",
                        maxlength: DISPLAY_NAME_MAX_LEN as i64,
                        oninput: move |evt| display_name.set(evt.value()),
                    }
                }
                label {
                    "Bio"
                    textarea {
                        class: "input",
                        value: "{bio}",
                        maxlength: BIO_MAX_LEN as i64,
                        oninput: move |evt| bio.set(evt.value()),
                    }
                    span { class: "muted", "{bio().chars().count()}/{BIO_MAX_LEN}" }
                }
                label {
                    "Avatar URL"
                    input {
                        class: "input",
                        value: "{avatar_url}",
                        oninput: move |evt| avatar_url.set(evt.value()),
                    }
                }
                if let Some(error) = save_error() {
                    SectionError { message: error }
                }
                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: saving() || too_long,
                    if saving() { "Saving…" } else { "Save" }
                }
            }
        }
    }
}
