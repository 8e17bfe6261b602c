use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{
    Feed, GameDetail, Games, Login, NotFound, Profile, Social, SocialEdit,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[redirect("/", || Route::Games {})]
        #[route("/games")]
        Games {},

        #[route("/games/:slug")]
        GameDetail { slug: String },

        #[route("/social")]
        Social {},

        #[route("/profile/:username")]
        Profile { username: String },

        #[route("/login")]
        Login {},

        #[layout(RequiresLoggedIn)]
            #[route("/feed")]
            Feed {},

            #[route("/social/edit")]
            SocialEdit {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
