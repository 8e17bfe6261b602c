pub mod feed;
pub mod game_detail;
pub mod games;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod social;
pub mod social_edit;

pub use feed::Feed;
pub use game_detail::GameDetail;
pub use games::Games;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
pub use social::Social;
pub use social_edit::SocialEdit;
