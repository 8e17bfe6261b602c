pub use super::community::Entity as Community;
pub use super::event::Entity as Event;
pub use super::follow::Entity as Follow;
pub use super::game::Entity as Game;
pub use super::game_version::Entity as GameVersion;
pub use super::guide::Entity as Guide;
pub use super::play_guide::Entity as PlayGuide;
pub use super::player::Entity as Player;
pub use super::profile::Entity as Profile;
pub use super::user::Entity as User;
pub use super::user_community::Entity as UserCommunity;
pub use super::user_game::Entity as UserGame;

pub use super::string_list::StringList;
