pub mod event_list;
pub mod game_card;
pub mod header;
pub mod layout;
pub mod markdown;
pub mod page;
pub mod player_card;
pub mod protected_layout;
pub mod search_box;
pub mod section;

pub use event_list::EventList;
pub use game_card::GameCard;
pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use page::Page;
pub use player_card::{PlayerCard, StatusBadge};
pub use protected_layout::RequiresLoggedIn;
pub use search_box::SearchBox;
pub use section::SectionError;
