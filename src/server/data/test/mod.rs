mod community;
mod event;
mod follow;
mod game;
mod game_version;
mod guide;
mod player;
mod profile;
mod user;
mod user_community;
mod user_game;
