pub mod app;

pub mod game_screen;
pub mod home_screen;
pub mod mood_screen;
pub mod premium_modal;
pub mod profile_screen;
pub mod setup_screen;
