pub mod challenge;
pub mod error;
pub mod game_state;
pub mod llm_decode;
pub mod mood;
pub mod player;
pub mod profile;
pub mod settings;
