pub mod engine;
pub mod protocol;

pub mod llm_client;
pub mod mood_select;
pub mod profile_store;
pub mod prompt_builder;
pub mod roster;
pub mod settings_io;
pub mod turn;
