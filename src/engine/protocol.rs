use crate::model::challenge::ChallengeRequest;
use crate::model::settings::GeneratorSettings;

pub enum EngineCommand {
    GenerateChallenge(ChallengeRequest),
    UpdateSettings(GeneratorSettings),
    TestConnection,
}

pub enum EngineResponse {
    /// Always carries displayable text; failures arrive as the fallback line.
    ChallengeReady { request_id: u64, text: String },

    ConnectionStatus(String),
}
