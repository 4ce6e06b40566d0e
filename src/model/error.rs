/// Why a challenge could not be generated. Never shown to players.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("no API key configured (set GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("generation service returned status {0}")]
    Status(u16),
    #[error("generation service returned no challenge")]
    EmptyResponse,
    #[error("could not decode challenge: {0}")]
    Decode(#[from] serde_json::Error),
}
