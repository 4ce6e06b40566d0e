use serde::{Deserialize, Serialize};

use crate::model::mood::{ChallengeType, Mood};
use crate::model::player::Player;

/// Everything the generator needs for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRequest {
    pub request_id: u64,
    pub kind: ChallengeType,
    pub mood: Mood,
    pub player: Player,
    pub others: Vec<Player>,
}

/// Structured payload the model is asked to return.
/// Only `challenge` is shown; `mood` and `intensity` are decoded but unused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeResponse {
    pub challenge: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub intensity: Option<u8>,
}
