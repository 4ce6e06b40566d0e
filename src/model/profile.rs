use serde::{Deserialize, Serialize};

use crate::model::game_state::GameSnapshot;
use crate::model::mood::{ChallengeType, Mood};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomChallenge {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ChallengeType,
    pub mood: Mood,
}

/// The single local profile. Field names match the stored JSON record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub is_premium: bool,
    #[serde(default)]
    pub saved_challenges: Vec<CustomChallenge>,
    #[serde(default)]
    pub saved_games: Vec<GameSnapshot>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            username: "Player 1".into(),
            is_premium: false,
            saved_challenges: Vec::new(),
            saved_games: Vec::new(),
        }
    }
}

impl UserProfile {
    pub fn challenge(&self, id: &str) -> Option<&CustomChallenge> {
        self.saved_challenges.iter().find(|c| c.id == id)
    }
}
