use serde::{Deserialize, Serialize};

use crate::model::mood::{ChallengeType, Mood};
use crate::model::player::Player;

/// A finished game as kept in the profile.
/// Captured by the turn engine; never fed back into a running game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub selected_mood: Mood,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub player: String,
    #[serde(rename = "type")]
    pub kind: ChallengeType,
    pub text: String,
    #[serde(default)]
    pub outcome: TurnOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    #[default]
    Completed,
    Forfeited,
}
