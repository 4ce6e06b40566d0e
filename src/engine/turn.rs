use std::sync::atomic::{AtomicU64, Ordering};

use crate::engine::roster::MIN_PLAYERS;
use crate::model::challenge::ChallengeRequest;
use crate::model::game_state::{GameSnapshot, HistoryEntry, TurnOutcome};
use crate::model::mood::{ChallengeType, Mood};
use crate::model::player::Player;

// Process-wide so a response from an abandoned game can never match a new one.
static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingChoice,
    Loading { kind: ChallengeType, request_id: u64 },
    ShowingChallenge { kind: ChallengeType, text: String },
}

/// Drives the active player, round counter and per-turn card state.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    players: Vec<Player>,
    mood: Mood,
    current: usize,
    round: u32,
    phase: TurnPhase,
    history: Vec<HistoryEntry>,
}

impl TurnEngine {
    pub fn new(players: Vec<Player>, mood: Mood) -> Option<Self> {
        if players.len() < MIN_PLAYERS {
            return None;
        }

        Some(Self {
            players,
            mood,
            current: 0,
            round: 1,
            phase: TurnPhase::AwaitingChoice,
            history: Vec::new(),
        })
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, TurnPhase::Loading { .. })
    }

    pub fn choose(&mut self, kind: ChallengeType) -> Option<ChallengeRequest> {
        match self.phase {
            TurnPhase::AwaitingChoice => Some(self.start_request(kind)),
            _ => None,
        }
    }

    /// New text for the same player and the same challenge type.
    pub fn reroll(&mut self) -> Option<ChallengeRequest> {
        match self.phase {
            TurnPhase::ShowingChallenge { kind, .. } => Some(self.start_request(kind)),
            _ => None,
        }
    }

    /// Accepts the response for the in-flight request; anything else is dropped.
    pub fn receive(&mut self, request_id: u64, text: String) -> bool {
        match self.phase {
            TurnPhase::Loading { kind, request_id: pending } if pending == request_id => {
                self.phase = TurnPhase::ShowingChallenge { kind, text };
                true
            }
            _ => {
                log::debug!("dropping stale response for request {request_id}");
                false
            }
        }
    }

    pub fn complete(&mut self) -> bool {
        self.finish_turn(TurnOutcome::Completed)
    }

    pub fn forfeit(&mut self) -> bool {
        self.finish_turn(TurnOutcome::Forfeited)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.clone(),
            current_player_index: self.current,
            selected_mood: self.mood,
            history: self.history.clone(),
        }
    }

    fn start_request(&mut self, kind: ChallengeType) -> ChallengeRequest {
        let request_id = NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed);
        self.phase = TurnPhase::Loading { kind, request_id };

        let player = self.current_player().clone();
        let others = self
            .players
            .iter()
            .filter(|p| p.id != player.id)
            .cloned()
            .collect();

        ChallengeRequest {
            request_id,
            kind,
            mood: self.mood,
            player,
            others,
        }
    }

    fn finish_turn(&mut self, outcome: TurnOutcome) -> bool {
        let TurnPhase::ShowingChallenge { kind, text } = &self.phase else {
            return false;
        };

        let entry = HistoryEntry {
            player: self.current_player().name.clone(),
            kind: *kind,
            text: text.clone(),
            outcome,
        };
        self.history.push(entry);
        self.phase = TurnPhase::AwaitingChoice;
        self.advance();
        true
    }

    fn advance(&mut self) {
        if self.current + 1 == self.players.len() {
            self.current = 0;
            self.round += 1;
        } else {
            self.current += 1;
        }
    }
}
