use serde::{Deserialize, Serialize};
use std::fmt;

/// Content category chosen by the group before the first turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Soft,
    Funny,
    Awkward,
    Spicy,
    Extreme,
    Couples,
}

impl Mood {
    /// Catalog order shown on the mood screen.
    pub const CATALOG: [Mood; 6] = [
        Mood::Soft,
        Mood::Funny,
        Mood::Couples,
        Mood::Spicy,
        Mood::Extreme,
        Mood::Awkward,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Soft => "Soft",
            Mood::Funny => "Funny",
            Mood::Awkward => "Awkward",
            Mood::Spicy => "Spicy",
            Mood::Extreme => "Extreme",
            Mood::Couples => "Couples",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mood::Soft => "Good clean fun. Safe for work and family.",
            Mood::Funny => "Silly, weird, and hilarious prompts.",
            Mood::Couples => "Romantic and connecting questions.",
            Mood::Spicy => "Things are getting hot. 18+ only.",
            Mood::Extreme => "No limits. Enter at your own risk.",
            Mood::Awkward => "Cringe-worthy questions to test friendships.",
        }
    }

    /// Moods that need the premium flag.
    pub fn is_premium_only(self) -> bool {
        matches!(self, Mood::Spicy | Mood::Extreme | Mood::Awkward)
    }

    /// Moods whose tone must be softened for players under 18.
    pub fn is_adult_leaning(self) -> bool {
        matches!(self, Mood::Spicy | Mood::Extreme | Mood::Couples)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeType {
    Truth,
    Dare,
}

impl ChallengeType {
    pub const ALL: [ChallengeType; 2] = [ChallengeType::Truth, ChallengeType::Dare];

    pub fn label(self) -> &'static str {
        match self {
            ChallengeType::Truth => "Truth",
            ChallengeType::Dare => "Dare",
        }
    }
}

impl fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_mood_once() {
        let mut seen = std::collections::HashSet::new();
        for mood in Mood::CATALOG {
            assert!(seen.insert(mood));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn only_spicy_extreme_awkward_are_premium() {
        let premium: Vec<Mood> = Mood::CATALOG
            .into_iter()
            .filter(|m| m.is_premium_only())
            .collect();
        assert_eq!(premium, vec![Mood::Spicy, Mood::Extreme, Mood::Awkward]);
    }

    #[test]
    fn moods_serialize_as_their_labels() {
        let json = serde_json::to_string(&Mood::Couples).unwrap();
        assert_eq!(json, "\"Couples\"");
        let kind: ChallengeType = serde_json::from_str("\"Dare\"").unwrap();
        assert_eq!(kind, ChallengeType::Dare);
    }
}
