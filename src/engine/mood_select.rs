use crate::model::mood::Mood;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodSelection {
    Start(Mood),
    UpgradePrompt,
}

/// Recomputed from the current premium flag on every call.
pub fn is_locked(mood: Mood, is_premium: bool) -> bool {
    mood.is_premium_only() && !is_premium
}

pub fn select(mood: Mood, is_premium: bool) -> MoodSelection {
    if is_locked(mood, is_premium) {
        MoodSelection::UpgradePrompt
    } else {
        MoodSelection::Start(mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_moods_request_upgrade_for_free_users() {
        for mood in [Mood::Spicy, Mood::Extreme, Mood::Awkward] {
            assert_eq!(select(mood, false), MoodSelection::UpgradePrompt);
            assert_eq!(select(mood, true), MoodSelection::Start(mood));
        }
    }

    #[test]
    fn open_moods_always_start() {
        for mood in [Mood::Soft, Mood::Funny, Mood::Couples] {
            for premium in [false, true] {
                assert_eq!(select(mood, premium), MoodSelection::Start(mood));
                assert!(!is_locked(mood, premium));
            }
        }
    }
}
