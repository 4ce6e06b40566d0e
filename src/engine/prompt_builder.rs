use crate::model::challenge::ChallengeRequest;
use crate::model::mood::{ChallengeType, Mood};
use crate::model::player::Player;

/// Builds the text sent to the generator.
/// Formatting only: no networking, no turn logic.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn system_instruction(request: &ChallengeRequest) -> String {
        let mut prompt = String::new();

        push_role(&mut prompt, request.kind, &request.player, request.mood);
        push_safety_guidelines(&mut prompt, &request.player, request.mood);
        push_other_players(&mut prompt, &request.others);

        prompt
    }

    pub fn user_prompt(kind: ChallengeType) -> String {
        format!("Give me a {kind} challenge.")
    }
}

fn push_role(prompt: &mut String, kind: ChallengeType, player: &Player, mood: Mood) {
    prompt.push_str("You are a party game master for a game of Truth or Dare.\n");
    prompt.push_str(&format!(
        "Generate a short, creative, engaging, and unique {} for a player named {} (Age: {}).\n",
        kind, player.name, player.age
    ));
    prompt.push_str(&format!("The current mood is {}.\n\n", effective_mood_label(player, mood)));
}

fn push_safety_guidelines(prompt: &mut String, player: &Player, mood: Mood) {
    prompt.push_str("Safety Guidelines:\n");
    prompt.push_str(&format!(
        "- If the mood is Spicy, Extreme, or Couples, ensure content is appropriate for the age group (Age: {}).\n",
        player.age
    ));
    prompt.push_str(
        "- For minors (under 18), strictly avoid any sexual, alcohol, or dangerous content regardless of the requested mood. Convert 'Spicy' to 'Silly/Fun' for minors.\n",
    );

    if player.is_minor() {
        prompt.push_str(&format!(
            "- {} is under 18. Do not produce sexual, alcohol-related, or dangerous content.",
            player.name
        ));
        if mood.is_adult_leaning() {
            prompt.push_str(&format!(
                " Treat the requested {mood} mood as Silly/Fun instead."
            ));
        }
        prompt.push('\n');
    }

    prompt.push_str("- Be creative. Avoid clichés.\n");
    prompt.push_str("- Respond with JSON containing \"challenge\", \"mood\" and \"intensity\" (1-10).\n");
}

fn push_other_players(prompt: &mut String, others: &[Player]) {
    if others.is_empty() {
        return;
    }

    let names: Vec<&str> = others.iter().map(|p| p.name.as_str()).collect();
    prompt.push_str(&format!(
        "\nOther players in the room are: {}. You can involve them in the dare or question if appropriate.\n",
        names.join(", ")
    ));
}

fn effective_mood_label(player: &Player, mood: Mood) -> String {
    if player.is_minor() && mood.is_adult_leaning() {
        format!("Silly/Fun (requested: {mood})")
    } else {
        mood.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::player::Gender;

    fn player(id: u64, name: &str, age: u32) -> Player {
        Player {
            id,
            name: name.into(),
            age,
            gender: Gender::NonBinary,
        }
    }

    fn request(active: Player, others: Vec<Player>, mood: Mood) -> ChallengeRequest {
        ChallengeRequest {
            request_id: 1,
            kind: ChallengeType::Truth,
            mood,
            player: active,
            others,
        }
    }

    #[test]
    fn embeds_type_mood_and_player() {
        let prompt = PromptBuilder::system_instruction(&request(
            player(1, "Ava", 20),
            vec![],
            Mood::Spicy,
        ));

        assert!(prompt.contains("unique Truth for a player named Ava (Age: 20)"));
        assert!(prompt.contains("The current mood is Spicy."));
        assert!(!prompt.contains("Other players"));
    }

    #[test]
    fn minors_get_a_milder_tone() {
        let prompt = PromptBuilder::system_instruction(&request(
            player(2, "Sam", 17),
            vec![player(1, "Ava", 20)],
            Mood::Spicy,
        ));

        assert!(prompt.contains("The current mood is Silly/Fun (requested: Spicy)."));
        assert!(prompt.contains("Sam is under 18"));
        assert!(prompt.contains("sexual, alcohol, or dangerous content"));
    }

    #[test]
    fn minors_in_soft_mood_keep_the_mood() {
        let prompt = PromptBuilder::system_instruction(&request(
            player(2, "Sam", 15),
            vec![],
            Mood::Soft,
        ));

        assert!(prompt.contains("The current mood is Soft."));
        assert!(prompt.contains("Sam is under 18"));
        assert!(!prompt.contains("Treat the requested"));
    }

    #[test]
    fn lists_other_players_in_roster_order() {
        let prompt = PromptBuilder::system_instruction(&request(
            player(1, "Ava", 20),
            vec![player(2, "Sam", 17), player(3, "Lee", 30)],
            Mood::Funny,
        ));

        assert!(prompt.contains("Other players in the room are: Sam, Lee."));
    }

    #[test]
    fn user_prompt_names_the_type() {
        assert_eq!(PromptBuilder::user_prompt(ChallengeType::Dare), "Give me a Dare challenge.");
    }
}
