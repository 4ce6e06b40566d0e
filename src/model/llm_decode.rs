use serde::Deserialize;

use crate::model::error::GenerationError;
use crate::model::challenge::ChallengeResponse;

#[derive(Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Decode the model's JSON text into a challenge.
pub fn decode_challenge(json: &str) -> Result<ChallengeResponse, GenerationError> {
    let response: ChallengeResponse = serde_json::from_str(json.trim())?;
    if response.challenge.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(response)
}

/// Decode a raw `generateContent` body straight to the challenge text.
pub fn decode_generate_content(body: &str) -> Result<String, GenerationError> {
    let envelope: GenerateContentResponse = serde_json::from_str(body)?;
    let text = envelope.text().ok_or(GenerationError::EmptyResponse)?;
    let challenge = decode_challenge(&text)?;
    log::debug!(
        "challenge decoded (mood: {:?}, intensity: {:?})",
        challenge.mood,
        challenge.intensity
    );
    Ok(challenge.challenge.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_challenge_from_first_candidate() {
        let body = r#"{
            "candidates": [
                { "content": { "role": "model", "parts": [
                    { "text": "{\"challenge\": \"Do your best robot dance.\", \"mood\": \"Funny\", \"intensity\": 3}" }
                ] } }
            ]
        }"#;

        let text = decode_generate_content(body).unwrap();
        assert_eq!(text, "Do your best robot dance.");
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let response = decode_challenge(r#"{"challenge": "Who was your first crush?"}"#).unwrap();
        assert_eq!(response.mood, None);
        assert_eq!(response.intensity, None);
    }

    #[test]
    fn no_candidates_is_empty_response() {
        let err = decode_generate_content(r#"{"candidates": []}"#).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[test]
    fn blank_challenge_is_empty_response() {
        let err = decode_challenge(r#"{"challenge": "   ", "mood": "Soft"}"#).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[test]
    fn non_json_text_is_a_decode_error() {
        let err = decode_challenge("Sure! Here is a dare: ...").unwrap_err();
        assert!(matches!(err, GenerationError::Decode(_)));
    }
}
