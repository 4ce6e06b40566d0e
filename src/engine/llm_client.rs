use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::json;
use std::time::Duration;

use crate::engine::prompt_builder::PromptBuilder;
use crate::model::challenge::ChallengeRequest;
use crate::model::llm_decode::decode_generate_content;
use crate::model::error::GenerationError;
use crate::model::settings::GeneratorSettings;

/// Shown whenever generation fails for any reason.
pub const FALLBACK_CHALLENGE: &str = "Oops, the AI is feeling shy. Please try spinning again!";

/// Anything that can turn a turn request into one line of challenge text.
pub trait ChallengeGenerator {
    fn generate(&self, request: &ChallengeRequest) -> Result<String, GenerationError>;
}

/// Never lets a failure reach the turn engine.
pub fn generate_or_fallback<G: ChallengeGenerator + ?Sized>(
    generator: &G,
    request: &ChallengeRequest,
) -> String {
    match generator.generate(request) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            log::error!("request {}: generator returned blank text", request.request_id);
            FALLBACK_CHALLENGE.to_string()
        }
        Err(err) => {
            log::error!("request {}: generation failed: {err}", request.request_id);
            FALLBACK_CHALLENGE.to_string()
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct TextPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
    temperature: f32,
}

fn challenge_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "challenge": {
                "type": "STRING",
                "description": "The truth question or dare instruction."
            },
            "mood": {
                "type": "STRING",
                "description": "The mood of the challenge."
            },
            "intensity": {
                "type": "INTEGER",
                "description": "Intensity rating from 1 to 10."
            }
        },
        "required": ["challenge", "mood"]
    })
}

/// Google Generative Language `generateContent` client.
pub struct GeminiClient {
    client: Client,
    settings: GeneratorSettings,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(settings: GeneratorSettings, api_key: Option<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            settings,
            api_key,
        })
    }

    pub fn from_env(settings: GeneratorSettings) -> anyhow::Result<Self> {
        Self::new(settings, api_key_from_env())
    }

    fn url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.model,
            method
        )
    }

    fn build_request(&self, request: &ChallengeRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![TextPart {
                    text: PromptBuilder::system_instruction(request),
                }],
            },
            contents: vec![Content {
                role: Some("user".into()),
                parts: vec![TextPart {
                    text: PromptBuilder::user_prompt(request.kind),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".into(),
                response_schema: challenge_schema(),
                temperature: self.settings.temperature,
            },
        }
    }
}

impl ChallengeGenerator for GeminiClient {
    fn generate(&self, request: &ChallengeRequest) -> Result<String, GenerationError> {
        let api_key = self.api_key.as_deref().ok_or(GenerationError::MissingApiKey)?;
        let body = self.build_request(request);

        log::debug!(
            "request {}: {} / {} for {}",
            request.request_id,
            request.kind,
            request.mood,
            request.player.name
        );

        let resp = self
            .client
            .post(self.url("generateContent"))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;
        check_status(status)?;

        decode_generate_content(&text)
    }
}

fn check_status(status: StatusCode) -> Result<(), GenerationError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(GenerationError::Status(status.as_u16()))
    }
}

pub fn api_key_from_env() -> Option<String> {
    ["GEMINI_API_KEY", "API_KEY"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

pub fn test_connection(settings: &GeneratorSettings) -> anyhow::Result<String> {
    let Some(api_key) = api_key_from_env() else {
        anyhow::bail!(GenerationError::MissingApiKey);
    };

    let client = Client::new();
    let resp: serde_json::Value = client
        .get(format!("{}/models", settings.endpoint.trim_end_matches('/')))
        .header("x-goog-api-key", api_key)
        .send()?
        .error_for_status()?
        .json()?;

    Ok(format!(
        "Connected ({} models available)",
        resp["models"].as_array().map(|a| a.len()).unwrap_or(0)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mood::{ChallengeType, Mood};
    use crate::model::player::{Gender, Player};

    struct Failing;

    impl ChallengeGenerator for Failing {
        fn generate(&self, _: &ChallengeRequest) -> Result<String, GenerationError> {
            Err(GenerationError::Status(503))
        }
    }

    struct Fixed(&'static str);

    impl ChallengeGenerator for Fixed {
        fn generate(&self, _: &ChallengeRequest) -> Result<String, GenerationError> {
            Ok(self.0.to_string())
        }
    }

    fn request() -> ChallengeRequest {
        let player = |id, name: &str, age| Player {
            id,
            name: name.into(),
            age,
            gender: Gender::Female,
        };
        ChallengeRequest {
            request_id: 7,
            kind: ChallengeType::Dare,
            mood: Mood::Funny,
            player: player(1, "Ava", 20),
            others: vec![player(2, "Sam", 17)],
        }
    }

    #[test]
    fn failure_becomes_fallback_text() {
        assert_eq!(generate_or_fallback(&Failing, &request()), FALLBACK_CHALLENGE);
    }

    #[test]
    fn blank_text_becomes_fallback_text() {
        assert_eq!(generate_or_fallback(&Fixed("  "), &request()), FALLBACK_CHALLENGE);
    }

    #[test]
    fn success_passes_text_through() {
        assert_eq!(
            generate_or_fallback(&Fixed("Hop on one foot."), &request()),
            "Hop on one foot."
        );
    }

    #[test]
    fn missing_key_fails_without_network() {
        let client = GeminiClient::new(GeneratorSettings::default(), None).unwrap();
        let err = client.generate(&request()).unwrap_err();
        assert!(matches!(err, GenerationError::MissingApiKey));
    }

    #[test]
    fn request_body_carries_schema_and_prompts() {
        let client = GeminiClient::new(GeneratorSettings::default(), Some("k".into())).unwrap();
        let body = serde_json::to_value(client.build_request(&request())).unwrap();

        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["challenge", "mood"])
        );
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Give me a Dare challenge.");
        let system = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
        assert!(system.contains("Ava"));
        assert!(system.contains("Sam"));
    }

    #[test]
    fn any_2xx_status_is_accepted() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(check_status(StatusCode::ACCEPTED).is_ok());
        assert!(matches!(
            check_status(StatusCode::SERVICE_UNAVAILABLE),
            Err(GenerationError::Status(503))
        ));
        assert!(matches!(
            check_status(StatusCode::MOVED_PERMANENTLY),
            Err(GenerationError::Status(301))
        ));
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let mut settings = GeneratorSettings::default();
        settings.endpoint = "https://example.test/v1beta/".into();
        settings.model = "m".into();
        let client = GeminiClient::new(settings, None).unwrap();
        assert_eq!(
            client.url("generateContent"),
            "https://example.test/v1beta/models/m:generateContent"
        );
    }
}
