use serde::{Deserialize, Serialize};

/// User-editable generator and display settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorSettings {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub ui_scale: f32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".into(),
            model: "gemini-3-flash-preview".into(),
            temperature: 0.8,
            ui_scale: 1.0,
        }
    }
}

impl GeneratorSettings {
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.endpoint.trim().is_empty() {
            self.endpoint = defaults.endpoint;
        }
        if self.model.trim().is_empty() {
            self.model = defaults.model;
        }
        self.temperature = self.temperature.clamp(0.0, 2.0);
        self.ui_scale = self.ui_scale.clamp(0.75, 2.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_in_defaults() {
        let settings: GeneratorSettings = serde_json::from_str(r#"{"model": "gemini-pro"}"#).unwrap();
        assert_eq!(settings.model, "gemini-pro");
        assert_eq!(settings.endpoint, GeneratorSettings::default().endpoint);
        assert_eq!(settings.temperature, 0.8);
    }

    #[test]
    fn sanitize_restores_blank_fields_and_clamps() {
        let settings = GeneratorSettings {
            endpoint: " ".into(),
            model: String::new(),
            temperature: 9.0,
            ui_scale: 0.1,
        }
        .sanitized();

        assert_eq!(settings.endpoint, GeneratorSettings::default().endpoint);
        assert_eq!(settings.model, GeneratorSettings::default().model);
        assert_eq!(settings.temperature, 2.0);
        assert_eq!(settings.ui_scale, 0.75);
    }
}
