use std::fs;
use std::path::{Path, PathBuf};

use crate::model::settings::GeneratorSettings;

pub fn app_config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("daredash");
    path
}

pub fn settings_path() -> PathBuf {
    app_config_dir().join("settings.json")
}

pub fn load_settings(path: &Path) -> GeneratorSettings {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str::<GeneratorSettings>(&s).ok())
        .unwrap_or_default()
        .sanitized()
}

pub fn save_settings(path: &Path, settings: &GeneratorSettings) {
    if let Some(dir) = path.parent() {
        if let Err(err) = fs::create_dir_all(dir) {
            log::warn!("could not create {}: {err}", dir.display());
        }
    }
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(err) = fs::write(path, json) {
                log::error!("could not write {}: {err}", path.display());
            }
        }
        Err(err) => log::error!("could not serialize settings: {err}"),
    }
}
