#[cfg(test)]
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;

use rand::Rng;

use crate::model::game_state::GameSnapshot;
use crate::model::mood::{ChallengeType, Mood};
use crate::model::profile::{CustomChallenge, UserProfile};
use crate::engine::settings_io::app_config_dir;

#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("profile storage I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("profile record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the profile lives between runs.
pub trait ProfileRepository {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<UserProfile>, ProfileStoreError>;

    fn save(&self, profile: &UserProfile) -> Result<(), ProfileStoreError>;
}

/// One pretty-printed JSON file in the user's config directory.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn in_config_dir() -> Self {
        Self::new(app_config_dir().join("profile.json"))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ProfileRepository for JsonFileRepository {
    fn load(&self) -> Result<Option<UserProfile>, ProfileStoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn save(&self, profile: &UserProfile) -> Result<(), ProfileStoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryRepository {
    stored: RefCell<Option<UserProfile>>,
}

#[cfg(test)]
impl MemoryRepository {
    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            stored: RefCell::new(Some(profile)),
        }
    }

    pub fn stored(&self) -> Option<UserProfile> {
        self.stored.borrow().clone()
    }
}

#[cfg(test)]
impl ProfileRepository for MemoryRepository {
    fn load(&self) -> Result<Option<UserProfile>, ProfileStoreError> {
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, profile: &UserProfile) -> Result<(), ProfileStoreError> {
        *self.stored.borrow_mut() = Some(profile.clone());
        Ok(())
    }
}

impl<R: ProfileRepository + ?Sized> ProfileRepository for &R {
    fn load(&self) -> Result<Option<UserProfile>, ProfileStoreError> {
        (**self).load()
    }

    fn save(&self, profile: &UserProfile) -> Result<(), ProfileStoreError> {
        (**self).save(profile)
    }
}

/// Owns the single profile instance. Mutations only mark it dirty;
/// `flush` writes it back once per UI frame.
pub struct ProfileStore<R: ProfileRepository> {
    repo: R,
    profile: UserProfile,
    dirty: bool,
}

impl<R: ProfileRepository> ProfileStore<R> {
    pub fn load(repo: R) -> Self {
        let profile = match repo.load() {
            Ok(Some(profile)) => {
                log::info!(
                    "loaded profile '{}' ({} custom cards)",
                    profile.username,
                    profile.saved_challenges.len()
                );
                profile
            }
            Ok(None) => {
                log::info!("no stored profile, starting with defaults");
                UserProfile::default()
            }
            Err(err) => {
                log::warn!("could not read stored profile, using defaults: {err}");
                UserProfile::default()
            }
        };

        Self {
            repo,
            profile,
            dirty: false,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn is_premium(&self) -> bool {
        self.profile.is_premium
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn toggle_premium(&mut self) {
        self.profile.is_premium = !self.profile.is_premium;
        self.dirty = true;
    }

    /// Confirms the simulated purchase from the upgrade prompt.
    pub fn unlock_premium(&mut self) {
        if !self.profile.is_premium {
            self.profile.is_premium = true;
            self.dirty = true;
        }
    }

    pub fn set_username(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || name == self.profile.username {
            return false;
        }
        self.profile.username = name.to_string();
        self.dirty = true;
        true
    }

    // Free users have no card limit; the premium "unlimited cards" perk is not enforced.
    pub fn add_custom_challenge(
        &mut self,
        text: &str,
        kind: ChallengeType,
        mood: Mood,
    ) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        let id = self.fresh_challenge_id();
        self.profile.saved_challenges.push(CustomChallenge {
            id: id.clone(),
            text: text.to_string(),
            kind,
            mood,
        });
        self.dirty = true;
        Some(id)
    }

    pub fn remove_custom_challenge(&mut self, id: &str) -> bool {
        let before = self.profile.saved_challenges.len();
        self.profile.saved_challenges.retain(|c| c.id != id);
        let removed = self.profile.saved_challenges.len() != before;
        self.dirty |= removed;
        removed
    }

    pub fn record_game(&mut self, snapshot: GameSnapshot) {
        self.profile.saved_games.push(snapshot);
        self.dirty = true;
    }

    pub fn clear_saved_games(&mut self) {
        if !self.profile.saved_games.is_empty() {
            self.profile.saved_games.clear();
            self.dirty = true;
        }
    }

    /// Writes the whole profile if anything changed. Stays dirty on failure.
    pub fn flush(&mut self) -> Result<bool, ProfileStoreError> {
        if !self.dirty {
            return Ok(false);
        }
        self.repo.save(&self.profile)?;
        self.dirty = false;
        Ok(true)
    }

    fn fresh_challenge_id(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let id = format!("{:016x}", rng.gen::<u64>());
            if self.profile.challenge(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mood_select::{select, MoodSelection};

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "daredash-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn empty_repository_yields_default_profile() {
        let store = ProfileStore::load(MemoryRepository::default());
        assert_eq!(store.profile(), &UserProfile::default());
        assert!(!store.is_dirty());
    }

    #[test]
    fn stored_profile_is_loaded_once() {
        let mut stored = UserProfile::default();
        stored.username = "Ava".into();
        stored.is_premium = true;

        let store = ProfileStore::load(MemoryRepository::with_profile(stored.clone()));
        assert_eq!(store.profile(), &stored);
        assert!(store.is_premium());
    }

    #[test]
    fn blank_custom_challenge_is_rejected() {
        let repo = MemoryRepository::default();
        let mut store = ProfileStore::load(&repo);
        assert!(store.add_custom_challenge("", ChallengeType::Truth, Mood::Funny).is_none());
        assert!(store.add_custom_challenge("  \n", ChallengeType::Truth, Mood::Funny).is_none());
        assert!(store.profile().saved_challenges.is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn custom_challenge_is_retrievable_by_id() {
        let repo = MemoryRepository::default();
        let mut store = ProfileStore::load(&repo);
        let id = store
            .add_custom_challenge("Tell a secret", ChallengeType::Truth, Mood::Funny)
            .unwrap();

        assert_eq!(store.profile().saved_challenges.len(), 1);
        let card = store.profile().challenge(&id).unwrap();
        assert_eq!(card.text, "Tell a secret");
        assert_eq!(card.kind, ChallengeType::Truth);

        assert!(store.remove_custom_challenge(&id));
        assert!(!store.remove_custom_challenge(&id));
        assert!(store.profile().saved_challenges.is_empty());
    }

    #[test]
    fn flush_batches_mutations_into_one_save() {
        let repo = MemoryRepository::default();
        let mut store = ProfileStore::load(&repo);
        store.toggle_premium();
        store.add_custom_challenge("Sing", ChallengeType::Dare, Mood::Soft);
        assert!(repo.stored().is_none());

        assert!(store.flush().unwrap());
        let saved = repo.stored().unwrap();
        assert!(saved.is_premium);
        assert_eq!(saved.saved_challenges.len(), 1);

        assert!(!store.flush().unwrap());
    }

    #[test]
    fn toggle_unlocks_moods_without_other_changes() {
        let repo = MemoryRepository::default();
        let mut store = ProfileStore::load(&repo);
        let before = store.profile().clone();
        assert_eq!(select(Mood::Spicy, store.is_premium()), MoodSelection::UpgradePrompt);

        store.toggle_premium();

        assert_eq!(select(Mood::Spicy, store.is_premium()), MoodSelection::Start(Mood::Spicy));
        let after = store.profile();
        assert_eq!(after.username, before.username);
        assert_eq!(after.saved_challenges, before.saved_challenges);
        assert_eq!(after.saved_games, before.saved_games);

        store.toggle_premium();
        assert!(!store.is_premium());
    }

    #[test]
    fn unlock_is_idempotent() {
        let repo = MemoryRepository::default();
        let mut store = ProfileStore::load(&repo);
        store.unlock_premium();
        store.flush().unwrap();
        store.unlock_premium();
        assert!(store.is_premium());
        assert!(!store.is_dirty());
    }

    #[test]
    fn blank_username_is_ignored() {
        let repo = MemoryRepository::default();
        let mut store = ProfileStore::load(&repo);
        assert!(!store.set_username("   "));
        assert!(store.set_username(" Ava "));
        assert_eq!(store.profile().username, "Ava");
    }

    #[test]
    fn file_repository_round_trips_profile() {
        let path = temp_path("roundtrip").join("profile.json");
        let repo = JsonFileRepository::new(path.clone());
        assert!(repo.load().unwrap().is_none());

        let mut store = ProfileStore::load(JsonFileRepository::new(path.clone()));
        store.set_username("Sam");
        store.flush().unwrap();

        let loaded = repo.load().unwrap().unwrap();
        assert_eq!(loaded.username, "Sam");
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = temp_path("malformed");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("profile.json");
        fs::write(&path, "{ not json").unwrap();

        let repo = JsonFileRepository::new(path.clone());
        assert!(matches!(repo.load(), Err(ProfileStoreError::Json(_))));

        let store = ProfileStore::load(repo);
        assert_eq!(store.profile(), &UserProfile::default());
        let _ = fs::remove_dir_all(dir);
    }
}
