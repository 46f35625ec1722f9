//! JSON file store
//!
//! Writes go to a temp file first and are renamed into place, so a crash
//! mid-write leaves the previous file intact.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::PersistenceStore;
use crate::error::LanderError;
use crate::highscores::HighScores;
use crate::settings::ControlScheme;

const CONTROLS_FILE: &str = "controls.json";
const HIGH_SCORES_FILE: &str = "highscores.json";

/// Stores `controls.json` and `highscores.json` in one directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store in the platform data directory
    pub fn default_location() -> Result<Self, LanderError> {
        let project_dirs =
            ProjectDirs::from("", "", "lunar-lander").ok_or(LanderError::NoDataDir)?;
        Ok(Self::new(project_dirs.data_dir()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load a file, falling back to the default when it is missing or unreadable
    fn load_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T, LanderError> {
        let path = self.dir.join(name);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("{} not found, using defaults", path.display());
                return Ok(T::default());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&json) {
            Ok(value) => Ok(value),
            Err(e) => {
                log::warn!("Ignoring corrupt {}: {e}", path.display());
                Ok(T::default())
            }
        }
    }

    fn save<T: Serialize>(&self, name: &str, value: &T) -> Result<(), LanderError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(value)?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;
        Ok(())
    }
}

impl PersistenceStore for JsonFileStore {
    fn load_control_scheme(&self) -> Result<ControlScheme, LanderError> {
        self.load_or_default(CONTROLS_FILE)
    }

    fn save_control_scheme(&mut self, scheme: &ControlScheme) -> Result<(), LanderError> {
        self.save(CONTROLS_FILE, scheme)
    }

    fn load_high_scores(&self) -> Result<HighScores, LanderError> {
        let loaded: HighScores = self.load_or_default(HIGH_SCORES_FILE)?;
        // Hand-edited files may be out of order
        Ok(HighScores::from_scores(loaded.scores().to_vec()))
    }

    fn save_high_scores(&mut self, scores: &HighScores) -> Result<(), LanderError> {
        self.save(HIGH_SCORES_FILE, scores)?;
        log::info!("Saved {} high scores to {}", scores.len(), self.dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ControlAction;

    fn temp_store(name: &str) -> JsonFileStore {
        let dir = std::env::temp_dir().join(format!(
            "lunar-lander-test-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        JsonFileStore::new(dir)
    }

    #[test]
    fn test_missing_files_give_defaults() {
        let store = temp_store("missing");
        assert_eq!(store.load_control_scheme().unwrap(), ControlScheme::default());
        assert!(store.load_high_scores().unwrap().is_empty());
    }

    #[test]
    fn test_high_scores_save_and_load() {
        let mut store = temp_store("scores");
        let scores = HighScores::from_scores(vec![12.5, 30.0, 7.25]);
        store.save_high_scores(&scores).unwrap();

        assert!(store.dir().join(HIGH_SCORES_FILE).exists());
        assert!(!store.dir().join("highscores.json.tmp").exists());
        assert_eq!(store.load_high_scores().unwrap(), scores);

        fs::remove_dir_all(store.dir()).ok();
    }

    #[test]
    fn test_control_scheme_save_and_load() {
        let mut store = temp_store("controls");
        let mut scheme = ControlScheme::default();
        scheme.rebind(ControlAction::RotateLeft, vec!["A".to_string()]);
        store.save_control_scheme(&scheme).unwrap();
        assert_eq!(store.load_control_scheme().unwrap(), scheme);

        fs::remove_dir_all(store.dir()).ok();
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let store = temp_store("corrupt");
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.dir().join(HIGH_SCORES_FILE), "{ not json").unwrap();
        assert!(store.load_high_scores().unwrap().is_empty());

        fs::remove_dir_all(store.dir()).ok();
    }

    #[test]
    fn test_unsorted_file_is_sorted_on_load() {
        let store = temp_store("unsorted");
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(
            store.dir().join(HIGH_SCORES_FILE),
            r#"{"scores":[1.0,5.0,3.0]}"#,
        )
        .unwrap();
        assert_eq!(store.load_high_scores().unwrap().scores(), &[5.0, 3.0, 1.0]);

        fs::remove_dir_all(store.dir()).ok();
    }
}
