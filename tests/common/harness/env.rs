//! Isolated test environment with temp directories.

// Allow dead code since not every test binary uses every helper
#![allow(dead_code)]

use super::JotCommand;
use jot::domain::Note;
use jot::store::{FileStore, KeyValueStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// Also provides an empty config directory so the user's real
/// `config.toml` never leaks into a test run.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    data_dir: PathBuf,
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_home).expect("Failed to create config directory");
        Self {
            _temp_dir: temp_dir,
            data_dir,
            config_home,
        }
    }

    /// Returns the path to the data directory (may not exist yet).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the directory used as `XDG_CONFIG_HOME`.
    pub fn config_home(&self) -> &Path {
        &self.config_home
    }

    /// Returns the file backing the default notes key.
    pub fn notes_file(&self) -> PathBuf {
        self.data_dir.join("notes.json")
    }

    /// Writes raw text into a storage slot.
    pub fn write_raw(&self, key: &str, raw: &str) {
        FileStore::new(&self.data_dir)
            .set(key, raw)
            .expect("Failed to write store slot");
    }

    /// Writes a notes collection under `key`.
    pub fn write_notes(&self, key: &str, notes: &[Note]) {
        let raw = serde_json::to_string(notes).expect("Failed to serialize notes");
        self.write_raw(key, &raw);
    }

    /// Reads the notes collection stored under `key`, if any.
    pub fn stored_notes(&self, key: &str) -> Option<Vec<Note>> {
        FileStore::new(&self.data_dir)
            .get(key)
            .expect("Failed to read store slot")
            .map(|raw| crate::common::parse_collection(&raw))
    }

    /// Writes a `jot/config.toml` into the isolated config home.
    pub fn write_config(&self, contents: &str) {
        let dir = self.config_home.join("jot");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        std::fs::write(dir.join("config.toml"), contents).expect("Failed to write config");
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new()
            .config_home(&self.config_home)
            .dir(&self.data_dir)
    }

    /// Creates a JotCommand that relies on the config file for its directory.
    pub fn cmd_without_dir(&self) -> JotCommand {
        JotCommand::new().config_home(&self.config_home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jot::domain::NoteId;

    #[test]
    fn test_env_creates_temp_directories() {
        let env = TestEnv::new();
        assert!(env.config_home().is_dir());
        assert!(!env.data_dir().exists(), "data dir is created lazily");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.config_home().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_write_and_read_notes() {
        let env = TestEnv::new();
        let notes = vec![Note::new(NoteId::from_millis(5), "Five", "body").unwrap()];

        env.write_notes("notes", &notes);

        assert!(env.notes_file().is_file());
        assert_eq!(env.stored_notes("notes"), Some(notes));
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.data_dir().to_string_lossy());
    }
}
