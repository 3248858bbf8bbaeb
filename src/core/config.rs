use std::path::PathBuf;
use crate::core::error::CompanionError;

pub const DEFAULT_WATCH_DIR: &str = "D:\\World of Warcraft\\_retail_\\Screenshots";
pub const DEFAULT_EXTENSION: &str = ".tga";
pub const NOTIFICATION_TITLE: &str = "Queue Ready";
pub const NOTIFICATION_MESSAGE: &str = "Your queue is ready. Check in game.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationText {
    pub title: String,
    pub message: String,
}

impl Default for NotificationText {
    fn default() -> Self {
        Self {
            title: NOTIFICATION_TITLE.to_string(),
            message: NOTIFICATION_MESSAGE.to_string(),
        }
    }
}

/// Read-only settings, built once at startup and handed to each component.
#[derive(Debug, Clone)]
pub struct Config {
    pub watch_dir: PathBuf,
    /// Literal, case-sensitive file name suffix (e.g. ".tga")
    pub extension: String,
    pub notification: NotificationText,
}

impl Config {
    pub fn new(watch_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            watch_dir: watch_dir.into(),
            extension: extension.into(),
            notification: NotificationText::default(),
        }
    }

    /// Fails when the watch directory is missing; nothing else is checked.
    pub fn validate(&self) -> Result<(), CompanionError> {
        if !self.watch_dir.is_dir() {
            return Err(CompanionError::MissingWatchDir(self.watch_dir.clone()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_WATCH_DIR, DEFAULT_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.watch_dir, PathBuf::from(DEFAULT_WATCH_DIR));
        assert_eq!(config.extension, ".tga");
        assert_eq!(config.notification.title, "Queue Ready");
        assert_eq!(config.notification.message, "Your queue is ready. Check in game.");
    }

    #[test]
    fn test_validate_existing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path(), ".tga");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        let config = Config::new(&missing, ".tga");

        match config.validate() {
            Err(CompanionError::MissingWatchDir(path)) => assert_eq!(path, missing),
            other => panic!("expected MissingWatchDir, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_plain_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("not-a-dir.txt");
        std::fs::write(&file_path, b"x").unwrap();

        let config = Config::new(&file_path, ".tga");
        assert!(config.validate().is_err());
    }
}
