//! Persisted CLI configuration with MRU board-directory tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const MAX_RECENT_BOARDS: usize = 20;
const CONFIG_DIR_NAME: &str = "fluxo";
const CONFIG_FILE_NAME: &str = "config.json";

/// A recently opened board directory for MRU persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentBoard {
    pub path: PathBuf,
    pub name: String,
    pub last_opened: DateTime<Utc>,
}

/// Persisted app configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub recent_boards: Vec<RecentBoard>,
}

impl AppConfig {
    /// Load config from disk, returning default if not found.
    pub fn load() -> Self {
        let path = config_file_path();
        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save config to disk.
    pub fn save(&self) -> std::io::Result<()> {
        let path = config_file_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)
    }

    /// Add or update a board directory in the MRU list.
    pub fn touch_recent(&mut self, path: &Path, name: &str) {
        self.recent_boards.retain(|r| r.path != path);

        self.recent_boards.insert(
            0,
            RecentBoard {
                path: path.to_path_buf(),
                name: name.to_string(),
                last_opened: Utc::now(),
            },
        );

        self.recent_boards.truncate(MAX_RECENT_BOARDS);
    }
}

fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_recent_moves_to_front() {
        let mut config = AppConfig::default();
        config.touch_recent(Path::new("/a"), "A");
        config.touch_recent(Path::new("/b"), "B");
        config.touch_recent(Path::new("/a"), "A");

        assert_eq!(config.recent_boards.len(), 2);
        assert_eq!(config.recent_boards[0].path, Path::new("/a"));
    }

    #[test]
    fn test_truncates_to_max() {
        let mut config = AppConfig::default();
        for i in 0..30 {
            config.touch_recent(Path::new(&format!("/board-{i}")), "board");
        }
        assert_eq!(config.recent_boards.len(), MAX_RECENT_BOARDS);
        assert_eq!(config.recent_boards[0].path, Path::new("/board-29"));
    }
}
