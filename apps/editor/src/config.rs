use std::time::Duration;

use anyhow::{Context, Result};

/// Edits within this window coalesce into a single outbound save.
const DEFAULT_DEBOUNCE_MS: u64 = 800;

/// Editing-session configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Trailing-edge debounce window for persistence.
    pub debounce: Duration,
    /// When set, documents are anonymized before every generation call and
    /// the original identity is restored on the response.
    pub privacy_mode: bool,
    /// Optional cap on undo depth; unbounded when absent.
    pub history_limit: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            privacy_mode: false,
            history_limit: None,
        }
    }
}

impl EditorConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let debounce_ms = match std::env::var("EDITOR_DEBOUNCE_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("EDITOR_DEBOUNCE_MS must be a whole number of milliseconds")?,
            Err(_) => DEFAULT_DEBOUNCE_MS,
        };

        let privacy_mode = std::env::var("EDITOR_PRIVACY_MODE")
            .map(|raw| matches!(raw.as_str(), "1" | "true" | "on"))
            .unwrap_or(false);

        let history_limit = match std::env::var("EDITOR_HISTORY_LIMIT") {
            Ok(raw) => Some(
                raw.parse::<usize>()
                    .context("EDITOR_HISTORY_LIMIT must be a whole number of entries")?,
            ),
            Err(_) => None,
        };

        Ok(EditorConfig {
            debounce: Duration::from_millis(debounce_ms),
            privacy_mode,
            history_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.debounce, Duration::from_millis(800));
        assert!(!config.privacy_mode);
        assert!(config.history_limit.is_none());
    }
}
