//! Engine configuration loaded from the environment.

use std::str::FromStr;

/// Environment variable holding the level cap.
pub const MAX_LEVEL_ENV: &str = "CHARACTER_MAX_LEVEL";

/// Level cap used when nothing (or nothing valid) is configured.
pub const DEFAULT_MAX_LEVEL: u32 = 300;

/// Tunables threaded into use cases at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub max_level: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
        }
    }
}

impl EngineConfig {
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level;
        self
    }

    /// Read the process environment. Call [`load_dotenv`] first and install
    /// the tracing subscriber before this, so fallbacks are logged.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing keys use defaults; invalid
    /// values are logged and replaced by defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_LEVEL_ENV) {
            match parse_max_level(&raw) {
                Some(max_level) => config.max_level = max_level,
                None => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_MAX_LEVEL,
                    "Invalid CHARACTER_MAX_LEVEL, using default"
                ),
            }
        }

        config
    }
}

/// Load `.env` into the process environment. A missing file is not an error.
pub fn load_dotenv() -> Result<(), dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e),
    }
}

fn parse_max_level(raw: &str) -> Option<u32> {
    u32::from_str(raw.trim()).ok().filter(|level| *level >= 1)
}
