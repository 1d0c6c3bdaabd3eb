//! Engine configuration

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default lookahead for the automated player, in plies after its own move.
pub const DEFAULT_DEPTH: u32 = 1;

/// Default wall-clock budget per move.
pub const DEFAULT_TIME_LIMIT_MS: u64 = 3_000;

/// Search configuration for [`crate::AIEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched after the candidate move
    pub depth: u32,

    /// Time budget for one move selection, in milliseconds
    pub time_limit_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn new(depth: u32, time_limit_ms: u64) -> Self {
        Self {
            depth,
            time_limit_ms,
        }
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(Error::InvalidConfiguration {
                message: "depth must be at least 1".to_string(),
            });
        }
        if self.time_limit_ms == 0 {
            return Err(Error::InvalidConfiguration {
                message: "time_limit_ms must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| Error::io(format!("open config {}", path.display()), e))?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.depth, 1);
        assert_eq!(config.time_limit(), Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{ "depth": 2 }"#).unwrap();
        assert_eq!(config.depth, 2);
        assert_eq!(config.time_limit_ms, DEFAULT_TIME_LIMIT_MS);
    }

    #[test]
    fn test_from_json_rejects_zero_depth() {
        let err = EngineConfig::from_json(r#"{ "depth": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_from_json_rejects_zero_time() {
        let err = EngineConfig::from_json(r#"{ "time_limit_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = EngineConfig::from_json("{ depth").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load("/nonexistent/magnetic-cave.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_round_trip_json() {
        let config = EngineConfig::new(3, 250);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }
}
