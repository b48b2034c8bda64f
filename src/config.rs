//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::FRAME_MS;

pub const ENV_SEED: &str = "NEO_TETRIS_SEED";
pub const ENV_LOG_PATH: &str = "NEO_TETRIS_LOG_PATH";
pub const ENV_SNAPSHOT_LOG: &str = "NEO_TETRIS_SNAPSHOT_LOG";
pub const ENV_FRAME_MS: &str = "NEO_TETRIS_FRAME_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// `tracing` output file. Nothing is logged without one.
    pub log_path: Option<PathBuf>,
    /// JSONL snapshot log.
    pub snapshot_log: Option<PathBuf>,
    pub frame_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            snapshot_log: None,
            frame_ms: FRAME_MS as u64,
        }
    }
}

impl GameConfig {
    /// Read `NEO_TETRIS_*` variables; bad or empty values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let defaults = Self::default();

        let seed = get(ENV_SEED).and_then(|s| s.parse().ok());
        let log_path = get(ENV_LOG_PATH).map(PathBuf::from);
        let snapshot_log = get(ENV_SNAPSHOT_LOG).map(PathBuf::from);
        let frame_ms = get(ENV_FRAME_MS)
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(defaults.frame_ms);

        Self {
            seed,
            log_path,
            snapshot_log,
            frame_ms,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
