// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::MessageTrackerError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageTrackerConfig {
    /// Maximum number of messages kept in the tracker before the oldest ones start getting evicted.
    #[serde(default = "MessageTrackerConfig::default_capacity")]
    pub capacity: NonZeroUsize,

    #[serde(default)]
    pub debug: Debug,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Debug {
    /// Specify whether every eviction should be logged at `debug` level (rather than `trace`).
    pub log_evictions: bool,
}

impl Default for Debug {
    fn default() -> Self {
        Debug {
            log_evictions: true,
        }
    }
}

impl Default for MessageTrackerConfig {
    fn default() -> Self {
        MessageTrackerConfig {
            capacity: Self::DEFAULT_CAPACITY,
            debug: Default::default(),
        }
    }
}

impl MessageTrackerConfig {
    pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(capacity) => capacity,
        None => NonZeroUsize::MIN,
    };

    fn default_capacity() -> NonZeroUsize {
        Self::DEFAULT_CAPACITY
    }

    #[must_use]
    pub fn with_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_eviction_logging(mut self, log_evictions: bool) -> Self {
        self.debug.log_evictions = log_evictions;
        self
    }

    pub fn read_from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, MessageTrackerError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| {
            MessageTrackerError::ConfigLoadFailure {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let config =
            toml::from_str(&raw).map_err(|source| MessageTrackerError::MalformedConfig {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("loaded message tracker config from {}", path.display());
        Ok(config)
    }
}

impl FromStr for MessageTrackerConfig {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_gives_default_config() {
        let config: MessageTrackerConfig = "".parse().unwrap();
        assert_eq!(config, MessageTrackerConfig::default());
        assert_eq!(config.capacity.get(), 1000);
        assert!(config.debug.log_evictions);
    }

    #[test]
    fn parsing_full_document() {
        let config: MessageTrackerConfig = r#"
            capacity = 42

            [debug]
            log_evictions = false
        "#
        .parse()
        .unwrap();

        assert_eq!(config.capacity.get(), 42);
        assert!(!config.debug.log_evictions);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!("capacity = 0".parse::<MessageTrackerConfig>().is_err());
    }

    #[test]
    fn negative_capacity_is_rejected() {
        assert!("capacity = -5".parse::<MessageTrackerConfig>().is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!("capacity = 10\nttl = 5".parse::<MessageTrackerConfig>().is_err());
    }

    #[test]
    fn builder_methods() {
        let config = MessageTrackerConfig::default()
            .with_capacity(NonZeroUsize::new(7).unwrap())
            .with_eviction_logging(false);
        assert_eq!(config.capacity.get(), 7);
        assert!(!config.debug.log_evictions);
    }

    #[test]
    fn reading_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("message_tracker.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "capacity = 3").unwrap();

        let config = MessageTrackerConfig::read_from_toml_file(&path).unwrap();
        assert_eq!(config.capacity.get(), 3);
    }

    #[test]
    fn reading_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MessageTrackerConfig::read_from_toml_file(dir.path().join("nope.toml"))
            .unwrap_err();
        assert!(matches!(err, MessageTrackerError::ConfigLoadFailure { .. }));
    }

    #[test]
    fn reading_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "capacity = \"lots\"").unwrap();

        let err = MessageTrackerConfig::read_from_toml_file(&path).unwrap_err();
        assert!(matches!(err, MessageTrackerError::MalformedConfig { .. }));
    }

    #[test]
    fn serialized_default_can_be_read_back() {
        let default_config = MessageTrackerConfig::default();
        let serialized = toml::to_string(&default_config).unwrap();
        let loaded: MessageTrackerConfig = serialized.parse().unwrap();
        assert_eq!(default_config, loaded);
    }
}
