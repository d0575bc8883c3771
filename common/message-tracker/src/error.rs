// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessageTrackerError {
    #[error("message {id} not found")]
    MessageNotFound { id: String },

    #[error("message tracker capacity must be non-zero")]
    ZeroCapacity,

    #[error("failed to load message tracker config from '{}': {source}", path.display())]
    ConfigLoadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("message tracker config at '{}' is malformed: {source}", path.display())]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl MessageTrackerError {
    pub(crate) fn not_found(id: impl Into<String>) -> Self {
        MessageTrackerError::MessageNotFound { id: id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, MessageTrackerError::MessageNotFound { .. })
    }
}
