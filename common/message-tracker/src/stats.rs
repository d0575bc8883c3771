// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

/// Running counters of everything that happened to a tracker since it was created.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackerStats {
    /// Number of messages that got stored.
    pub inserted: u64,

    /// Number of `add` calls ignored because the id was already present.
    pub duplicates: u64,

    /// Number of messages dropped to make room for newer ones.
    pub evicted: u64,

    /// Number of successful explicit deletions.
    pub deleted: u64,
}

impl TrackerStats {
    /// Messages that left the tracker either through eviction or deletion.
    pub fn removed(&self) -> u64 {
        self.evicted + self.deleted
    }
}
