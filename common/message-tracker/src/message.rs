// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A message received from (or destined to) a remote peer.
///
/// The tracker only ever looks at the `id`; the origin tag and the payload are carried along
/// untouched so that the networking layer can later re-broadcast whatever it has seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub peer_id: String,
    pub data: Bytes,
}

impl Message {
    pub fn new(id: impl Into<String>, peer_id: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Message {
            id: id.into(),
            peer_id: peer_id.into(),
            data: data.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn peer_id(&self) -> &str {
        &self.peer_id
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }
}
