// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! Bounded, deduplicating store of recently seen network messages.
//!
//! The networking layer is expected to [`add`](MessageTracker::add) every inbound message,
//! which both deduplicates it and remembers it for possible later re-broadcast.
//! Once the configured capacity is reached, the oldest message is evicted (strictly FIFO).

pub mod config;
pub mod error;
pub mod message;
pub mod stats;
pub mod tracker;

pub use config::MessageTrackerConfig;
pub use error::MessageTrackerError;
pub use message::Message;
pub use stats::TrackerStats;
pub use tracker::{AddOutcome, FifoMessageTracker, MessageTracker};
