// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use nym_message_tracker::Message;
use tracing_subscriber::EnvFilter;

pub fn setup_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn message(id: impl ToString) -> Message {
    let id = id.to_string();
    Message::new(id.clone(), "peer1", format!("data-{id}"))
}
