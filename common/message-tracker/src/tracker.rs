// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::config::MessageTrackerConfig;
use crate::error::MessageTrackerError;
use crate::message::Message;
use crate::stats::TrackerStats;
use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace, warn};

/// Tracks a fixed amount of recently seen messages.
/// Messages are stored first-in-first-out and duplicates are never stored twice.
pub trait MessageTracker {
    /// Add the message to the tracker, evicting the oldest message if the capacity got exceeded.
    fn add(&self, message: Message) -> AddOutcome;

    /// Remove the message with the provided id from the tracker.
    fn delete(&self, id: &str) -> Result<(), MessageTrackerError>;

    /// Get the message with the provided id. The message is retained in the tracker.
    fn message(&self, id: &str) -> Result<Arc<Message>, MessageTrackerError>;

    /// Get all tracked messages in FIFO order, i.e. oldest first.
    fn messages(&self) -> Vec<Arc<Message>>;
}

/// Result of adding a message to the tracker.
/// None of the variants is an error: callers are free to ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The message got stored and there was still room for it.
    Inserted,

    /// A message with the same id was already tracked; the new one got discarded.
    Duplicate,

    /// The message got stored and the contained oldest message had to make room for it.
    Evicted(Arc<Message>),
}

impl AddOutcome {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, AddOutcome::Duplicate)
    }

    pub fn evicted(&self) -> Option<&Arc<Message>> {
        match self {
            AddOutcome::Evicted(message) => Some(message),
            _ => None,
        }
    }
}

// the tracker never does any io nor awaits anything while holding the lock,
// so the std Mutex is the right tool here (as opposed to the tokio one)
#[derive(Debug, Clone)]
pub struct FifoMessageTracker {
    capacity: NonZeroUsize,
    log_evictions: bool,
    inner: Arc<Mutex<FifoMessageTrackerInner>>,
}

#[derive(Debug, Default)]
struct FifoMessageTrackerInner {
    messages: HashMap<String, Arc<Message>>,

    // front is the oldest entry, back is the newest one
    order: VecDeque<String>,

    stats: TrackerStats,
}

impl FifoMessageTracker {
    pub fn new(capacity: usize) -> Result<Self, MessageTrackerError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(MessageTrackerError::ZeroCapacity)?;
        Ok(Self::with_capacity(capacity))
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        debug!("creating message tracker with capacity of {capacity}");
        FifoMessageTracker {
            capacity,
            log_evictions: true,
            inner: Arc::new(Mutex::new(FifoMessageTrackerInner {
                messages: HashMap::with_capacity(capacity.get()),
                order: VecDeque::with_capacity(capacity.get()),
                stats: TrackerStats::default(),
            })),
        }
    }

    pub fn from_config(config: &MessageTrackerConfig) -> Self {
        let mut tracker = Self::with_capacity(config.capacity);
        tracker.log_evictions = config.debug.log_evictions;
        tracker
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().order.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().messages.contains_key(id)
    }

    pub fn stats(&self) -> TrackerStats {
        self.lock().stats
    }

    // none of the critical sections can panic half-way through a mutation,
    // so even if some other thread panicked while holding the guard, the state is still consistent
    fn lock(&self) -> MutexGuard<'_, FifoMessageTrackerInner> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("message tracker mutex got poisoned. recovering the inner state");
            PoisonError::into_inner(poisoned)
        })
    }

    fn log_eviction(&self, evicted: &Message) {
        if self.log_evictions {
            debug!(
                evicted = %evicted.id,
                capacity = self.capacity.get(),
                "message tracker is full - evicted the oldest message"
            );
        } else {
            trace!(
                evicted = %evicted.id,
                capacity = self.capacity.get(),
                "message tracker is full - evicted the oldest message"
            );
        }
    }
}

impl FifoMessageTrackerInner {
    fn evict_oldest(&mut self) -> Option<Arc<Message>> {
        let oldest = self.order.pop_front()?;
        let evicted = self.messages.remove(&oldest);
        if evicted.is_some() {
            self.stats.evicted += 1;
        }
        evicted
    }
}

impl MessageTracker for FifoMessageTracker {
    fn add(&self, message: Message) -> AddOutcome {
        let mut guard = self.lock();

        if guard.messages.contains_key(&message.id) {
            trace!(id = %message.id, "ignoring already tracked message");
            guard.stats.duplicates += 1;
            return AddOutcome::Duplicate;
        }

        trace!(id = %message.id, peer = %message.peer_id, "tracking new message");
        guard.order.push_back(message.id.clone());
        guard.messages.insert(message.id.clone(), Arc::new(message));
        guard.stats.inserted += 1;

        if guard.order.len() > self.capacity.get() {
            if let Some(evicted) = guard.evict_oldest() {
                drop(guard);
                self.log_eviction(&evicted);
                return AddOutcome::Evicted(evicted);
            }
        }

        AddOutcome::Inserted
    }

    fn delete(&self, id: &str) -> Result<(), MessageTrackerError> {
        let mut guard = self.lock();

        if guard.messages.remove(id).is_none() {
            return Err(MessageTrackerError::not_found(id));
        }

        // VecDeque::remove shifts the tail, so the relative order of the survivors is preserved
        if let Some(position) = guard.order.iter().position(|tracked| tracked == id) {
            guard.order.remove(position);
        }
        guard.stats.deleted += 1;
        debug!(id, "deleted tracked message");

        Ok(())
    }

    fn message(&self, id: &str) -> Result<Arc<Message>, MessageTrackerError> {
        self.lock()
            .messages
            .get(id)
            .cloned()
            .ok_or_else(|| MessageTrackerError::not_found(id))
    }

    fn messages(&self) -> Vec<Arc<Message>> {
        let guard = self.lock();

        guard
            .order
            .iter()
            .filter_map(|id| guard.messages.get(id).cloned())
            .collect()
    }
}
