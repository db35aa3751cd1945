//! Single-process fan-out of change notifications.

use std::sync::{Mutex, mpsc};

use thiserror::Error;
use tracing::trace;

use crate::bus::{EventBus, Subscription};
use crate::event::Event;

#[derive(Debug, Error)]
pub enum InMemoryBusError {
    #[error("subscriber list lock poisoned")]
    Poisoned,
}

/// Delivery counters since the bus was created.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BusStats {
    pub published: u64,
    /// Copies handed to live subscriptions.
    pub delivered: u64,
    /// Subscriptions dropped because their receiver had gone away.
    pub pruned: u64,
}

#[derive(Debug)]
struct Subscribers<M> {
    senders: Vec<mpsc::Sender<M>>,
    stats: BusStats,
}

/// In-memory bus: every live subscription receives its own copy of each event.
///
/// Subscriptions whose receiver was dropped are pruned on the next publish, so
/// a board that closes stops costing anything after one more change.
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    subscribers: Mutex<Subscribers<M>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of subscriptions still registered (dead ones linger until the
    /// next publish).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|subs| subs.senders.len()).unwrap_or(0)
    }

    pub fn stats(&self) -> BusStats {
        self.subscribers.lock().map(|subs| subs.stats).unwrap_or_default()
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Subscribers {
                senders: Vec::new(),
                stats: BusStats::default(),
            }),
        }
    }
}

impl<M: Event> EventBus<M> for InMemoryEventBus<M> {
    type Error = InMemoryBusError;

    fn publish(&self, event: M) -> Result<(), Self::Error> {
        let mut subs = self.subscribers.lock().map_err(|_| InMemoryBusError::Poisoned)?;

        let before = subs.senders.len();
        subs.senders.retain(|tx| tx.send(event.clone()).is_ok());
        let delivered = subs.senders.len();
        let pruned = before - delivered;

        subs.stats.published += 1;
        subs.stats.delivered += delivered as u64;
        subs.stats.pruned += pruned as u64;

        trace!(
            event = event.event_type(),
            at = %event.occurred_at(),
            delivered,
            pruned,
            "event published"
        );
        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        // A poisoned lock still yields a subscription; it just never receives.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.senders.push(tx);
        }

        Subscription::new(rx)
    }
}
