//! Publish/subscribe seam between the pallet store and its boards.
//!
//! The store stays the source of truth. A message only says "re-fetch", so a
//! board that reads several queued changes at once refreshes a single time.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to a message stream (broadcast: every subscriber gets a copy).
///
/// Meant to be drained by a single thread.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Wait up to `timeout` for one message, then take everything already
    /// queued behind it, in arrival order. Never returns an empty batch.
    pub fn recv_batch(&self, timeout: Duration) -> Result<Vec<M>, std::sync::mpsc::RecvTimeoutError> {
        let first = self.receiver.recv_timeout(timeout)?;
        let mut batch = vec![first];
        batch.extend(self.receiver.try_iter());
        Ok(batch)
    }
}

/// Transport-agnostic pub/sub bus.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
