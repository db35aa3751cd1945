//! Change notifications for the pallet store.
//!
//! The store publishes one [`PalletChange`] per successful write; consumers
//! treat every message as "the snapshot is stale" and re-fetch.

pub mod bus;
pub mod change;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use change::{ChangeKind, PalletChange};
pub use event::Event;
pub use in_memory_bus::{BusStats, InMemoryBusError, InMemoryEventBus};
