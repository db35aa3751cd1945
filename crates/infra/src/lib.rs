//! Infrastructure layer: the pallet store, change-driven board refresh, config.

pub mod config;
pub mod store;
pub mod workers;

pub use config::{ConfigError, TrackerConfig};
pub use store::{InMemoryPalletStore, PalletStore, StoreError};
pub use workers::board_refresher::{BoardRefresher, WorkerHandle};
