//! Persistence collaborator for pallets.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryPalletStore;
pub use r#trait::{PalletStore, StoreError};
