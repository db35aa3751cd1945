use std::sync::Arc;

use thiserror::Error;

use palletrack_core::{DomainError, ItemId};
use palletrack_inventory::{Pallet, PalletFields, ViewMode};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("pallet not found: {0}")]
    NotFound(ItemId),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("store lock poisoned")]
    Poisoned,

    /// The write committed but the change notification did not go out.
    #[error("change notification failed: {0}")]
    Publish(String),
}

/// Fetch/insert/update/delete contract of the backing store.
///
/// Every successful write is followed by a change notification so subscribers
/// can re-fetch.
pub trait PalletStore: Send + Sync {
    /// Current snapshot of one view, in the view's listing order.
    fn fetch(&self, view: ViewMode) -> Result<Vec<Pallet>, StoreError>;

    fn get(&self, id: ItemId) -> Result<Pallet, StoreError>;

    /// Store a new, active pallet. The store assigns id and creation time.
    fn insert(&self, fields: PalletFields) -> Result<Pallet, StoreError>;

    fn update(&self, id: ItemId, fields: PalletFields) -> Result<Pallet, StoreError>;

    fn retire(&self, id: ItemId) -> Result<Pallet, StoreError>;

    fn unretire(&self, id: ItemId) -> Result<Pallet, StoreError>;

    fn delete(&self, id: ItemId) -> Result<(), StoreError>;
}

impl<S> PalletStore for Arc<S>
where
    S: PalletStore + ?Sized,
{
    fn fetch(&self, view: ViewMode) -> Result<Vec<Pallet>, StoreError> {
        (**self).fetch(view)
    }

    fn get(&self, id: ItemId) -> Result<Pallet, StoreError> {
        (**self).get(id)
    }

    fn insert(&self, fields: PalletFields) -> Result<Pallet, StoreError> {
        (**self).insert(fields)
    }

    fn update(&self, id: ItemId, fields: PalletFields) -> Result<Pallet, StoreError> {
        (**self).update(id, fields)
    }

    fn retire(&self, id: ItemId) -> Result<Pallet, StoreError> {
        (**self).retire(id)
    }

    fn unretire(&self, id: ItemId) -> Result<Pallet, StoreError> {
        (**self).unretire(id)
    }

    fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        (**self).delete(id)
    }
}
