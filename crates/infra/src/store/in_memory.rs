use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use tracing::debug;

use palletrack_core::{Entity, ItemId};
use palletrack_events::{Event, EventBus, PalletChange};
use palletrack_inventory::{Pallet, PalletFields, ViewMode};

use super::r#trait::{PalletStore, StoreError};

/// In-memory pallet table that publishes a [`PalletChange`] after every write.
///
/// Intended for tests/dev and the board binary. Notification happens only after
/// the write lock is released, so a subscriber that re-fetches immediately
/// sees the committed row.
#[derive(Debug)]
pub struct InMemoryPalletStore<B> {
    rows: RwLock<HashMap<ItemId, Pallet>>,
    bus: B,
    clock: fn() -> DateTime<Utc>,
}

impl<B> InMemoryPalletStore<B>
where
    B: EventBus<PalletChange>,
{
    pub fn new(bus: B) -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            bus,
            clock: Utc::now,
        }
    }

    /// Replace the time source used for creation and retirement stamps.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Load existing rows as-is, without notifications. Returns the row count.
    pub fn seed(&self, pallets: impl IntoIterator<Item = Pallet>) -> Result<usize, StoreError> {
        let mut rows = self.rows.write().map_err(|_| StoreError::Poisoned)?;
        for pallet in pallets {
            rows.insert(*pallet.id(), pallet);
        }
        Ok(rows.len())
    }

    fn notify(&self, change: PalletChange) -> Result<(), StoreError> {
        debug!(event = change.event_type(), pallet_id = %change.pallet_id, "pallet change committed");
        self.bus
            .publish(change)
            .map_err(|err| StoreError::Publish(format!("{err:?}")))
    }

    /// Run `f` against one row under the write lock, then notify an update.
    fn modify<F>(&self, id: ItemId, f: F) -> Result<Pallet, StoreError>
    where
        F: FnOnce(&mut Pallet) -> Result<(), StoreError>,
    {
        let updated = {
            let mut rows = self.rows.write().map_err(|_| StoreError::Poisoned)?;
            let pallet = rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
            f(pallet)?;
            pallet.clone()
        };
        self.notify(PalletChange::updated(id, (self.clock)()))?;
        Ok(updated)
    }
}

impl<B> PalletStore for InMemoryPalletStore<B>
where
    B: EventBus<PalletChange>,
{
    fn fetch(&self, view: ViewMode) -> Result<Vec<Pallet>, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::Poisoned)?;
        let mut pallets: Vec<Pallet> = rows.values().filter(|p| view.includes(p)).cloned().collect();
        pallets.sort_by(|a, b| view.compare(a, b));
        Ok(pallets)
    }

    fn get(&self, id: ItemId) -> Result<Pallet, StoreError> {
        let rows = self.rows.read().map_err(|_| StoreError::Poisoned)?;
        rows.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn insert(&self, fields: PalletFields) -> Result<Pallet, StoreError> {
        let now = (self.clock)();
        let pallet = Pallet::new(ItemId::new(), fields, now);
        {
            let mut rows = self.rows.write().map_err(|_| StoreError::Poisoned)?;
            rows.insert(pallet.id, pallet.clone());
        }
        self.notify(PalletChange::inserted(pallet.id, now))?;
        Ok(pallet)
    }

    fn update(&self, id: ItemId, fields: PalletFields) -> Result<Pallet, StoreError> {
        self.modify(id, |pallet| {
            pallet.edit(fields);
            Ok(())
        })
    }

    fn retire(&self, id: ItemId) -> Result<Pallet, StoreError> {
        let now = (self.clock)();
        self.modify(id, |pallet| Ok(pallet.retire(now)?))
    }

    fn unretire(&self, id: ItemId) -> Result<Pallet, StoreError> {
        self.modify(id, |pallet| Ok(pallet.unretire()?))
    }

    fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        {
            let mut rows = self.rows.write().map_err(|_| StoreError::Poisoned)?;
            rows.remove(&id).ok_or(StoreError::NotFound(id))?;
        }
        self.notify(PalletChange::deleted(id, (self.clock)()))
    }
}
