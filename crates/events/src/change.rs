use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use palletrack_core::ItemId;

use crate::event::Event;

/// What happened to the row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Inserted,
    Updated,
    Deleted,
}

/// A committed write against the pallet store.
///
/// Retire and unretire are updates of the lifecycle fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalletChange {
    pub kind: ChangeKind,
    pub pallet_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

impl PalletChange {
    pub fn inserted(pallet_id: ItemId, occurred_at: DateTime<Utc>) -> Self {
        Self { kind: ChangeKind::Inserted, pallet_id, occurred_at }
    }

    pub fn updated(pallet_id: ItemId, occurred_at: DateTime<Utc>) -> Self {
        Self { kind: ChangeKind::Updated, pallet_id, occurred_at }
    }

    pub fn deleted(pallet_id: ItemId, occurred_at: DateTime<Utc>) -> Self {
        Self { kind: ChangeKind::Deleted, pallet_id, occurred_at }
    }
}

impl Event for PalletChange {
    fn event_type(&self) -> &'static str {
        match self.kind {
            ChangeKind::Inserted => "pallet.inserted",
            ChangeKind::Updated => "pallet.updated",
            ChangeKind::Deleted => "pallet.deleted",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
