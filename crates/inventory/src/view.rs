//! Active/history views and the number search used by the board.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use palletrack_core::DomainError;

use crate::grouping::{CategoryGroup, group_by_category};
use crate::pallet::Pallet;

/// Which lifecycle partition is on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Active,
    History,
}

impl ViewMode {
    pub fn includes(self, pallet: &Pallet) -> bool {
        match self {
            ViewMode::Active => !pallet.is_retired,
            ViewMode::History => pallet.is_retired,
        }
    }

    /// Listing order: newest created first (active), newest retired first (history).
    pub fn compare(self, a: &Pallet, b: &Pallet) -> Ordering {
        match self {
            ViewMode::Active => b.created_at.cmp(&a.created_at),
            ViewMode::History => b.retired_at.cmp(&a.retired_at),
        }
    }

    /// Pallets in this view, in listing order.
    pub fn select(self, snapshot: &[Pallet]) -> Vec<&Pallet> {
        let mut selected: Vec<&Pallet> = snapshot.iter().filter(|p| self.includes(p)).collect();
        selected.sort_by(|a, b| self.compare(a, b));
        selected
    }
}

impl FromStr for ViewMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ViewMode::Active),
            "history" => Ok(ViewMode::History),
            other => Err(DomainError::validation(format!("unknown view mode: {other}"))),
        }
    }
}

/// Keep pallets whose number contains `query` (case-insensitive), in input order.
pub fn filter_by_number<'a>(items: Vec<&'a Pallet>, query: &str) -> Vec<&'a Pallet> {
    if query.is_empty() {
        return items;
    }
    items.into_iter().filter(|p| p.pallet_number.matches(query)).collect()
}

/// Snapshot -> view -> search -> category sections.
pub fn board<'a>(snapshot: &'a [Pallet], view: ViewMode, query: &str) -> Vec<CategoryGroup<'a>> {
    group_by_category(filter_by_number(view.select(snapshot), query))
}
