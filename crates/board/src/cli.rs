use std::path::PathBuf;

use clap::Parser;

use palletrack_infra::TrackerConfig;
use palletrack_inventory::ViewMode;

/// Print the pallet board for a JSON snapshot of stored rows.
#[derive(Debug, Parser)]
#[command(name = "palletrack-board", version)]
pub struct Args {
    /// JSON array of pallet rows
    pub snapshot: PathBuf,

    /// Board to show: active or history (overrides PALLETRACK_VIEW)
    #[arg(long)]
    pub view: Option<ViewMode>,

    /// Pallet-number search (overrides PALLETRACK_SEARCH)
    #[arg(long)]
    pub search: Option<String>,
}

impl Args {
    /// Command-line flags win over file and environment settings.
    pub fn apply(&self, mut config: TrackerConfig) -> TrackerConfig {
        if let Some(view) = self.view {
            config.view = view;
        }
        if let Some(search) = &self.search {
            config.search = search.trim().to_string();
        }
        config
    }
}
