use std::sync::Arc;

use anyhow::Context;
use chrono::{Local, Offset};
use clap::Parser;
use tracing::info;

use palletrack_board::{Args, RenderOptions, load_snapshot, render_board};
use palletrack_events::{InMemoryEventBus, PalletChange};
use palletrack_infra::{InMemoryPalletStore, PalletStore, TrackerConfig};
use palletrack_inventory::board;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    palletrack_observability::init();

    let config = args.apply(TrackerConfig::from_env().context("failed to load configuration")?);

    let store = InMemoryPalletStore::new(Arc::new(InMemoryEventBus::<PalletChange>::new()));
    let loaded = store.seed(load_snapshot(&args.snapshot)?)?;
    info!(loaded, view = ?config.view, search = %config.search, "snapshot loaded");

    let snapshot = store.fetch(config.view)?;
    let groups = board(&snapshot, config.view, &config.search);
    info!(sections = groups.len(), shown = groups.iter().map(|g| g.len()).sum::<usize>(), "board built");

    let options = RenderOptions {
        view: config.view,
        offset: Local::now().offset().fix(),
    };
    print!("{}", render_board(&groups, &options));
    Ok(())
}
