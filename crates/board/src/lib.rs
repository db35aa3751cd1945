//! Text rendering of the pallet board, snapshot loading and the CLI arguments.

pub mod cli;
pub mod render;
pub mod snapshot;

pub use cli::Args;
pub use render::{RenderOptions, render_board};
pub use snapshot::load_snapshot;
