use std::path::Path;

use anyhow::Context;

use palletrack_inventory::Pallet;

/// Read a JSON array of stored pallet rows.
pub fn load_snapshot(path: &Path) -> anyhow::Result<Vec<Pallet>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot at {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot at {}", path.display()))
}
