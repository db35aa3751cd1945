//! Plain-text board rendering.

use core::fmt::Write;

use chrono::FixedOffset;

use palletrack_inventory::{Category, CategoryGroup, Pallet, ViewMode, display_description, format_timestamp};

/// How the board is laid out on a terminal.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub view: ViewMode,
    /// Offset used for all printed timestamps.
    pub offset: FixedOffset,
}

/// One block per section: heading with count (none for MISC), then one line
/// per pallet.
pub fn render_board(groups: &[CategoryGroup<'_>], options: &RenderOptions) -> String {
    if groups.is_empty() {
        return match options.view {
            ViewMode::Active => "no active pallets\n".to_string(),
            ViewMode::History => "no retired pallets\n".to_string(),
        };
    }

    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if let Some(heading) = group.heading() {
            let _ = writeln!(out, "{heading} ({})", group.len());
        }
        for pallet in &group.items {
            out.push_str(&render_row(pallet, group.category, options));
            out.push('\n');
        }
    }
    out
}

fn render_row(pallet: &Pallet, category: Category, options: &RenderOptions) -> String {
    let mut row = format!("  {:<10}", pallet.pallet_number.as_str());

    match &pallet.grade {
        Some(grade) if grade.is_low() => {
            let _ = write!(row, " [{grade}!]");
        }
        Some(grade) => {
            let _ = write!(row, " [{grade}]");
        }
        None => {}
    }

    let description = display_description(pallet);
    if !description.is_empty() {
        let _ = write!(row, " {description}");
    }

    if options.view == ViewMode::Active {
        if let Some(notes) = pallet.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            let _ = write!(row, " | {}", notes.trim());
        }
    }

    // MISC rows carry no timestamps.
    if category != Category::Misc {
        let created = format_timestamp(&pallet.created_at.with_timezone(&options.offset));
        match (options.view, pallet.retired_at) {
            (ViewMode::History, Some(retired_at)) => {
                let retired = format_timestamp(&retired_at.with_timezone(&options.offset));
                let _ = write!(row, "  {created} -> {retired}");
            }
            _ => {
                let _ = write!(row, "  {created}");
            }
        }
    }

    row
}
