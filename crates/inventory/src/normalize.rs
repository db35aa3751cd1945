//! Display-only description cleanup. Nothing here is written back to a record.

use crate::catalog::rule;
use crate::category::Category;
use crate::grade::Grade;
use crate::pallet::Pallet;

/// Remove a leading copy of the grade (case-insensitive, per character),
/// trimming what remains.
pub fn strip_grade_prefix<'a>(description: &'a str, grade: Option<&Grade>) -> &'a str {
    let Some(grade) = grade.map(Grade::as_str) else {
        return description;
    };
    let mut chars = description.char_indices();
    let mut end = 0;
    for expected in grade.chars() {
        match chars.next() {
            Some((i, c)) if c.to_lowercase().eq(expected.to_lowercase()) => end = i + c.len_utf8(),
            _ => return description,
        }
    }
    description[end..].trim()
}

/// Strip the category's own name and collapse whitespace.
pub fn clean_description(description: &str, category: Category) -> String {
    let stripped = match rule(category).noise_pattern() {
        Some(pattern) => pattern.replace_all(description, ""),
        None => description.into(),
    };
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Board text for a pallet: grade prefix removed, then [`clean_description`].
pub fn display_description(pallet: &Pallet) -> String {
    let description = strip_grade_prefix(&pallet.description, pallet.grade.as_ref());
    clean_description(description, pallet.category)
}

/// List-card text: grade prefix removed, category label appended except for
/// MISC and OTHER.
pub fn card_description(pallet: &Pallet) -> String {
    let description = strip_grade_prefix(&pallet.description, pallet.grade.as_ref());
    let suffix = match pallet.category {
        Category::Misc | Category::Other => "",
        other => other.label(),
    };
    format!("{description} {suffix}").trim().to_string()
}
