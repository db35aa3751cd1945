//! Static per-category configuration table.
//!
//! Classification, normalization and ordering all read from this one table so a
//! new category only needs a new row.

use std::sync::LazyLock;

use regex::Regex;

use crate::category::Category;
use crate::grade::Grade;

/// Description label that sorts after every other description in a prioritized
/// category, whatever its list position.
pub const ALWAYS_LAST: &str = "D/F";

/// Catch-all description label; also what a blank description compares as.
pub const OTHER_DESCRIPTION: &str = "OTHER";

/// Configuration for one category.
#[derive(Debug)]
pub struct CategoryRule {
    pub category: Category,
    /// Canonical description labels in display precedence. Empty means the
    /// category is ordered newest first.
    pub priority: &'static [&'static str],
    /// Description choices offered when entering a pallet.
    pub descriptions: &'static [&'static str],
    /// Grades implied by picking a canonical description.
    auto_grades: &'static [(&'static str, &'static str)],
    /// Grade for any other non-`OTHER` description.
    fallback_grade: Option<&'static str>,
    /// Whole-word, case-insensitive pattern for the category's own name.
    noise: Option<&'static str>,
}

impl CategoryRule {
    pub fn has_priority(&self) -> bool {
        !self.priority.is_empty()
    }

    /// Index of an (uppercased) description in the priority list.
    pub fn priority_index(&self, description: &str) -> Option<usize> {
        self.priority.iter().position(|label| *label == description)
    }

    pub fn noise_pattern(&self) -> Option<&'static Regex> {
        NOISE_PATTERNS[self.category.index()].as_ref()
    }
}

static RULES: [CategoryRule; 8] = [
    CategoryRule {
        category: Category::Misc,
        priority: &[],
        descriptions: &[],
        auto_grades: &[],
        fallback_grade: None,
        noise: None,
    },
    CategoryRule {
        category: Category::Desktops,
        priority: &[
            "B/C 1-2ND GEN",
            "B/C 3RD GEN",
            "B/C 4TH GEN",
            "B/C 5-7TH GEN",
            "B/C ↑ 8TH GEN",
            "OTHER",
            "D/F",
        ],
        descriptions: &[
            "B/C 1-2ND GEN",
            "B/C 3RD GEN",
            "B/C 4TH GEN",
            "B/C 5-7TH GEN",
            "B/C ↑ 8TH GEN",
            "D/F",
            "OTHER",
        ],
        auto_grades: &[("D/F", "D/F")],
        fallback_grade: Some("B/C"),
        noise: Some(r"(?i)\bdesktops?\b"),
    },
    CategoryRule {
        category: Category::Laptops,
        priority: &["B/C ↓ 4TH GEN", "B/C ↑ 5TH GEN", "OTHER", "D/F"],
        descriptions: &["B/C ↓ 4TH GEN", "B/C ↑ 5TH GEN", "D/F", "OTHER"],
        auto_grades: &[("D/F", "D/F")],
        fallback_grade: Some("B/C"),
        noise: Some(r"(?i)\blaptops?\b"),
    },
    CategoryRule {
        category: Category::Aio,
        priority: &["5-7TH GEN", "↑ 8TH GEN", "OTHER", "D/F"],
        descriptions: &["5-7TH GEN", "↑ 8TH GEN", "D/F", "OTHER"],
        auto_grades: &[("D/F", "D/F"), ("5-7TH GEN", "B/C"), ("↑ 8TH GEN", "B/C")],
        fallback_grade: None,
        noise: Some(r"(?i)\bAIO\b"),
    },
    CategoryRule {
        category: Category::Displays,
        priority: &["B LCD", "C LCD", "OTHER"],
        descriptions: &["B LCD", "C LCD", "OTHER"],
        auto_grades: &[("B LCD", "B"), ("C LCD", "C")],
        fallback_grade: None,
        noise: Some(r"(?i)\b(displays?|monitors?)\b"),
    },
    CategoryRule {
        category: Category::Workstations,
        priority: &[],
        descriptions: &[],
        auto_grades: &[],
        fallback_grade: None,
        noise: None,
    },
    CategoryRule {
        category: Category::Chromebooks,
        priority: &["B/C MANAGED", "B/C NON-MANAGED", "D", "F", "OTHER"],
        descriptions: &["B/C MANAGED", "B/C NON-MANAGED", "D", "F", "OTHER"],
        auto_grades: &[
            ("B/C MANAGED", "B/C"),
            ("B/C NON-MANAGED", "B/C"),
            ("D", "D"),
            ("F", "F"),
        ],
        fallback_grade: None,
        noise: Some(r"(?i)\bchromebooks?\b"),
    },
    CategoryRule {
        category: Category::Other,
        priority: &[],
        descriptions: &[],
        auto_grades: &[],
        fallback_grade: None,
        noise: None,
    },
];

static NOISE_PATTERNS: LazyLock<[Option<Regex>; 8]> = LazyLock::new(|| {
    RULES
        .each_ref()
        .map(|rule| rule.noise.map(|p| Regex::new(p).expect("static noise pattern must compile")))
});

/// Configuration row for a category.
pub fn rule(category: Category) -> &'static CategoryRule {
    &RULES[category.index()]
}

/// Grade implied by choosing a canonical description for a category.
pub fn auto_grade(category: Category, description: &str) -> Option<Grade> {
    if description == OTHER_DESCRIPTION {
        return None;
    }
    let rule = rule(category);
    rule.auto_grades
        .iter()
        .find(|(label, _)| *label == description)
        .map(|(_, grade)| *grade)
        .or(rule.fallback_grade)
        .and_then(Grade::new)
}
