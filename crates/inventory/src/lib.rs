//! Pallet inventory domain module.
//!
//! This crate contains the categorization and display-ordering rules for
//! pallets, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage). Every grouping call works on an immutable snapshot it does not
//! own.

pub mod catalog;
pub mod category;
pub mod format;
pub mod grade;
pub mod grouping;
pub mod normalize;
pub mod ordering;
pub mod pallet;
pub mod view;

pub use catalog::{ALWAYS_LAST, CategoryRule, OTHER_DESCRIPTION, auto_grade, rule};
pub use category::Category;
pub use format::format_timestamp;
pub use grade::Grade;
pub use grouping::{CategoryGroup, group_by_category};
pub use normalize::{card_description, clean_description, display_description, strip_grade_prefix};
pub use ordering::{compare_within, sort_within};
pub use pallet::{Pallet, PalletDraft, PalletFields, PalletNumber};
pub use view::{ViewMode, board, filter_by_number};
