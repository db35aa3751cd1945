//! Ordering of pallets inside one category.

use core::cmp::Ordering;

use crate::catalog::{ALWAYS_LAST, CategoryRule, OTHER_DESCRIPTION, rule};
use crate::category::Category;
use crate::pallet::Pallet;

/// Compare two pallets of `category` for board order.
///
/// Categories without a priority list are newest first. Otherwise:
/// `D/F` descriptions go last, listed descriptions follow list order and come
/// before unlisted ones. Ties at the same rank, and unlisted pairs, fall back
/// to newest first, so input order never decides.
pub fn compare_within(category: Category, a: &Pallet, b: &Pallet) -> Ordering {
    let rule = rule(category);
    if !rule.has_priority() {
        return newest_first(a, b);
    }
    compare_by_priority(rule, a, b)
}

/// Stable sort of a partition into board order.
pub fn sort_within(category: Category, items: &mut [&Pallet]) {
    items.sort_by(|a, b| compare_within(category, a, b));
}

fn compare_by_priority(rule: &CategoryRule, a: &Pallet, b: &Pallet) -> Ordering {
    let a_desc = sort_label(&a.description);
    let b_desc = sort_label(&b.description);

    match (a_desc == ALWAYS_LAST, b_desc == ALWAYS_LAST) {
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        _ => {}
    }

    match (rule.priority_index(&a_desc), rule.priority_index(&b_desc)) {
        (Some(ai), Some(bi)) => ai.cmp(&bi).then_with(|| newest_first(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => newest_first(a, b),
    }
}

/// Uppercased description; blank compares as `OTHER`.
fn sort_label(description: &str) -> String {
    if description.is_empty() {
        OTHER_DESCRIPTION.to_string()
    } else {
        description.to_uppercase()
    }
}

fn newest_first(a: &Pallet, b: &Pallet) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use palletrack_core::ItemId;

    use crate::pallet::PalletNumber;

    fn t(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn pallet(category: Category, description: &str, created_at: DateTime<Utc>) -> Pallet {
        Pallet {
            id: ItemId::new(),
            pallet_number: PalletNumber::new(format!("PL-{description}")),
            category,
            grade: None,
            description: description.to_string(),
            notes: None,
            is_retired: false,
            created_at,
            retired_at: None,
        }
    }

    fn sorted_descriptions(category: Category, pallets: &[Pallet]) -> Vec<String> {
        let mut refs: Vec<&Pallet> = pallets.iter().collect();
        sort_within(category, &mut refs);
        refs.iter().map(|p| p.description.clone()).collect()
    }

    #[test]
    fn priority_list_beats_recency() {
        let pallets = vec![
            pallet(Category::Desktops, "B/C 3RD GEN", t(0)),
            pallet(Category::Desktops, "B/C 1-2ND GEN", t(10)),
        ];
        assert_eq!(
            sorted_descriptions(Category::Desktops, &pallets),
            vec!["B/C 1-2ND GEN", "B/C 3RD GEN"]
        );
    }

    #[test]
    fn df_sorts_last_regardless_of_age() {
        let pallets = vec![
            pallet(Category::Desktops, "D/F", t(0)),
            pallet(Category::Desktops, "B/C 5-7TH GEN", t(-60)),
        ];
        assert_eq!(
            sorted_descriptions(Category::Desktops, &pallets),
            vec!["B/C 5-7TH GEN", "D/F"]
        );
    }

    #[test]
    fn df_sorts_last_even_where_unlisted() {
        let df = pallet(Category::Displays, "d/f", t(0));
        let unlisted = pallet(Category::Displays, "CRT", t(-60));
        assert_eq!(compare_within(Category::Displays, &df, &unlisted), Ordering::Greater);
        assert_eq!(compare_within(Category::Displays, &unlisted, &df), Ordering::Less);
    }

    #[test]
    fn listed_before_unlisted_and_unlisted_newest_first() {
        let pallets = vec![
            pallet(Category::Laptops, "THINKPADS", t(0)),
            pallet(Category::Laptops, "MACBOOKS", t(5)),
            pallet(Category::Laptops, "b/c ↑ 5th gen", t(-30)),
            pallet(Category::Laptops, "OTHER", t(-40)),
        ];
        assert_eq!(
            sorted_descriptions(Category::Laptops, &pallets),
            vec!["b/c ↑ 5th gen", "OTHER", "MACBOOKS", "THINKPADS"]
        );
    }

    #[test]
    fn blank_description_sorts_as_other() {
        let blank = pallet(Category::Aio, "", t(0));
        let other = pallet(Category::Aio, "OTHER", t(5));
        let gen8 = pallet(Category::Aio, "↑ 8TH GEN", t(-5));
        assert_eq!(compare_within(Category::Aio, &blank, &other), Ordering::Equal);
        assert_eq!(compare_within(Category::Aio, &gen8, &blank), Ordering::Less);
    }

    #[test]
    fn chronological_categories_are_newest_first() {
        for category in [Category::Workstations, Category::Misc, Category::Other] {
            let pallets = vec![
                pallet(category, "older", t(0)),
                pallet(category, "D/F", t(10)),
            ];
            assert_eq!(sorted_descriptions(category, &pallets), vec!["D/F", "older"]);
        }
    }

    #[test]
    fn grade_does_not_affect_order() {
        let mut low = pallet(Category::Chromebooks, "B/C MANAGED", t(0));
        low.grade = crate::grade::Grade::new("F");
        let plain = pallet(Category::Chromebooks, "B/C NON-MANAGED", t(10));
        assert_eq!(compare_within(Category::Chromebooks, &low, &plain), Ordering::Less);
    }

    #[test]
    fn equal_priority_falls_back_to_newest_first() {
        let pallets = vec![
            pallet(Category::Desktops, "B/C 4TH GEN", t(0)),
            pallet(Category::Desktops, "B/C 4TH GEN", t(30)),
        ];
        let mut refs: Vec<&Pallet> = pallets.iter().collect();
        sort_within(Category::Desktops, &mut refs);
        assert_eq!(refs[0].created_at, t(30));
        assert_eq!(refs[1].created_at, t(0));
    }

    #[test]
    fn two_df_pallets_are_newest_first() {
        for category in [Category::Desktops, Category::Displays] {
            let older = pallet(category, "D/F", t(0));
            let newer = pallet(category, "d/f", t(15));
            let listed = pallet(category, "OTHER", t(-60));
            let pallets = vec![older, listed, newer];
            let mut refs: Vec<&Pallet> = pallets.iter().collect();
            sort_within(category, &mut refs);
            let times: Vec<DateTime<Utc>> = refs.iter().map(|p| p.created_at).collect();
            assert_eq!(times, vec![t(-60), t(15), t(0)]);
        }
    }

    #[test]
    fn history_view_does_not_leak_retirement_order() {
        let mut old = pallet(Category::Desktops, "B/C 4TH GEN", t(0));
        let mut new = pallet(Category::Desktops, "B/C 4TH GEN", t(30));
        old.retire(t(120)).unwrap();
        new.retire(t(60)).unwrap();
        let snapshot = vec![old, new];

        let groups = crate::view::board(&snapshot, crate::view::ViewMode::History, "");
        let times: Vec<DateTime<Utc>> = groups[0].items.iter().map(|p| p.created_at).collect();
        assert_eq!(times, vec![t(30), t(0)]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_category() -> impl Strategy<Value = Category> {
            prop::sample::select(Category::DISPLAY_ORDER.to_vec())
        }

        fn any_description() -> impl Strategy<Value = String> {
            prop_oneof![
                prop::sample::select(vec![
                    "B/C 1-2ND GEN",
                    "B/C 3RD GEN",
                    "B/C ↑ 8TH GEN",
                    "B/C ↓ 4TH GEN",
                    "5-7TH GEN",
                    "B LCD",
                    "C LCD",
                    "B/C MANAGED",
                    "D",
                    "F",
                    "OTHER",
                    "D/F",
                    "d/f",
                    "",
                ])
                .prop_map(str::to_string),
                "[A-Z ]{1,10}",
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: swapping the operands reverses the ordering.
            #[test]
            fn comparison_is_antisymmetric(
                category in any_category(),
                a_desc in any_description(),
                b_desc in any_description(),
                a_min in 0i64..5,
                b_min in 0i64..5,
            ) {
                let a = pallet(category, &a_desc, t(a_min));
                let b = pallet(category, &b_desc, t(b_min));
                prop_assert_eq!(
                    compare_within(category, &a, &b),
                    compare_within(category, &b, &a).reverse()
                );
            }

            /// Property: `D/F` is after every other description in prioritized categories.
            #[test]
            fn df_is_always_last(
                category in any_category(),
                other_desc in any_description(),
                a_min in 0i64..100,
                b_min in 0i64..100,
            ) {
                prop_assume!(rule(category).has_priority());
                prop_assume!(other_desc.to_uppercase() != ALWAYS_LAST);
                let df = pallet(category, ALWAYS_LAST, t(a_min));
                let other = pallet(category, &other_desc, t(b_min));
                prop_assert_eq!(compare_within(category, &df, &other), Ordering::Greater);
            }

            /// Property: a sorted partition is ordered pairwise.
            #[test]
            fn sorted_output_is_pairwise_ordered(
                category in any_category(),
                entries in prop::collection::vec((any_description(), 0i64..50), 0..20),
            ) {
                let pallets: Vec<Pallet> = entries
                    .iter()
                    .map(|(d, m)| pallet(category, d, t(*m)))
                    .collect();
                let mut refs: Vec<&Pallet> = pallets.iter().collect();
                sort_within(category, &mut refs);
                for pair in refs.windows(2) {
                    prop_assert_ne!(compare_within(category, pair[0], pair[1]), Ordering::Greater);
                    if sort_label(&pair[0].description) == sort_label(&pair[1].description) {
                        prop_assert!(pair[0].created_at >= pair[1].created_at);
                    }
                }
            }
        }
    }
}
