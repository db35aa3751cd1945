use crate::category::Category;
use crate::ordering::sort_within;
use crate::pallet::Pallet;

/// One board section: a category and its pallets in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub items: Vec<&'a Pallet>,
}

impl CategoryGroup<'_> {
    pub fn heading(&self) -> Option<&'static str> {
        self.category.heading()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partition a snapshot by category and order each partition.
///
/// Sections come out in [`Category::DISPLAY_ORDER`]; categories without pallets
/// are omitted. The snapshot is only borrowed.
pub fn group_by_category<'a, I>(items: I) -> Vec<CategoryGroup<'a>>
where
    I: IntoIterator<Item = &'a Pallet>,
{
    let mut buckets: [Vec<&'a Pallet>; 8] = Default::default();
    for pallet in items {
        buckets[pallet.category.index()].push(pallet);
    }

    Category::DISPLAY_ORDER
        .into_iter()
        .zip(buckets)
        .filter(|(_, items)| !items.is_empty())
        .map(|(category, mut items)| {
            sort_within(category, &mut items);
            CategoryGroup { category, items }
        })
        .collect()
}
