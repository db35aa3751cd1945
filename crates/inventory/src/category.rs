use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed set of pallet categories.
///
/// Declaration order is the board display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    Misc,
    Desktops,
    Laptops,
    Aio,
    Displays,
    Workstations,
    Chromebooks,
    /// Catch-all for missing or unrecognized stored types.
    #[default]
    Other,
}

impl Category {
    /// Every category, in board display order.
    pub const DISPLAY_ORDER: [Category; 8] = [
        Category::Misc,
        Category::Desktops,
        Category::Laptops,
        Category::Aio,
        Category::Displays,
        Category::Workstations,
        Category::Chromebooks,
        Category::Other,
    ];

    /// Stored label, as written by the backing service.
    pub fn label(self) -> &'static str {
        match self {
            Category::Misc => "MISC",
            Category::Desktops => "DESKTOPS",
            Category::Laptops => "LAPTOPS",
            Category::Aio => "AIO",
            Category::Displays => "DISPLAYS",
            Category::Workstations => "WORKSTATIONS",
            Category::Chromebooks => "CHROMEBOOKS",
            Category::Other => "OTHER",
        }
    }

    /// Exact (case-sensitive) label lookup.
    pub fn parse(label: &str) -> Option<Category> {
        Self::DISPLAY_ORDER.into_iter().find(|c| c.label() == label)
    }

    /// Resolve a stored `type` field.
    ///
    /// Absent, empty and unrecognized values all land in [`Category::Other`].
    pub fn classify(stored: Option<&str>) -> Category {
        stored.and_then(Self::parse).unwrap_or(Category::Other)
    }

    /// Board section heading. MISC is rendered without one.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Category::Misc => None,
            Category::Aio => Some("ALL IN ONE"),
            other => Some(other.label()),
        }
    }

    /// Position in [`Category::DISPLAY_ORDER`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = Option::<String>::deserialize(deserializer)?;
        Ok(Category::classify(stored.as_deref()))
    }
}
