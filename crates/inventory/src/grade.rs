use serde::{Deserialize, Deserializer, Serialize};

/// Quality-tier marker attached to a pallet (e.g. `B/C`, `D/F`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Grade(String);

const LOW_GRADES: [&str; 3] = ["D/F", "D", "F"];

impl Grade {
    /// Trimmed grade, or `None` when nothing is left.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Highlighting flag for `D`, `F` and `D/F`. Never consulted when ordering.
    pub fn is_low(&self) -> bool {
        LOW_GRADES.iter().any(|g| g.eq_ignore_ascii_case(&self.0))
    }
}

impl core::fmt::Display for Grade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// `null`, missing and blank grades all deserialize to `None`.
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Grade>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = Option::<String>::deserialize(deserializer)?;
    Ok(stored.and_then(Grade::new))
}
