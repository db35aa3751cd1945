use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use palletrack_core::{DomainError, DomainResult, Entity, ItemId};

use crate::catalog::{OTHER_DESCRIPTION, auto_grade, rule};
use crate::category::Category;
use crate::grade::{self, Grade};

/// Display identifier of a pallet (e.g. `PL-1042`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PalletNumber(String);

impl PalletNumber {
    /// Wrap a number exactly as stored.
    pub fn new(stored: impl Into<String>) -> Self {
        Self(stored.into())
    }

    /// Build a number from form input, adding `prefix` unless it is already there.
    pub fn from_input(prefix: &str, input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix(prefix).unwrap_or(trimmed).trim();
        if digits.is_empty() {
            return Err(DomainError::validation("pallet number cannot be empty"));
        }
        Ok(Self(format!("{prefix}{digits}")))
    }

    /// The user-editable part of the number (prefix removed).
    pub fn editable_part(&self, prefix: &str) -> &str {
        self.0.strip_prefix(prefix).unwrap_or(&self.0)
    }

    /// Case-insensitive substring match.
    pub fn matches(&self, query: &str) -> bool {
        self.0.to_lowercase().contains(&query.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PalletNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A pallet record as served by the backing store.
///
/// `category` is resolved from the stored `type` field when deserialized, so
/// no raw type string survives past the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pallet {
    pub id: ItemId,
    pub pallet_number: PalletNumber,
    #[serde(rename = "type", default)]
    pub category: Category,
    #[serde(default, deserialize_with = "grade::deserialize_optional")]
    pub grade: Option<Grade>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_retired: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub retired_at: Option<DateTime<Utc>>,
}

impl Pallet {
    /// A new, active pallet.
    pub fn new(id: ItemId, fields: PalletFields, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            pallet_number: fields.pallet_number,
            category: fields.category,
            grade: fields.grade,
            description: fields.description,
            notes: fields.notes,
            is_retired: false,
            created_at,
            retired_at: None,
        }
    }

    /// Replace the editable fields. Identity, creation time and lifecycle state are kept.
    pub fn edit(&mut self, fields: PalletFields) {
        self.pallet_number = fields.pallet_number;
        self.category = fields.category;
        self.grade = fields.grade;
        self.description = fields.description;
        self.notes = fields.notes;
    }

    pub fn retire(&mut self, at: DateTime<Utc>) -> DomainResult<()> {
        if self.is_retired {
            return Err(DomainError::conflict("pallet is already retired"));
        }
        self.is_retired = true;
        self.retired_at = Some(at);
        Ok(())
    }

    pub fn unretire(&mut self) -> DomainResult<()> {
        if !self.is_retired {
            return Err(DomainError::conflict("pallet is not retired"));
        }
        self.is_retired = false;
        self.retired_at = None;
        Ok(())
    }

    /// Whether the grade badge is highlighted.
    pub fn is_low_grade(&self) -> bool {
        self.grade.as_ref().is_some_and(Grade::is_low)
    }
}

impl Entity for Pallet {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validated, editable pallet fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalletFields {
    pub pallet_number: PalletNumber,
    pub category: Category,
    pub grade: Option<Grade>,
    pub description: String,
    pub notes: Option<String>,
}

/// Raw entry-form state for creating or editing a pallet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PalletDraft {
    /// Number without prefix (a pasted prefix is tolerated).
    pub number: String,
    pub category: Option<Category>,
    /// One of the category's canonical descriptions, or `OTHER`.
    pub description_choice: Option<String>,
    pub custom_description: String,
    pub grade: String,
    pub notes: String,
}

impl PalletDraft {
    /// Pre-fill the form from an existing pallet.
    ///
    /// Descriptions that are not one of the category's canonical choices are
    /// moved into the custom field with `OTHER` selected.
    pub fn for_edit(pallet: &Pallet, prefix: &str) -> Self {
        let canonical = rule(pallet.category)
            .descriptions
            .contains(&pallet.description.as_str());
        let (choice, custom) = if canonical {
            (pallet.description.clone(), String::new())
        } else {
            (OTHER_DESCRIPTION.to_string(), pallet.description.clone())
        };
        Self {
            number: pallet.pallet_number.editable_part(prefix).to_string(),
            category: Some(pallet.category),
            description_choice: Some(choice),
            custom_description: custom,
            grade: pallet.grade.as_ref().map(|g| g.as_str().to_string()).unwrap_or_default(),
            notes: pallet.notes.clone().unwrap_or_default(),
        }
    }

    fn chose_other(&self) -> bool {
        self.description_choice.as_deref() == Some(OTHER_DESCRIPTION)
    }

    /// Whether the category offers a list of canonical descriptions.
    pub fn offers_description_choices(&self) -> bool {
        self.category.is_some_and(|c| rule(c).has_priority())
    }

    /// Whether the description is typed in rather than picked.
    pub fn uses_custom_description(&self) -> bool {
        match self.category {
            None => false,
            Some(c) if !rule(c).has_priority() => true,
            Some(_) => self.chose_other(),
        }
    }

    /// Whether the grade is typed in rather than derived from the description.
    pub fn allows_manual_grade(&self) -> bool {
        match self.category {
            None => false,
            Some(c) if !rule(c).has_priority() => true,
            Some(Category::Displays) => false,
            Some(_) => self.chose_other(),
        }
    }

    /// Validate the form and produce storable fields.
    pub fn resolve(&self, prefix: &str) -> DomainResult<PalletFields> {
        let pallet_number = PalletNumber::from_input(prefix, &self.number)?;
        let category = self
            .category
            .ok_or_else(|| DomainError::validation("pallet type is required"))?;

        let description = if self.uses_custom_description() {
            let custom = self.custom_description.trim();
            if custom.is_empty() {
                return Err(DomainError::validation("description cannot be empty"));
            }
            custom.to_string()
        } else {
            match self.description_choice.as_deref().map(str::trim) {
                Some(choice) if !choice.is_empty() => choice.to_string(),
                _ => return Err(DomainError::validation("a description must be selected")),
            }
        };

        let grade = if self.allows_manual_grade() {
            Grade::new(&self.grade)
        } else {
            self.description_choice
                .as_deref()
                .and_then(|choice| auto_grade(category, choice))
        };

        let notes = self.notes.trim();
        Ok(PalletFields {
            pallet_number,
            category,
            grade,
            description,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}
