//! Catalog entities
//!
//! Plain read-only data supplied by the external catalog:
//! - **Material**: a substance with free-text category and descriptors
//! - **Etchant**: an etching formulation with compatibility lists
//! - **ProductLink**: a consumable product keyed by note/tag keywords
//!
//! Nothing in this module computes matches; see `etch-matcher`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque material identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(String);

impl MaterialId {
    /// Wrap an identifier string
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MaterialId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Opaque etchant identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EtchantId(String);

impl EtchantId {
    /// Wrap an identifier string
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EtchantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EtchantId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Hardness bucket of a material
///
/// The catalog stores this as free text. The four values the scorer
/// cares about get their own variants; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HardnessCategory {
    /// "soft"
    Soft,
    /// "medium"
    Medium,
    /// "hard"
    Hard,
    /// "very-hard"
    VeryHard,
    /// Any other catalog value, lowercased
    Other(String),
}

impl HardnessCategory {
    /// Catalog token for this bucket
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Soft => "soft",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::VeryHard => "very-hard",
            Self::Other(raw) => raw,
        }
    }

    /// Hard or very hard
    #[inline]
    #[must_use]
    pub fn is_hard(&self) -> bool {
        matches!(self, Self::Hard | Self::VeryHard)
    }

    /// Soft or medium
    #[inline]
    #[must_use]
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::Soft | Self::Medium)
    }
}

impl From<String> for HardnessCategory {
    fn from(raw: String) -> Self {
        let lower = raw.trim().to_lowercase();
        match lower.as_str() {
            "soft" => Self::Soft,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            "very-hard" => Self::VeryHard,
            _ => Self::Other(lower),
        }
    }
}

impl From<&str> for HardnessCategory {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<HardnessCategory> for String {
    fn from(h: HardnessCategory) -> Self {
        h.as_str().to_string()
    }
}

impl fmt::Display for HardnessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A material as served by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Opaque identity
    pub id: MaterialId,
    /// Display name
    pub name: String,
    /// Free-text category, may be empty
    #[serde(default)]
    pub category: String,
    /// Composition summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
    /// Hardness descriptor, e.g. "150-200 HB"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardness: Option<String>,
    /// Hardness bucket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardness_category: Option<HardnessCategory>,
    /// Trade names, designations and other aliases
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_names: Vec<String>,
    /// Free-text tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Etchant names recommended for this material (fuzzy matched)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub common_etchants: Vec<String>,
    /// Free-text preparation notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Material {
    /// Create a material with only the required fields set
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: MaterialId::new(id),
            name: name.into(),
            category: category.into(),
            composition: None,
            hardness: None,
            hardness_category: None,
            alternative_names: Vec::new(),
            tags: Vec::new(),
            common_etchants: Vec::new(),
            notes: None,
        }
    }

    /// With hardness bucket
    #[inline]
    #[must_use]
    pub fn with_hardness_category(mut self, hardness: impl Into<HardnessCategory>) -> Self {
        self.hardness_category = Some(hardness.into());
        self
    }

    /// With recommended etchant names
    #[must_use]
    pub fn with_common_etchants<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.common_etchants = names.into_iter().map(Into::into).collect();
        self
    }

    /// With alternative names
    #[must_use]
    pub fn with_alternative_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternative_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// With tags
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// With notes
    #[inline]
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// An etching formulation as served by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Etchant {
    /// Opaque identity
    pub id: EtchantId,
    /// Display name
    pub name: String,
    /// Free-text composition
    #[serde(default)]
    pub composition: String,
    /// Concentration, e.g. "2%"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concentration: Option<String>,
    /// Immersion, swab, electrolytic...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_method: Option<String>,
    /// Typical etch time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_time_seconds: Option<u32>,
    /// Microstructural features revealed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveals: Option<String>,
    /// Expected appearance after etching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_results: Option<String>,
    /// Highlighted in the catalog
    #[serde(default)]
    pub featured: bool,
    /// Available as a ready-made product
    #[serde(default)]
    pub pace_product_available: bool,
    /// Controlled-vocabulary categories this etchant suits
    #[serde(default)]
    pub compatible_materials: Vec<String>,
    /// Controlled-vocabulary categories this etchant must never be used on
    #[serde(default)]
    pub incompatible_materials: Vec<String>,
    /// Direct links to specific materials
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_material_ids: Vec<MaterialId>,
}

impl Etchant {
    /// Create an etchant with only the required fields set
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: EtchantId::new(id),
            name: name.into(),
            composition: String::new(),
            concentration: None,
            application_method: None,
            typical_time_seconds: None,
            reveals: None,
            typical_results: None,
            featured: false,
            pace_product_available: false,
            compatible_materials: Vec::new(),
            incompatible_materials: Vec::new(),
            related_material_ids: Vec::new(),
        }
    }

    /// With compatible categories
    #[must_use]
    pub fn with_compatible<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compatible_materials = categories.into_iter().map(Into::into).collect();
        self
    }

    /// With incompatible categories
    #[must_use]
    pub fn with_incompatible<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.incompatible_materials = categories.into_iter().map(Into::into).collect();
        self
    }

    /// With direct material links
    #[must_use]
    pub fn with_related_materials<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_material_ids = ids.into_iter().map(MaterialId::new).collect();
        self
    }

    /// With revealed-features text
    #[inline]
    #[must_use]
    pub fn with_reveals(mut self, reveals: impl Into<String>) -> Self {
        self.reveals = Some(reveals.into());
        self
    }

    /// With typical-results text
    #[inline]
    #[must_use]
    pub fn with_typical_results(mut self, results: impl Into<String>) -> Self {
        self.typical_results = Some(results.into());
        self
    }

    /// Mark as featured
    #[inline]
    #[must_use]
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Mark as available for purchase
    #[inline]
    #[must_use]
    pub fn product_available(mut self, available: bool) -> Self {
        self.pace_product_available = available;
        self
    }
}

/// A consumable product linked to materials by keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLink {
    /// Product identity
    pub id: String,
    /// Display label
    pub label: String,
    /// Product page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Keywords searched for in material notes and tags
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ProductLink {
    /// Create a product link
    #[must_use]
    pub fn new<I, S>(id: impl Into<String>, label: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            label: label.into(),
            url: None,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}
