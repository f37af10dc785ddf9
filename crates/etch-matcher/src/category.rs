//! Material category normalization
//!
//! Material categories are free text while etchant compatibility lists
//! use a controlled vocabulary. The join key is derived on every query
//! by substring rules over the material's category and name.
//!
//! Rules are checked in table order and the first hit wins, so the
//! table order is the tie-break policy: "Low Carbon Stainless" is
//! `carbon-steel`, "Cast Titanium" is `titanium`, not `cast-iron`.

use etch_catalog::Material;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Controlled-vocabulary material categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryToken {
    /// Plain carbon and low-alloy steels
    CarbonSteel,
    /// Stainless steels
    StainlessSteel,
    /// Aluminum and its alloys
    Aluminum,
    /// Copper, brass and bronze
    CopperBrass,
    /// Titanium and its alloys
    Titanium,
    /// Nickel-base alloys
    NickelAlloys,
    /// Gray, ductile and white irons
    CastIron,
    /// Tool steels
    ToolSteel,
}

impl CategoryToken {
    /// Every token, in rule priority order
    pub const ALL: [CategoryToken; 8] = [
        Self::CarbonSteel,
        Self::StainlessSteel,
        Self::Aluminum,
        Self::CopperBrass,
        Self::Titanium,
        Self::NickelAlloys,
        Self::CastIron,
        Self::ToolSteel,
    ];

    /// Vocabulary string used in etchant compatibility lists
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CarbonSteel => "carbon-steel",
            Self::StainlessSteel => "stainless-steel",
            Self::Aluminum => "aluminum",
            Self::CopperBrass => "copper-brass",
            Self::Titanium => "titanium",
            Self::NickelAlloys => "nickel-alloys",
            Self::CastIron => "cast-iron",
            Self::ToolSteel => "tool-steel",
        }
    }
}

impl fmt::Display for CategoryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryToken {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// Normalization rules: first entry whose substring appears in the
/// lowercased category or name decides the token.
pub const CATEGORY_RULES: &[(CategoryToken, &[&str])] = &[
    (CategoryToken::CarbonSteel, &["carbon", "low alloy", "carbon steel"]),
    (CategoryToken::StainlessSteel, &["stainless"]),
    (CategoryToken::Aluminum, &["aluminum", "aluminium"]),
    (CategoryToken::CopperBrass, &["copper", "brass"]),
    (CategoryToken::Titanium, &["titanium"]),
    (CategoryToken::NickelAlloys, &["nickel", "inconel"]),
    (CategoryToken::CastIron, &["cast iron"]),
    (CategoryToken::ToolSteel, &["tool steel"]),
];

/// Normalized category of one material
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum MaterialCategory {
    /// A vocabulary token
    Known(CategoryToken),
    /// No rule matched; the lowercased catalog category, possibly empty
    Unrecognized(String),
}

impl MaterialCategory {
    /// Join key compared against etchant compatibility lists
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(token) => token.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Vocabulary token, if any rule matched
    #[inline]
    #[must_use]
    pub fn token(&self) -> Option<CategoryToken> {
        match self {
            Self::Known(token) => Some(*token),
            Self::Unrecognized(_) => None,
        }
    }

    /// Whether a compatibility list names this category
    ///
    /// Entries are compared trimmed and case-insensitively. An empty
    /// category never matches.
    #[must_use]
    pub fn is_listed_in(&self, list: &[String]) -> bool {
        let key = self.as_str().trim();
        if key.is_empty() {
            return false;
        }
        list.iter().any(|entry| entry.trim().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MaterialCategory> for String {
    fn from(c: MaterialCategory) -> Self {
        c.as_str().to_string()
    }
}

/// Map a material to its category
///
/// Pure function of `category` and `name`; never fails.
#[must_use]
pub fn normalize_category(material: &Material) -> MaterialCategory {
    let category = material.category.to_lowercase();
    let name = material.name.to_lowercase();

    for (token, needles) in CATEGORY_RULES {
        let hit = needles
            .iter()
            .any(|needle| category.contains(needle) || name.contains(needle));
        if hit {
            return MaterialCategory::Known(*token);
        }
    }

    // Catalogs that already store the vocabulary token verbatim
    match category.parse::<CategoryToken>() {
        Ok(token) => MaterialCategory::Known(token),
        Err(()) => MaterialCategory::Unrecognized(category),
    }
}
