//! Per-etchant scoring
//!
//! Additive rules, applied in this order (the order only affects the
//! order of reasons, never the total):
//!
//! | rule | points | reason |
//! |------|--------|--------|
//! | category listed in `compatible_materials` | 100 | Compatible |
//! | name fuzzy-matches a `common_etchants` entry | 80 | Recommended |
//! | material id in `related_material_ids` | 70 | Direct link |
//! | purpose keyword in `reveals` / `typical_results` | 50 | Reveals ... |
//! | hard material, strong nital | 30 | For hard materials |
//! | soft/medium material, weak nital | 20 | For softer materials |
//! | `featured` | 10 | Featured |
//! | `pace_product_available` | 5 | (none) |
//!
//! Last, a category listed in `incompatible_materials` forces the score
//! to exactly zero and appends "Not recommended".

use crate::category::{normalize_category, MaterialCategory};
use crate::hardness::HardnessBias;
use crate::purpose::Purpose;
use etch_catalog::{Etchant, Material};
use serde::{Serialize, Serializer};
use std::fmt;

/// Points for a compatible category
pub const COMPATIBLE_POINTS: u32 = 100;
/// Points for a material-recommended etchant
pub const RECOMMENDED_POINTS: u32 = 80;
/// Points for a direct material link
pub const DIRECT_LINK_POINTS: u32 = 70;
/// Points for revealing the requested feature
pub const PURPOSE_POINTS: u32 = 50;
/// Points for a strong etchant on a hard material
pub const HARD_MATERIAL_POINTS: u32 = 30;
/// Points for a weak etchant on a soft material
pub const SOFT_MATERIAL_POINTS: u32 = 20;
/// Points for a featured etchant
pub const FEATURED_POINTS: u32 = 10;
/// Points for a purchasable etchant
pub const PRODUCT_AVAILABLE_POINTS: u32 = 5;

/// Why an etchant earned (or lost) its score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchReason {
    /// Category listed as compatible
    Compatible,
    /// Named by the material's recommended etchants
    Recommended,
    /// Etchant links to this material directly
    DirectLink,
    /// Reveals the requested feature
    Reveals(Purpose),
    /// Strong etchant for a hard material
    ForHardMaterials,
    /// Weak etchant for a soft material
    ForSofterMaterials,
    /// Featured etchant
    Featured,
    /// Category listed as incompatible
    NotRecommended,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compatible => f.write_str("Compatible"),
            Self::Recommended => f.write_str("Recommended"),
            Self::DirectLink => f.write_str("Direct link"),
            Self::Reveals(purpose) => write!(f, "Reveals {}", purpose.label()),
            Self::ForHardMaterials => f.write_str("For hard materials"),
            Self::ForSofterMaterials => f.write_str("For softer materials"),
            Self::Featured => f.write_str("Featured"),
            Self::NotRecommended => f.write_str("Not recommended"),
        }
    }
}

impl Serialize for MatchReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of scoring one etchant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EtchantScore {
    /// Total points; zero when vetoed
    pub score: u32,
    /// Reasons in rule order
    pub reasons: Vec<MatchReason>,
}

impl EtchantScore {
    /// Whether this etchant belongs in the output
    #[inline]
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.score > 0
    }

    /// Whether the incompatibility veto fired
    #[must_use]
    pub fn is_vetoed(&self) -> bool {
        self.reasons.contains(&MatchReason::NotRecommended)
    }
}

/// Everything about one query that does not depend on the etchant
///
/// Built once per query so that the category and lowercased material
/// text are computed once, not once per etchant.
#[derive(Debug, Clone)]
pub struct ScoringContext<'m> {
    material: &'m Material,
    category: MaterialCategory,
    purpose: Option<Purpose>,
    recommended: Vec<String>,
}

impl<'m> ScoringContext<'m> {
    /// Prepare a query
    #[must_use]
    pub fn new(material: &'m Material, purpose: Option<Purpose>) -> Self {
        let recommended = material
            .common_etchants
            .iter()
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();

        Self {
            material,
            category: normalize_category(material),
            purpose,
            recommended,
        }
    }

    /// Selected material
    #[inline]
    #[must_use]
    pub fn material(&self) -> &'m Material {
        self.material
    }

    /// Normalized category of the selected material
    #[inline]
    #[must_use]
    pub fn category(&self) -> &MaterialCategory {
        &self.category
    }

    /// Requested purpose
    #[inline]
    #[must_use]
    pub fn purpose(&self) -> Option<Purpose> {
        self.purpose
    }

    /// Score one etchant
    #[must_use]
    pub fn score(&self, etchant: &Etchant) -> EtchantScore {
        let mut score = 0;
        let mut reasons = Vec::new();
        let name = etchant.name.to_lowercase();

        if self.category.is_listed_in(&etchant.compatible_materials) {
            score += COMPATIBLE_POINTS;
            reasons.push(MatchReason::Compatible);
        }

        if self.is_recommended(&name) {
            score += RECOMMENDED_POINTS;
            reasons.push(MatchReason::Recommended);
        }

        if etchant.related_material_ids.contains(&self.material.id) {
            score += DIRECT_LINK_POINTS;
            reasons.push(MatchReason::DirectLink);
        }

        if let Some(purpose) = self.purpose {
            if purpose.matches_text(&revealed_text(etchant)) {
                score += PURPOSE_POINTS;
                reasons.push(MatchReason::Reveals(purpose));
            }
        }

        match HardnessBias::evaluate(self.material.hardness_category.as_ref(), &name) {
            Some(HardnessBias::HardMaterial) => {
                score += HARD_MATERIAL_POINTS;
                reasons.push(MatchReason::ForHardMaterials);
            }
            Some(HardnessBias::SoftMaterial) => {
                score += SOFT_MATERIAL_POINTS;
                reasons.push(MatchReason::ForSofterMaterials);
            }
            None => {}
        }

        if etchant.featured {
            score += FEATURED_POINTS;
            reasons.push(MatchReason::Featured);
        }

        if etchant.pace_product_available {
            score += PRODUCT_AVAILABLE_POINTS;
        }

        // Veto runs last and replaces the total rather than subtracting
        if self.category.is_listed_in(&etchant.incompatible_materials) {
            score = 0;
            reasons.push(MatchReason::NotRecommended);
        }

        EtchantScore { score, reasons }
    }

    /// Case-insensitive substring match in either direction
    fn is_recommended(&self, lowercase_name: &str) -> bool {
        if lowercase_name.is_empty() {
            return false;
        }
        self.recommended
            .iter()
            .any(|r| lowercase_name.contains(r.as_str()) || r.contains(lowercase_name))
    }
}

/// Lowercased `reveals` and `typical_results`, space separated
fn revealed_text(etchant: &Etchant) -> String {
    let reveals = etchant.reveals.as_deref().unwrap_or_default();
    let results = etchant.typical_results.as_deref().unwrap_or_default();
    format!("{reveals} {results}").to_lowercase()
}

/// Score one etchant for one material
///
/// Convenience wrapper; prefer [`ScoringContext`] when scoring many
/// etchants for the same material.
#[must_use]
pub fn score_etchant(
    material: &Material,
    purpose: Option<Purpose>,
    etchant: &Etchant,
) -> EtchantScore {
    ScoringContext::new(material, purpose).score(etchant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carbon_steel() -> Material {
        Material::new("1018", "1018 Steel", "Carbon Steel")
    }

    #[test]
    fn compatible_category() {
        let etchant = Etchant::new("e", "Picral").with_compatible(["carbon-steel"]);
        let result = score_etchant(&carbon_steel(), None, &etchant);
        assert_eq!(result.score, 100);
        assert_eq!(result.reasons, vec![MatchReason::Compatible]);
    }

    #[test]
    fn recommended_matches_both_directions() {
        let material = carbon_steel().with_common_etchants(["Nital"]);
        let etchant = Etchant::new("e", "2% Nital");
        assert_eq!(score_etchant(&material, None, &etchant).score, 80);

        let material = carbon_steel().with_common_etchants(["2% nital (swab 10 s)"]);
        assert_eq!(score_etchant(&material, None, &etchant).score, 80);
    }

    #[test]
    fn blank_recommendation_is_ignored() {
        let material = carbon_steel().with_common_etchants(["", "   "]);
        let etchant = Etchant::new("e", "Picral");
        assert!(!score_etchant(&material, None, &etchant).is_match());
    }

    #[test]
    fn direct_link() {
        let etchant = Etchant::new("e", "Custom").with_related_materials(["1018"]);
        let result = score_etchant(&carbon_steel(), None, &etchant);
        assert_eq!(result.score, 70);
        assert_eq!(result.reasons, vec![MatchReason::DirectLink]);
    }

    #[test]
    fn purpose_reads_reveals_and_results() {
        let etchant = Etchant::new("e", "Vilella's").with_typical_results("Carbides outlined");
        let result = score_etchant(&carbon_steel(), Some(Purpose::Carbides), &etchant);
        assert_eq!(result.score, 50);
        assert_eq!(result.reasons[0].to_string(), "Reveals carbides");
    }

    #[test]
    fn featured_and_product_bonuses() {
        let etchant = Etchant::new("e", "X").featured(true).product_available(true);
        let result = score_etchant(&carbon_steel(), None, &etchant);
        assert_eq!(result.score, 15);
        assert_eq!(result.reasons, vec![MatchReason::Featured]);
    }

    #[test]
    fn all_rules_accumulate_in_order() {
        let material = Material::new("4340", "4340 Steel", "Low Alloy Steel")
            .with_hardness_category("hard")
            .with_common_etchants(["5% Nital"]);
        let etchant = Etchant::new("nital-5", "5% Nital")
            .with_compatible(["carbon-steel"])
            .with_related_materials(["4340"])
            .with_reveals("Martensite and prior austenite grain boundaries")
            .featured(true)
            .product_available(true);

        let result = score_etchant(&material, Some(Purpose::Martensite), &etchant);
        assert_eq!(result.score, 100 + 80 + 70 + 50 + 30 + 10 + 5);
        assert_eq!(
            result.reasons,
            vec![
                MatchReason::Compatible,
                MatchReason::Recommended,
                MatchReason::DirectLink,
                MatchReason::Reveals(Purpose::Martensite),
                MatchReason::ForHardMaterials,
                MatchReason::Featured,
            ]
        );
    }

    #[test]
    fn veto_zeroes_everything() {
        let material = Material::new("304", "304 Stainless Steel", "stainless-steel")
            .with_common_etchants(["Keller's"]);
        let etchant = Etchant::new("keller", "Keller's Reagent")
            .with_compatible(["aluminum"])
            .with_incompatible(["stainless-steel"])
            .with_related_materials(["304"])
            .featured(true);

        let result = score_etchant(&material, None, &etchant);
        assert_eq!(result.score, 0);
        assert!(result.is_vetoed());
        assert!(!result.is_match());
        assert_eq!(result.reasons.last(), Some(&MatchReason::NotRecommended));
    }

    #[test]
    fn reason_text() {
        let texts: Vec<String> = [
            MatchReason::DirectLink,
            MatchReason::Reveals(Purpose::GrainBoundaries),
            MatchReason::ForSofterMaterials,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(texts, vec!["Direct link", "Reveals grain boundaries", "For softer materials"]);
    }

    #[test]
    fn reasons_serialize_as_text() {
        let json = serde_json::to_string(&MatchReason::Reveals(Purpose::Martensite)).unwrap();
        assert_eq!(json, "\"Reveals martensite\"");
    }
}
