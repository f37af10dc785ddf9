//! Hardness bias
//!
//! Harder materials etch more slowly and favour the stronger nital
//! concentrations; soft and medium materials favour the weaker ones.
//! The marker lists are disjoint, so at most one branch fires.

use etch_catalog::HardnessCategory;

/// Etchant-name markers for high-concentration formulations
pub const HIGH_CONCENTRATION_MARKERS: &[&str] = &["nital-5", "nital-8", "5% nital", "8% nital"];

/// Etchant-name markers for low-concentration formulations
pub const LOW_CONCENTRATION_MARKERS: &[&str] = &["nital-2", "nital-3", "2% nital", "3% nital"];

/// Which hardness branch applies to a (material, etchant) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardnessBias {
    /// Hard material, strong etchant
    HardMaterial,
    /// Soft or medium material, weak etchant
    SoftMaterial,
}

impl HardnessBias {
    /// Evaluate the bias for a lowercased etchant name
    #[must_use]
    pub fn evaluate(hardness: Option<&HardnessCategory>, lowercase_name: &str) -> Option<Self> {
        let hardness = hardness?;
        let has_any = |markers: &[&str]| markers.iter().any(|m| lowercase_name.contains(m));

        if hardness.is_hard() {
            has_any(HIGH_CONCENTRATION_MARKERS).then_some(Self::HardMaterial)
        } else if hardness.is_soft() {
            has_any(LOW_CONCENTRATION_MARKERS).then_some(Self::SoftMaterial)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_material_prefers_strong_nital() {
        let hard = HardnessCategory::Hard;
        assert_eq!(
            HardnessBias::evaluate(Some(&hard), "5% nital"),
            Some(HardnessBias::HardMaterial)
        );
        assert_eq!(HardnessBias::evaluate(Some(&hard), "2% nital"), None);
    }

    #[test]
    fn soft_material_prefers_weak_nital() {
        let soft = HardnessCategory::Medium;
        assert_eq!(
            HardnessBias::evaluate(Some(&soft), "nital-3 swab"),
            Some(HardnessBias::SoftMaterial)
        );
        assert_eq!(HardnessBias::evaluate(Some(&soft), "5% nital"), None);
    }

    #[test]
    fn unknown_or_missing_hardness_has_no_bias() {
        let other = HardnessCategory::Other("extreme".into());
        assert_eq!(HardnessBias::evaluate(Some(&other), "5% nital"), None);
        assert_eq!(HardnessBias::evaluate(None, "2% nital"), None);
    }

    #[test]
    fn marker_lists_are_disjoint() {
        for marker in HIGH_CONCENTRATION_MARKERS {
            assert!(!LOW_CONCENTRATION_MARKERS.iter().any(|m| marker.contains(m)));
        }
        for marker in LOW_CONCENTRATION_MARKERS {
            assert!(!HIGH_CONCENTRATION_MARKERS.iter().any(|m| marker.contains(m)));
        }
    }
}
