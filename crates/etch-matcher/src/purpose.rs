//! Etching purposes and their keyword table
//!
//! A purpose is the microstructural feature the user wants to see.
//! It biases scoring through a keyword search of the etchant's
//! `reveals` and `typical_results` text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Microstructural feature of interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Purpose {
    /// Grain boundaries and grain structure
    GrainBoundaries,
    /// Carbide particles
    Carbides,
    /// Phase contrast
    Phases,
    /// Precipitates
    Precipitates,
    /// Non-metallic inclusions
    Inclusions,
    /// Annealing and deformation twins
    TwinBoundaries,
    /// Martensite
    Martensite,
    /// Pearlite
    Pearlite,
    /// Ferrite
    Ferrite,
    /// Austenite
    Austenite,
    /// No particular feature
    General,
}

/// Keywords searched for each purpose. `General` has none and so
/// never earns the purpose bonus.
pub const PURPOSE_KEYWORDS: &[(Purpose, &[&str])] = &[
    (Purpose::GrainBoundaries, &["grain boundary", "grain boundaries", "grain structure"]),
    (Purpose::Carbides, &["carbide"]),
    (Purpose::Phases, &["phase"]),
    (Purpose::Precipitates, &["precipitate"]),
    (Purpose::Inclusions, &["inclusion"]),
    (Purpose::TwinBoundaries, &["twin"]),
    (Purpose::Martensite, &["martensite"]),
    (Purpose::Pearlite, &["pearlite"]),
    (Purpose::Ferrite, &["ferrite"]),
    (Purpose::Austenite, &["austenite"]),
    (Purpose::General, &[]),
];

impl Purpose {
    /// Every purpose, in presentation order
    pub const ALL: [Purpose; 11] = [
        Self::GrainBoundaries,
        Self::Carbides,
        Self::Phases,
        Self::Precipitates,
        Self::Inclusions,
        Self::TwinBoundaries,
        Self::Martensite,
        Self::Pearlite,
        Self::Ferrite,
        Self::Austenite,
        Self::General,
    ];

    /// Kebab-case token
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GrainBoundaries => "grain-boundaries",
            Self::Carbides => "carbides",
            Self::Phases => "phases",
            Self::Precipitates => "precipitates",
            Self::Inclusions => "inclusions",
            Self::TwinBoundaries => "twin-boundaries",
            Self::Martensite => "martensite",
            Self::Pearlite => "pearlite",
            Self::Ferrite => "ferrite",
            Self::Austenite => "austenite",
            Self::General => "general",
        }
    }

    /// Human-readable label, e.g. "grain boundaries"
    #[must_use]
    pub fn label(self) -> String {
        self.as_str().replace('-', " ")
    }

    /// Lowercase keywords for this purpose
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        PURPOSE_KEYWORDS
            .iter()
            .find(|(p, _)| *p == self)
            .map(|(_, kw)| *kw)
            .unwrap_or_default()
    }

    /// Whether lowercased text mentions this purpose
    #[must_use]
    pub fn matches_text(self, lowercase_text: &str) -> bool {
        self.keywords().iter().any(|kw| lowercase_text.contains(kw))
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown purpose token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown purpose: '{0}'")]
pub struct ParsePurposeError(pub String);

impl FromStr for Purpose {
    type Err = ParsePurposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace([' ', '_'], "-");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParsePurposeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_purpose_has_a_table_row() {
        for purpose in Purpose::ALL {
            assert!(PURPOSE_KEYWORDS.iter().any(|(p, _)| *p == purpose), "{purpose}");
        }
    }

    #[test]
    fn general_never_matches() {
        assert!(Purpose::General.keywords().is_empty());
        assert!(!Purpose::General.matches_text("general structure, grain boundaries"));
    }

    #[test]
    fn keyword_matching() {
        assert!(Purpose::GrainBoundaries.matches_text("reveals grain boundaries in ferrite"));
        assert!(Purpose::Martensite.matches_text("tempered martensite"));
        assert!(!Purpose::Carbides.matches_text("pearlite colonies"));
    }

    #[test]
    fn parses_tokens_and_labels() {
        assert_eq!("grain-boundaries".parse::<Purpose>(), Ok(Purpose::GrainBoundaries));
        assert_eq!("Twin Boundaries".parse::<Purpose>(), Ok(Purpose::TwinBoundaries));
        assert_eq!("MARTENSITE".parse::<Purpose>(), Ok(Purpose::Martensite));
        assert_eq!(
            "bainite".parse::<Purpose>(),
            Err(ParsePurposeError("bainite".to_string()))
        );
    }

    #[test]
    fn label_replaces_hyphens() {
        assert_eq!(Purpose::GrainBoundaries.label(), "grain boundaries");
        assert_eq!(Purpose::Martensite.label(), "martensite");
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Purpose::TwinBoundaries).unwrap();
        assert_eq!(json, "\"twin-boundaries\"");
    }
}
