//! Ranking entry point
//!
//! Scores every etchant independently, drops non-positive scores and
//! sorts by score descending. Equal scores follow the configured
//! [`TieBreak`]; the sort is stable, so `CatalogOrder` keeps input order.
//!
//! The operation is a pure function of (material, purpose, etchants):
//! same inputs, same output, every time.

use crate::config::{MatcherConfig, TieBreak};
use crate::presentation::{color_band, percentage, ColorBand};
use crate::purpose::Purpose;
use crate::score::{MatchReason, ScoringContext};
use etch_catalog::{Etchant, Material};
use serde::Serialize;
use std::cmp::Ordering;

/// One ranked recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    /// Recommended etchant
    pub etchant: &'a Etchant,
    /// Total points, always positive
    pub score: u32,
    /// Reasons in rule order
    pub reasons: Vec<MatchReason>,
}

impl MatchResult<'_> {
    /// Reasons as display strings
    #[must_use]
    pub fn reason_texts(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }

    /// Score as a percentage of `max_score`
    #[inline]
    #[must_use]
    pub fn percentage(&self, max_score: u32) -> u8 {
        percentage(self.score, max_score)
    }

    /// Strength band for this result
    #[inline]
    #[must_use]
    pub fn color_band(&self, max_score: u32) -> ColorBand {
        color_band(self.percentage(max_score))
    }
}

/// Etchant recommendation engine
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    /// Create matcher with configuration
    #[inline]
    #[must_use]
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Rank etchants for a material
    ///
    /// # Returns
    /// Matches with score > 0, best first. An empty catalog or a
    /// material nothing suits gives an empty list, not an error.
    #[must_use]
    pub fn rank<'a>(
        &self,
        material: &Material,
        purpose: Option<Purpose>,
        etchants: &'a [Etchant],
    ) -> Vec<MatchResult<'a>> {
        let context = ScoringContext::new(material, purpose);

        let results = etchants
            .iter()
            .filter_map(|etchant| Self::score_one(&context, etchant))
            .collect();

        self.finish(&context, etchants.len(), results)
    }

    /// Rank etchants using the rayon thread pool
    ///
    /// Produces exactly the output of [`Matcher::rank`].
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn rank_par<'a>(
        &self,
        material: &Material,
        purpose: Option<Purpose>,
        etchants: &'a [Etchant],
    ) -> Vec<MatchResult<'a>> {
        use rayon::prelude::*;

        let context = ScoringContext::new(material, purpose);

        // rayon collects into Vec in input order, so the stable sort still sees catalog order
        let results = etchants
            .par_iter()
            .filter_map(|etchant| Self::score_one(&context, etchant))
            .collect();

        self.finish(&context, etchants.len(), results)
    }

    /// Percentage for a result under this configuration
    #[inline]
    #[must_use]
    pub fn percentage(&self, result: &MatchResult<'_>) -> u8 {
        result.percentage(self.config.max_score)
    }

    /// Band for a result under this configuration
    #[inline]
    #[must_use]
    pub fn color_band(&self, result: &MatchResult<'_>) -> ColorBand {
        result.color_band(self.config.max_score)
    }

    fn score_one<'a>(
        context: &ScoringContext<'_>,
        etchant: &'a Etchant,
    ) -> Option<MatchResult<'a>> {
        let scored = context.score(etchant);

        tracing::trace!(
            etchant = %etchant.id,
            score = scored.score,
            reasons = ?scored.reasons,
            "scored etchant"
        );

        scored.is_match().then(|| MatchResult {
            etchant,
            score: scored.score,
            reasons: scored.reasons,
        })
    }

    fn finish<'a>(
        &self,
        context: &ScoringContext<'_>,
        candidates: usize,
        mut results: Vec<MatchResult<'a>>,
    ) -> Vec<MatchResult<'a>> {
        let tie_break = self.config.tie_break;
        results.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| tie(tie_break, a, b)));

        tracing::debug!(
            material = %context.material().id,
            category = %context.category(),
            purpose = ?context.purpose(),
            candidates,
            matches = results.len(),
            "ranked etchants"
        );

        results
    }
}

fn tie(policy: TieBreak, a: &MatchResult<'_>, b: &MatchResult<'_>) -> Ordering {
    match policy {
        TieBreak::CatalogOrder => Ordering::Equal,
        TieBreak::Name => a
            .etchant
            .name
            .to_lowercase()
            .cmp(&b.etchant.name.to_lowercase())
            .then_with(|| a.etchant.id.cmp(&b.etchant.id)),
    }
}

/// Rank etchants with the default configuration
///
/// Shorthand for `Matcher::default().rank(material, purpose, etchants)`.
#[must_use]
pub fn match_etchants<'a>(
    material: &Material,
    purpose: Option<Purpose>,
    etchants: &'a [Etchant],
) -> Vec<MatchResult<'a>> {
    Matcher::default().rank(material, purpose, etchants)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steel() -> Material {
        Material::new("1018", "1018 Steel", "Carbon Steel")
    }

    #[test]
    fn orders_by_score_and_drops_zero() {
        let etchants = vec![
            Etchant::new("none", "Unrelated"),
            Etchant::new("low", "Low").featured(true),
            Etchant::new("high", "High").with_compatible(["carbon-steel"]),
        ];

        let ids: Vec<_> = match_etchants(&steel(), None, &etchants)
            .iter()
            .map(|r| r.etchant.id.as_str())
            .collect();
        assert_eq!(ids, vec!["high", "low"]);
    }

    #[test]
    fn catalog_order_breaks_ties() {
        let etchants = vec![
            Etchant::new("b", "Beta").featured(true),
            Etchant::new("a", "Alpha").featured(true),
        ];

        let ids: Vec<_> = match_etchants(&steel(), None, &etchants)
            .iter()
            .map(|r| r.etchant.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn name_breaks_ties_when_configured() {
        let etchants = vec![
            Etchant::new("b", "beta").featured(true),
            Etchant::new("a", "Alpha").featured(true),
        ];

        let matcher = Matcher::new(MatcherConfig::new().with_tie_break(TieBreak::Name));
        let ids: Vec<_> = matcher
            .rank(&steel(), None, &etchants)
            .iter()
            .map(|r| r.etchant.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn empty_catalog_is_empty_result() {
        assert!(match_etchants(&steel(), Some(Purpose::General), &[]).is_empty());
    }

    #[test]
    fn result_presentation() {
        let etchants = vec![Etchant::new("e", "2% Nital")
            .with_compatible(["carbon-steel"])
            .with_related_materials(["1018"])];
        let matcher = Matcher::default();
        let results = matcher.rank(&steel(), None, &etchants);

        assert_eq!(results[0].score, 170);
        assert_eq!(matcher.percentage(&results[0]), 61);
        assert_eq!(matcher.color_band(&results[0]), ColorBand::Good);
        assert_eq!(results[0].reason_texts(), vec!["Compatible", "Direct link"]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let etchants: Vec<_> = (0..64)
            .map(|i| {
                Etchant::new(format!("e{i}"), format!("Etchant {i}"))
                    .featured(i % 3 == 0)
                    .product_available(i % 2 == 0)
            })
            .collect();

        let matcher = Matcher::default();
        assert_eq!(
            matcher.rank(&steel(), None, &etchants),
            matcher.rank_par(&steel(), None, &etchants)
        );
    }
}
