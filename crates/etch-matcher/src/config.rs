//! Matcher configuration
//!
//! Only presentation and ordering policy is configurable. The rule
//! tables are compile-time constants.

use crate::presentation::REFERENCE_MAX_SCORE;
use serde::{Deserialize, Serialize};

/// Ordering of results with equal scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Keep catalog document order
    #[default]
    CatalogOrder,
    /// Case-insensitive etchant name, then etchant id
    Name,
}

/// Matcher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Normalization constant for percentages
    pub max_score: u32,
    /// Ordering of equal scores
    pub tie_break: TieBreak,
}

impl MatcherConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With percentage normalization constant
    #[inline]
    #[must_use]
    pub fn with_max_score(mut self, max_score: u32) -> Self {
        self.max_score = max_score;
        self
    }

    /// With tie-break policy
    #[inline]
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Reject unusable settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_score == 0 {
            return Err(ConfigError::ZeroMaxScore);
        }
        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_score: REFERENCE_MAX_SCORE,
            tie_break: TieBreak::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Percentages would divide by zero
    #[error("max_score must be greater than zero")]
    ZeroMaxScore,
}
