//! Display helpers for match scores
//!
//! Presentation policy only: nothing here feeds back into ranking.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference normalization constant: compatible + recommended + direct
/// link + hard-material bonus.
///
/// Purpose, featured and availability points are not included, so a
/// strong match can exceed it; [`percentage`] clamps at 100.
pub const REFERENCE_MAX_SCORE: u32 = 280;

/// Score as a percentage of `max_score`, rounded half up, at most 100
///
/// A zero `max_score` yields 0.
#[must_use]
pub fn percentage(score: u32, max_score: u32) -> u8 {
    if max_score == 0 {
        return 0;
    }
    let scaled = (u64::from(score) * 200 + u64::from(max_score)) / (u64::from(max_score) * 2);
    // Clamped to 100 above, so the narrowing cannot truncate
    u8::try_from(scaled.min(100)).unwrap_or(100)
}

/// Four-bucket strength band for a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBand {
    /// Below 40
    Weak,
    /// 40 to 59
    Fair,
    /// 60 to 79
    Good,
    /// 80 and above
    Strong,
}

impl ColorBand {
    /// Band for a percentage
    #[must_use]
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80.. => Self::Strong,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Weak,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Weak => "weak",
        }
    }
}

impl fmt::Display for ColorBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Band for a percentage
#[inline]
#[must_use]
pub fn color_band(percentage: u8) -> ColorBand {
    ColorBand::from_percentage(percentage)
}
