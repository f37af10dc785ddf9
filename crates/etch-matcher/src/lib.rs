//! Etch Matcher
//!
//! Rule-based etchant recommendation for a selected material.
//!
//! # Overview
//!
//! The matcher provides:
//! - **normalize_category**: free-text material category → vocabulary token
//! - **ScoringContext**: additive rule scoring with an incompatibility veto
//! - **Matcher**: ranked, explained recommendations for one material
//! - **percentage / color_band**: display helpers for scores
//! - **link_products**: keyword tagging of materials to products
//!
//! Everything here is pure and synchronous. Inputs are never mutated and
//! repeated calls with the same inputs return identical output.
//!
//! # Example
//!
//! ```rust
//! use etch_catalog::{Etchant, Material};
//! use etch_matcher::{match_etchants, Purpose};
//!
//! let steel = Material::new("1018", "1018 Steel", "Carbon Steel");
//! let etchants = vec![
//!     Etchant::new("nital-2", "2% Nital")
//!         .with_compatible(["carbon-steel"])
//!         .with_reveals("Ferrite grain boundaries"),
//!     Etchant::new("keller", "Keller's Reagent").with_compatible(["aluminum"]),
//! ];
//!
//! let results = match_etchants(&steel, Some(Purpose::GrainBoundaries), &etchants);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].score, 150);
//! assert_eq!(results[0].reason_texts(), vec!["Compatible", "Reveals grain boundaries"]);
//! ```

#![warn(missing_docs)]

pub mod category;
pub mod config;
pub mod hardness;
pub mod matcher;
pub mod presentation;
pub mod products;
pub mod purpose;
pub mod score;

// Re-exports
pub use category::{normalize_category, CategoryToken, MaterialCategory};
pub use config::{ConfigError, MatcherConfig, TieBreak};
pub use hardness::HardnessBias;
pub use matcher::{match_etchants, MatchResult, Matcher};
pub use presentation::{color_band, percentage, ColorBand, REFERENCE_MAX_SCORE};
pub use products::{link_products, ProductMatch};
pub use purpose::{ParsePurposeError, Purpose};
pub use score::{score_etchant, EtchantScore, MatchReason, ScoringContext};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running matches
    pub use crate::{
        match_etchants, normalize_category, ColorBand, MatchReason, MatchResult, Matcher,
        MatcherConfig, Purpose, TieBreak,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
