//! Etch Catalog
//!
//! Read-only material and etchant data for the etchant selector.
//!
//! # Overview
//!
//! The catalog crate provides:
//! - **Material / Etchant / ProductLink**: the entities the matcher consumes
//! - **ParserRegistry**: JSON and YAML catalog documents, chosen by extension
//! - **Catalog**: validated, id-indexed collections in document order
//! - **CatalogValidator**: id integrity and soft diagnostics
//!
//! # Example
//!
//! ```rust
//! use etch_catalog::{Catalog, Etchant, Material, MaterialId};
//!
//! let catalog = Catalog::new(
//!     vec![Material::new("1018", "1018 Steel", "Carbon Steel")],
//!     vec![Etchant::new("nital-2", "2% Nital").with_compatible(["carbon-steel"])],
//!     Vec::new(),
//! )
//! .unwrap();
//!
//! assert!(catalog.material(&MaterialId::new("1018")).is_some());
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod parsers;
pub mod validation;

// Re-exports
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult, ParseError, ValidationError};
pub use model::{Etchant, EtchantId, HardnessCategory, Material, MaterialId, ProductLink};
pub use parsers::{default_parsers, CatalogDocument, CatalogParser, ParserRegistry};
pub use validation::{CatalogValidator, Diagnostic, DiagnosticKind};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for catalog consumers
    pub use crate::{
        Catalog, CatalogDocument, Etchant, EtchantId, HardnessCategory, Material, MaterialId,
        ProductLink,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
