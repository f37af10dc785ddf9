//! In-memory catalog
//!
//! Holds materials, etchants and product links in document order with
//! id lookup. Document order is significant: the matcher uses it as the
//! stable order for equal scores.

use crate::error::{CatalogResult, ValidationError};
use crate::model::{Etchant, EtchantId, Material, MaterialId, ProductLink};
use crate::parsers::{default_parsers, CatalogDocument};
use crate::validation::{CatalogValidator, Diagnostic};
use std::collections::HashMap;
use std::path::Path;

/// Validated, read-only catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    materials: Vec<Material>,
    etchants: Vec<Etchant>,
    products: Vec<ProductLink>,
    material_index: HashMap<MaterialId, usize>,
    etchant_index: HashMap<EtchantId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate or empty ids
    pub fn new(
        materials: Vec<Material>,
        etchants: Vec<Etchant>,
        products: Vec<ProductLink>,
    ) -> Result<Self, ValidationError> {
        CatalogValidator::new().check_ids(&materials, &etchants)?;

        let material_index = materials
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id.clone(), i))
            .collect();
        let etchant_index = etchants
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();

        Ok(Self {
            materials,
            etchants,
            products,
            material_index,
            etchant_index,
        })
    }

    /// Build a catalog from a parsed document
    pub fn from_document(document: CatalogDocument) -> Result<Self, ValidationError> {
        Self::new(document.materials, document.etchants, document.products)
    }

    /// Read, parse and validate a catalog file
    ///
    /// The format is chosen by file extension (`json`, `yaml`, `yml`).
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let document = default_parsers().parse_file(path)?;
        let catalog = Self::from_document(document)?;

        tracing::info!(
            path = %path.display(),
            materials = catalog.materials.len(),
            etchants = catalog.etchants.len(),
            "loaded catalog"
        );

        Ok(catalog)
    }

    /// All materials, document order
    #[inline]
    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// All etchants, document order
    #[inline]
    #[must_use]
    pub fn etchants(&self) -> &[Etchant] {
        &self.etchants
    }

    /// All product links, document order
    #[inline]
    #[must_use]
    pub fn products(&self) -> &[ProductLink] {
        &self.products
    }

    /// Look up a material by id
    #[must_use]
    pub fn material(&self, id: &MaterialId) -> Option<&Material> {
        self.material_index.get(id).map(|&i| &self.materials[i])
    }

    /// Look up an etchant by id
    #[must_use]
    pub fn etchant(&self, id: &EtchantId) -> Option<&Etchant> {
        self.etchant_index.get(id).map(|&i| &self.etchants[i])
    }

    /// Case-insensitive material search
    ///
    /// Matches the query as a substring of the name, any alternative
    /// name or any tag. A blank query returns every material.
    #[must_use]
    pub fn search_materials(&self, query: &str) -> Vec<&Material> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.materials.iter().collect();
        }

        self.materials
            .iter()
            .filter(|m| {
                std::iter::once(&m.name)
                    .chain(&m.alternative_names)
                    .chain(&m.tags)
                    .any(|text| text.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Soft findings for this catalog
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        CatalogValidator::new().diagnostics(&self.materials, &self.etchants)
    }

    /// Number of materials
    #[inline]
    #[must_use]
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Number of etchants
    #[inline]
    #[must_use]
    pub fn etchant_count(&self) -> usize {
        self.etchants.len()
    }
}
