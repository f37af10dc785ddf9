//! Catalog integrity checks
//!
//! Hard violations (duplicate or empty ids) stop catalog construction.
//! Soft findings are reported as diagnostics; they only reduce recall
//! of the matcher and never make a catalog unusable.

use crate::error::ValidationError;
use crate::model::{Etchant, Material, MaterialId};
use std::collections::HashSet;
use std::fmt;

/// Kinds of soft findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// `related_material_ids` names a material that is not in the catalog
    UnknownRelatedMaterial,
    /// A category is listed as both compatible and incompatible
    CompatibilityConflict,
    /// An etchant lists no compatible categories
    NoCompatibleMaterials,
}

/// One soft finding against a catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Kind of finding
    pub kind: DiagnosticKind,
    /// Etchant the finding is about
    pub etchant: String,
    /// Human-readable description
    pub description: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.etchant, self.description)
    }
}

/// Catalog validator
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogValidator;

impl CatalogValidator {
    /// Create new validator instance
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Check id integrity
    ///
    /// # Returns
    /// - `Ok(())` if every id is non-empty and unique within its kind
    /// - `Err(ValidationError)` for the first violation in document order
    pub fn check_ids(
        &self,
        materials: &[Material],
        etchants: &[Etchant],
    ) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(materials.len());
        for (index, material) in materials.iter().enumerate() {
            let id = material.id.as_str();
            if id.trim().is_empty() {
                return Err(ValidationError::EmptyId { kind: "material", index });
            }
            if !seen.insert(id) {
                return Err(ValidationError::DuplicateMaterialId(id.to_string()));
            }
        }

        let mut seen = HashSet::with_capacity(etchants.len());
        for (index, etchant) in etchants.iter().enumerate() {
            let id = etchant.id.as_str();
            if id.trim().is_empty() {
                return Err(ValidationError::EmptyId { kind: "etchant", index });
            }
            if !seen.insert(id) {
                return Err(ValidationError::DuplicateEtchantId(id.to_string()));
            }
        }

        Ok(())
    }

    /// Collect soft findings, in etchant order
    #[must_use]
    pub fn diagnostics(&self, materials: &[Material], etchants: &[Etchant]) -> Vec<Diagnostic> {
        let known: HashSet<&MaterialId> = materials.iter().map(|m| &m.id).collect();
        let mut findings = Vec::new();

        for etchant in etchants {
            if etchant.compatible_materials.is_empty() {
                findings.push(Diagnostic {
                    kind: DiagnosticKind::NoCompatibleMaterials,
                    etchant: etchant.id.to_string(),
                    description: "no compatible material categories listed".to_string(),
                });
            }

            for category in &etchant.compatible_materials {
                let conflicting = etchant
                    .incompatible_materials
                    .iter()
                    .any(|c| c.eq_ignore_ascii_case(category));
                if conflicting {
                    findings.push(Diagnostic {
                        kind: DiagnosticKind::CompatibilityConflict,
                        etchant: etchant.id.to_string(),
                        description: format!(
                            "category '{category}' is listed as compatible and incompatible"
                        ),
                    });
                }
            }

            for related in &etchant.related_material_ids {
                if !known.contains(related) {
                    findings.push(Diagnostic {
                        kind: DiagnosticKind::UnknownRelatedMaterial,
                        etchant: etchant.id.to_string(),
                        description: format!("related material '{related}' not found"),
                    });
                }
            }
        }

        findings
    }
}
