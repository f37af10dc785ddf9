//! Product links for a material
//!
//! Keyword tagging over the material's notes and tags. Each product is
//! reported at most once, with the first of its keywords that hit.

use etch_catalog::{Material, ProductLink};
use serde::Serialize;

/// A product suggested for a material
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductMatch<'a> {
    /// Linked product
    pub product: &'a ProductLink,
    /// Keyword that triggered the link
    pub keyword: &'a str,
}

/// Products whose keywords appear in the material's notes or tags
///
/// Output follows product order. Blank keywords never match.
#[must_use]
pub fn link_products<'a>(
    material: &Material,
    products: &'a [ProductLink],
) -> Vec<ProductMatch<'a>> {
    let haystacks: Vec<String> = material
        .notes
        .iter()
        .chain(&material.tags)
        .map(|text| text.to_lowercase())
        .collect();

    if haystacks.is_empty() {
        return Vec::new();
    }

    products
        .iter()
        .filter_map(|product| {
            product
                .keywords
                .iter()
                .map(|kw| kw.trim())
                .filter(|kw| !kw.is_empty())
                .find(|kw| {
                    let needle = kw.to_lowercase();
                    haystacks.iter().any(|h| h.contains(&needle))
                })
                .map(|keyword| ProductMatch { product, keyword })
        })
        .collect()
}
