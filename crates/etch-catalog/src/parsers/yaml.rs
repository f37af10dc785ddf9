//! YAML catalog parser
//!
//! Uses serde_yaml. A file may hold several `---` separated documents;
//! their lists are concatenated in file order, so a catalog can be
//! split into a materials section and an etchants section.

use super::{CatalogDocument, CatalogParser};
use crate::error::ParseError;
use serde::Deserialize;
use serde_yaml::Value;

/// YAML catalog parser
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl CatalogParser for YamlParser {
    fn parse(&self, content: &str) -> Result<CatalogDocument, ParseError> {
        let mut merged = CatalogDocument::default();

        for document in serde_yaml::Deserializer::from_str(content) {
            let value = Value::deserialize(document)
                .map_err(|e| ParseError::ParserError(format!("invalid YAML: {e}")))?;
            if value.is_null() {
                continue;
            }

            let doc: CatalogDocument = serde_yaml::from_value(value)
                .map_err(|e| ParseError::ParserError(e.to_string()))?;
            merged.materials.extend(doc.materials);
            merged.etchants.extend(doc.etchants);
            merged.products.extend(doc.products);
        }

        Ok(merged)
    }

    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HardnessCategory;

    #[test]
    fn parses_single_document() {
        let yaml = r"
materials:
  - id: ti64
    name: Ti-6Al-4V
    category: Titanium Alloys
    hardness_category: hard
etchants:
  - id: kroll
    name: Kroll's Reagent
    compatible_materials: [titanium]
    featured: true
";
        let doc = YamlParser.parse(yaml).unwrap();
        assert_eq!(doc.materials[0].hardness_category, Some(HardnessCategory::Hard));
        assert!(doc.etchants[0].featured);
    }

    #[test]
    fn concatenates_documents_in_order() {
        let yaml = r"
materials:
  - id: a
    name: A
---
materials:
  - id: b
    name: B
etchants:
  - id: e
    name: E
";
        let doc = YamlParser.parse(yaml).unwrap();
        let ids: Vec<_> = doc.materials.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(doc.etchants.len(), 1);
    }

    #[test]
    fn empty_input_is_empty_catalog() {
        let doc = YamlParser.parse("").unwrap();
        assert_eq!(doc, CatalogDocument::default());
    }

    #[test]
    fn rejects_wrong_shape() {
        let yaml = "materials: 12\n";
        assert!(YamlParser.parse(yaml).is_err());
    }
}
