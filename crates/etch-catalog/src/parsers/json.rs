//! JSON catalog parser
//!
//! Accepts either a full document object or a bare array of etchants,
//! which is what a plain table export produces.

use super::{CatalogDocument, CatalogParser};
use crate::error::ParseError;
use crate::model::Etchant;

/// JSON catalog parser
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl CatalogParser for JsonParser {
    fn parse(&self, content: &str) -> Result<CatalogDocument, ParseError> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| ParseError::ParserError(format!("invalid JSON: {e}")))?;

        if value.is_array() {
            let etchants: Vec<Etchant> = serde_json::from_value(value)
                .map_err(|e| ParseError::ParserError(e.to_string()))?;
            return Ok(CatalogDocument {
                etchants,
                ..CatalogDocument::default()
            });
        }

        serde_json::from_value(value).map_err(|e| ParseError::ParserError(e.to_string()))
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }
}
