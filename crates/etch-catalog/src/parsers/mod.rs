//! Catalog document parsers
//!
//! Provides parsing from external file formats into a `CatalogDocument`:
//! - JSON exports via serde_json
//! - Hand-maintained YAML via serde_yaml

use crate::error::ParseError;
use crate::model::{Etchant, Material, ProductLink};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod json;
mod yaml;

pub use json::JsonParser;
pub use yaml::YamlParser;

/// Raw catalog contents, in document order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Materials
    #[serde(default)]
    pub materials: Vec<Material>,
    /// Etchants
    #[serde(default)]
    pub etchants: Vec<Etchant>,
    /// Product links
    #[serde(default)]
    pub products: Vec<ProductLink>,
}

/// Parser trait for converting file content into a catalog document
///
/// Implement this trait to add support for new file formats.
pub trait CatalogParser: Send + Sync + 'static {
    /// Parse content string into a document
    fn parse(&self, content: &str) -> Result<CatalogDocument, ParseError>;

    /// Check if this parser can handle the given path
    fn can_parse(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions().contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    /// Supported file extensions (without dot, lowercase)
    fn extensions(&self) -> &[&str];

    /// Parser priority (higher = tried first when multiple parsers match)
    fn priority(&self) -> i32 {
        0
    }
}

/// Parser registration for extension-based dispatch
pub struct ParserRegistry {
    parsers: Vec<Box<dyn CatalogParser>>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        default_parsers()
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parser_count", &self.parsers.len())
            .field("extensions", &self.all_extensions())
            .finish()
    }
}

impl ParserRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Register a parser
    pub fn register<P: CatalogParser>(&mut self, parser: P) {
        self.parsers.push(Box::new(parser));
        self.parsers.sort_by_key(|p| std::cmp::Reverse(p.priority()));
    }

    /// Find parser for path
    #[must_use]
    pub fn find_for_path(&self, path: &Path) -> Option<&dyn CatalogParser> {
        self.parsers.iter().find(|p| p.can_parse(path)).map(|p| &**p)
    }

    /// Get all registered extensions
    #[must_use]
    pub fn all_extensions(&self) -> Vec<&str> {
        self.parsers
            .iter()
            .flat_map(|p| p.extensions())
            .copied()
            .collect()
    }

    /// Parse in-memory content as if it had been read from `path`
    pub fn parse_str(&self, path: &Path, content: &str) -> Result<CatalogDocument, ParseError> {
        let parser = self.find_for_path(path).ok_or_else(|| {
            ParseError::NoParserForExtension(
                path.extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or_default()
                    .to_string(),
            )
        })?;

        parser.parse(content).map_err(|e| e.at_path(path))
    }

    /// Read and parse a catalog file
    pub fn parse_file(&self, path: &Path) -> Result<CatalogDocument, ParseError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ParseError::io_error(path, e))?;
        let document = self.parse_str(path, &content)?;

        tracing::debug!(
            path = %path.display(),
            materials = document.materials.len(),
            etchants = document.etchants.len(),
            products = document.products.len(),
            "parsed catalog document"
        );

        Ok(document)
    }
}

/// Create default parser registry with built-in parsers
#[inline]
#[must_use]
pub fn default_parsers() -> ParserRegistry {
    let mut registry = ParserRegistry::new();
    registry.register(JsonParser);
    registry.register(YamlParser);
    registry
}
