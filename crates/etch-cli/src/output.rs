//! Report rendering for the `etch` binary

use crate::config::OutputFormat;
use anyhow::Result;
use etch_catalog::{Catalog, Diagnostic, Material};
use etch_matcher::{normalize_category, ColorBand, MatchResult, Matcher, ProductMatch, Purpose};
use serde::Serialize;
use std::io::Write;

/// Material summary shared by several reports
#[derive(Debug, Serialize)]
pub struct MaterialSummary<'a> {
    /// Material id
    pub id: &'a str,
    /// Display name
    pub name: &'a str,
    /// Normalized category
    pub category: String,
}

impl<'a> MaterialSummary<'a> {
    /// Summarize a material
    #[must_use]
    pub fn new(material: &'a Material) -> Self {
        Self {
            id: material.id.as_str(),
            name: &material.name,
            category: normalize_category(material).to_string(),
        }
    }
}

/// One ranked line
#[derive(Debug, Serialize)]
pub struct RankedEtchant<'a> {
    /// 1-based position
    pub rank: usize,
    /// Etchant id
    pub id: &'a str,
    /// Etchant display name
    pub name: &'a str,
    /// Total points
    pub score: u32,
    /// Score as a percentage of the configured maximum
    pub percentage: u8,
    /// Strength band for the percentage
    pub band: ColorBand,
    /// Reason texts in rule order
    pub reasons: Vec<String>,
}

/// Output of `etch match`
#[derive(Debug, Serialize)]
pub struct MatchReport<'a> {
    /// Queried material
    pub material: MaterialSummary<'a>,
    /// Requested purpose, if any
    pub purpose: Option<Purpose>,
    /// Matches before the limit was applied
    pub total_matches: usize,
    /// Ranked lines, at most the limit
    pub results: Vec<RankedEtchant<'a>>,
}

impl<'a> MatchReport<'a> {
    /// Build the report, keeping at most `limit` ranked lines
    #[must_use]
    pub fn new(
        matcher: &Matcher,
        material: &'a Material,
        purpose: Option<Purpose>,
        results: &[MatchResult<'a>],
        limit: Option<usize>,
    ) -> Self {
        let shown = limit.unwrap_or(results.len());
        let ranked = results
            .iter()
            .take(shown)
            .enumerate()
            .map(|(i, r)| RankedEtchant {
                rank: i + 1,
                id: r.etchant.id.as_str(),
                name: &r.etchant.name,
                score: r.score,
                percentage: matcher.percentage(r),
                band: matcher.color_band(r),
                reasons: r.reason_texts(),
            })
            .collect();

        Self {
            material: MaterialSummary::new(material),
            purpose,
            total_matches: results.len(),
            results: ranked,
        }
    }

    /// Write the report
    pub fn render(&self, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
        match format {
            OutputFormat::Json => write_json(self, out),
            OutputFormat::Text => {
                write!(out, "Etchants for {} [{}]", self.material.name, self.material.category)?;
                if let Some(purpose) = self.purpose {
                    write!(out, ", revealing {}", purpose.label())?;
                }
                writeln!(out)?;

                if self.total_matches == 0 {
                    writeln!(out, "  No compatible etchants found.")?;
                    return Ok(());
                }

                let width = self.results.iter().map(|r| r.name.len()).max().unwrap_or(0);
                for r in &self.results {
                    writeln!(
                        out,
                        "  {:>2}. {:<width$}  {:>4}  {:>3}%  {:<6}  {}",
                        r.rank,
                        r.name,
                        r.score,
                        r.percentage,
                        r.band.as_str(),
                        r.reasons.join(", "),
                    )?;
                }
                if self.total_matches > self.results.len() {
                    writeln!(out, "  ... {} more", self.total_matches - self.results.len())?;
                }
                Ok(())
            }
        }
    }
}

/// Output of `etch materials`
pub fn render_materials(
    materials: &[&Material],
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let summaries: Vec<_> = materials.iter().map(|m| MaterialSummary::new(m)).collect();
    match format {
        OutputFormat::Json => write_json(&summaries, out),
        OutputFormat::Text => {
            if summaries.is_empty() {
                writeln!(out, "No materials found.")?;
                return Ok(());
            }
            let width = summaries.iter().map(|s| s.id.len()).max().unwrap_or(0);
            for s in &summaries {
                writeln!(out, "{:<width$}  {}  [{}]", s.id, s.name, s.category)?;
            }
            Ok(())
        }
    }
}

#[derive(Debug, Serialize)]
struct ProductLine<'a> {
    id: &'a str,
    label: &'a str,
    url: Option<&'a str>,
    keyword: &'a str,
}

/// Output of `etch products`
pub fn render_products(
    material: &Material,
    matches: &[ProductMatch<'_>],
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let lines: Vec<_> = matches
        .iter()
        .map(|m| ProductLine {
            id: &m.product.id,
            label: &m.product.label,
            url: m.product.url.as_deref(),
            keyword: m.keyword,
        })
        .collect();

    match format {
        OutputFormat::Json => write_json(&lines, out),
        OutputFormat::Text => {
            writeln!(out, "Products for {}", material.name)?;
            if lines.is_empty() {
                writeln!(out, "  No linked products.")?;
            }
            for line in &lines {
                write!(out, "  {} (matched \"{}\")", line.label, line.keyword)?;
                if let Some(url) = line.url {
                    write!(out, " {url}")?;
                }
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    materials: usize,
    etchants: usize,
    products: usize,
    warnings: Vec<String>,
}

/// Output of `etch validate`
pub fn render_validation(
    catalog: &Catalog,
    diagnostics: &[Diagnostic],
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let report = ValidationReport {
        materials: catalog.material_count(),
        etchants: catalog.etchant_count(),
        products: catalog.products().len(),
        warnings: diagnostics.iter().map(ToString::to_string).collect(),
    };

    match format {
        OutputFormat::Json => write_json(&report, out),
        OutputFormat::Text => {
            writeln!(
                out,
                "catalog OK: {} materials, {} etchants, {} products",
                report.materials, report.etchants, report.products
            )?;
            for warning in &report.warnings {
                writeln!(out, "  warning: {warning}")?;
            }
            Ok(())
        }
    }
}

/// Output of `etch purposes`
pub fn render_purposes(format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    #[derive(Serialize)]
    struct PurposeLine {
        purpose: Purpose,
        keywords: &'static [&'static str],
    }

    let lines: Vec<_> = Purpose::ALL
        .into_iter()
        .map(|purpose| PurposeLine {
            purpose,
            keywords: purpose.keywords(),
        })
        .collect();

    match format {
        OutputFormat::Json => write_json(&lines, out),
        OutputFormat::Text => {
            for line in &lines {
                if line.keywords.is_empty() {
                    writeln!(out, "{:<17} (no keyword bias)", line.purpose.as_str())?;
                } else {
                    writeln!(out, "{:<17} {}", line.purpose.as_str(), line.keywords.join(", "))?;
                }
            }
            Ok(())
        }
    }
}

fn write_json<T: Serialize + ?Sized>(value: &T, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
