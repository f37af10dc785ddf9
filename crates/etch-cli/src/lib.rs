//! Etch CLI
//!
//! Command-line front end for the etchant selector. The binary is a thin
//! wrapper: [`build_cli`] defines the arguments, [`init_tracing`] sets up
//! logging on stderr and [`run`] executes a subcommand against any writer.
//!
//! # Subcommands
//!
//! - `match`: ranked etchants for one material, optionally for a purpose
//! - `materials`: list or search catalog materials
//! - `validate`: load a catalog and report soft diagnostics
//! - `products`: consumables linked to a material by keyword
//! - `purposes`: the purpose vocabulary and its keywords

#![warn(missing_docs)]

pub mod config;
pub mod output;

use anyhow::{bail, Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use etch_catalog::{Catalog, Material, MaterialId};
use etch_matcher::{link_products, MatchResult, Matcher, Purpose, TieBreak};
use std::io::Write;
use std::path::{Path, PathBuf};

pub use config::{CliConfig, OutputConfig, OutputFormat};
pub use output::MatchReport;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn catalog_arg() -> Arg {
    Arg::new("catalog")
        .long("catalog")
        .short('c')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Catalog document (.json, .yaml or .yml)")
}

fn material_arg() -> Arg {
    Arg::new("material")
        .long("material")
        .short('m')
        .required(true)
        .help("Material id or exact name")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

/// Command-line definition
#[must_use]
pub fn build_cli() -> Command {
    Command::new("etch")
        .version(VERSION)
        .about("Rank metallographic etchants for a material")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v debug, -vv trace)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .subcommand(
            Command::new("match")
                .about("Rank etchants for a material")
                .arg(catalog_arg())
                .arg(material_arg())
                .arg(
                    Arg::new("purpose")
                        .long("purpose")
                        .short('p')
                        .help("Feature to reveal, e.g. grain-boundaries"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .short('n')
                        .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
                        .help("Show at most this many results"),
                )
                .arg(
                    Arg::new("tie-break")
                        .long("tie-break")
                        .value_parser(["catalog-order", "name"])
                        .help("Order among equal scores"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("materials")
                .about("List catalog materials")
                .arg(catalog_arg())
                .arg(
                    Arg::new("search")
                        .long("search")
                        .short('s')
                        .help("Filter by name, alternative name or tag"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("validate")
                .about("Check a catalog document")
                .arg(catalog_arg())
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Fail when the catalog has warnings"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("products")
                .about("Products linked to a material")
                .arg(catalog_arg())
                .arg(material_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("purposes")
                .about("List the purpose vocabulary")
                .arg(json_arg()),
        )
}

/// Install the stderr subscriber
///
/// `RUST_LOG` wins when set; otherwise verbosity picks warn, debug or trace.
pub fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Execute the parsed command line, writing the report to `out`
pub fn run(matches: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    match matches.subcommand() {
        Some(("match", args)) => run_match(args, config, out),
        Some(("materials", args)) => run_materials(args, &config, out),
        Some(("validate", args)) => run_validate(args, &config, out),
        Some(("products", args)) => run_products(args, &config, out),
        Some(("purposes", args)) => output::render_purposes(format_for(args, &config), out),
        Some((other, _)) => bail!("unknown subcommand '{other}'"),
        None => bail!("no subcommand given"),
    }
}

fn format_for(args: &ArgMatches, config: &CliConfig) -> OutputFormat {
    if args.get_flag("json") {
        OutputFormat::Json
    } else {
        config.output.format
    }
}

fn load_catalog(args: &ArgMatches) -> Result<Catalog> {
    let path = args
        .get_one::<PathBuf>("catalog")
        .context("--catalog is required")?;
    open_catalog(path)
}

/// Resolve a material by id, falling back to a case-insensitive name match
fn find_material<'c>(catalog: &'c Catalog, key: &str) -> Result<&'c Material> {
    if let Some(material) = catalog.material(&MaterialId::new(key)) {
        return Ok(material);
    }

    let wanted = key.trim().to_lowercase();
    if let Some(material) = catalog
        .materials()
        .iter()
        .find(|m| m.name.to_lowercase() == wanted)
    {
        return Ok(material);
    }

    let suggestions: Vec<_> = catalog
        .search_materials(key)
        .into_iter()
        .take(5)
        .map(|m| m.id.as_str())
        .collect();
    if suggestions.is_empty() {
        bail!("unknown material '{key}'");
    }
    bail!("unknown material '{key}' (did you mean: {}?)", suggestions.join(", "))
}

fn run_match(args: &ArgMatches, mut config: CliConfig, out: &mut dyn Write) -> Result<()> {
    let catalog = load_catalog(args)?;
    let key = args
        .get_one::<String>("material")
        .context("--material is required")?;
    let material = find_material(&catalog, key)?;

    let purpose = args
        .get_one::<String>("purpose")
        .map(|p| p.parse::<Purpose>())
        .transpose()?;

    if let Some(tie) = args.get_one::<String>("tie-break") {
        config.matcher.tie_break = match tie.as_str() {
            "name" => TieBreak::Name,
            _ => TieBreak::CatalogOrder,
        };
    }
    let limit = args
        .get_one::<usize>("limit")
        .copied()
        .or(config.output.limit);
    let format = format_for(args, &config);

    let matcher = Matcher::new(config.matcher);
    let results = rank(&matcher, material, purpose, catalog.etchants());

    tracing::info!(
        material = %material.id,
        purpose = ?purpose,
        matches = results.len(),
        "ranked etchants"
    );

    MatchReport::new(&matcher, material, purpose, &results, limit).render(format, out)
}

#[cfg(feature = "parallel")]
fn rank<'a>(
    matcher: &Matcher,
    material: &Material,
    purpose: Option<Purpose>,
    etchants: &'a [etch_catalog::Etchant],
) -> Vec<MatchResult<'a>> {
    matcher.rank_par(material, purpose, etchants)
}

#[cfg(not(feature = "parallel"))]
fn rank<'a>(
    matcher: &Matcher,
    material: &Material,
    purpose: Option<Purpose>,
    etchants: &'a [etch_catalog::Etchant],
) -> Vec<MatchResult<'a>> {
    matcher.rank(material, purpose, etchants)
}

fn run_materials(args: &ArgMatches, config: &CliConfig, out: &mut dyn Write) -> Result<()> {
    let catalog = load_catalog(args)?;
    let query = args.get_one::<String>("search").map_or("", String::as_str);
    let materials = catalog.search_materials(query);
    output::render_materials(&materials, format_for(args, config), out)
}

fn run_validate(args: &ArgMatches, config: &CliConfig, out: &mut dyn Write) -> Result<()> {
    let catalog = load_catalog(args)?;
    let diagnostics = catalog.diagnostics();
    for diagnostic in &diagnostics {
        tracing::debug!(kind = ?diagnostic.kind, "{diagnostic}");
    }

    output::render_validation(&catalog, &diagnostics, format_for(args, config), out)?;

    if args.get_flag("strict") && !diagnostics.is_empty() {
        bail!("catalog has {} warning(s)", diagnostics.len());
    }
    Ok(())
}

fn run_products(args: &ArgMatches, config: &CliConfig, out: &mut dyn Write) -> Result<()> {
    let catalog = load_catalog(args)?;
    let key = args
        .get_one::<String>("material")
        .context("--material is required")?;
    let material = find_material(&catalog, key)?;
    let matches = link_products(material, catalog.products());
    output::render_products(material, &matches, format_for(args, config), out)
}

/// Load a catalog file; exposed for embedding
pub fn open_catalog(path: &Path) -> Result<Catalog> {
    Catalog::from_path(path).with_context(|| format!("loading catalog {}", path.display()))
}
