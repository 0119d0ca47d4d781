//! `disc-designer`: evaluate a disc profile from the command line and
//! optionally write a printable STL.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use disc_engine::{DesignReport, DesignSession, EngineConfig, Preset};
use disc_export::TableRow;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Quality {
    Preview,
    Default,
    Precise,
}

#[derive(Parser)]
#[command(name = "disc-designer")]
#[command(about = "Parametric disc golf disc designer", long_about = None)]
struct Cli {
    /// Starting profile
    #[arg(long, default_value = "driver")]
    preset: Preset,

    /// Disc radius in mm
    #[arg(long)]
    radius: Option<f64>,

    /// Shoulder distance from the axis in mm
    #[arg(long)]
    shoulder_offset: Option<f64>,

    /// Rim width in mm
    #[arg(long)]
    rim_width: Option<f64>,

    /// Total disc height in mm
    #[arg(long)]
    total_height: Option<f64>,

    /// Flight plate thickness in mm
    #[arg(long = "flight-plate")]
    flight_plate: Option<f64>,

    /// Material key or label (pla, petg, abs, commercial)
    #[arg(short, long, default_value = "petg")]
    material: String,

    /// Mesh resolution preset, ignored when --config is given
    #[arg(long, value_enum, default_value_t = Quality::Default)]
    quality: Quality,

    /// Engine configuration as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the export mesh as STL
    #[arg(long)]
    stl: Option<PathBuf>,

    /// Write ASCII instead of binary STL
    #[arg(long, requires = "stl")]
    ascii: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut session = DesignSession::with_preset(cli.preset, config);

    let mut params = session.profile().key_parameters();
    if let Some(radius) = cli.radius {
        params.radius = radius;
    }
    if let Some(offset) = cli.shoulder_offset {
        params.shoulder_offset = offset;
    }
    if let Some(width) = cli.rim_width {
        params.rim_width = width;
    }
    if let Some(height) = cli.total_height {
        params.total_height = height;
    }
    if let Some(thickness) = cli.flight_plate {
        params.flight_plate_thickness = thickness;
    }
    session
        .apply_key_parameters(&params)
        .context("invalid key parameters")?;
    session.set_material_key(&cli.material);

    let report = session.evaluate();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &session.dimension_table());
    }

    if let Some(path) = &cli.stl {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("disc");
        let written = if cli.ascii {
            fs::write(path, session.export_stl_ascii(name)?)
        } else {
            fs::write(path, session.export_stl_binary(name)?)
        };
        written.with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), ascii = cli.ascii, "stl written");
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let Some(path) = &cli.config else {
        return Ok(match cli.quality {
            Quality::Preview => EngineConfig::preview(),
            Quality::Default => EngineConfig::default(),
            Quality::Precise => EngineConfig::precise(),
        });
    };
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    EngineConfig::from_json(&json).with_context(|| format!("parsing {}", path.display()))
}

fn print_report(report: &DesignReport, table: &[TableRow]) {
    println!("Material: {}", report.material);
    println!();
    for row in table {
        println!("  {:<24} {:>10.2} {}", row.name, row.value, row.unit);
    }
    if report.dimensions.weight_is_approximate {
        let reason = report
            .volume
            .fallback_reason()
            .map(|r| r.to_string())
            .unwrap_or_default();
        println!("  (weight approximate: {reason})");
    }

    if !report.range_notices.is_empty() {
        println!();
        println!("Outside UI ranges:");
        for notice in &report.range_notices {
            println!("  - {notice}");
        }
    }

    if !report.constraint_violations.is_empty() {
        println!();
        println!("Geometry:");
        for violation in &report.constraint_violations {
            println!("  - {}", violation.message);
        }
    }

    let standards = &report.standards;
    if !standards.violations.is_empty() {
        println!();
        println!("Standards violations:");
        for finding in &standards.violations {
            println!("  - {}", finding.message);
        }
    }
    if !standards.warnings.is_empty() {
        println!();
        println!("Standards warnings:");
        for finding in &standards.warnings {
            println!("  - {}", finding.message);
        }
    }

    println!();
    if report.is_compliant() {
        println!("Design is within standards.");
    } else {
        println!("Design is NOT within standards.");
    }
}
