#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for loading, filtering and exporting road collisions.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use road_collisions_cli_utils::{ArchiveProgress, init_logger};
use road_collisions_ingest::paths::{DEFAULT_REGION, resources_dir};
use road_collisions_ingest::{Loader, export};
use road_collisions_ingest_models::{ExportFormat, LoadOptions};
use road_collisions_source::{Collection, Criteria};
use road_collisions_source_models::Field;

#[derive(Parser)]
#[command(name = "road_collisions", about = "Road collision archive loader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load archives, optionally filter them, and export decoded records
    Load {
        /// Region folder under the resources directory (default: "canada")
        #[arg(long, conflicts_with = "all_regions")]
        region: Option<String>,
        /// Search the whole resources directory instead of one region
        #[arg(long)]
        all_regions: bool,
        /// Only keep collisions from this year
        #[arg(long)]
        year: Option<i64>,
        /// Resources directory (overrides `ROAD_COLLISIONS_RESOURCES_DIR`)
        #[arg(long)]
        resources: Option<PathBuf>,
        /// Extract archives here instead of next to each archive
        #[arg(long)]
        extract_dir: Option<PathBuf>,
        /// Keep records whose field equals the value, e.g. `c_weather=raining`.
        /// Repeatable; every constraint must hold
        #[arg(long = "where", value_name = "FIELD=VALUE")]
        filters: Vec<String>,
        /// Output format: json, jsonl or csv
        #[arg(long, default_value = "json", value_parser = parse_format)]
        format: ExportFormat,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List every record field and the source column it decodes from
    Fields,
}

fn parse_format(value: &str) -> Result<ExportFormat, String> {
    value
        .parse()
        .map_err(|_| format!("unknown format '{value}' (expected json, jsonl or csv)"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = init_logger();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fields => {
            println!("{:<22} {:<8} FACET", "FIELD", "COLUMN");
            println!("{}", "-".repeat(40));
            for field in Field::ALL {
                println!("{:<22} {:<8} {}", field, field.column(), field.facet());
            }
        }
        Commands::Load {
            region,
            all_regions,
            year,
            resources,
            extract_dir,
            filters,
            format,
            output,
        } => {
            let criteria = Criteria::from_pairs(&filters)?;

            let options = LoadOptions {
                region: if all_regions {
                    None
                } else {
                    Some(region.unwrap_or_else(|| DEFAULT_REGION.to_owned()))
                },
                year,
                extract_dir,
            };
            let root = resources.unwrap_or_else(resources_dir);

            let loaded = Loader::new(options)
                .with_progress(ArchiveProgress::archives_bar(&multi))
                .load_dir(&root)?;

            let selected = if criteria.is_empty() {
                loaded.collisions
            } else {
                let selected = loaded.collisions.filter(&criteria);
                log::info!(
                    "{} of {} records match {} constraint(s)",
                    selected.len(),
                    loaded.collisions.len(),
                    criteria.len()
                );
                selected
            };

            match output {
                Some(path) => {
                    write_to_file(&path, &selected, format)?;
                    log::info!("Wrote {} records to {}", selected.len(), path.display());
                }
                None => {
                    let stdout = std::io::stdout().lock();
                    export::write(&selected, format, BufWriter::new(stdout))?;
                }
            }
        }
    }

    Ok(())
}

fn write_to_file(
    path: &Path,
    collisions: &Collection,
    format: ExportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    export::write(collisions, format, &mut writer)?;
    writer.flush()?;
    Ok(())
}
