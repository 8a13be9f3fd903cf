#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Loading collision archives from disk into a [`Collection`].
//!
//! Archives (`.tgz` or `.gz`) are discovered under the resources directory,
//! extracted once, and every CSV row inside is decoded into a
//! [`road_collisions_source::Record`]. Rows whose severity or vehicle type
//! cannot be decoded are logged and skipped.

pub mod archive;
pub mod discover;
pub mod export;
pub mod paths;
pub mod progress;
pub mod rows;

#[cfg(test)]
mod test_support;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use road_collisions_ingest_models::{LoadOptions, LoadSummary};
use road_collisions_source::{Collection, Record};
use road_collisions_source_models::{Field, RawRow, RawValue};

use crate::progress::{ProgressCallback, null_progress};

/// Errors that can occur while loading or exporting collisions.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The file is not a `.tgz` or `.gz` archive.
    #[error("Unsupported archive extension: {path}")]
    UnsupportedExtension {
        /// Path that was rejected.
        path: String,
    },

    /// I/O error while reading an archive or directory.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that caused the error.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An extracted CSV file could not be read.
    #[error("CSV error in {path}: {source}")]
    Csv {
        /// Path to the CSV file.
        path: String,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// An extracted CSV file's header lacks columns a record needs.
    #[error("{path} is missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// Path to the CSV file.
        path: String,
        /// Required columns absent from the header.
        columns: Vec<String>,
    },

    /// CSV export failed.
    #[error("CSV write error: {0}")]
    CsvWrite(#[from] csv::Error),

    /// JSON export failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing export output failed.
    #[error("Write error: {0}")]
    Output(#[from] std::io::Error),
}

/// Records and counters produced by a load.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub collisions: Collection,
    pub summary: LoadSummary,
}

/// Returns `true` if the row passes the optional year filter.
///
/// Rows whose `C_YEAR` does not coerce to an integer never match a year.
#[must_use]
pub fn year_matches(row: &RawRow, year: Option<i64>) -> bool {
    year.is_none_or(|year| row.get("C_YEAR").and_then(RawValue::as_int) == Some(year))
}

/// Loads archives according to a set of [`LoadOptions`].
pub struct Loader {
    options: LoadOptions,
    progress: Arc<dyn ProgressCallback>,
}

impl Loader {
    #[must_use]
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            progress: null_progress(),
        }
    }

    /// Reports per-archive progress to `progress`.
    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ProgressCallback>) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Extracts a single archive and decodes every CSV file in its
    /// extraction folder.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::UnsupportedExtension`] if `path` is not a
    /// `.tgz` or `.gz` file, or an I/O or CSV error if extraction or
    /// reading fails.
    pub fn load_file(&self, path: &Path) -> Result<Loaded, IngestError> {
        let start = Instant::now();

        if !archive::is_archive(path) {
            return Err(IngestError::UnsupportedExtension {
                path: path.display().to_string(),
            });
        }

        let target = archive::extraction_target(path, self.options.extract_dir.as_deref());
        let extraction = archive::extract(path, &target)?;

        let mut loaded = Loaded::default();
        loaded.summary.archives = 1;
        loaded.summary.archives_cached = u64::from(extraction.cached);

        let year = self.options.year;
        let required = Field::ALL.map(Field::column);
        for csv_path in discover::csv_files(&extraction.target)? {
            log::debug!("Reading {}", csv_path.display());
            loaded.summary.csv_files += 1;

            let collisions = &mut loaded.collisions;
            let mut kept = 0u64;
            let mut skipped = 0u64;
            let result = rows::read_rows(&csv_path, &required, |raw| {
                if !year_matches(&raw, year) {
                    return;
                }
                match Record::parse(raw) {
                    Ok(record) => {
                        collisions.push(record);
                        kept += 1;
                    }
                    Err(e) => {
                        log::warn!("Skipping row in {}: {e}", csv_path.display());
                        skipped += 1;
                    }
                }
            });

            let read = match result {
                Ok(read) => read,
                Err(IngestError::MissingColumns { path: csv_file, columns }) => {
                    log::warn!(
                        "Skipping {csv_file}: missing required columns {}",
                        columns.join(", ")
                    );
                    loaded.summary.csv_files_skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            loaded.summary.rows_read += read;
            loaded.summary.rows_kept += kept;
            loaded.summary.rows_skipped += skipped;
        }

        loaded.summary.duration = start.elapsed();
        log::debug!(
            "{}: {} records from {} CSV file(s)",
            path.display(),
            loaded.summary.rows_kept,
            loaded.summary.csv_files
        );

        Ok(loaded)
    }

    /// Loads every archive under `root`, or under `root/<region>` when a
    /// region is configured, in sorted path order.
    ///
    /// A search directory that does not exist yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Self::load_file`] or directory
    /// traversal.
    pub fn load_dir(&self, root: &Path) -> Result<Loaded, IngestError> {
        let start = Instant::now();
        let search_dir = self
            .options
            .region
            .as_ref()
            .map_or_else(|| root.to_path_buf(), |region| root.join(region));

        let mut loaded = Loaded::default();

        if !search_dir.is_dir() {
            log::warn!(
                "No collision data directory at {}, nothing to load",
                search_dir.display()
            );
            return Ok(loaded);
        }

        let archives = discover::archives(&search_dir)?;
        log::info!(
            "Found {} archive(s) under {}",
            archives.len(),
            search_dir.display()
        );
        self.progress.set_total(archives.len() as u64);

        for path in &archives {
            self.progress.set_message(
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );

            let file_loaded = self.load_file(path)?;
            loaded.collisions.extend(file_loaded.collisions);
            loaded.summary.merge(&file_loaded.summary);

            self.progress.inc(1);
        }

        loaded.summary.duration = start.elapsed();
        self.progress
            .finish(format!("Loaded {} collision records", loaded.collisions.len()));

        log::info!(
            "Loaded {} records from {} archive(s) ({} cached), {} CSV file(s) ({} skipped): {} rows read, {} skipped in {:.1}s",
            loaded.summary.rows_kept,
            loaded.summary.archives,
            loaded.summary.archives_cached,
            loaded.summary.csv_files,
            loaded.summary.csv_files_skipped,
            loaded.summary.rows_read,
            loaded.summary.rows_skipped,
            loaded.summary.duration.as_secs_f64()
        );

        Ok(loaded)
    }

    /// Loads from the default resources directory (see
    /// [`paths::resources_dir`]).
    ///
    /// # Errors
    ///
    /// See [`Self::load_dir`].
    pub fn load_all(&self) -> Result<Loaded, IngestError> {
        self.load_dir(&paths::resources_dir())
    }
}

/// Loads a single archive, keeping only rows from `year` when given.
///
/// # Errors
///
/// See [`Loader::load_file`].
pub fn load_file(path: &Path, year: Option<i64>) -> Result<Collection, IngestError> {
    Loader::new(LoadOptions {
        year,
        ..LoadOptions::default()
    })
    .load_file(path)
    .map(|loaded| loaded.collisions)
}

/// Loads every archive under `root/<region>` (or `root` when no region is
/// given).
///
/// # Errors
///
/// See [`Loader::load_dir`].
pub fn load_dir(
    root: &Path,
    region: Option<&str>,
    year: Option<i64>,
) -> Result<Collection, IngestError> {
    Loader::new(LoadOptions {
        region: region.map(str::to_owned),
        year,
        extract_dir: None,
    })
    .load_dir(root)
    .map(|loaded| loaded.collisions)
}

/// Loads every archive for `region` from the default resources directory.
///
/// # Errors
///
/// See [`Loader::load_dir`].
pub fn load_all(region: Option<&str>, year: Option<i64>) -> Result<Collection, IngestError> {
    load_dir(&paths::resources_dir(), region, year)
}
