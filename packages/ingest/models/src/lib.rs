#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Archive load options, load summaries and export formats.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Configuration for an archive load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Region subdirectory to restrict discovery to (e.g. `canada`).
    pub region: Option<String>,
    /// Only keep rows whose `C_YEAR` equals this year.
    pub year: Option<i64>,
    /// Directory to materialize archives into. When `None`, each archive
    /// is extracted next to itself.
    pub extract_dir: Option<PathBuf>,
}

impl LoadOptions {
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub const fn with_year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub fn with_extract_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.extract_dir = Some(dir.into());
        self
    }
}

/// Counters describing a completed load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Archives opened.
    pub archives: u64,
    /// Archives whose extraction was skipped because it was already done.
    pub archives_cached: u64,
    /// CSV files found in extraction folders.
    pub csv_files: u64,
    /// CSV files skipped because their header lacks required columns.
    pub csv_files_skipped: u64,
    /// Data rows read from CSV files.
    pub rows_read: u64,
    /// Rows that passed the year filter and decoded into records.
    pub rows_kept: u64,
    /// Rows that passed the year filter but failed to decode.
    pub rows_skipped: u64,
    /// Wall-clock time spent loading.
    pub duration: Duration,
}

impl LoadSummary {
    /// Adds another summary's counters into this one.
    pub fn merge(&mut self, other: &Self) {
        self.archives += other.archives;
        self.archives_cached += other.archives_cached;
        self.csv_files += other.csv_files;
        self.csv_files_skipped += other.csv_files_skipped;
        self.rows_read += other.rows_read;
        self.rows_kept += other.rows_kept;
        self.rows_skipped += other.rows_skipped;
        self.duration += other.duration;
    }
}

/// Output format for exported records.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ExportFormat {
    /// A single pretty-printed JSON array
    #[default]
    Json,
    /// One JSON object per line
    #[serde(rename = "jsonl")]
    #[strum(serialize = "jsonl")]
    JsonLines,
    /// CSV with a header row of field names
    Csv,
}
