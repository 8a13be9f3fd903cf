//! Gzip and tar-gzip archive materialization.
//!
//! Archives are extracted once. A marker file named after the archive is
//! written into the target directory on success and later loads skip the
//! archive while the marker is at least as new as the archive itself.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use flate2::read::{GzDecoder, MultiGzDecoder};

use crate::IngestError;

/// File extensions recognized as collision archives.
pub const ARCHIVE_EXTENSIONS: &[&str] = &["tgz", "gz"];

/// Suffixes removed from an archive's file name to name its extraction
/// folder, longest first.
const ARCHIVE_SUFFIXES: &[&str] = &[".tar.gz", ".tgz", ".gz"];

const TAR_BLOCK_SIZE: u64 = 512;
const USTAR_MAGIC: &[u8] = b"ustar";
const USTAR_MAGIC_OFFSET: usize = 257;

/// What a gzip stream decompresses to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    /// A tar archive of CSV files.
    Tar,
    /// A single compressed CSV file.
    PlainGzip,
}

/// Outcome of [`extract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Directory the archive's CSV files live in.
    pub target: PathBuf,
    /// `true` if a previous extraction was reused.
    pub cached: bool,
}

/// Returns `true` if `path` has a recognized archive extension.
#[must_use]
pub fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ARCHIVE_EXTENSIONS.contains(&ext))
}

/// Returns the archive's file name with its compression suffix and any
/// `.csv`/`.tar` suffix removed (`ca.csv.tgz` becomes `ca`).
#[must_use]
pub fn archive_stem(archive_path: &Path) -> String {
    let name = file_name(archive_path);
    let name = ARCHIVE_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name.as_str());
    let name = name
        .strip_suffix(".csv")
        .or_else(|| name.strip_suffix(".tar"))
        .unwrap_or(name);
    name.to_owned()
}

/// Returns the directory `archive_path` extracts into.
///
/// Without an `extract_dir` the archive is extracted next to itself. With
/// one, each archive gets its own folder under it, named by
/// [`archive_stem`].
#[must_use]
pub fn extraction_target(archive_path: &Path, extract_dir: Option<&Path>) -> PathBuf {
    extract_dir.map_or_else(
        || match archive_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
        |dir| dir.join(archive_stem(archive_path)),
    )
}

/// Peeks at the decompressed stream to tell a tar archive from a plain
/// gzip-compressed file.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if the archive cannot be opened or is not
/// valid gzip.
pub fn detect_kind(archive_path: &Path) -> Result<ArchiveKind, IngestError> {
    let file = open(archive_path)?;
    let mut header = Vec::new();
    GzDecoder::new(file)
        .take(TAR_BLOCK_SIZE)
        .read_to_end(&mut header)
        .map_err(|e| IngestError::Io {
            path: archive_path.display().to_string(),
            source: e,
        })?;

    let magic = header.get(USTAR_MAGIC_OFFSET..USTAR_MAGIC_OFFSET + USTAR_MAGIC.len());
    Ok(if magic == Some(USTAR_MAGIC) {
        ArchiveKind::Tar
    } else {
        ArchiveKind::PlainGzip
    })
}

/// Extracts `archive_path` into `target` unless a fresh extraction marker
/// is already there.
///
/// Tar archives are unpacked with their internal layout. A plain gzip file
/// is decompressed to `<target>/<stem>.csv`.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if the archive cannot be read or the target
/// cannot be written.
pub fn extract(archive_path: &Path, target: &Path) -> Result<Extraction, IngestError> {
    let marker = marker_path(archive_path, target);

    if is_fresh(&marker, archive_path) {
        log::debug!(
            "Reusing extraction of {} in {}",
            archive_path.display(),
            target.display()
        );
        return Ok(Extraction {
            target: target.to_path_buf(),
            cached: true,
        });
    }

    fs::create_dir_all(target).map_err(|e| IngestError::Io {
        path: target.display().to_string(),
        source: e,
    })?;

    match detect_kind(archive_path)? {
        ArchiveKind::Tar => {
            log::info!(
                "Unpacking {} -> {}",
                archive_path.display(),
                target.display()
            );
            let mut archive = tar::Archive::new(GzDecoder::new(open(archive_path)?));
            archive.unpack(target).map_err(|e| IngestError::Io {
                path: target.display().to_string(),
                source: e,
            })?;
        }
        ArchiveKind::PlainGzip => {
            let csv_path = target.join(format!("{}.csv", archive_stem(archive_path)));
            log::info!(
                "Decompressing {} -> {}",
                archive_path.display(),
                csv_path.display()
            );
            decompress(archive_path, &csv_path)?;
        }
    }

    fs::write(&marker, b"").map_err(|e| IngestError::Io {
        path: marker.display().to_string(),
        source: e,
    })?;

    Ok(Extraction {
        target: target.to_path_buf(),
        cached: false,
    })
}

fn decompress(archive_path: &Path, csv_path: &Path) -> Result<u64, IngestError> {
    let mut decoder = MultiGzDecoder::new(open(archive_path)?);
    let mut out = File::create(csv_path).map_err(|e| IngestError::Io {
        path: csv_path.display().to_string(),
        source: e,
    })?;
    io::copy(&mut decoder, &mut out).map_err(|e| IngestError::Io {
        path: archive_path.display().to_string(),
        source: e,
    })
}

fn marker_path(archive_path: &Path, target: &Path) -> PathBuf {
    target.join(format!(".{}.extracted", file_name(archive_path)))
}

fn is_fresh(marker: &Path, archive_path: &Path) -> bool {
    let modified = |path: &Path| fs::metadata(path).and_then(|m| m.modified()).ok();
    match (modified(marker), modified(archive_path)) {
        (Some(extracted_at), Some(archived_at)) => extracted_at >= archived_at,
        _ => false,
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn open(path: &Path) -> Result<File, IngestError> {
    File::open(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
