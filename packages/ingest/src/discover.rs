//! Recursive discovery of archives and extracted CSV files.

use std::path::{Path, PathBuf};

use crate::IngestError;
use crate::archive;

/// Recursively collects every archive under `dir`, sorted by path.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if a directory cannot be read.
pub fn archives(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    collect(dir, archive::is_archive)
}

/// Recursively collects every `.csv` file under `dir`, sorted by path.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if a directory cannot be read.
pub fn csv_files(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    collect(dir, |path| path.extension().is_some_and(|ext| ext == "csv"))
}

fn collect(dir: &Path, wanted: fn(&Path) -> bool) -> Result<Vec<PathBuf>, IngestError> {
    let mut files = Vec::new();
    collect_recursive(dir, wanted, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_recursive(
    dir: &Path,
    wanted: fn(&Path) -> bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), IngestError> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::Io {
        path: dir.display().to_string(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| IngestError::Io {
            path: dir.display().to_string(),
            source: e,
        })?;

        let path = entry.path();
        if path.is_dir() {
            collect_recursive(&path, wanted, files)?;
        } else if wanted(&path) {
            files.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::scratch_dir;

    #[test]
    fn finds_nested_files_in_sorted_order() {
        let tmp = scratch_dir("discover_nested");
        fs::create_dir_all(tmp.join("canada/2017")).unwrap();
        fs::write(tmp.join("canada/2017/b.csv.tgz"), b"").unwrap();
        fs::write(tmp.join("canada/a.csv.gz"), b"").unwrap();
        fs::write(tmp.join("canada/notes.txt"), b"").unwrap();
        fs::write(tmp.join("canada/2017/b.csv"), b"").unwrap();

        assert_eq!(
            archives(&tmp).unwrap(),
            [tmp.join("canada/2017/b.csv.tgz"), tmp.join("canada/a.csv.gz")]
        );
        assert_eq!(csv_files(&tmp).unwrap(), [tmp.join("canada/2017/b.csv")]);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn missing_directories_are_errors() {
        let tmp = scratch_dir("discover_missing");
        assert!(matches!(
            archives(&tmp.join("nope")),
            Err(IngestError::Io { .. })
        ));
        let _ = fs::remove_dir_all(&tmp);
    }
}
