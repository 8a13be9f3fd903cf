//! Where collision archives live on disk.
//!
//! Archives are kept under `resources/<region>/` at the workspace root.
//! Set [`RESOURCES_DIR_ENV`] to read them from somewhere else.

use std::path::{Path, PathBuf};

/// Environment variable overriding [`resources_dir`].
pub const RESOURCES_DIR_ENV: &str = "ROAD_COLLISIONS_RESOURCES_DIR";

/// Region loaded when none is given.
pub const DEFAULT_REGION: &str = "canada";

/// Returns the workspace root directory.
///
/// Resolved at compile time from `CARGO_MANIFEST_DIR`.
#[must_use]
pub fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// Returns the directory holding per-region archive folders.
#[must_use]
pub fn resources_dir() -> PathBuf {
    std::env::var_os(RESOURCES_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map_or_else(|| project_root().join("resources"), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_root_is_the_workspace() {
        let root = project_root();
        assert!(root.join("Cargo.toml").is_file());
        assert!(root.join("packages").is_dir());
    }
}
