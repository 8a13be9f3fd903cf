//! Progress reporting for archive loads.
//!
//! [`ProgressCallback`] keeps the loader independent of how progress is
//! rendered. The CLI supplies an `indicatif` bar; library callers and tests
//! use [`NullProgress`].

use std::sync::Arc;

/// Receives progress updates while archives are loaded.
///
/// The loader counts work in archives: the total is the number of archives
/// discovered and each loaded archive advances the position by one.
pub trait ProgressCallback: Send + Sync {
    /// Set the number of archives that will be loaded.
    fn set_total(&self, total: u64);

    /// Advance progress by `delta` archives.
    fn inc(&self, delta: u64);

    /// Show the archive currently being loaded.
    fn set_message(&self, msg: String);

    /// Mark the load as complete with a final message.
    fn finish(&self, msg: String);
}

/// Discards every update.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn set_total(&self, _total: u64) {}
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self, _msg: String) {}
}

#[must_use]
pub fn null_progress() -> Arc<dyn ProgressCallback> {
    Arc::new(NullProgress)
}
