//! Configuration options for the metadata manager.
//!
//! The `Options` struct controls how metadata-application failures are
//! reported to callers.

/// Configuration options for [`MetadataManager`](crate::MetadataManager).
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use seo_head::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Surface mutation failures to the caller
/// let options = Options {
///     propagate_errors: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Return mutation failures to the caller instead of swallowing them.
    ///
    /// When `false`, each public operation is independently fault-isolated:
    /// a failed head mutation is recorded on the diagnostic channel and the
    /// operation returns `Ok(())`, so one failed operation never prevents
    /// subsequent, unrelated operations from succeeding. Missing metadata is
    /// a quality issue for the host page, not a functional one.
    ///
    /// When `true`, mutation failures are returned as errors, for callers
    /// that monitor metadata application.
    ///
    /// Serialization failures of structured-data payloads are returned
    /// under both settings.
    ///
    /// Default: `false`
    pub propagate_errors: bool,
}
