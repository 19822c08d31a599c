//! Result sink abstraction
//!
//! The validated bump classification is reported through the [ResultSink]
//! trait, which decouples the check from any specific CI provider. The
//! concrete implementations are:
//!
//! - [file::FileSink]: appends `key=value` lines to a file on disk, located
//!   either by an explicit path or by an environment variable
//! - [mock::MockSink]: records appends in memory for testing
//!
//! Most code should depend on the trait rather than a concrete sink.
//!
//! ```ignore
//! let sink = FileSink::from_env("GITHUB_OUTPUT");
//! sink.append("bump_type", "minor")?;   // appends "bump_type=minor\n"
//! ```

pub mod file;
pub mod mock;

pub use file::FileSink;
pub use mock::MockSink;

use crate::error::Result;

/// Destination for the validated bump classification
///
/// Implementations append one `key=value` line per call and must be
/// `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying failures (unresolvable targets, I/O errors) to the appropriate
/// [crate::error::BumpCheckError] variants.
pub trait ResultSink: Send + Sync {
    /// Append a single `key=value` line to the sink
    ///
    /// # Arguments
    /// * `key` - Output key (e.g., "bump_type")
    /// * `value` - Output value (e.g., "minor")
    ///
    /// # Returns
    /// * `Ok(())` - Line recorded
    /// * `Err` - The sink could not be resolved or written
    fn append(&self, key: &str, value: &str) -> Result<()>;
}
