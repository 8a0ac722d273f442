//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strata-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{RenderContext, SourceEntry};
use crate::error::StrataResult;

/// Port for the read-only template source tree.
///
/// Implemented by:
/// - `strata_adapters::template_source::InMemoryTemplateSource` (embedded and
///   directory-loaded trees)
///
/// Paths are logical and slash-separated (`context/internal/CTX`), never
/// platform paths. The tree never changes while a process is running.
pub trait TemplateSource: Send + Sync {
    /// List the children of a directory, in stable enumeration order.
    fn read_dir(&self, path: &str) -> StrataResult<Vec<SourceEntry>>;

    /// Read the bytes of a file.
    fn read_file(&self, path: &str) -> StrataResult<Vec<u8>>;
}

/// Port for destination filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
///
/// There is deliberately no delete operation: nothing in Strata removes
/// files from a project.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Create or overwrite a file.
    fn write_file(&self, path: &Path, content: &[u8]) -> StrataResult<()>;

    /// Read a file as UTF-8 text; `Ok(None)` when it does not exist.
    fn read_to_string(&self, path: &Path) -> StrataResult<Option<String>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `strata_adapters::renderer::HandlebarsRenderer`
///
/// Implementations expose exactly the four `RenderContext` fields and the
/// `Pascal` helper, and must fail on references to anything else.
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` against `context`. `name` identifies the template in
    /// error messages.
    fn render(&self, name: &str, source: &str, context: &RenderContext) -> StrataResult<String>;
}

/// Port for the host module toolchain (`go mod ...`).
///
/// Implemented by:
/// - `strata_adapters::toolchain::GoToolchain` (production)
/// - `strata_adapters::toolchain::RecordingToolchain` (testing)
///
/// Every call blocks until the underlying command exits. Failures carry the
/// combined output of the command.
#[cfg_attr(test, mockall::automock)]
pub trait Toolchain: Send + Sync {
    /// Initialize module metadata in `dir` for `module`.
    fn init(&self, dir: &Path, module: &str) -> StrataResult<()>;

    /// Resolve and prune module dependencies in `dir`.
    fn tidy(&self, dir: &Path) -> StrataResult<()>;

    /// Add a requirement on `coordinate` (`module@version`).
    fn require(&self, dir: &Path, coordinate: &str) -> StrataResult<()>;

    /// Redirect `module` to the local directory `local_path`.
    fn replace(&self, dir: &Path, module: &str, local_path: &Path) -> StrataResult<()>;
}
