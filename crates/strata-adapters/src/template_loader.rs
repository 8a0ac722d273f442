//! Filesystem-based template loader.
//!
//! Reads a template tree from disk into an [`InMemoryTemplateSource`], so a
//! directory override behaves exactly like the embedded templates.
//!
//! # Directory layout expected
//!
//! ```text
//! my-templates/
//! ├── skeleton/
//! │   ├── README.md.tmpl
//! │   └── cmd/server/main.go.tmpl
//! └── context/
//!     └── internal/CTX/domain/entity.go.tmpl
//! ```
//!
//! Every regular file is loaded as raw bytes; directories are kept even when
//! empty. Symlinks and other special files are skipped.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, trace};
use walkdir::WalkDir;

use strata_core::{application::ApplicationError, error::StrataResult};

use crate::template_source::InMemoryTemplateSource;

/// Loads a template tree rooted at a directory.
///
/// # Example
///
/// ```rust,no_run
/// use strata_adapters::template_loader::DirectoryTemplateLoader;
///
/// let source = DirectoryTemplateLoader::new("./my-templates").load()?;
/// println!("Loaded {} template files", source.file_count());
/// # Ok::<(), strata_core::error::StrataError>(())
/// ```
pub struct DirectoryTemplateLoader {
    templates_dir: PathBuf,
}

impl DirectoryTemplateLoader {
    /// Create a loader pointed at `templates_dir`.
    ///
    /// The directory does not need to exist yet; [`load`](Self::load) fails
    /// if it is missing when called.
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// Walk the directory and collect every file and directory below it.
    ///
    /// # Errors
    ///
    /// - `templates_dir` does not exist or is not a directory.
    /// - An entry cannot be read or its name is not valid UTF-8.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load(&self) -> StrataResult<InMemoryTemplateSource> {
        if !self.templates_dir.is_dir() {
            return Err(self.error(&self.templates_dir, "templates directory not found"));
        }

        let mut builder = InMemoryTemplateSource::builder();
        let mut files = 0usize;

        for walk_entry in WalkDir::new(&self.templates_dir).min_depth(1).sort_by_file_name() {
            let walk_entry = walk_entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.templates_dir).to_path_buf();
                self.error(&path, &format!("directory walk error: {e}"))
            })?;
            let abs_path = walk_entry.path();
            let logical = self.logical_path(abs_path)?;

            if walk_entry.file_type().is_dir() {
                builder.dir(&logical)?;
                continue;
            }

            if !walk_entry.file_type().is_file() {
                trace!(path = %abs_path.display(), "Skipping special file");
                continue;
            }

            let content = fs::read(abs_path)
                .map_err(|e| self.error(abs_path, &format!("failed to read file: {e}")))?;
            builder.file(&logical, content)?;
            files += 1;
        }

        debug!(files, "Finished loading templates");
        Ok(builder.build())
    }

    /// Slash-separated path of `abs_path` relative to the templates root.
    fn logical_path(&self, abs_path: &Path) -> StrataResult<String> {
        let relative = abs_path
            .strip_prefix(&self.templates_dir)
            .map_err(|_| self.error(abs_path, "entry is outside the templates directory"))?;

        let mut segments = Vec::new();
        for component in relative.components() {
            let segment = component
                .as_os_str()
                .to_str()
                .ok_or_else(|| self.error(abs_path, "entry name is not valid UTF-8"))?;
            segments.push(segment);
        }
        Ok(segments.join("/"))
    }

    fn error(&self, path: &Path, reason: &str) -> strata_core::error::StrataError {
        ApplicationError::TemplateSource {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
        .into()
    }
}
