//! Template Tree Materializer.
//!
//! Walks one root of the template source depth-first and reproduces it under
//! a destination directory:
//! 1. Directories are created (idempotently) and recursed into
//! 2. `.tmpl` files are rendered and written without the suffix
//! 3. Everything else is copied byte for byte
//!
//! An entry named exactly `CTX` takes the context name at its destination.
//! The first failure aborts the walk; whatever was already written stays.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, Ports, TemplateRenderer, TemplateSource},
    domain::{DomainError, EntryKind, FilePolicy, RenderContext, join_logical},
    error::StrataResult,
};

/// What a single materialization produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeReport {
    pub directories: usize,
    pub rendered: usize,
    pub copied: usize,
}

impl MaterializeReport {
    /// Total number of files written.
    pub fn files(&self) -> usize {
        self.rendered + self.copied
    }
}

/// Copies a template tree into a project, rendering `.tmpl` files on the way.
#[derive(Clone)]
pub struct Materializer {
    source: Arc<dyn TemplateSource>,
    renderer: Arc<dyn TemplateRenderer>,
    filesystem: Arc<dyn Filesystem>,
}

impl Materializer {
    pub fn new(ports: &Ports) -> Self {
        Self {
            source: Arc::clone(&ports.source),
            renderer: Arc::clone(&ports.renderer),
            filesystem: Arc::clone(&ports.filesystem),
        }
    }

    /// Materialize the subtree at `source_root` into `dest_root`.
    ///
    /// `dest_root` is used as given; only names coming from the template
    /// tree are subject to placeholder substitution.
    #[instrument(
        skip_all,
        fields(
            root = source_root,
            dest = %dest_root.display(),
            context = ctx.context()
        )
    )]
    pub fn materialize(
        &self,
        source_root: &str,
        dest_root: &Path,
        ctx: &RenderContext,
    ) -> StrataResult<MaterializeReport> {
        let mut report = MaterializeReport::default();
        self.walk(source_root, dest_root, ctx, &mut report)?;

        info!(
            directories = report.directories,
            rendered = report.rendered,
            copied = report.copied,
            skeleton = ctx.is_skeleton(),
            "Template tree materialized"
        );
        Ok(report)
    }

    fn walk(
        &self,
        source_dir: &str,
        dest_dir: &Path,
        ctx: &RenderContext,
        report: &mut MaterializeReport,
    ) -> StrataResult<()> {
        for entry in self.source.read_dir(source_dir)? {
            let source_path = join_logical(source_dir, &entry.name);
            let dest_path = dest_dir.join(entry.destination_name(ctx.context()));

            match entry.kind {
                EntryKind::Directory => {
                    self.filesystem.create_dir_all(&dest_path)?;
                    report.directories += 1;
                    self.walk(&source_path, &dest_path, ctx, report)?;
                }
                EntryKind::File => match FilePolicy::classify(&entry.name) {
                    FilePolicy::Render => {
                        self.render_file(&source_path, &dest_path, ctx)?;
                        report.rendered += 1;
                    }
                    FilePolicy::Copy => {
                        let bytes = self.source.read_file(&source_path)?;
                        self.write(&dest_path, &bytes)?;
                        report.copied += 1;
                    }
                },
            }
        }
        Ok(())
    }

    fn render_file(&self, source_path: &str, dest_path: &Path, ctx: &RenderContext) -> StrataResult<()> {
        let bytes = self.source.read_file(source_path)?;
        let text = String::from_utf8(bytes).map_err(|_| DomainError::NonUtf8Template {
            path: source_path.to_string(),
        })?;
        let rendered = self.renderer.render(source_path, &text, ctx)?;
        self.write(dest_path, rendered.as_bytes())
    }

    fn write(&self, path: &Path, content: &[u8]) -> StrataResult<()> {
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        if self.filesystem.exists(path) {
            debug!(path = %path.display(), "Overwriting existing file");
        } else {
            debug!(path = %path.display(), "Writing file");
        }
        self.filesystem.write_file(path, content)
    }
}
