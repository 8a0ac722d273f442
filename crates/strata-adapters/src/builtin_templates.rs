//! Built-in template discovery.
//!
//! This module provides [`load`], the single entry-point for obtaining the
//! template tree a run will use. Two sources are supported:
//!
//! 1. **A directory override** (`templates.local_path` in the configuration).
//!    Its `skeleton/` and `context/` subdirectories replace the built-ins
//!    wholesale.
//! 2. **The embedded tree** compiled into the binary from
//!    `templates/ddd/`. This is the default.
//!
//! Either way the result is an [`InMemoryTemplateSource`] that is built once
//! and shared by reference for the rest of the process.
//!
//! # Template layout
//!
//! ```text
//! skeleton/
//! ├── README.md.tmpl
//! ├── Makefile
//! ├── .gitignore
//! ├── cmd/server/main.go.tmpl
//! ├── configs/config.yaml.tmpl
//! └── internal/{bootstrap,shared}/...
//! context/
//! └── internal/CTX/{domain,application,infrastructure,interfaces/http}/...
//! ```

use std::path::Path;

use tracing::{debug, info, instrument};

use strata_core::{
    domain::{CONTEXT_ROOT, DomainError, SKELETON_ROOT},
    error::{StageContext, StrataResult},
};

use crate::{template_loader::DirectoryTemplateLoader, template_source::InMemoryTemplateSource};

/// A template file compiled into the binary.
struct EmbeddedTemplate {
    path: &'static str,
    content: &'static [u8],
}

macro_rules! embed {
    ($path:literal) => {
        EmbeddedTemplate {
            path: $path,
            content: include_bytes!(concat!("../templates/ddd/", $path)),
        }
    };
}

/// Templates compiled into the binary, keyed by logical path.
static EMBEDDED_TEMPLATES: &[EmbeddedTemplate] = &[
    // Skeleton
    embed!("skeleton/README.md.tmpl"),
    embed!("skeleton/.gitignore"),
    embed!("skeleton/Makefile"),
    embed!("skeleton/cmd/server/main.go.tmpl"),
    embed!("skeleton/configs/config.yaml.tmpl"),
    embed!("skeleton/internal/bootstrap/router.go.tmpl"),
    embed!("skeleton/internal/shared/errors.go"),
    // Context
    embed!("context/internal/CTX/README.md"),
    embed!("context/internal/CTX/domain/entity.go.tmpl"),
    embed!("context/internal/CTX/domain/repository.go.tmpl"),
    embed!("context/internal/CTX/application/service.go.tmpl"),
    embed!("context/internal/CTX/infrastructure/repository_memory.go.tmpl"),
    embed!("context/internal/CTX/interfaces/http/handler.go.tmpl"),
];

/// Load the template tree, preferring `override_dir` when given.
///
/// # Errors
///
/// - The override directory is unreadable or lacks either template root.
/// - An embedded path is malformed (a build defect).
#[instrument]
pub fn load(override_dir: Option<&Path>) -> StrataResult<InMemoryTemplateSource> {
    let source = match override_dir {
        Some(dir) => {
            debug!(path = %dir.display(), "Loading templates from directory");
            DirectoryTemplateLoader::new(dir)
                .load()
                .stage(format!("load templates from {}", dir.display()))?
        }
        None => embedded().stage("load built-in templates")?,
    };

    for root in [SKELETON_ROOT, CONTEXT_ROOT] {
        if !source.has_dir(root) {
            return Err(DomainError::MissingTemplateRoot { root: root.into() })
                .stage("check template roots");
        }
    }

    info!(files = source.file_count(), "Templates loaded");
    Ok(source)
}

/// The tree compiled into the binary.
pub fn embedded() -> Result<InMemoryTemplateSource, DomainError> {
    let mut builder = InMemoryTemplateSource::builder();
    for template in EMBEDDED_TEMPLATES {
        builder.file(template.path, template.content)?;
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::application::ports::TemplateSource;
    use strata_core::domain::{EntryKind, FilePolicy};

    fn embedded_template_names() -> impl Iterator<Item = &'static str> {
        EMBEDDED_TEMPLATES.iter().map(|template| template.path)
    }

    #[test]
    fn embedded_tree_has_both_roots() {
        let source = load(None).unwrap();
        assert!(source.has_dir("skeleton"));
        assert!(source.has_dir("context/internal/CTX"));
        assert_eq!(source.file_count(), EMBEDDED_TEMPLATES.len());
    }

    #[test]
    fn context_root_has_four_layers() {
        let source = embedded().unwrap();
        let layers: Vec<String> = source
            .read_dir("context/internal/CTX")
            .unwrap()
            .into_iter()
            .filter(|e| e.kind == EntryKind::Directory)
            .map(|e| e.name)
            .collect();
        assert_eq!(layers, ["application", "domain", "infrastructure", "interfaces"]);
    }

    #[test]
    fn embedded_templates_are_utf8() {
        for template in EMBEDDED_TEMPLATES {
            if FilePolicy::classify(template.path) == FilePolicy::Render {
                assert!(
                    std::str::from_utf8(template.content).is_ok(),
                    "{} is not UTF-8",
                    template.path
                );
            }
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = embedded_template_names().collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn override_directory_replaces_embedded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("skeleton")).unwrap();
        std::fs::create_dir_all(dir.path().join("context/internal/CTX")).unwrap();
        std::fs::write(dir.path().join("skeleton/hello.txt"), "hi").unwrap();

        let source = load(Some(dir.path())).unwrap();
        assert_eq!(source.file_paths().collect::<Vec<_>>(), ["skeleton/hello.txt"]);
    }

    #[test]
    fn override_without_context_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("skeleton")).unwrap();

        let err = load(Some(dir.path())).unwrap_err();
        assert!(err.to_string().contains("'context'"));
    }
}
