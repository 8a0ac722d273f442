//! In-memory template tree.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use strata_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::{DomainError, SourceEntry, normalize_logical},
    error::StrataResult,
};

/// Immutable template tree held in memory.
///
/// Built once with [`TemplateTreeBuilder`] and then shared; clones point at
/// the same tree. Children of a directory are listed in lexical order.
#[derive(Debug, Clone)]
pub struct InMemoryTemplateSource {
    inner: Arc<Tree>,
}

#[derive(Debug, Default)]
struct Tree {
    dirs: BTreeMap<String, Vec<SourceEntry>>,
    files: BTreeMap<String, Vec<u8>>,
}

impl InMemoryTemplateSource {
    pub fn builder() -> TemplateTreeBuilder {
        TemplateTreeBuilder::default()
    }

    /// Number of files in the tree.
    pub fn file_count(&self) -> usize {
        self.inner.files.len()
    }

    /// Logical paths of all files, sorted.
    pub fn file_paths(&self) -> impl Iterator<Item = &str> {
        self.inner.files.keys().map(String::as_str)
    }

    /// Whether `path` names a directory in the tree.
    pub fn has_dir(&self, path: &str) -> bool {
        normalize_logical(path)
            .map(|p| self.inner.dirs.contains_key(&p))
            .unwrap_or(false)
    }
}

impl TemplateSource for InMemoryTemplateSource {
    fn read_dir(&self, path: &str) -> StrataResult<Vec<SourceEntry>> {
        let path = normalize_logical(path)?;
        if let Some(children) = self.inner.dirs.get(&path) {
            return Ok(children.clone());
        }

        if self.inner.files.contains_key(&path) {
            return Err(ApplicationError::TemplateSource {
                path,
                reason: "not a directory".into(),
            }
            .into());
        }
        if !path.is_empty() && !path.contains('/') {
            return Err(DomainError::MissingTemplateRoot { root: path }.into());
        }
        Err(ApplicationError::TemplateSource {
            path,
            reason: "no such directory".into(),
        }
        .into())
    }

    fn read_file(&self, path: &str) -> StrataResult<Vec<u8>> {
        let path = normalize_logical(path)?;
        self.inner.files.get(&path).cloned().ok_or_else(|| {
            ApplicationError::TemplateSource {
                path,
                reason: "no such file".into(),
            }
            .into()
        })
    }
}

/// Collects files and directories before freezing them into a tree.
#[derive(Debug, Default)]
pub struct TemplateTreeBuilder {
    dirs: BTreeMap<String, BTreeSet<SourceEntry>>,
    files: BTreeMap<String, Vec<u8>>,
}

impl TemplateTreeBuilder {
    /// Add a file, creating its parent directories.
    pub fn file(&mut self, path: &str, content: impl Into<Vec<u8>>) -> Result<&mut Self, DomainError> {
        let path = normalize_logical(path)?;
        let (parent, name) = split_parent(&path);
        if name.is_empty() || self.dirs.contains_key(&path) {
            return Err(DomainError::InvalidTemplatePath {
                path,
                reason: "not a file path".into(),
            });
        }

        self.register_dir(parent)?;
        self.children(parent).insert(SourceEntry::file(name));
        self.files.insert(path.clone(), content.into());
        Ok(self)
    }

    /// Add a directory, which may stay empty.
    pub fn dir(&mut self, path: &str) -> Result<&mut Self, DomainError> {
        let path = normalize_logical(path)?;
        self.register_dir(&path)?;
        Ok(self)
    }

    pub fn build(self) -> InMemoryTemplateSource {
        let dirs = self
            .dirs
            .into_iter()
            .map(|(path, children)| (path, children.into_iter().collect()))
            .collect();
        InMemoryTemplateSource {
            inner: Arc::new(Tree {
                dirs,
                files: self.files,
            }),
        }
    }

    fn register_dir(&mut self, path: &str) -> Result<(), DomainError> {
        if self.files.contains_key(path) {
            return Err(DomainError::InvalidTemplatePath {
                path: path.to_string(),
                reason: "already registered as a file".into(),
            });
        }
        if self.dirs.contains_key(path) {
            return Ok(());
        }

        self.dirs.insert(path.to_string(), BTreeSet::new());
        if !path.is_empty() {
            let (parent, name) = split_parent(path);
            self.register_dir(parent)?;
            self.children(parent).insert(SourceEntry::directory(name));
        }
        Ok(())
    }

    fn children(&mut self, dir: &str) -> &mut BTreeSet<SourceEntry> {
        self.dirs.entry(dir.to_string()).or_default()
    }
}

/// `a/b/c` -> (`a/b`, `c`); `c` -> (``, `c`).
fn split_parent(path: &str) -> (&str, &str) {
    path.rsplit_once('/').unwrap_or(("", path))
}

/// Convenience for building a tree from `(path, content)` pairs.
pub fn tree_from_pairs<'a, I>(pairs: I) -> Result<InMemoryTemplateSource, DomainError>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut builder = InMemoryTemplateSource::builder();
    for (path, content) in pairs {
        builder.file(path, content)?;
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::error::StrataError;

    fn sample() -> InMemoryTemplateSource {
        tree_from_pairs([
            ("skeleton/Makefile", b"build:".as_slice()),
            ("skeleton/cmd/server/main.go.tmpl", b"package main".as_slice()),
            ("skeleton/README.md.tmpl", b"# {{Project}}".as_slice()),
            ("context/internal/CTX/README.md", b"ctx".as_slice()),
        ])
        .unwrap()
    }

    #[test]
    fn children_are_listed_in_lexical_order() {
        let names: Vec<String> = sample()
            .read_dir("skeleton")
            .unwrap()
            .into_iter()
            .map(|e| e.to_string())
            .collect();
        assert_eq!(names, ["Makefile", "README.md.tmpl", "cmd/"]);
    }

    #[test]
    fn root_lists_both_template_roots() {
        let entries = sample().read_dir("").unwrap();
        assert_eq!(
            entries,
            vec![SourceEntry::directory("context"), SourceEntry::directory("skeleton")]
        );
    }

    #[test]
    fn read_file_returns_bytes() {
        assert_eq!(sample().read_file("/skeleton/Makefile").unwrap(), b"build:");
    }

    #[test]
    fn missing_root_is_a_domain_error() {
        let err = sample().read_dir("plugins").unwrap_err();
        assert!(matches!(
            err,
            StrataError::Domain(DomainError::MissingTemplateRoot { .. })
        ));
    }

    #[test]
    fn missing_nested_dir_is_a_source_error() {
        let err = sample().read_dir("skeleton/nope").unwrap_err();
        assert!(matches!(
            err,
            StrataError::Application(ApplicationError::TemplateSource { .. })
        ));
    }

    #[test]
    fn empty_directories_are_kept() {
        let mut builder = InMemoryTemplateSource::builder();
        builder.dir("skeleton/bin").unwrap();
        let source = builder.build();

        assert!(source.read_dir("skeleton/bin").unwrap().is_empty());
        assert!(source.has_dir("skeleton"));
    }

    #[test]
    fn file_and_directory_cannot_share_a_path() {
        let mut builder = InMemoryTemplateSource::builder();
        builder.file("skeleton/docs", "x").unwrap();
        assert!(builder.file("skeleton/docs/a.md", "y").is_err());
    }

    #[test]
    fn parent_segments_are_rejected() {
        let mut builder = InMemoryTemplateSource::builder();
        assert!(builder.file("skeleton/../etc/passwd", "x").is_err());
    }
}
