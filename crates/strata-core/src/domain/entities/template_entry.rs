//! Entries of the template source tree and the two rules applied to them.
//!
//! The materializer branches on exactly two things:
//!
//! 1. **Placeholder segments**: a directory named [`PLACEHOLDER`] is written
//!    to the destination under the active context's lower-case name.
//! 2. **File policy**: a file ending in [`TEMPLATE_SUFFIX`] is rendered and
//!    written without the suffix; everything else is copied byte-for-byte.
//!
//! Both rules operate on a single name segment at a time. A full path is
//! never pattern-matched, so `CTXfoo` or `my_CTX` pass through untouched.

use std::fmt;

use crate::domain::error::DomainError;

/// Directory name replaced by the context name in destination paths.
pub const PLACEHOLDER: &str = "CTX";

/// File-name suffix marking a file as a template.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Logical root of the context-agnostic project layout.
pub const SKELETON_ROOT: &str = "skeleton";

/// Logical root of the per-context layer bundle.
pub const CONTEXT_ROOT: &str = "context";

/// Kind of a node in the template source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryKind {
    Directory,
    File,
}

/// One child of a template directory, as enumerated by a source.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl SourceEntry {
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Destination name of this entry under `context`.
    ///
    /// Placeholder substitution applies to directories only; the template
    /// suffix is stripped from template files only.
    pub fn destination_name<'a>(&'a self, context: &'a str) -> &'a str {
        match self.kind {
            EntryKind::Directory => substitute_placeholder(&self.name, context),
            EntryKind::File => match FilePolicy::classify(&self.name) {
                FilePolicy::Render => strip_template_suffix(&self.name),
                FilePolicy::Copy => &self.name,
            },
        }
    }
}

impl fmt::Display for SourceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EntryKind::Directory => write!(f, "{}/", self.name),
            EntryKind::File => f.write_str(&self.name),
        }
    }
}

/// How a file is reproduced in the destination tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePolicy {
    /// Render as a text template, strip the suffix.
    Render,
    /// Copy the bytes unchanged.
    Copy,
}

impl FilePolicy {
    /// Classify a file by name.
    ///
    /// A name consisting of the suffix alone is copied: stripping it would
    /// leave nothing to write to.
    pub fn classify(name: &str) -> Self {
        if name.len() > TEMPLATE_SUFFIX.len() && name.ends_with(TEMPLATE_SUFFIX) {
            Self::Render
        } else {
            Self::Copy
        }
    }
}

/// Replace `segment` with `context` when it is exactly the placeholder.
pub fn substitute_placeholder<'a>(segment: &'a str, context: &'a str) -> &'a str {
    if segment == PLACEHOLDER {
        context
    } else {
        segment
    }
}

/// Remove the template suffix, if present.
pub fn strip_template_suffix(name: &str) -> &str {
    name.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(name)
}

/// Join two logical (slash-separated) template paths.
pub fn join_logical(parent: &str, name: &str) -> String {
    let parent = parent.trim_end_matches('/');
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

/// Normalize a logical path: strip surrounding slashes and reject segments
/// that would escape the tree.
pub fn normalize_logical(path: &str) -> Result<String, DomainError> {
    let trimmed = path.trim_matches('/');
    for segment in trimmed.split('/') {
        if segment == ".." || segment.contains('\\') {
            return Err(DomainError::InvalidTemplatePath {
                path: path.to_string(),
                reason: format!("segment '{segment}' is not allowed"),
            });
        }
    }
    let cleaned: Vec<&str> = trimmed
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();
    Ok(cleaned.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_segment_exact() {
        assert_eq!(substitute_placeholder("CTX", "user"), "user");
        assert_eq!(substitute_placeholder("CTXfoo", "user"), "CTXfoo");
        assert_eq!(substitute_placeholder("my_CTX", "user"), "my_CTX");
        assert_eq!(substitute_placeholder("ctx", "user"), "ctx");
    }

    #[test]
    fn classify_by_suffix() {
        assert_eq!(FilePolicy::classify("main.go.tmpl"), FilePolicy::Render);
        assert_eq!(FilePolicy::classify("Makefile"), FilePolicy::Copy);
        assert_eq!(FilePolicy::classify("notes.tmpl.md"), FilePolicy::Copy);
        assert_eq!(FilePolicy::classify(".tmpl"), FilePolicy::Copy);
    }

    #[test]
    fn destination_name_for_files() {
        assert_eq!(
            SourceEntry::file("service.go.tmpl").destination_name("user"),
            "service.go"
        );
        assert_eq!(SourceEntry::file(".gitignore").destination_name("user"), ".gitignore");
    }

    #[test]
    fn placeholder_files_keep_their_name() {
        assert_eq!(SourceEntry::file("CTX").destination_name("user"), "CTX");
        assert_eq!(SourceEntry::file("CTX.tmpl").destination_name("user"), "CTX");
    }

    #[test]
    fn destination_name_for_directories() {
        assert_eq!(SourceEntry::directory("CTX").destination_name("billing"), "billing");
        // Directories never lose a suffix.
        assert_eq!(
            SourceEntry::directory("docs.tmpl").destination_name("billing"),
            "docs.tmpl"
        );
    }

    #[test]
    fn join_logical_paths() {
        assert_eq!(join_logical("", "skeleton"), "skeleton");
        assert_eq!(join_logical("skeleton", "cmd"), "skeleton/cmd");
        assert_eq!(join_logical("skeleton/", "cmd"), "skeleton/cmd");
    }

    #[test]
    fn normalize_logical_cleans_and_rejects() {
        assert_eq!(normalize_logical("/context/internal/").unwrap(), "context/internal");
        assert_eq!(normalize_logical("./context//CTX").unwrap(), "context/CTX");
        assert_eq!(normalize_logical("").unwrap(), "");
        assert!(normalize_logical("context/../etc").is_err());
    }
}
