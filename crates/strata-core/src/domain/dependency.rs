//! Local framework dependency override.
//!
//! Generated projects depend on a framework module. During framework
//! development it is convenient to point that dependency at a local checkout
//! instead of the published module. The checkout is located with a fixed
//! precedence:
//!
//! 1. explicit path from the caller (`--framework`)
//! 2. environment value
//! 3. a conventional sibling directory, if it exists
//! 4. nothing: the toolchain resolves the module remotely

use std::path::{Path, PathBuf};

/// Placeholder version pinned before redirecting to a local path.
pub const PLACEHOLDER_VERSION: &str = "v0.0.0";

/// Settings for locating and applying the framework override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySettings {
    /// Module coordinate of the framework, e.g. `github.com/strata-go/framework`.
    pub module: String,
    /// Value of the framework-path environment variable, if set.
    pub env_value: Option<String>,
    /// Directory probed when neither explicit nor environment value is set.
    pub sibling_dir: PathBuf,
}

impl DependencySettings {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            env_value: None,
            sibling_dir: PathBuf::from(DEFAULT_SIBLING_DIR),
        }
    }

    pub fn with_env_value(mut self, value: Option<String>) -> Self {
        self.env_value = value;
        self
    }

    pub fn with_sibling_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sibling_dir = dir.into();
        self
    }

    /// `module@v0.0.0`, the coordinate pinned before the redirect.
    pub fn pinned_coordinate(&self) -> String {
        format!("{}@{}", self.module, PLACEHOLDER_VERSION)
    }
}

/// Default module coordinate of the framework dependency.
pub const DEFAULT_FRAMEWORK_MODULE: &str = "github.com/strata-go/framework";

/// Default sibling checkout probed relative to the working directory.
pub const DEFAULT_SIBLING_DIR: &str = "../go-framework";

/// A resolved redirect of the framework module to a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyOverride {
    pub module: String,
    pub path: PathBuf,
}

/// Apply the precedence rules. Blank values count as unset.
pub fn resolve_dependency_path(
    explicit: Option<&str>,
    env_value: Option<&str>,
    sibling_dir: &Path,
    exists: impl Fn(&Path) -> bool,
) -> Option<PathBuf> {
    let non_blank = |v: Option<&str>| v.filter(|s| !s.trim().is_empty()).map(PathBuf::from);

    non_blank(explicit)
        .or_else(|| non_blank(env_value))
        .or_else(|| {
            (!sibling_dir.as_os_str().is_empty() && exists(sibling_dir))
                .then(|| sibling_dir.to_path_buf())
        })
}
