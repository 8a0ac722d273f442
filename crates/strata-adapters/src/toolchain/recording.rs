//! Toolchain double that records calls instead of running them.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use strata_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, Toolchain},
    },
    domain::MODULE_FILE,
    error::StrataResult,
};

/// One recorded toolchain call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainCall {
    Init { dir: PathBuf, module: String },
    Tidy { dir: PathBuf },
    Require { dir: PathBuf, coordinate: String },
    Replace { dir: PathBuf, module: String, local_path: PathBuf },
}

impl ToolchainCall {
    /// Short verb for assertions on call order.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::Tidy { .. } => "tidy",
            Self::Require { .. } => "require",
            Self::Replace { .. } => "replace",
        }
    }
}

/// Records every call; optionally writes `go.mod` on `init` the way the real
/// toolchain would, so context appends can detect the module.
///
/// Clones share the same call log.
#[derive(Clone, Default)]
pub struct RecordingToolchain {
    calls: Arc<Mutex<Vec<ToolchainCall>>>,
    filesystem: Option<Arc<dyn Filesystem>>,
}

impl RecordingToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a module file through `filesystem` on every `init`.
    pub fn writing_module_file(filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            calls: Arc::default(),
            filesystem: Some(filesystem),
        }
    }

    /// Calls recorded so far, in order.
    pub fn calls(&self) -> Vec<ToolchainCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Verbs of the recorded calls, in order.
    pub fn verbs(&self) -> Vec<&'static str> {
        self.calls().iter().map(ToolchainCall::verb).collect()
    }

    fn record(&self, call: ToolchainCall) -> StrataResult<()> {
        self.calls
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?
            .push(call);
        Ok(())
    }
}

impl std::fmt::Debug for RecordingToolchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingToolchain")
            .field("calls", &self.calls())
            .field("writes_module_file", &self.filesystem.is_some())
            .finish()
    }
}

impl Toolchain for RecordingToolchain {
    fn init(&self, dir: &Path, module: &str) -> StrataResult<()> {
        if let Some(fs) = &self.filesystem {
            let contents = format!("module {module}\n\ngo 1.22\n");
            fs.write_file(&dir.join(MODULE_FILE), contents.as_bytes())?;
        }
        self.record(ToolchainCall::Init {
            dir: dir.to_path_buf(),
            module: module.to_string(),
        })
    }

    fn tidy(&self, dir: &Path) -> StrataResult<()> {
        self.record(ToolchainCall::Tidy {
            dir: dir.to_path_buf(),
        })
    }

    fn require(&self, dir: &Path, coordinate: &str) -> StrataResult<()> {
        self.record(ToolchainCall::Require {
            dir: dir.to_path_buf(),
            coordinate: coordinate.to_string(),
        })
    }

    fn replace(&self, dir: &Path, module: &str, local_path: &Path) -> StrataResult<()> {
        self.record(ToolchainCall::Replace {
            dir: dir.to_path_buf(),
            module: module.to_string(),
            local_path: local_path.to_path_buf(),
        })
    }
}
