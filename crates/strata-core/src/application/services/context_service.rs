//! Context Appender - adds bounded contexts to an existing project.
//!
//! For each context name:
//! 1. Read the module path from the project's `go.mod`
//! 2. Build a render context from the project directory name
//! 3. Materialize the `context` template root into the project
//!
//! Dependencies are tidied once after the last context.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, Ports, Toolchain},
        services::materializer::Materializer,
    },
    domain::{CONTEXT_ROOT, ContextName, MODULE_FILE, RenderContext, naming, parse_module_declaration},
    error::{StageContext, StrataResult},
};

/// Appends context subtrees to a project.
#[derive(Clone)]
pub struct ContextService {
    materializer: Materializer,
    filesystem: Arc<dyn Filesystem>,
    toolchain: Arc<dyn Toolchain>,
}

impl ContextService {
    pub fn new(ports: &Ports) -> Self {
        Self {
            materializer: Materializer::new(ports),
            filesystem: Arc::clone(&ports.filesystem),
            toolchain: Arc::clone(&ports.toolchain),
        }
    }

    /// Append every context in `names` to the project at `project_root`.
    ///
    /// Names are normalized before use; blank names are skipped. Appending a
    /// context that already exists overwrites its files with the same content.
    /// Returns the contexts that were written, in order.
    #[instrument(
        skip_all,
        fields(project_root = %project_root.display(), count = names.len())
    )]
    pub fn append_contexts<S: AsRef<str>>(
        &self,
        project_root: &Path,
        names: &[S],
    ) -> StrataResult<Vec<ContextName>> {
        let project = project_name(project_root);
        let mut appended = Vec::with_capacity(names.len());

        for raw in names {
            let name = naming::normalize(raw.as_ref());
            if name.lower().is_empty() {
                warn!(raw = raw.as_ref(), "Skipping blank context name");
                continue;
            }

            let module = self
                .detect_module(project_root)
                .stage(format!("read {MODULE_FILE}"))?;
            if module.is_empty() {
                warn!("No module declaration found; generated imports will be relative");
            }

            let ctx = RenderContext::for_context(project.as_str(), module, &name);
            self.materializer
                .materialize(CONTEXT_ROOT, project_root, &ctx)
                .stage(format!("materialize context '{name}'"))?;

            info!(context = %name, "Context appended");
            appended.push(name);
        }

        self.toolchain
            .tidy(project_root)
            .stage("tidy module dependencies")?;

        Ok(appended)
    }

    /// Module path declared in the project's module file, or empty.
    pub fn detect_module(&self, project_root: &Path) -> StrataResult<String> {
        let contents = self
            .filesystem
            .read_to_string(&project_root.join(MODULE_FILE))?;
        Ok(contents
            .map(|c| parse_module_declaration(&c))
            .unwrap_or_default())
    }
}

/// Final path component, or the whole path when there is none (`.`, `/`).
fn project_name(project_root: &Path) -> String {
    project_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| project_root.display().to_string())
}
