//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the skeleton workflow, strictly in order:
//! 1. Create the project directory
//! 2. Materialize the `skeleton` template root
//! 3. Initialize the module
//! 4. Require and replace the framework module when a local copy is found
//! 5. Tidy dependencies
//! 6. Append the requested contexts (which tidies again)
//!
//! Any failure stops the workflow. Nothing is rolled back.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Filesystem, Ports, Toolchain},
        services::{context_service::ContextService, materializer::Materializer},
    },
    domain::{
        DependencyOverride, DependencySettings, RenderContext, SKELETON_ROOT, module_or_default,
        resolve_dependency_path,
    },
    error::{StageContext, StrataResult},
};

/// Input for [`ScaffoldService::build_skeleton`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonRequest {
    pub project_name: String,
    pub module_path: Option<String>,
    pub contexts: Vec<String>,
    pub dependency_hint: Option<String>,
    pub output_dir: PathBuf,
}

impl SkeletonRequest {
    pub fn new(project_name: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_name: project_name.into(),
            module_path: None,
            contexts: Vec::new(),
            dependency_hint: None,
            output_dir: output_dir.into(),
        }
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module_path = Some(module.into());
        self
    }

    pub fn with_contexts(mut self, contexts: Vec<String>) -> Self {
        self.contexts = contexts;
        self
    }

    pub fn with_dependency_hint(mut self, hint: impl Into<String>) -> Self {
        self.dependency_hint = Some(hint.into());
        self
    }

    /// Where the project will be created.
    pub fn project_root(&self) -> PathBuf {
        self.output_dir.join(&self.project_name)
    }

    /// Module path after falling back to the project name.
    pub fn effective_module(&self) -> String {
        module_or_default(&self.project_name, self.module_path.as_deref())
    }
}

/// Main scaffolding service.
#[derive(Clone)]
pub struct ScaffoldService {
    filesystem: Arc<dyn Filesystem>,
    toolchain: Arc<dyn Toolchain>,
    materializer: Materializer,
    contexts: ContextService,
    dependency: DependencySettings,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use strata_core::prelude::*;
    ///
    /// let ports = Ports::new(source, renderer, filesystem, toolchain);
    /// let service = ScaffoldService::new(&ports, DependencySettings::new("github.com/acme/fw"));
    /// let root = service.build_skeleton(&SkeletonRequest::new("shop", "."))?;
    /// ```
    pub fn new(ports: &Ports, dependency: DependencySettings) -> Self {
        Self {
            filesystem: Arc::clone(&ports.filesystem),
            toolchain: Arc::clone(&ports.toolchain),
            materializer: Materializer::new(ports),
            contexts: ContextService::new(ports),
            dependency,
        }
    }

    /// Build a new project and return its root directory.
    #[instrument(
        skip_all,
        fields(
            project = %request.project_name,
            output_dir = %request.output_dir.display()
        )
    )]
    pub fn build_skeleton(&self, request: &SkeletonRequest) -> StrataResult<PathBuf> {
        let root = request.project_root();
        let module = request.effective_module();
        info!(root = %root.display(), module = %module, "Building project skeleton");

        self.filesystem
            .create_dir_all(&root)
            .stage("create project directory")?;

        let ctx = RenderContext::skeleton(request.project_name.as_str(), Some(module.as_str()));
        self.materializer
            .materialize(SKELETON_ROOT, &root, &ctx)
            .stage("materialize skeleton")?;

        if module.is_empty() {
            debug!("Empty module path, skipping module initialization");
        } else {
            self.toolchain
                .init(&root, &module)
                .stage("initialize module")?;
        }

        self.link_framework(&root, request.dependency_hint.as_deref())?;

        self.toolchain
            .tidy(&root)
            .stage("tidy module dependencies")?;

        if !request.contexts.is_empty() {
            self.contexts
                .append_contexts(&root, &request.contexts)
                .stage("append contexts")?;
        }

        info!(root = %root.display(), "Skeleton complete");
        Ok(root)
    }

    /// Where the framework module should be taken from, if anywhere.
    pub fn resolve_dependency(&self, hint: Option<&str>) -> Option<DependencyOverride> {
        resolve_dependency_path(
            hint,
            self.dependency.env_value.as_deref(),
            &self.dependency.sibling_dir,
            |path| self.filesystem.exists(path),
        )
        .map(|path| DependencyOverride {
            module: self.dependency.module.clone(),
            path,
        })
    }

    fn link_framework(&self, root: &Path, hint: Option<&str>) -> StrataResult<()> {
        let Some(link) = self.resolve_dependency(hint) else {
            debug!(module = %self.dependency.module, "No local framework found");
            return Ok(());
        };
        info!(module = %link.module, path = %link.path.display(), "Linking local framework");

        self.toolchain
            .require(root, &self.dependency.pinned_coordinate())
            .stage("require framework module")?;
        self.toolchain
            .replace(root, &link.module, &link.path)
            .stage("replace framework module")?;
        Ok(())
    }
}
