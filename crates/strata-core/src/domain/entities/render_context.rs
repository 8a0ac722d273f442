use serde::Serialize;

use crate::domain::naming::{self, ContextName};

/// Context for template rendering.
///
/// A **Value Object** built once per materialization pass and never mutated
/// during it. Templates see exactly four fields:
///
/// | Field      | Example            | Source                          |
/// |------------|--------------------|---------------------------------|
/// | `Project`  | `shop`             | project name / project dir name |
/// | `Module`   | `example.com/shop` | `--module`, or `go.mod`         |
/// | `Context`  | `user_profile`     | normalized context name         |
/// | `ContextP` | `UserProfile`      | Pascal form of `Context`        |
///
/// The skeleton pass leaves `Context` and `ContextP` empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    #[serde(rename = "Project")]
    project: String,

    #[serde(rename = "Module")]
    module: String,

    #[serde(rename = "Context")]
    context: String,

    #[serde(rename = "ContextP")]
    context_pascal: String,
}

impl RenderContext {
    /// Context for the context-agnostic skeleton pass.
    ///
    /// An empty `module` falls back to the project name so that projects
    /// without a remote path still get a usable local module.
    pub fn skeleton(project: impl Into<String>, module: Option<&str>) -> Self {
        let project = project.into();
        let module = module_or_default(&project, module);
        Self {
            project,
            module,
            context: String::new(),
            context_pascal: String::new(),
        }
    }

    /// Context for one bounded-context pass.
    pub fn for_context(
        project: impl Into<String>,
        module: impl Into<String>,
        name: &ContextName,
    ) -> Self {
        Self {
            project: project.into(),
            module: module.into(),
            context: name.lower().to_string(),
            context_pascal: name.pascal().to_string(),
        }
    }

    /// Convenience constructor normalizing a raw context name.
    pub fn with_raw_context(
        project: impl Into<String>,
        module: impl Into<String>,
        raw_context: &str,
    ) -> Self {
        Self::for_context(project, module, &naming::normalize(raw_context))
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// Lower-case context name; the value substituted for `CTX` path segments.
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn context_pascal(&self) -> &str {
        &self.context_pascal
    }

    /// `true` for the skeleton pass.
    pub fn is_skeleton(&self) -> bool {
        self.context.is_empty()
    }
}

/// Use `module` when it has content, otherwise the project name.
pub fn module_or_default(project: &str, module: Option<&str>) -> String {
    match module {
        Some(m) if !m.trim().is_empty() => m.to_string(),
        _ => project.to_string(),
    }
}
