//! Implementation of the `strata init` command.
//!
//! Responsibility: validate the project name, translate CLI arguments into a
//! [`SkeletonRequest`], call the scaffold service, and display results. No
//! scaffolding logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use strata_core::{
    application::{ScaffoldService, SkeletonRequest},
    domain::{normalize, split_list},
};

use crate::{
    cli::InitArgs,
    config::{AppConfig, FRAMEWORK_PATH_ENV},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Result document for `--output-format json`.
#[derive(Debug, Serialize)]
struct InitReport<'a> {
    project: &'a str,
    module: String,
    path: PathBuf,
    contexts: Vec<String>,
}

/// Execute the `strata init` command.
///
/// 1. Validate the project name
/// 2. Build the request from flags and configuration
/// 3. Run the skeleton pipeline behind a spinner
/// 4. Print the result and next steps
#[instrument(skip_all, fields(project = %args.project))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    validate_project_name(&args.project)?;

    let request = build_request(&args);
    let contexts: Vec<String> = request
        .contexts
        .iter()
        .map(|raw| normalize(raw).lower().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    let ports = super::build_ports(&config)?;
    let dependency = config.dependency_settings(std::env::var(FRAMEWORK_PATH_ENV).ok());
    let service = ScaffoldService::new(&ports, dependency);

    output.header(&format!("Creating '{}'...", args.project))?;
    let spinner = output.spinner("Generating skeleton and running go mod");
    let result = service.build_skeleton(&request);
    spinner.finish_and_clear();
    let root = result?;

    info!(project = %args.project, root = %root.display(), "Project created");

    output.json(&InitReport {
        project: &args.project,
        module: request.effective_module(),
        path: root.clone(),
        contexts: contexts.clone(),
    })?;

    if contexts.is_empty() {
        output.success(&format!(
            "Project '{}' created at {}",
            args.project,
            root.display()
        ))?;
    } else {
        output.success(&format!(
            "Project '{}' created at {} with contexts: {}",
            args.project,
            root.display(),
            contexts.join(", ")
        ))?;
    }

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", root.display()))?;
        output.print("  go run ./cmd/server")?;
    }

    Ok(())
}

fn build_request(args: &InitArgs) -> SkeletonRequest {
    let mut request = SkeletonRequest::new(args.project.as_str(), args.output.as_path());
    if let Some(module) = args.module.as_deref().filter(|m| !m.trim().is_empty()) {
        request = request.with_module(module.trim());
    }
    if let Some(list) = args.contexts.as_deref() {
        request = request.with_contexts(split_list(list));
    }
    if let Some(path) = args.framework.as_deref() {
        request = request.with_dependency_hint(path);
    }
    request
}

/// Reject names that would not produce a single directory under `--output`.
pub(crate) fn validate_project_name(name: &str) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(project: &str) -> InitArgs {
        InitArgs {
            project: project.into(),
            module: None,
            contexts: None,
            framework: None,
            output: PathBuf::from("."),
        }
    }

    #[test]
    fn valid_names() {
        for name in ["shop", "order-service", "billing_api", "Shop2"] {
            assert!(validate_project_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejected_names() {
        for name in ["", "   ", ".hidden", "a/b", "a\\b", "../shop"] {
            assert!(
                matches!(
                    validate_project_name(name),
                    Err(CliError::InvalidProjectName { .. })
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn request_defaults_module_to_project() {
        let request = build_request(&args("shop"));
        assert_eq!(request.effective_module(), "shop");
        assert!(request.contexts.is_empty());
        assert!(request.dependency_hint.is_none());
        assert_eq!(request.project_root(), PathBuf::from("./shop"));
    }

    #[test]
    fn request_carries_flags() {
        let mut a = args("shop");
        a.module = Some("example.com/shop".into());
        a.contexts = Some(" User, billing ,".into());
        a.framework = Some("../fw".into());
        a.output = PathBuf::from("/srv");

        let request = build_request(&a);
        assert_eq!(request.effective_module(), "example.com/shop");
        assert_eq!(request.contexts, vec!["user", "billing"]);
        assert_eq!(request.dependency_hint.as_deref(), Some("../fw"));
        assert_eq!(request.project_root(), PathBuf::from("/srv/shop"));
    }

    #[test]
    fn blank_module_falls_back_to_project() {
        let mut a = args("shop");
        a.module = Some("  ".into());
        assert_eq!(build_request(&a).effective_module(), "shop");
    }
}
