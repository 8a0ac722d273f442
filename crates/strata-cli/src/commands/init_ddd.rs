//! `strata init-ddd`: append bounded contexts to an existing project.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use strata_core::{application::ContextService, domain::split_list};

use crate::{
    cli::InitDddArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct AppendReport {
    project_dir: PathBuf,
    contexts: Vec<String>,
}

#[instrument(skip_all, fields(contexts = %args.contexts))]
pub fn execute(args: InitDddArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let names = split_list(&args.contexts);
    if names.is_empty() {
        return Err(CliError::InvalidInput {
            message: "no context names given".into(),
            source: None,
        });
    }
    if !args.project_dir.is_dir() {
        return Err(CliError::ProjectDirMissing {
            path: args.project_dir,
        });
    }

    let ports = super::build_ports(&config)?;
    let service = ContextService::new(&ports);

    let spinner = output.spinner(&format!("Appending {}", names.join(", ")));
    let result = service.append_contexts(&args.project_dir, &names);
    spinner.finish_and_clear();
    let appended: Vec<String> = result?
        .into_iter()
        .map(|name| name.lower().to_string())
        .collect();

    info!(count = appended.len(), "Contexts appended");

    output.json(&AppendReport {
        project_dir: args.project_dir.clone(),
        contexts: appended.clone(),
    })?;
    output.success(&format!("Contexts added: {}", appended.join(", ")))?;
    output.info(&format!(
        "Generated under {}",
        args.project_dir.join("internal").display()
    ))?;

    Ok(())
}
