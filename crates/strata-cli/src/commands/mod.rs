//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core requests, call the core services,
//! and report results through the [`OutputManager`](crate::output::OutputManager).

use std::sync::Arc;

use tracing::debug;

use strata_adapters::{GoToolchain, HandlebarsRenderer, LocalFilesystem, builtin_templates};
use strata_core::application::Ports;

use crate::{config::AppConfig, error::CliResult};

pub mod completions;
pub mod config;
pub mod init;
pub mod init_ddd;

/// Wire the production adapters together.
///
/// The template tree is loaded here once, from `templates.local_path` when
/// set and from the embedded templates otherwise.
pub(crate) fn build_ports(config: &AppConfig) -> CliResult<Ports> {
    let source = builtin_templates::load(config.templates.local_path.as_deref())?;
    debug!(
        files = source.file_count(),
        program = %config.toolchain.program,
        "Adapters ready"
    );

    Ok(Ports::new(
        Arc::new(source),
        Arc::new(HandlebarsRenderer::new()),
        Arc::new(LocalFilesystem::new()),
        Arc::new(GoToolchain::with_program(config.toolchain.program.as_str())),
    ))
}
