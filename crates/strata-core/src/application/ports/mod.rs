//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `strata-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateSource`: Read-only template tree
//!   - `Filesystem`: Destination file operations
//!   - `TemplateRenderer`: Template rendering
//!   - `Toolchain`: Module management commands
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

use std::sync::Arc;

pub mod output;

pub use output::{Filesystem, TemplateRenderer, TemplateSource, Toolchain};

#[cfg(test)]
pub use output::MockToolchain;

/// The set of adapters a service runs against.
///
/// Built once at startup and cloned into each service; clones share the same
/// adapter instances.
#[derive(Clone)]
pub struct Ports {
    pub source: Arc<dyn TemplateSource>,
    pub renderer: Arc<dyn TemplateRenderer>,
    pub filesystem: Arc<dyn Filesystem>,
    pub toolchain: Arc<dyn Toolchain>,
}

impl Ports {
    pub fn new(
        source: Arc<dyn TemplateSource>,
        renderer: Arc<dyn TemplateRenderer>,
        filesystem: Arc<dyn Filesystem>,
        toolchain: Arc<dyn Toolchain>,
    ) -> Self {
        Self {
            source,
            renderer,
            filesystem,
            toolchain,
        }
    }
}
