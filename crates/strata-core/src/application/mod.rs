//! Application layer for Strata.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, ContextService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Naming and path rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ContextService, MaterializeReport, Materializer, ScaffoldService, SkeletonRequest,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Ports, TemplateRenderer, TemplateSource, Toolchain};

pub use error::ApplicationError;
