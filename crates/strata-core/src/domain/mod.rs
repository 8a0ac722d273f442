// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Strata.
//!
//! This module contains pure logic with no I/O. Reading templates, writing
//! files, rendering, and running the toolchain are all handled through ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process, or environment access
//! - **Immutable values**: `RenderContext` and `ContextName` never change after
//!   construction
//!
// Public API - what the world sees
pub mod dependency;
pub mod entities;
pub mod error;
pub mod module_file;
pub mod naming;

// Re-exports for convenience
pub use dependency::{DependencyOverride, DependencySettings, resolve_dependency_path};
pub use entities::{
    render_context::{RenderContext, module_or_default},
    template_entry::{
        CONTEXT_ROOT, EntryKind, FilePolicy, PLACEHOLDER, SKELETON_ROOT, SourceEntry,
        TEMPLATE_SUFFIX, join_logical, normalize_logical,
    },
};
pub use error::{DomainError, ErrorCategory};
pub use module_file::{MODULE_FILE, parse_module_declaration};
pub use naming::{ContextName, normalize, pascal_case, split_list};
