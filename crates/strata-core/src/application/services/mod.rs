//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "build a project" or "append a context".

pub mod context_service;
pub mod materializer;
pub mod scaffold_service;

#[cfg(test)]
pub(crate) mod testing;

pub use context_service::ContextService;
pub use materializer::{MaterializeReport, Materializer};
pub use scaffold_service::{ScaffoldService, SkeletonRequest};
