//! Strata Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Strata
//! Go project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           strata-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, ContextService,      │
//! │   Materializer)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Source, Filesystem, Render, Toolchain) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      strata-adapters (Infrastructure)   │
//! │ (InMemoryTemplateSource, GoToolchain)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ContextName, RenderContext, entries)  │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use strata_core::prelude::*;
//!
//! // 1. Bundle the adapters
//! let ports = Ports::new(source, renderer, filesystem, toolchain);
//!
//! // 2. Build a project with two contexts
//! let service = ScaffoldService::new(&ports, DependencySettings::new("github.com/acme/fw"));
//! let request = SkeletonRequest::new("shop", ".")
//!     .with_contexts(vec!["user".into(), "billing".into()]);
//! service.build_skeleton(&request)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ContextService, MaterializeReport, Materializer, ScaffoldService, SkeletonRequest,
        ports::{Filesystem, Ports, TemplateRenderer, TemplateSource, Toolchain},
    };
    pub use crate::domain::{
        ContextName, DependencySettings, EntryKind, RenderContext, SourceEntry, normalize,
        pascal_case, split_list,
    };
    pub use crate::error::{StageContext, StrataError, StrataResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
