//! Template source adapters.
//!
//! Both the embedded templates and a directory override end up in the same
//! [`InMemoryTemplateSource`], so services never know which one they read.

mod memory;

pub use memory::{InMemoryTemplateSource, TemplateTreeBuilder, tree_from_pairs};
