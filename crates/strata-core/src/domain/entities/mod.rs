pub mod render_context;
pub mod template_entry;

pub use render_context::RenderContext;
pub use template_entry::{EntryKind, FilePolicy, SourceEntry};
