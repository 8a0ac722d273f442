//! Module toolchain adapters.

mod go;
mod recording;

pub use go::{DEFAULT_PROGRAM, GoToolchain};
pub use recording::{RecordingToolchain, ToolchainCall};
