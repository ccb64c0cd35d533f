//! Command implementations for the molpretrain CLI.

pub mod plan;
pub mod presets;
pub mod run;
pub mod runs;
pub mod source;
pub mod types;

// Re-export types for convenience
pub use types::PresetsCommand;
