//! Command type definitions shared between main.rs and tests.

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum PresetsCommand {
    /// List built-in presets
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the job spec behind a preset
    Show {
        /// Preset name
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
