// Mod Order Tool - lists the mod folders next to the executable and writes mod_order.txt
//
// This is the library crate containing the pipeline, state and front end seam.
// The binary crate (main.rs) wires them to native dialogs.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{AppState, ModEntry, ModList, ToolConfig};
pub use services::{Confirm, ModPipeline, PipelineError};
pub use state::{StateChange, StateManager};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
