//! Mod Order Tool - lists mod folders and writes mod_order.txt
//!
//! Main entry point for the desktop tool.
//!
//! # Overview
//!
//! The tool works on the directory its executable lives in (the base
//! directory). Every immediate subdirectory is a mod folder. On start and on
//! every refresh the folders are listed, and if any name contains spaces or
//! underscores the operator is asked once whether to strip them. "Create"
//! writes the current list to `mod_order.txt` in the same directory.
//!
//! # Execution Flow
//!
//! 1. Resolve the base directory from the executable path
//! 2. Load `mod_order_tool.yaml` from the base directory (optional)
//! 3. Initialize logging → `<temp>/mod-order-tool/mod-order-tool.<date>`
//! 4. Create the pipeline and the controller with native dialogs
//! 5. Run the controller loop until the operator closes the tool
//!
//! Everything runs on the main thread; dialogs are modal.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;
use mod_order_tool::logging::{self, LOG_PREFIX};
use mod_order_tool::ui::{ModOrderController, NativeDialogs};
use mod_order_tool::{APP_NAME, ConfigManager, ModPipeline, VERSION};

/// Directory containing the running executable
fn base_directory() -> Result<Utf8PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let exe = Utf8PathBuf::from_path_buf(exe)
        .map_err(|p| anyhow!("Executable path is not valid UTF-8: {}", p.display()))?;

    exe.parent()
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| anyhow!("Executable path has no parent directory: {}", exe))
}

fn main() -> Result<()> {
    let base_dir = base_directory()?;

    // Settings are loaded before logging so they can choose the log level
    let config_manager = ConfigManager::new(&base_dir);
    let config = config_manager.load_config()?;
    let settings = config.settings;

    let log_dir = settings
        .log_directory
        .as_deref()
        .map(Utf8PathBuf::from)
        .unwrap_or_else(logging::default_log_dir);
    let _guard = logging::setup_logging_with_console(
        &log_dir,
        LOG_PREFIX,
        settings.debug_mode,
        settings.console_log,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);
    tracing::info!("Base directory: {}", base_dir);

    let pipeline = ModPipeline::with_order_file(&base_dir, settings.order_file_name());
    let mut controller = ModOrderController::new(pipeline, NativeDialogs::new());

    controller.run();

    tracing::info!("Application shutdown complete");
    Ok(())
}
