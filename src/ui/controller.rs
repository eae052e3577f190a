// Controller - Bridges the front end with the pipeline and state
//
// This module contains the ModOrderController which coordinates between:
// - the front end (dialogs, or a test double)
// - StateManager (application state)
// - ModPipeline (business logic)
//
// It turns the two user requests, refresh and create, into pipeline calls and
// reports every outcome back through the front end.

use crate::services::{ModPipeline, PipelineError, RenameDecision};
use crate::state::{StateChange, StateManager};
use crate::ui::frontend::{Frontend, UserAction};

/// Title used for every error notification
pub const ERROR_TITLE: &str = "Error";

/// Title used for the success notification after writing the order file
pub const SUCCESS_TITLE: &str = "Success";

/// Application controller owning the pipeline, the state and the front end
///
/// Handlers run synchronously on the caller's thread and always return to
/// an idle state, whatever happened. Nothing here is fatal: failures are
/// shown to the operator and logged.
///
/// # Example
/// ```ignore
/// let pipeline = ModPipeline::new(base_dir);
/// let mut controller = ModOrderController::new(pipeline, NativeDialogs::new());
/// controller.run(); // Blocks until the operator closes the tool
/// ```
#[derive(Debug)]
pub struct ModOrderController<F: Frontend> {
    pipeline: ModPipeline,
    state_manager: StateManager,
    frontend: F,
}

impl<F: Frontend> ModOrderController<F> {
    pub fn new(pipeline: ModPipeline, frontend: F) -> Self {
        let state_manager = StateManager::new(pipeline.base_dir());
        Self {
            pipeline,
            state_manager,
            frontend,
        }
    }

    pub fn state(&self) -> &StateManager {
        &self.state_manager
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn pipeline(&self) -> &ModPipeline {
        &self.pipeline
    }

    /// Main loop: refresh once, then serve requests until the operator quits.
    pub fn run(&mut self) {
        tracing::info!("Starting controller loop for {}", self.pipeline.base_dir());
        self.handle_refresh();

        loop {
            let action = self.state_manager.read(|s| {
                self.frontend.next_action(&s.status_message, &s.mods)
            });
            tracing::debug!("User action: {:?}", action);

            match action {
                UserAction::Refresh => {
                    self.handle_refresh();
                }
                UserAction::Create => {
                    self.handle_create();
                }
                UserAction::Quit => break,
            }
        }

        tracing::info!("Controller loop finished");
    }

    /// Scan the base directory and normalize names.
    ///
    /// The list is replaced only once the scan and every rename attempt have
    /// finished. A failed scan leaves an empty list. Folders the scan had to
    /// leave out are reported one by one, like rename failures.
    pub fn handle_refresh(&mut self) -> Vec<StateChange> {
        tracing::info!("Refresh requested");

        let outcome = match self.pipeline.refresh(&self.frontend) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Refresh failed: {}", e);
                self.frontend.notify_error(ERROR_TITLE, &e.to_string());
                return self.state_manager.clear_mods(e.to_string());
            }
        };

        for skipped in &outcome.skipped {
            self.frontend.notify_error(ERROR_TITLE, &skipped.to_string());
        }

        let report = outcome.report;
        for failure in &report.failures {
            self.frontend
                .notify_error(ERROR_TITLE, &Self::describe_rename_failure(failure));
        }

        if report.decision == RenameDecision::Declined {
            tracing::info!("Folder names kept as they are");
        }

        self.state_manager
            .replace_mods(outcome.list, report.renamed.len())
    }

    /// Write the current list to the order file.
    ///
    /// Does not re-scan: whatever list is in memory is written, even if it is
    /// empty or stale.
    pub fn handle_create(&mut self) -> Vec<StateChange> {
        tracing::info!("Create requested");

        let result = self
            .state_manager
            .read(|s| self.pipeline.write_order_file(&s.mods));

        match result {
            Ok(path) => {
                let file_name = path.file_name().unwrap_or(path.as_str()).to_string();
                self.frontend.notify_info(
                    SUCCESS_TITLE,
                    &format!("{} created successfully.", file_name),
                );
                self.state_manager.set_order_file_written(&path)
            }
            Err(e) => {
                tracing::error!("Create failed: {}", e);
                let file_name = self
                    .pipeline
                    .order_file_path()
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_default();
                self.frontend.notify_error(
                    ERROR_TITLE,
                    &format!("Failed to create {}.\n\n{}", file_name, e),
                );
                Vec::new()
            }
        }
    }

    fn describe_rename_failure(error: &PipelineError) -> String {
        match error {
            PipelineError::RenameSourceMissing { name } => {
                format!("Folder not found. Cannot rename.\n\n{}", name)
            }
            PipelineError::RenameFailed { from, cause, .. } => {
                format!("Error renaming folder: {}\n\n{}", cause, from)
            }
            other => other.to_string(),
        }
    }
}
