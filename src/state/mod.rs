// State management module
//
// This module provides the StateManager which owns AppState and reports every
// mutation as a list of change events for the front end.

use crate::models::{AppState, ModList, found_mods_message};
use camino::{Utf8Path, Utf8PathBuf};

/// Change events produced when state is modified
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// The mod list was replaced by a new scan (or cleared by a failed one)
    ModsLoaded { count: usize },

    /// Folders were renamed on disk during the refresh that loaded the list
    ModsRenamed { count: usize },

    /// The order file was written
    OrderFileWritten { path: Utf8PathBuf, entries: usize },

    /// The status line changed
    StatusChanged { message: String },
}

/// Owner of [`AppState`] with change detection
///
/// The tool runs on a single thread, so the manager hands out plain
/// references instead of locking. Mutations go through
/// [`update()`](Self::update), which diffs the state before and after and
/// returns the resulting [`StateChange`] events.
#[derive(Debug)]
pub struct StateManager {
    state: AppState,
}

impl StateManager {
    pub fn new(base_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            state: AppState::new(base_dir.into()),
        }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Execute a function with read access to the state
    ///
    /// # Example
    /// ```ignore
    /// let count = state_manager.read(|state| state.mod_count());
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        f(&self.state)
    }

    /// Update the state and report what changed
    ///
    /// # Example
    /// ```ignore
    /// state_manager.update(|state| {
    ///     state.status_message = "Working".to_string();
    /// });
    /// ```
    pub fn update<F>(&mut self, update_fn: F) -> Vec<StateChange>
    where
        F: FnOnce(&mut AppState),
    {
        let old_state = self.state.clone();
        update_fn(&mut self.state);

        let changes = Self::detect_changes(&old_state, &self.state);
        for change in &changes {
            tracing::debug!("State change: {:?}", change);
        }
        changes
    }

    fn detect_changes(old: &AppState, new: &AppState) -> Vec<StateChange> {
        let mut changes = Vec::new();

        if old.mods != new.mods {
            changes.push(StateChange::ModsLoaded {
                count: new.mods.len(),
            });
        }

        if old.last_order_file != new.last_order_file {
            if let Some(path) = &new.last_order_file {
                changes.push(StateChange::OrderFileWritten {
                    path: path.clone(),
                    entries: new.mods.len(),
                });
            }
        }

        if old.status_message != new.status_message {
            changes.push(StateChange::StatusChanged {
                message: new.status_message.clone(),
            });
        }

        changes
    }

    // Convenience methods for common state updates

    /// Replace the mod list wholesale and refresh the status line.
    ///
    /// Always reports [`StateChange::ModsLoaded`], even when the new list is
    /// identical to the old one. `renamed` is the number of folders the
    /// refresh normalized; when non-zero it is reported as
    /// [`StateChange::ModsRenamed`] right after the load.
    pub fn replace_mods(&mut self, mods: ModList, renamed: usize) -> Vec<StateChange> {
        let count = mods.len();
        let mut changes = self.update(|state| {
            state.mods = mods;
            state.last_scan_error = None;
            state.status_message = found_mods_message(count);
        });

        changes.retain(|c| !matches!(c, StateChange::ModsLoaded { .. }));
        changes.insert(0, StateChange::ModsLoaded { count });
        if renamed > 0 {
            tracing::debug!("State change: {} folders renamed", renamed);
            changes.insert(1, StateChange::ModsRenamed { count: renamed });
        }
        changes
    }

    /// Drop the mod list after a failed scan
    pub fn clear_mods(&mut self, error: String) -> Vec<StateChange> {
        let mut changes = self.update(|state| {
            state.mods = ModList::new();
            state.last_scan_error = Some(error);
            state.status_message = found_mods_message(0);
        });

        if !changes.iter().any(|c| matches!(c, StateChange::ModsLoaded { .. })) {
            changes.insert(0, StateChange::ModsLoaded { count: 0 });
        }
        changes
    }

    /// Record a successful order file write
    pub fn set_order_file_written(&mut self, path: &Utf8Path) -> Vec<StateChange> {
        let entries = self.state.mods.len();
        let mut changes = self.update(|state| {
            state.last_order_file = Some(path.to_path_buf());
        });

        // Writing twice to the same path is still a write
        if !changes.iter().any(|c| matches!(c, StateChange::OrderFileWritten { .. })) {
            changes.push(StateChange::OrderFileWritten {
                path: path.to_path_buf(),
                entries,
            });
        }
        changes
    }
}
