use crate::models::ModList;
use camino::Utf8PathBuf;

/// Single source of truth for the running tool.
///
/// Owned exclusively by [`crate::state::StateManager`], which in turn is owned
/// by the controller. All work happens on the UI thread, so there is no
/// locking; mutations still go through
/// [`update()`](crate::state::StateManager::update) so that every change is
/// reported as a [`StateChange`](crate::state::StateChange).
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Directory holding the executable and the mod folders
    pub base_dir: Utf8PathBuf,

    /// Mod folders from the most recent refresh
    pub mods: ModList,

    /// Line shown above the list, e.g. "Found 3 mods"
    pub status_message: String,

    /// Where the order file was last written, if ever
    pub last_order_file: Option<Utf8PathBuf>,

    /// Error text from the last failed scan
    pub last_scan_error: Option<String>,
}

impl AppState {
    pub fn new(base_dir: Utf8PathBuf) -> Self {
        Self {
            base_dir,
            status_message: found_mods_message(0),
            ..Self::default()
        }
    }

    pub fn mod_count(&self) -> usize {
        self.mods.len()
    }
}

/// Status line for a list of `count` mods
pub fn found_mods_message(count: usize) -> String {
    format!("Found {} mods", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = AppState::new(Utf8PathBuf::from("/games/kcd/Mods"));
        assert_eq!(state.mod_count(), 0);
        assert_eq!(state.status_message, "Found 0 mods");
        assert!(state.last_order_file.is_none());
        assert!(state.last_scan_error.is_none());
    }
}
