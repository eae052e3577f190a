// Native message boxes for the front end
//
// The tool has no main window of its own; every interaction is a modal
// message box shown with rfd.

use crate::models::ModList;
use crate::services::Confirm;
use crate::ui::frontend::{Frontend, UserAction};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Window title for the main list dialog
pub const APP_TITLE: &str = "KCD: Mod Order Tool";

const RENAME_TITLE: &str = "Rename Folders";
const CREATE_LABEL: &str = "Create mod_order.txt";
const REFRESH_LABEL: &str = "Refresh mods";
const CLOSE_LABEL: &str = "Close";

/// Longest list shown in full before truncating
const MAX_LISTED: usize = 30;

/// Whether the backend shows plain Yes/No/Cancel in place of custom labels.
///
/// rfd's Windows backend without common controls v6 falls back to
/// `MB_YESNOCANCEL` and discards the labels.
const LABELS_DROPPED: bool = cfg!(windows);

/// [`Frontend`] backed by native message boxes
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl NativeDialogs {
    pub fn new() -> Self {
        Self
    }

    fn show(level: MessageLevel, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl Confirm for NativeDialogs {
    fn confirm(&self, prompt: &str) -> bool {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(RENAME_TITLE)
            .set_description(prompt)
            .set_buttons(MessageButtons::YesNo)
            .show();

        matches!(result, MessageDialogResult::Yes)
    }
}

impl Frontend for NativeDialogs {
    fn notify_info(&self, title: &str, message: &str) {
        Self::show(MessageLevel::Info, title, message);
    }

    fn notify_error(&self, title: &str, message: &str) {
        Self::show(MessageLevel::Error, title, message);
    }

    fn next_action(&self, status: &str, mods: &ModList) -> UserAction {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(APP_TITLE)
            .set_description(list_description(status, mods, LABELS_DROPPED.then(button_legend)))
            .set_buttons(MessageButtons::YesNoCancelCustom(
                CREATE_LABEL.to_string(),
                REFRESH_LABEL.to_string(),
                CLOSE_LABEL.to_string(),
            ))
            .show();

        // Backends report custom buttons either by label or as the
        // standard button in the same slot
        match result {
            MessageDialogResult::Yes => UserAction::Create,
            MessageDialogResult::No => UserAction::Refresh,
            MessageDialogResult::Custom(label) if label == CREATE_LABEL => UserAction::Create,
            MessageDialogResult::Custom(label) if label == REFRESH_LABEL => UserAction::Refresh,
            _ => UserAction::Quit,
        }
    }
}

/// Which standard button stands for which action
fn button_legend() -> String {
    format!(
        "Yes = {}    No = {}    Cancel = {}",
        CREATE_LABEL, REFRESH_LABEL, CLOSE_LABEL
    )
}

/// Text body of the main dialog: status line, optional button legend, then
/// the folder names
fn list_description(status: &str, mods: &ModList, legend: Option<String>) -> String {
    let mut text = String::from(status);
    if let Some(legend) = legend {
        text.push('\n');
        text.push_str(&legend);
    }
    text.push('\n');

    for entry in mods.iter().take(MAX_LISTED) {
        text.push('\n');
        text.push_str(entry.name());
    }

    if mods.len() > MAX_LISTED {
        text.push_str(&format!("\n... and {} more", mods.len() - MAX_LISTED));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_description_short() {
        let mods: ModList = ["ModA", "ModB"].into_iter().collect();
        assert_eq!(
            list_description("Found 2 mods", &mods, None),
            "Found 2 mods\n\nModA\nModB"
        );
    }

    #[test]
    fn test_list_description_with_button_legend() {
        let mods: ModList = ["ModA"].into_iter().collect();
        let text = list_description("Found 1 mods", &mods, Some(button_legend()));

        assert_eq!(
            text,
            "Found 1 mods\nYes = Create mod_order.txt    No = Refresh mods    Cancel = Close\n\nModA"
        );
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_dialog_explains_buttons() {
        let legend = LABELS_DROPPED.then(button_legend);
        let description = list_description("Found 0 mods", &ModList::new(), legend);
        assert!(description.contains("Yes = Create mod_order.txt"));
        assert!(description.contains("No = Refresh mods"));
    }

    #[test]
    fn test_list_description_truncates() {
        let mods: ModList = (0..MAX_LISTED + 5).map(|i| format!("Mod{}", i)).collect();
        let text = list_description("Found 35 mods", &mods, None);

        assert!(text.ends_with("... and 5 more"));
        assert!(text.contains("Mod29"));
        assert!(!text.contains("Mod30"));
    }
}
