// Front end seam - what the controller needs from whatever shows the UI

use crate::models::ModList;
use crate::services::Confirm;

/// User request read from the front end between actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Re-scan the base directory ("Refresh mods")
    Refresh,
    /// Write the current list ("Create mod_order.txt")
    Create,
    /// Close the tool
    Quit,
}

/// The UI collaborator driven by [`ModOrderController`](super::ModOrderController)
///
/// Every method blocks until the operator has seen or answered it. The
/// rename question comes through the [`Confirm`] supertrait so the same
/// object can be handed straight to the pipeline.
pub trait Frontend: Confirm {
    /// Blocking informational notification
    fn notify_info(&self, title: &str, message: &str);

    /// Blocking error notification
    fn notify_error(&self, title: &str, message: &str);

    /// Show the status line and current list, then wait for the next request
    fn next_action(&self, status: &str, mods: &ModList) -> UserAction;
}
