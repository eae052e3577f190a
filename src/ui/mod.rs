// UI module - front end seam and controller
//
// This module contains:
// - Frontend: what the controller needs from the UI (confirm, notify, next action)
// - ModOrderController: turns refresh/create requests into pipeline calls
// - NativeDialogs: Frontend implemented with native message boxes

pub mod controller;
pub mod dialogs;
pub mod frontend;

pub use controller::ModOrderController;
pub use dialogs::NativeDialogs;
pub use frontend::{Frontend, UserAction};
