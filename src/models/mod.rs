//! Data models for the mod order tool.
//!
//! - [`ModEntry`] / [`ModList`]: the discovered mod folders, in enumeration order
//! - [`ToolConfig`]: optional settings loaded from `mod_order_tool.yaml`
//! - [`AppState`]: the in-memory state owned by [`StateManager`](crate::state::StateManager)

pub mod app_state;
pub mod config;
pub mod mod_list;

pub use app_state::{AppState, found_mods_message};
pub use config::{DEFAULT_ORDER_FILE, ToolConfig, ToolSettings};
pub use mod_list::{DISALLOWED_CHARS, ModEntry, ModList, needs_normalization, normalize_name};
