use serde::{Deserialize, Serialize};

/// Default name of the order file written next to the mod folders.
pub const DEFAULT_ORDER_FILE: &str = "mod_order.txt";

/// Tool configuration from mod_order_tool.yaml
///
/// Every field is optional in the file; missing keys fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(rename = "MOT_Settings", default)]
    pub settings: ToolSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSettings {
    #[serde(rename = "Order File", default = "default_order_file")]
    pub order_file: String,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,

    #[serde(rename = "Console Log", default = "default_console_log")]
    pub console_log: bool,

    #[serde(
        rename = "Log Directory",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub log_directory: Option<String>,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            order_file: default_order_file(),
            debug_mode: false,
            console_log: true,
            log_directory: None,
        }
    }
}

fn default_order_file() -> String {
    DEFAULT_ORDER_FILE.to_string()
}

fn default_console_log() -> bool {
    true
}

impl ToolSettings {
    /// The order file name to use.
    ///
    /// Only a bare file name is accepted; anything that would escape the base
    /// directory falls back to [`DEFAULT_ORDER_FILE`].
    pub fn order_file_name(&self) -> &str {
        let name = self.order_file.trim();
        let is_bare = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\', ':']);

        if is_bare {
            name
        } else {
            tracing::warn!(
                "Ignoring invalid order file name {:?}, using {}",
                self.order_file,
                DEFAULT_ORDER_FILE
            );
            DEFAULT_ORDER_FILE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_settings_defaults() {
        let settings = ToolSettings::default();
        assert_eq!(settings.order_file, "mod_order.txt");
        assert!(!settings.debug_mode);
        assert!(settings.console_log);
        assert!(settings.log_directory.is_none());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: ToolConfig =
            serde_yaml_ng::from_str("MOT_Settings:\n  Debug Mode: true\n").unwrap();
        assert!(config.settings.debug_mode);
        assert!(config.settings.console_log);
        assert_eq!(config.settings.order_file, DEFAULT_ORDER_FILE);
    }

    #[test]
    fn test_order_file_name_rejects_paths() {
        let mut settings = ToolSettings::default();

        settings.order_file = "load_order.txt".to_string();
        assert_eq!(settings.order_file_name(), "load_order.txt");

        for bad in ["", "  ", "..", "sub/mod_order.txt", "..\\mod_order.txt", "C:x.txt"] {
            settings.order_file = bad.to_string();
            assert_eq!(settings.order_file_name(), DEFAULT_ORDER_FILE, "input {:?}", bad);
        }
    }
}
