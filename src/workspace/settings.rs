use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::subtest::DEFAULT_TEST_PREFIX;
use crate::utils::strip_jsonc;

pub const SETTINGS_PATH: &str = ".vscode/settings.json";

/// The `go-subtest.*` keys of a workspace's editor settings. Other keys in
/// the file are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(rename = "go-subtest.useClipboard", default)]
    pub use_clipboard: bool,

    #[serde(rename = "go-subtest.testPrefix", default = "default_test_prefix")]
    pub test_prefix: String,

    #[serde(rename = "go-subtest.editorCommand", default)]
    pub editor_command: Option<String>,

    #[serde(rename = "go-subtest.clipboardCommand", default)]
    pub clipboard_command: Option<String>,
}

fn default_test_prefix() -> String {
    DEFAULT_TEST_PREFIX.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_clipboard: false,
            test_prefix: default_test_prefix(),
            editor_command: None,
            clipboard_command: None,
        }
    }
}

impl Settings {
    /// Reads `<root>/.vscode/settings.json`. Missing, unreadable or malformed
    /// files fall back to defaults.
    pub fn load(workspace_root: &Path) -> Self {
        let path = workspace_root.join(SETTINGS_PATH);
        if !path.is_file() {
            return Self::default();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read settings, using defaults");
                return Self::default();
            }
        };

        match Self::parse(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(&strip_jsonc(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_settings() {
        let content = r#"{
            // editor
            "editor.formatOnSave": true,
            "go-subtest.useClipboard": true,
            "go-subtest.testPrefix": "Benchmark",
            "go-subtest.clipboardCommand": "wl-copy",
        }"#;
        let settings = Settings::parse(content).unwrap();

        assert!(settings.use_clipboard);
        assert_eq!(settings.test_prefix, "Benchmark");
        assert_eq!(settings.clipboard_command.as_deref(), Some("wl-copy"));
        assert_eq!(settings.editor_command, None);
    }

    #[test]
    fn test_parse_empty_settings_uses_defaults() {
        assert_eq!(Settings::parse("{}").unwrap(), Settings::default());
        assert_eq!(Settings::default().test_prefix, "Test");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(Settings::load(temp_dir.path()), Settings::default());
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(".vscode")).unwrap();
        fs::write(
            temp_dir.path().join(SETTINGS_PATH),
            "{\"go-subtest.useClipboard\": \"yes\"}",
        )
        .unwrap();

        assert_eq!(Settings::load(temp_dir.path()), Settings::default());
    }
}
