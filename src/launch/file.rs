use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::document::{locate_literal, Document, Position};
use crate::error::{IoError, LaunchError, ResolveError, Result};
use crate::subtest::TestIdentifier;

pub const LAUNCH_PATH: &str = ".vscode/launch.json";
pub const CONFIGURATIONS_KEY: &str = "configurations";

const LAUNCH_VERSION: &str = "0.2.0";

/// The launch file of a workspace.
///
/// Only the `configurations` field is ever rewritten; other top-level keys
/// keep their values and order.
#[derive(Debug, Clone)]
pub struct LaunchFile {
    path: PathBuf,
    root: Map<String, Value>,
}

impl LaunchFile {
    pub fn path_for(workspace_root: &Path) -> PathBuf {
        workspace_root.join(LAUNCH_PATH)
    }

    /// Reads the launch file of `workspace_root`. A missing file reads as an
    /// empty configuration list.
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let path = Self::path_for(workspace_root);
        if !path.exists() {
            debug!(path = %path.display(), "no launch file yet, starting empty");
            return Ok(Self::empty(path));
        }

        let text = fs::read_to_string(&path).map_err(|e| IoError::read_error(&path, e))?;
        Self::parse(path, &text)
    }

    pub fn parse(path: PathBuf, text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(&crate::utils::strip_jsonc(text))
            .map_err(|e| LaunchError::malformed(&path, e))?;

        match value {
            Value::Object(root) => Ok(Self { path, root }),
            _ => Err(LaunchError::invalid_container(&path).into()),
        }
    }

    fn empty(path: PathBuf) -> Self {
        let mut root = Map::new();
        root.insert("version".to_string(), Value::from(LAUNCH_VERSION));
        root.insert(CONFIGURATIONS_KEY.to_string(), Value::Array(Vec::new()));
        Self { path, root }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn configurations(&self) -> Option<&Value> {
        self.root.get(CONFIGURATIONS_KEY)
    }

    pub fn set_configurations(&mut self, configurations: Vec<Value>) {
        self.root
            .insert(CONFIGURATIONS_KEY.to_string(), Value::Array(configurations));
    }

    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.root
            .serialize(&mut serializer)
            .map_err(|e| LaunchError::malformed(&self.path, e))?;
        buf.push(b'\n');
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes the file back, creating `.vscode/` when needed. Returns the
    /// text that was written.
    pub fn save(&self) -> Result<String> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| IoError::create_dir_error(dir, e))?;
        }
        let text = self.to_json_string()?;
        fs::write(&self.path, &text).map_err(|e| IoError::write_error(&self.path, e))?;
        info!(path = %self.path.display(), "wrote launch configurations");
        Ok(text)
    }

    /// Current on-disk text, for navigation.
    pub fn read_text(workspace_root: &Path) -> Result<(PathBuf, String)> {
        let path = Self::path_for(workspace_root);
        if !path.is_file() {
            return Err(IoError::file_not_found(path).into());
        }
        let text = fs::read_to_string(&path).map_err(|e| IoError::read_error(&path, e))?;
        Ok((path, text))
    }
}

/// Where `identifier` first appears in a launch file's text.
///
/// The file holds the identifier as a JSON string, so the search is for its
/// escaped form.
pub fn find_config_position(
    text: &str,
    identifier: &TestIdentifier,
) -> std::result::Result<Position, ResolveError> {
    let encoded = Value::from(identifier.as_str()).to_string();
    let escaped = &encoded[1..encoded.len() - 1];
    locate_literal(&Document::new(text), escaped)
}
