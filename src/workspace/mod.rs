//! Workspace root discovery and per-workspace settings.

mod settings;

pub use settings::{Settings, SETTINGS_PATH};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, WorkspaceError};

const VSCODE_DIR: &str = ".vscode";
const GO_MOD: &str = "go.mod";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Uses `explicit` when given, otherwise the nearest ancestor of
    /// `document` holding a `.vscode` directory or a `go.mod` file. A
    /// `.vscode` directory above the enclosing module is never used.
    pub fn discover(explicit: Option<&Path>, document: &Path) -> Result<Self> {
        if let Some(root) = explicit {
            return match fs::canonicalize(root) {
                Ok(root) if root.is_dir() => Ok(Self::new(root)),
                _ => Err(WorkspaceError::no_workspace(root).into()),
            };
        }

        let document = fs::canonicalize(document).unwrap_or_else(|_| document.to_path_buf());
        let start = document.parent().unwrap_or(&document);
        let found = find_ancestor_with(start, |dir| {
            dir.join(VSCODE_DIR).is_dir() || dir.join(GO_MOD).is_file()
        });

        match found {
            Some(root) => {
                debug!(root = %root.display(), "discovered workspace root");
                Ok(Self::new(root))
            }
            None => Err(WorkspaceError::no_workspace(start).into()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The root as written into launch configurations.
    pub fn program_path(&self) -> String {
        self.root.to_string_lossy().into_owned()
    }

    pub fn settings(&self) -> Settings {
        Settings::load(&self.root)
    }
}

fn find_ancestor_with(start: &Path, predicate: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| predicate(dir))
        .map(Path::to_path_buf)
}
