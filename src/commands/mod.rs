//! The `add-subtest` and `goto-subtest` operations.
//!
//! Everything the host would normally provide (document, workspace, symbol
//! index, clipboard) is passed in explicitly. The launch file write in
//! [`add_subtest`] is the only mutation and happens after every other step
//! has succeeded.

mod clipboard;
mod reveal;

pub use clipboard::{ClipboardSink, CommandClipboard, StdoutClipboard};
pub use reveal::{reveal_best_effort, EditorCommand, PrintLocation, Reveal, DEFAULT_EDITOR_COMMAND};

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::cli::OutputMode;
use crate::document::{Document, DocumentKind, Position};
use crate::error::{LaunchError, Result, WorkspaceError};
use crate::launch::{find_config_position, reconcile, synthesize, LaunchFile, ReconcileResult};
use crate::subtest::{extract_build_tags, resolve_subtest, TestIdentifier};
use crate::symbols::SymbolProvider;
use crate::workspace::Workspace;

/// One invocation's view of the world.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub workspace: &'a Workspace,
    pub document: &'a Document,
    pub cursor: Position,
    pub test_prefix: &'a str,
}

/// A position inside a launch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub position: Position,
}

impl fmt::Display for ConfigLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.path.display(),
            self.position.line + 1,
            self.position.character + 1
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added {
        identifier: TestIdentifier,
        location: Option<ConfigLocation>,
    },
    AlreadyExists {
        identifier: TestIdentifier,
        location: Option<ConfigLocation>,
    },
    Copied {
        identifier: TestIdentifier,
        json: String,
    },
}

impl AddOutcome {
    pub fn identifier(&self) -> &TestIdentifier {
        match self {
            Self::Added { identifier, .. }
            | Self::AlreadyExists { identifier, .. }
            | Self::Copied { identifier, .. } => identifier,
        }
    }

    pub fn location(&self) -> Option<&ConfigLocation> {
        match self {
            Self::Added { location, .. } | Self::AlreadyExists { location, .. } => {
                location.as_ref()
            }
            Self::Copied { .. } => None,
        }
    }
}

pub fn ensure_go_document(document: &Document) -> Result<()> {
    match document.kind() {
        Some(DocumentKind::Go) => Ok(()),
        None => Err(WorkspaceError::wrong_document_kind(
            document.path().unwrap_or(Path::new("<memory>")),
        )
        .into()),
    }
}

/// Resolves the subtest under the cursor and records a launch configuration
/// for it, or hands the configuration to `clipboard` in clipboard mode.
pub fn add_subtest(
    request: &Request<'_>,
    provider: &dyn SymbolProvider,
    output_mode: OutputMode,
    clipboard: &dyn ClipboardSink,
) -> Result<AddOutcome> {
    ensure_go_document(request.document)?;

    let identifier = resolve_subtest(
        request.document,
        request.cursor,
        provider,
        request.test_prefix,
    )?;
    let build_tags = extract_build_tags(request.document.text());
    debug!(build_tags = %build_tags, "extracted build constraint");

    let config = synthesize(&identifier, &request.workspace.program_path(), &build_tags);

    if output_mode == OutputMode::Clipboard {
        let launch_path = LaunchFile::path_for(request.workspace.root());
        let json = config
            .to_compact_json()
            .map_err(|e| LaunchError::malformed(launch_path, e))?;
        clipboard.write_text(&json)?;
        info!(%identifier, "copied launch configuration");
        return Ok(AddOutcome::Copied { identifier, json });
    }

    let mut launch = LaunchFile::load(request.workspace.root())?;
    let reconciled = reconcile(launch.configurations(), &config)
        .map_err(|e| LaunchError::malformed(launch.path(), e))?;
    match reconciled {
        ReconcileResult::AlreadyExists(name) => {
            warn!(%name, "launch.json config already exists");
            let location = existing_location(request.workspace.root(), &identifier);
            Ok(AddOutcome::AlreadyExists {
                identifier,
                location,
            })
        }
        ReconcileResult::Appended(configurations) => {
            launch.set_configurations(configurations);
            let text = launch.save()?;
            info!(%identifier, "added launch configuration");
            let location = locate_in(launch.path(), &text, &identifier);
            Ok(AddOutcome::Added {
                identifier,
                location,
            })
        }
        ReconcileResult::InvalidContainer => {
            Err(LaunchError::invalid_container(launch.path()).into())
        }
    }
}

/// Finds the launch configuration of the subtest under the cursor without
/// changing anything.
pub fn goto_subtest(request: &Request<'_>, provider: &dyn SymbolProvider) -> Result<ConfigLocation> {
    ensure_go_document(request.document)?;

    let identifier = resolve_subtest(
        request.document,
        request.cursor,
        provider,
        request.test_prefix,
    )?;
    let (path, text) = LaunchFile::read_text(request.workspace.root())?;
    let position = find_config_position(&text, &identifier)?;
    Ok(ConfigLocation { path, position })
}

fn existing_location(root: &Path, identifier: &TestIdentifier) -> Option<ConfigLocation> {
    match LaunchFile::read_text(root) {
        Ok((path, text)) => locate_in(&path, &text, identifier),
        Err(e) => {
            warn!(error = %e, "cannot read launch file for navigation");
            None
        }
    }
}

fn locate_in(path: &Path, text: &str, identifier: &TestIdentifier) -> Option<ConfigLocation> {
    match find_config_position(text, identifier) {
        Ok(position) => Some(ConfigLocation {
            path: path.to_path_buf(),
            position,
        }),
        Err(e) => {
            warn!(error = %e, "cannot locate configuration for navigation");
            None
        }
    }
}
