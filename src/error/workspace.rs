use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("not inside a workspace: no .vscode directory or go.mod above {start}")]
    NoWorkspace { start: PathBuf },

    #[error("no document open at {path}")]
    NoActiveDocument { path: PathBuf },

    #[error("not a go file: {path}")]
    WrongDocumentKind { path: PathBuf },
}

impl WorkspaceError {
    pub fn no_workspace(start: impl Into<PathBuf>) -> Self {
        Self::NoWorkspace {
            start: start.into(),
        }
    }

    pub fn no_active_document(path: impl Into<PathBuf>) -> Self {
        Self::NoActiveDocument { path: path.into() }
    }

    pub fn wrong_document_kind(path: impl Into<PathBuf>) -> Self {
        Self::WrongDocumentKind { path: path.into() }
    }
}
