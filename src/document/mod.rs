//! Immutable text buffers and line/character addressing.
//!
//! Offsets are byte offsets into the UTF-8 text. Positions are zero-based,
//! with `character` counting Unicode scalar values from the start of the line.

mod locator;

pub use locator::{locate, locate_literal, quoted_literal_on_line};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoError, Result, WorkspaceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// Range with inclusive bounds on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Go,
}

impl DocumentKind {
    pub fn detect(path: &Path) -> Option<Self> {
        path.extension()?.to_str().and_then(|ext| match ext {
            "go" => Some(Self::Go),
            _ => None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "go",
        }
    }
}

/// The cursor's absolute offset together with the text of its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorContext {
    pub offset: usize,
    pub position: Position,
    pub line: String,
}

#[derive(Debug, Clone)]
pub struct Document {
    path: Option<PathBuf>,
    text: String,
    line_starts: Vec<usize>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            path: None,
            text,
            line_starts,
        }
    }

    /// Loads a document from disk. A missing file means there is no document
    /// to work on.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(WorkspaceError::no_active_document(path).into());
        }
        let text = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;
        Ok(Self::new(text).with_path(path))
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn kind(&self) -> Option<DocumentKind> {
        self.path().and_then(DocumentKind::detect)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of `line` without its terminator, or `None` past the last line.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        let raw = &self.text[start..end];
        Some(raw.strip_suffix('\r').unwrap_or(raw))
    }

    pub fn position_at(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let character = self.text[self.line_starts[line]..offset].chars().count();
        Position::new(line, character)
    }

    pub fn offset_at(&self, position: Position) -> usize {
        let line = position.line.min(self.line_count() - 1);
        let start = self.line_starts[line];
        let text = self.line_text(line).unwrap_or_default();
        let within = text
            .char_indices()
            .nth(position.character)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        start + within
    }

    /// Normalizes `position` through an offset round trip and captures its line.
    pub fn cursor_context(&self, position: Position) -> CursorContext {
        let offset = self.offset_at(position);
        let position = self.position_at(offset);
        let line = self.line_text(position.line).unwrap_or_default().to_string();
        CursorContext {
            offset,
            position,
            line,
        }
    }
}
