use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::document::{Document, Position};
use crate::workspace::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Append the configuration to .vscode/launch.json
    File,
    /// Hand the configuration to the clipboard instead
    Clipboard,
}

impl OutputMode {
    /// The command line wins over the workspace setting.
    pub fn resolve(flag: Option<OutputMode>, settings: &Settings) -> Self {
        match flag {
            Some(mode) => mode,
            None if settings.use_clipboard => OutputMode::Clipboard,
            None => OutputMode::File,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::File => "file",
            OutputMode::Clipboard => "clipboard",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "go-subtest")]
#[command(about = "Debug launch configurations for Go table-driven subtests", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a launch configuration for the subtest under the cursor
    AddSubtest(AddArgs),

    /// Show the launch configuration of the subtest under the cursor
    GotoSubtest(GotoArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct TargetArgs {
    /// Go test file containing the subtest
    #[arg(long, value_name = "FILE")]
    pub file: PathBuf,

    /// Cursor line, 1-based
    #[arg(long, required_unless_present = "offset")]
    pub line: Option<usize>,

    /// Cursor column, 1-based
    #[arg(long)]
    pub column: Option<usize>,

    /// Cursor as a byte offset into FILE, instead of --line/--column
    #[arg(long, conflicts_with_all = ["line", "column"])]
    pub offset: Option<usize>,

    /// Workspace root (discovered from FILE when not given)
    #[arg(long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Open the configuration in an editor instead of printing its location
    #[arg(long)]
    pub open: bool,

    /// Editor command used by --open
    #[arg(long, value_name = "COMMAND")]
    pub editor: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct AddArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Where the configuration goes (defaults to the go-subtest.useClipboard setting)
    #[arg(long, value_enum)]
    pub output_mode: Option<OutputMode>,

    /// Program that receives the configuration on stdin in clipboard mode
    #[arg(long, value_name = "COMMAND")]
    pub clipboard_command: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GotoArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

impl Args {
    pub fn target(&self) -> &TargetArgs {
        match &self.command {
            Command::AddSubtest(add) => &add.target,
            Command::GotoSubtest(goto) => &goto.target,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.target().validate()
    }
}

impl TargetArgs {
    pub fn validate(&self) -> Result<()> {
        if self.line == Some(0) {
            anyhow::bail!("--line is 1-based");
        }
        if self.column == Some(0) {
            anyhow::bail!("--column is 1-based");
        }
        if let Some(ref editor) = self.editor {
            if editor.trim().is_empty() {
                anyhow::bail!("--editor must name a program");
            }
        }
        Ok(())
    }

    /// The cursor as a zero-based document position.
    pub fn cursor(&self, document: &Document) -> Position {
        match self.offset {
            Some(offset) => document.position_at(offset),
            None => Position::new(
                self.line.unwrap_or(1).saturating_sub(1),
                self.column.unwrap_or(1).saturating_sub(1),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("go-subtest").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_add_subtest() {
        let args = parse(&[
            "add-subtest",
            "--file",
            "foo_test.go",
            "--line",
            "12",
            "--column",
            "5",
            "--output-mode",
            "clipboard",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.verbose, 2);
        let Command::AddSubtest(add) = &args.command else {
            panic!("expected add-subtest");
        };
        assert_eq!(add.target.file, PathBuf::from("foo_test.go"));
        assert_eq!(add.target.line, Some(12));
        assert_eq!(add.target.column, Some(5));
        assert_eq!(add.output_mode, Some(OutputMode::Clipboard));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_parse_goto_subtest_with_offset() {
        let args = parse(&["goto-subtest", "--file", "foo_test.go", "--offset", "40", "--open"])
            .unwrap();
        let target = args.target();
        assert_eq!(target.offset, Some(40));
        assert!(target.open);
        assert!(matches!(args.command, Command::GotoSubtest(_)));
    }

    #[test]
    fn test_line_or_offset_required() {
        assert!(parse(&["add-subtest", "--file", "foo_test.go"]).is_err());
    }

    #[test]
    fn test_offset_conflicts_with_line() {
        assert!(parse(&[
            "add-subtest",
            "--file",
            "foo_test.go",
            "--line",
            "3",
            "--offset",
            "10"
        ])
        .is_err());
    }

    #[test]
    fn test_invalid_output_mode() {
        assert!(parse(&[
            "add-subtest",
            "--file",
            "foo_test.go",
            "--line",
            "3",
            "--output-mode",
            "stdout"
        ])
        .is_err());
    }

    #[test]
    fn test_validate_rejects_zero_line() {
        let args = parse(&["add-subtest", "--file", "foo_test.go", "--line", "0"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_cursor_from_line_and_column() {
        let args = parse(&["goto-subtest", "--file", "f.go", "--line", "3", "--column", "7"])
            .unwrap();
        let document = Document::new("a\nb\nc\n");
        assert_eq!(args.target().cursor(&document), Position::new(2, 6));
    }

    #[test]
    fn test_cursor_defaults_to_line_start() {
        let args = parse(&["goto-subtest", "--file", "f.go", "--line", "2"]).unwrap();
        let document = Document::new("a\nb\n");
        assert_eq!(args.target().cursor(&document), Position::new(1, 0));
    }

    #[test]
    fn test_cursor_from_offset() {
        let args = parse(&["goto-subtest", "--file", "f.go", "--offset", "4"]).unwrap();
        let document = Document::new("ab\ncd\n");
        assert_eq!(args.target().cursor(&document), Position::new(1, 1));
    }

    #[test]
    fn test_output_mode_resolve() {
        let mut settings = Settings::default();
        assert_eq!(OutputMode::resolve(None, &settings), OutputMode::File);

        settings.use_clipboard = true;
        assert_eq!(OutputMode::resolve(None, &settings), OutputMode::Clipboard);
        assert_eq!(
            OutputMode::resolve(Some(OutputMode::File), &settings),
            OutputMode::File
        );
    }

    #[test]
    fn test_output_mode_as_str() {
        assert_eq!(OutputMode::File.as_str(), "file");
        assert_eq!(OutputMode::Clipboard.as_str(), "clipboard");
    }
}
