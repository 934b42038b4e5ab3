use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{IoError, Result};
use crate::utils::split_command;

/// Receives the launch configuration in clipboard mode.
pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Prints to stdout, for piping into whatever clipboard tool is at hand.
pub struct StdoutClipboard;

impl ClipboardSink for StdoutClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        println!("{text}");
        Ok(())
    }
}

/// Feeds the text to a clipboard program's stdin (`pbcopy`, `wl-copy`, ...).
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn parse(command: &str) -> Option<Self> {
        let (program, args) = split_command(command)?;
        Some(Self { program, args })
    }
}

impl ClipboardSink for CommandClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        debug!(program = %self.program, "writing clipboard");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| IoError::spawn_error(&self.program, e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| IoError::spawn_error(&self.program, e))?;
        }

        let status = child
            .wait()
            .map_err(|e| IoError::spawn_error(&self.program, e))?;
        if !status.success() {
            return Err(IoError::command_failed(&self.program, status).into());
        }
        Ok(())
    }
}
