use std::process::Command;

use tracing::{debug, warn};

use super::ConfigLocation;
use crate::error::{IoError, Result};
use crate::utils::split_command;

pub const DEFAULT_EDITOR_COMMAND: &str = "code --goto";

/// Brings a launch file location in front of the user.
pub trait Reveal {
    fn reveal(&self, location: &ConfigLocation) -> Result<()>;
}

/// Prints `path:line:column` on stdout.
pub struct PrintLocation;

impl Reveal for PrintLocation {
    fn reveal(&self, location: &ConfigLocation) -> Result<()> {
        println!("{location}");
        Ok(())
    }
}

/// Runs an editor with `path:line:column` appended to its arguments.
#[derive(Debug, Clone)]
pub struct EditorCommand {
    program: String,
    args: Vec<String>,
}

impl EditorCommand {
    pub fn parse(command: &str) -> Option<Self> {
        let (program, args) = split_command(command)?;
        Some(Self { program, args })
    }
}

impl Default for EditorCommand {
    fn default() -> Self {
        Self {
            program: "code".to_string(),
            args: vec!["--goto".to_string()],
        }
    }
}

impl Reveal for EditorCommand {
    fn reveal(&self, location: &ConfigLocation) -> Result<()> {
        debug!(program = %self.program, %location, "opening editor");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(location.to_string())
            .status()
            .map_err(|e| IoError::spawn_error(&self.program, e))?;

        if !status.success() {
            return Err(IoError::command_failed(&self.program, status).into());
        }
        Ok(())
    }
}

/// Reveals `location`, logging instead of failing: by the time anything is
/// revealed the operation itself has already completed.
pub fn reveal_best_effort(revealer: &dyn Reveal, location: &ConfigLocation) {
    if let Err(e) = revealer.reveal(location) {
        warn!(error = %e, %location, "could not reveal launch configuration");
    }
}
