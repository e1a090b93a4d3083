//! Child process execution.
//!
//! Host and installer processes are started directly (no intermediate shell)
//! so names and version strings are passed as plain arguments.

use crate::error::{ProvisionError, Result};
use std::ffi::OsStr;
use std::process::{Command, Stdio};
use std::time::Instant;

use tracing::debug;

/// Result of executing a process.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the process succeeded (exit code 0).
    pub success: bool,
}

/// Render a program and its arguments for logs and error messages.
pub fn display_command<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        let arg = arg.as_ref().to_string_lossy();
        rendered.push(' ');
        if arg.contains(char::is_whitespace) {
            rendered.push('"');
            rendered.push_str(&arg.replace('\n', "\\n"));
            rendered.push('"');
        } else {
            rendered.push_str(&arg);
        }
    }
    rendered
}

/// Run `program` with `args`, capture both output streams and wait for it
/// to exit.
///
/// A non-zero exit is reported through [`CommandResult::success`]; only a
/// failure to start the process is an error.
pub fn execute<S: AsRef<OsStr>>(program: &str, args: &[S]) -> Result<CommandResult> {
    let start = Instant::now();
    let rendered = display_command(program, args);
    debug!("Executing: {}", rendered);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            debug!("Failed to start {}: {}", program, e);
            ProvisionError::CommandFailed {
                command: rendered.clone(),
                code: None,
            }
        })?;

    debug!(
        "{} exited with {:?} after {:?}",
        program,
        output.status.code(),
        start.elapsed()
    );

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}
