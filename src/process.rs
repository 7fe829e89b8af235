//! External process execution — spawn, wait, capture.

use std::process::Command;

/// Captured output from a completed child process.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run a program with arguments and wait for completion, capturing
/// stdout and stderr. Err only on spawn/wait failure; a non-zero exit
/// is an `ExecOutput` the caller inspects.
pub fn run_command(program: &str, args: &[String]) -> Result<ExecOutput, String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| format!("failed to spawn {}: {}", program, e))?;

    Ok(ExecOutput {
        // Killed by signal: no exit code, report -1.
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}
