use std::process::Command;

use thiserror::Error;

// Invoked via env so the host's PATH decides which `ip` is used.
const ENV_BIN: &str = "/usr/bin/env";
const IP_ARGS: &[&str] = &["ip", "addr"];

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("could not run `ip addr`: {0}")]
    Launch(#[from] std::io::Error),
    #[error("`ip addr` exited with {status}: {stderr}")]
    Failed { status: std::process::ExitStatus, stderr: String },
}

/// Runs the address-listing command and returns its stdout as text.
pub fn list_addresses() -> Result<String, CommandError> {
    let output = Command::new(ENV_BIN).args(IP_ARGS).output()?;

    if !output.status.success() {
        return Err(CommandError::Failed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
