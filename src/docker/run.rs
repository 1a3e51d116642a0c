use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

/// Run a `docker` command with inherited stdio, failing on non-zero exit.
///
/// Build and run output goes straight to the operator's terminal, and the
/// runtime's own diagnostics surface directly on failure.
pub fn execute(args: &[String]) -> Result<()> {
    let status = Command::new("docker")
        .args(args)
        .status()
        .context("failed to spawn docker process")?;

    if !status.success() {
        bail!(
            "docker {} failed (exit {})",
            args.first().map(String::as_str).unwrap_or(""),
            status
        );
    }
    Ok(())
}

/// Run a `docker` query and return its trimmed stdout.
pub fn capture(args: &[String]) -> Result<String> {
    let output = Command::new("docker")
        .args(args)
        .stdin(Stdio::null())
        .output()
        .context("failed to spawn docker process")?;

    if !output.status.success() {
        bail!(
            "docker {} failed (exit {})",
            args.first().map(String::as_str).unwrap_or(""),
            output.status
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
