use std::process::Command;

use anyhow::{Context, Result, bail};

use super::run;

/// Verify that the Docker daemon is reachable.
pub fn ensure_available() -> Result<()> {
    let status = Command::new("docker")
        .args(["version", "--format", "{{.Server.Version}}"])
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .context("failed to invoke `docker` — is it installed and on PATH?")?;

    if !status.success() {
        bail!("docker daemon is not running (exit {})", status);
    }
    Ok(())
}

/// Whether a container with exactly this name exists, running or stopped.
///
/// Docker's `name=` filter parses its value as a regex, so a project name
/// with metacharacters would break the query. List all names and compare
/// exactly instead.
pub fn container_exists(name: &str) -> Result<bool> {
    let out = run::capture(&ps_args())?;
    Ok(name_listed(&out, name))
}

/// `docker ps` arguments listing the names of all containers.
fn ps_args() -> Vec<String> {
    vec![
        "ps".into(),
        "-a".into(),
        "--format".into(),
        "{{.Names}}".into(),
    ]
}

fn name_listed(listing: &str, name: &str) -> bool {
    listing.lines().any(|l| l == name)
}

/// Stop and remove a container, tolerating failure of either step.
///
/// The container may be stopped already, or gone entirely; neither is a
/// reason to abort provisioning.
pub fn remove_container(name: &str) {
    let _ = Command::new("docker")
        .args(["stop", name])
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status();
    let _ = Command::new("docker")
        .args(["rm", name])
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status();
}
