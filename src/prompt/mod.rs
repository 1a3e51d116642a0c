// Interactive input collection. Generic over the reader/writer so tests can
// drive prompts with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

use crate::ports;

/// How the host port should be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortChoice {
    /// Scan the fixed ranges for the first free port.
    Auto,
    /// User-supplied port, validated but not yet probed.
    Manual(u16),
}

/// Prompt for the project name. Empty (after trimming) is a fatal error.
pub fn read_project_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "Project name: ")?;
    output.flush()?;
    let line = read_line(input)?;
    let name = line.trim();
    if name.is_empty() {
        bail!("project name must not be empty");
    }
    Ok(name.to_string())
}

/// Prompt for the port-selection mode: `1` = auto-scan, `2` = manual entry.
/// Any other choice is a fatal error; manual entry must be all digits.
pub fn read_port_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PortChoice> {
    writeln!(output, "Port selection:")?;
    writeln!(output, "  1) automatic (scan 9090-9999, then 8081-8999)")?;
    writeln!(output, "  2) manual")?;
    write!(output, "Choice [1/2]: ")?;
    output.flush()?;

    match read_line(input)?.trim() {
        "1" => Ok(PortChoice::Auto),
        "2" => {
            write!(output, "Port: ")?;
            output.flush()?;
            let line = read_line(input)?;
            Ok(PortChoice::Manual(ports::parse_port(&line)?))
        }
        other => bail!("unrecognized choice: {other:?} (expected 1 or 2)"),
    }
}

/// Warn that a manually chosen port looks taken and ask whether to proceed.
/// Only an explicit `y`/`Y` counts as confirmation.
pub fn confirm_port_in_use<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    port: u16,
) -> Result<bool> {
    writeln!(output, "Warning: port {port} appears to be in use.")?;
    write!(output, "Use it anyway? [y/N]: ")?;
    output.flush()?;
    let answer = read_line(input)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line)
}
