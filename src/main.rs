use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};

use pocketup::prompt::{self, PortChoice};
use pocketup::provision::ProvisionPlan;
use pocketup::{config, docker, ports, provision, summary};

fn main() -> Result<()> {
    docker::ensure_available()?;

    let cwd = std::env::current_dir()?;
    let cfg = config::load(&cwd)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let project = prompt::read_project_name(&mut input, &mut output)?;
    let choice = prompt::read_port_choice(&mut input, &mut output)?;
    let port = resolve_port(&mut input, &mut output, choice)?;

    let plan = ProvisionPlan::new(&cfg, &project, port);
    provision::run(&cfg, &plan, &mut output)?;

    summary::print(&mut output, &plan)?;
    Ok(())
}

/// Turn the user's port choice into a concrete port.
///
/// Auto mode scans the fixed ranges. A manual port that looks taken needs an
/// explicit confirmation; declining aborts the run.
fn resolve_port<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    choice: PortChoice,
) -> Result<u16> {
    match choice {
        PortChoice::Auto => ports::find_free_port(),
        PortChoice::Manual(port) => {
            if !ports::is_free(port) && !prompt::confirm_port_in_use(input, output, port)? {
                bail!("aborted: port {port} is in use");
            }
            Ok(port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn manual_free_port_passes_through_without_prompting() {
        let listener = std::net::TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let mut out = Vec::new();
        let resolved =
            resolve_port(&mut Cursor::new(""), &mut out, PortChoice::Manual(port)).unwrap();
        assert_eq!(resolved, port);
        assert!(out.is_empty());
    }

    #[test]
    fn manual_taken_port_declined_aborts() {
        let listener = std::net::TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = listener.local_addr().unwrap().port();

        let mut out = Vec::new();
        let result = resolve_port(&mut Cursor::new("n\n"), &mut out, PortChoice::Manual(port));
        assert!(result.is_err());
    }

    #[test]
    fn manual_taken_port_confirmed_is_kept() {
        let listener = std::net::TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = listener.local_addr().unwrap().port();

        let mut out = Vec::new();
        let resolved =
            resolve_port(&mut Cursor::new("y\n"), &mut out, PortChoice::Manual(port)).unwrap();
        assert_eq!(resolved, port);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("appears to be in use"));
    }
}
