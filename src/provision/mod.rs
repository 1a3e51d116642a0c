// Provisioning pipeline — directory layout, image build, container launch.
// Strictly sequential; every step is fail-fast except stale-container removal.

pub mod dockerfile;
pub mod fs;
pub mod plan;

pub use plan::ProvisionPlan;

use std::io::Write;

use anyhow::Result;

use crate::config::Config;
use crate::docker;

/// Run the full provisioning sequence for an already-resolved plan.
///
/// Steps: create directories, write the Dockerfile, build the image, remove
/// any stale container with the same name, launch the new one. The temporary
/// Dockerfile is removed when this function returns, success or not.
/// Progress lines go to `out`, like every other user-facing message.
pub fn run<W: Write>(cfg: &Config, plan: &ProvisionPlan, out: &mut W) -> Result<()> {
    fs::create_layout(plan)?;

    let dockerfile = dockerfile::write_temp(cfg)?;

    writeln!(out, "Building image {} ...", plan.image_tag)?;
    out.flush()?;
    docker::execute(&docker::build_args(
        &plan.image_tag,
        dockerfile.path(),
        &plan.project_dir,
    ))?;

    if docker::container_exists(&plan.container_name)? {
        writeln!(out, "Removing existing container {} ...", plan.container_name)?;
        docker::remove_container(&plan.container_name);
    }

    writeln!(out, "Starting container {} ...", plan.container_name)?;
    out.flush()?;
    docker::execute(&docker::run_args(plan, cfg.container_port))?;

    Ok(())
}
