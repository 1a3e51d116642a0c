use std::io::Write;

use anyhow::Result;

use crate::provision::ProvisionPlan;

/// Print the post-provisioning summary: where the instance lives and the
/// docker commands for day-to-day management.
pub fn print<W: Write>(out: &mut W, plan: &ProvisionPlan) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "PocketBase is up.")?;
    writeln!(out, "  Container:  {}", plan.container_name)?;
    writeln!(out, "  Port:       {}", plan.port)?;
    writeln!(out, "  Directory:  {}", plan.project_dir.display())?;
    writeln!(out, "  Admin UI:   {}", plan.admin_url())?;
    writeln!(out)?;
    writeln!(out, "Useful commands:")?;
    writeln!(out, "  docker logs -f {}", plan.container_name)?;
    writeln!(out, "  docker stop {}", plan.container_name)?;
    writeln!(out, "  docker start {}", plan.container_name)?;
    writeln!(out, "  docker rm -f {}", plan.container_name)?;
    Ok(())
}
