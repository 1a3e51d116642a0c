use anyhow::{Context, Result};

use super::plan::ProvisionPlan;

/// Create the project directory layout: `<root>/<project>/{public,hooks}`.
/// Idempotent; existing directories are left untouched and never removed.
pub fn create_layout(plan: &ProvisionPlan) -> Result<()> {
    for dir in [
        plan.project_dir.clone(),
        plan.project_dir.join("public"),
        plan.project_dir.join("hooks"),
    ] {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    Ok(())
}
