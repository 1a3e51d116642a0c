use std::path::Path;

use crate::provision::ProvisionPlan;

/// Build a `docker build` argument list for the generated Dockerfile.
pub fn build_args(image_tag: &str, dockerfile: &Path, context_dir: &Path) -> Vec<String> {
    vec![
        "build".into(),
        "-t".into(),
        image_tag.to_string(),
        "-f".into(),
        dockerfile.display().to_string(),
        context_dir.display().to_string(),
    ]
}

/// Build a `docker run` argument list launching a detached PocketBase
/// container with the project's three bind mounts and port mapping.
pub fn run_args(plan: &ProvisionPlan, container_port: u16) -> Vec<String> {
    let dir = &plan.project_dir;
    vec![
        "run".into(),
        "-d".into(),
        "--name".into(),
        plan.container_name.clone(),
        "-p".into(),
        format!("{}:{}", plan.port, container_port),
        "-v".into(),
        format!("{}:/pb/pb_public", dir.join("public").display()),
        "-v".into(),
        format!("{}:/pb/pb_data", dir.display()),
        "-v".into(),
        format!("{}:/pb/pb_hooks", dir.join("hooks").display()),
        plan.image_tag.clone(),
    ]
}
