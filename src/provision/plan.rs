use std::path::PathBuf;

use crate::config::Config;

/// Everything derived from the user's answers that the remaining steps need.
/// Built once, passed by reference; nothing here is persisted.
#[derive(Debug, Clone)]
pub struct ProvisionPlan {
    pub project: String,
    pub port: u16,
    pub project_dir: PathBuf,
    pub container_name: String,
    pub image_tag: String,
}

impl ProvisionPlan {
    pub fn new(cfg: &Config, project: &str, port: u16) -> Self {
        Self {
            project: project.to_string(),
            port,
            project_dir: cfg.projects_root.join(project),
            container_name: format!("pocketbase-{project}"),
            image_tag: cfg.image_tag(),
        }
    }

    /// Admin UI address once the container is up.
    pub fn admin_url(&self) -> String {
        format!("http://localhost:{}/_/", self.port)
    }
}
