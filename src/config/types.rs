use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base directory under which each project gets its own subdirectory.
    pub projects_root: PathBuf,
    /// Pinned PocketBase release; also used as the image tag.
    pub pocketbase_version: String,
    /// Base image for the generated Dockerfile.
    pub base_image: String,
    /// Port PocketBase listens on inside the container.
    pub container_port: u16,
}

impl Config {
    /// Image tag for the built PocketBase image, e.g. `pocketbase:0.28.3`.
    pub fn image_tag(&self) -> String {
        format!("pocketbase:{}", self.pocketbase_version)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projects_root: PathBuf::from("/home/projects/pocketbase"),
            pocketbase_version: "0.28.3".to_string(),
            base_image: "alpine:3.20".to_string(),
            container_port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_pinned_release() {
        let cfg = Config::default();
        assert_eq!(cfg.pocketbase_version, "0.28.3");
        assert_eq!(cfg.container_port, 8080);
        assert_eq!(
            cfg.projects_root,
            PathBuf::from("/home/projects/pocketbase")
        );
    }

    #[test]
    fn image_tag_uses_version() {
        let cfg = Config::default();
        assert_eq!(cfg.image_tag(), "pocketbase:0.28.3");
    }
}
