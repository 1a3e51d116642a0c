use std::path::Path;

use anyhow::{Context, Result};

use super::types::Config;

const CONFIG_FILE: &str = ".pocketuprc";

/// Load config from a `.pocketuprc` file in the given directory.
///
/// Returns defaults when the file is absent. A file that exists but does not
/// parse is an error: silently falling back could provision into the wrong
/// projects root.
pub fn load(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: Config = serde_yaml::from_str(&contents)
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(config)
}
