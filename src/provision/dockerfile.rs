use std::io::Write;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::config::Config;

const TEMPLATE: &str = r#"FROM {base}

RUN apk add --no-cache ca-certificates unzip wget

RUN wget -q {url} -O /tmp/pocketbase.zip \
 && unzip /tmp/pocketbase.zip -d /pb/ \
 && rm /tmp/pocketbase.zip

EXPOSE {port}

CMD ["/pb/pocketbase", "serve", "--http=0.0.0.0:{port}"]
"#;

/// Download URL for the pinned release archive.
pub fn release_url(version: &str) -> String {
    format!(
        "https://github.com/pocketbase/pocketbase/releases/download/v{version}/pocketbase_{version}_linux_amd64.zip"
    )
}

/// Render the Dockerfile for the pinned PocketBase release.
pub fn render(cfg: &Config) -> String {
    TEMPLATE
        .replace("{base}", &cfg.base_image)
        .replace("{url}", &release_url(&cfg.pocketbase_version))
        .replace("{port}", &cfg.container_port.to_string())
}

/// Write the rendered Dockerfile to a temporary file.
///
/// The file lives as long as the returned handle; dropping it removes the
/// file, which is the cleanup step at the end of a run.
pub fn write_temp(cfg: &Config) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("pocketup-Dockerfile.")
        .tempfile()
        .context("failed to create temporary Dockerfile")?;
    file.write_all(render(cfg).as_bytes())
        .context("failed to write temporary Dockerfile")?;
    file.flush()?;
    Ok(file)
}
