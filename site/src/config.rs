use anyhow::Context;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output, served at `/`.
    pub dist: PathBuf,
    pub assets: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(".."); // = workspace root

        let port = match lookup("SITE_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("SITE_PORT must be a port number, got {raw:?}"))?,
            None => 3000,
        };

        Ok(Self {
            host: lookup("SITE_HOST").unwrap_or_else(|| "127.0.0.1".to_owned()),
            port,
            dist: lookup("SITE_DIST").map(PathBuf::from).unwrap_or_else(|| root.join("dist")),
            assets: lookup("SITE_ASSETS").map(PathBuf::from).unwrap_or_else(|| root.join("assets")),
        })
    }
}
