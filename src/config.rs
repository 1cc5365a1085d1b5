use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub read_timeout_secs: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory that bounds all servable files.
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            read_timeout_secs: 30,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("www"),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `ATRIUM_CONFIG`
    /// (default `atrium.yaml`), falling back to defaults when the file is
    /// absent. `LISTEN` and `DOCUMENT_ROOT` environment variables override
    /// the file.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("ATRIUM_CONFIG").unwrap_or_else(|_| "atrium.yaml".to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(text) => serde_yaml::from_str(&text)
                .with_context(|| format!("invalid config file {path}"))?,
            Err(_) => Config::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("DOCUMENT_ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(text).context("invalid config")
    }
}
