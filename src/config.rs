//! Server configuration.
//!
//! The binary reads a YAML file into [`Config`] and turns it into the
//! immutable [`ServerConfig`] the HTTP core consumes.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Deserialize;
use url::Url;

const DEFAULT_CONFIG_PATH: &str = "tinyhttpd.yaml";

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

/// Contents of the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory whose files are served.
    pub root_dir: PathBuf,

    /// Optional correlated-resources file, see [`parse_resource_map`].
    #[serde(default)]
    pub resources_file: Option<PathBuf>,

    /// Inline redirects; these win over `resources_file` entries.
    #[serde(default)]
    pub redirects: HashMap<String, String>,
}

/// What the HTTP core needs: the root directory and the redirect map.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub root_dir: PathBuf,
    pub redirects: HashMap<String, String>,
}

impl ServerConfig {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            redirects: HashMap::new(),
        }
    }

    pub fn redirect(mut self, path: impl Into<String>, url: impl Into<String>) -> Self {
        self.redirects.insert(path.into(), url.into());
        self
    }
}

impl Config {
    /// Loads the file named by `TINYHTTPD_CONFIG`, or `tinyhttpd.yaml`.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("TINYHTTPD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_file(path)
    }

    /// Loads a YAML file. `LISTEN` in the environment overrides `listen_addr`.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let mut cfg = Self::from_yaml(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.listen_addr = listen_addr;
        }

        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Validates the configuration and builds the [`ServerConfig`].
    ///
    /// `root_dir` must be an existing directory and every redirect target
    /// an absolute URL.
    pub fn server_config(&self) -> anyhow::Result<ServerConfig> {
        if !self.root_dir.is_dir() {
            bail!("root_dir {} is not a directory", self.root_dir.display());
        }

        let mut redirects = match &self.resources_file {
            Some(path) => load_resource_map(path)?,
            None => HashMap::new(),
        };
        redirects.extend(self.redirects.clone());

        for (path, target) in &redirects {
            Url::parse(target).with_context(|| format!("invalid redirect target for {path}: {target}"))?;
        }

        Ok(ServerConfig {
            root_dir: self.root_dir.clone(),
            redirects,
        })
    }
}

pub fn load_resource_map(path: &Path) -> anyhow::Result<HashMap<String, String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read resources file {}", path.display()))?;

    parse_resource_map(&text).with_context(|| format!("invalid resources file {}", path.display()))
}

/// Parses a correlated-resources listing.
///
/// Each non-blank line is `<resource-path> <host> <port>` and maps the path
/// to `http://<host>:<port><resource-path>`. The first entry for a path wins.
pub fn parse_resource_map(text: &str) -> anyhow::Result<HashMap<String, String>> {
    let mut map = HashMap::new();

    for (idx, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();

        let (resource, host, port) = match fields.as_slice() {
            [] => continue,
            [resource, host, port] => (*resource, *host, *port),
            _ => bail!("line {}: expected `<resource> <host> <port>`", idx + 1),
        };

        let port: u16 = port
            .parse()
            .with_context(|| format!("line {}: invalid port {port:?}", idx + 1))?;

        map.entry(resource.to_string())
            .or_insert_with(|| format!("http://{host}:{port}{resource}"));
    }

    Ok(map)
}
