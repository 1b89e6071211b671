use crate::args::Cli;
use crate::types::ColorMode;
use anyhow::{Context, Result};
use keytree_engine::Glyphs;
use keytree_store::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SEPARATOR: &str = ":";
pub const CONFIG_ENV: &str = "KEYTREE_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit `--config` path
/// 2. KEYTREE_CONFIG environment variable
/// 3. `<config_dir>/keytree/config.toml`
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|dir| dir.join("keytree").join("config.toml"))
}

/// Persistent defaults, read from TOML. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub url: Option<String>,
    pub separator: Option<String>,
    pub wrap: Option<bool>,
    pub ascii: Option<bool>,
    pub color: Option<ColorMode>,
    pub connect_timeout_secs: Option<u64>,
}

impl Config {
    /// A missing file yields the defaults; an unreadable or invalid one is
    /// an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e.message()))
    }
}

/// Effective options after layering flags over the file over built-in
/// defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub store: StoreConfig,
    pub separator: String,
    pub patterns: Vec<String>,
    pub only_keys: bool,
    pub wrap: bool,
    pub glyphs: Glyphs,
    pub color: ColorMode,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        let mut store = StoreConfig::new(cli.url.clone().or(config.url).unwrap_or_else(|| {
            keytree_store::DEFAULT_URL.to_string()
        }));
        if let Some(secs) = config.connect_timeout_secs.filter(|s| *s > 0) {
            store = store.with_connect_timeout(Duration::from_secs(secs));
        }

        let ascii = cli.ascii || config.ascii.unwrap_or(false);

        Self {
            store,
            separator: cli
                .sep
                .clone()
                .or(config.separator)
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
            patterns: cli.patterns.clone(),
            only_keys: cli.only_keys,
            wrap: match (cli.wrap, cli.nowrap) {
                (true, _) => true,
                (_, true) => false,
                _ => config.wrap.unwrap_or(true),
            },
            glyphs: if ascii { Glyphs::ASCII } else { Glyphs::UNICODE },
            color: cli.color.or(config.color).unwrap_or_default(),
        }
    }

    /// Load the config file named by `cli` (or the default location) and
    /// layer the flags on top.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config = match resolve_config_path(cli.config.as_deref()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Config::load_from(&path)?
            }
            None => Config::default(),
        };
        Ok(Self::resolve(cli, config))
    }
}
