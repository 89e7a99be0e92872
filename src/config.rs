use crate::feed::client::{DEFAULT_BASE_URL, DEFAULT_TOKEN_ENV};
use crate::render::Limit;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_RELATIVE_PATH: &str = "github-activity/config.toml";
const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub token_env: String,
    pub limit: Option<Limit>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            limit: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawConfig {
    version: Option<u32>,
    api: Option<RawApiConfig>,
    display: Option<RawDisplayConfig>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawApiConfig {
    base_url: Option<String>,
    token_env: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawDisplayConfig {
    limit: Option<i64>,
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.trim().is_empty()
    {
        return Some(PathBuf::from(xdg).join(CONFIG_RELATIVE_PATH));
    }
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join(CONFIG_RELATIVE_PATH))
}

pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} does not exist", path.display());
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(AppConfig::default()),
        },
    };
    load_config_file(&path)
}

pub fn load_config_file(path: &Path) -> Result<AppConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let parsed: RawConfig =
        toml::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    validate_config(parsed, path)
}

fn validate_config(raw: RawConfig, path: &Path) -> Result<AppConfig> {
    let version = raw
        .version
        .ok_or_else(|| anyhow::anyhow!("{} missing required `version`", path.display()))?;
    if version != SUPPORTED_VERSION {
        bail!(
            "{} has unsupported version {version}; expected version = {SUPPORTED_VERSION}",
            path.display()
        );
    }

    let mut cfg = AppConfig::default();
    if let Some(api) = raw.api {
        if let Some(base_url) = sanitize_optional(api.base_url) {
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                bail!(
                    "{} has invalid `[api].base_url = \"{base_url}\"`; expected an http(s) URL",
                    path.display()
                );
            }
            cfg.base_url = base_url;
        }
        if let Some(token_env) = sanitize_optional(api.token_env) {
            cfg.token_env = token_env;
        }
    }
    cfg.limit = raw.display.and_then(|d| d.limit).map(Limit::clamped);
    Ok(cfg)
}

fn sanitize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
