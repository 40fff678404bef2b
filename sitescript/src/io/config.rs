//! Sitescript configuration stored at `.sitescript/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::policy::PolicySet;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".sitescript/config.toml";

/// Sitescript configuration (TOML).
///
/// Missing fields fall back to defaults, so an empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteScriptConfig {
    /// Directory exported site script files are written to.
    pub output_dir: PathBuf,

    /// JSON file backing the tenant catalog of site scripts and site designs.
    pub catalog_path: PathBuf,

    /// `Version` stamped on built site scripts.
    pub script_version: u32,

    /// Inclusion defaults; CLI `--no-*` flags switch individual categories off.
    pub policy: PolicySet,
}

impl Default for SiteScriptConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            catalog_path: PathBuf::from(".sitescript/catalog.json"),
            script_version: 1,
            policy: PolicySet::default(),
        }
    }
}

impl SiteScriptConfig {
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(anyhow!("output_dir must not be empty"));
        }
        if self.catalog_path.as_os_str().is_empty() {
            return Err(anyhow!("catalog_path must not be empty"));
        }
        if self.script_version == 0 {
            return Err(anyhow!("script_version must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SiteScriptConfig::default()`.
pub fn load_config(path: &Path) -> Result<SiteScriptConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = SiteScriptConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SiteScriptConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SiteScriptConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
