//! Tenant catalog of stored site scripts and site designs.
//!
//! [`SiteDesignsService`] is the seam the orchestration code talks to.
//! [`FileCatalog`] backs it with a single JSON file so the save/associate flow
//! works offline and in tests.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::script::{SiteDesign, SiteScript};

/// Remote store for site scripts and site designs.
pub trait SiteDesignsService {
    /// All site designs, in catalog order.
    fn site_designs(&self) -> Result<Vec<SiteDesign>>;

    /// One site design by id; errors when it does not exist.
    fn site_design(&self, id: &str) -> Result<SiteDesign>;

    /// Store a site script and return its new id.
    fn save_site_script(&mut self, script: &SiteScript) -> Result<String>;

    /// Create (`id` empty) or update a site design; returns the stored design.
    fn save_site_design(&mut self, design: SiteDesign) -> Result<SiteDesign>;
}

/// Returned (inside `anyhow::Error`) when a site design id is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDesignNotFound(pub String);

impl fmt::Display for SiteDesignNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "site design '{}' not found", self.0)
    }
}

impl std::error::Error for SiteDesignNotFound {}

/// True if `err` wraps a [`SiteDesignNotFound`], through any added context.
pub fn is_site_design_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<SiteDesignNotFound>().is_some()
}

/// Site script as kept in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StoredSiteScript {
    pub id: String,
    #[serde(flatten)]
    pub script: SiteScript,
}

/// On-disk catalog layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogData {
    pub site_scripts: Vec<StoredSiteScript>,
    pub site_designs: Vec<SiteDesign>,
}

/// File-backed [`SiteDesignsService`]. A missing file is an empty catalog.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole catalog.
    pub fn load(&self) -> Result<CatalogData> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "catalog missing, treating as empty");
            return Ok(CatalogData::default());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("read catalog {}", self.path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parse catalog {}", self.path.display()))
    }

    fn store(&self, data: &CatalogData) -> Result<()> {
        let mut buf = serde_json::to_string_pretty(data).context("serialize catalog")?;
        buf.push('\n');
        write_atomic(&self.path, &buf)
    }
}

impl SiteDesignsService for FileCatalog {
    fn site_designs(&self) -> Result<Vec<SiteDesign>> {
        Ok(self.load()?.site_designs)
    }

    fn site_design(&self, id: &str) -> Result<SiteDesign> {
        self.load()?
            .site_designs
            .into_iter()
            .find(|design| design.id == id)
            .ok_or_else(|| SiteDesignNotFound(id.to_string()).into())
    }

    fn save_site_script(&mut self, script: &SiteScript) -> Result<String> {
        let mut data = self.load()?;
        let id = Uuid::new_v4().to_string();
        data.site_scripts.push(StoredSiteScript {
            id: id.clone(),
            script: script.clone(),
        });
        self.store(&data)?;
        info!(id = %id, title = %script.title, "site script saved");
        Ok(id)
    }

    fn save_site_design(&mut self, mut design: SiteDesign) -> Result<SiteDesign> {
        let mut data = self.load()?;
        if design.id.is_empty() {
            design.id = Uuid::new_v4().to_string();
            data.site_designs.push(design.clone());
            info!(id = %design.id, title = %design.title, "site design created");
        } else {
            let existing = data
                .site_designs
                .iter_mut()
                .find(|stored| stored.id == design.id)
                .ok_or_else(|| SiteDesignNotFound(design.id.clone()))?;
            *existing = design.clone();
            info!(id = %design.id, title = %design.title, "site design updated");
        }
        self.store(&data)?;
        Ok(design)
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp catalog {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace catalog {}", path.display()))?;
    Ok(())
}
