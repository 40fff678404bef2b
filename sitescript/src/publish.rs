//! Save a built site script to the tenant catalog.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::export::{TemplateSettings, build_site_script};
use crate::io::catalog::SiteDesignsService;
use crate::io::script_store::load_script_content;

/// Outcome of `sitescript save`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    pub site_script_id: String,
    pub title: String,
    pub action_count: usize,
}

/// Load raw content from `input`, build the site script, and store it through
/// `service`. The returned id is what a site design references.
pub fn publish_site_script<S: SiteDesignsService>(
    service: &mut S,
    input: &Path,
    settings: &TemplateSettings,
) -> Result<PublishOutcome> {
    let content = load_script_content(input)?;
    let script = build_site_script(&content, settings);
    let site_script_id = service
        .save_site_script(&script)
        .context("save site script")?;
    info!(id = %site_script_id, "site script published");
    Ok(PublishOutcome {
        site_script_id,
        title: script.title,
        action_count: script.content.actions.len(),
    })
}
