//! Build site scripts from raw list content and export them to files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::invariants::check_filtered;
use crate::core::policy::PolicySet;
use crate::core::transform::transform_content;
use crate::io::script_store::{load_script_content, write_script_json};
use crate::script::{ScriptContent, SiteScript};

/// File name used when the template title is blank.
pub const DEFAULT_FILE_STEM: &str = "site-script";

/// Operator-supplied settings for one site script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSettings {
    pub title: String,
    pub description: String,
    pub version: u32,
    pub policy: PolicySet,
}

/// Filter `content` under the settings' policy and wrap it in a site script.
pub fn build_site_script(content: &ScriptContent, settings: &TemplateSettings) -> SiteScript {
    let processed = transform_content(content, &settings.policy);
    debug_assert!(
        check_filtered(&content.actions, &processed.actions, &settings.policy).is_empty(),
        "filtered actions must be an in-order subsequence of the input"
    );
    debug!(
        before = content.actions.len(),
        after = processed.actions.len(),
        policy = ?settings.policy,
        "site script content filtered"
    );
    SiteScript {
        title: settings.title.clone(),
        description: settings.description.clone(),
        version: settings.version,
        content: processed,
    }
}

/// Load raw content from `input`, build the site script, and write it under
/// `output_dir`. Returns the written path.
pub fn export_to_file(
    input: &Path,
    output_dir: &Path,
    settings: &TemplateSettings,
) -> Result<PathBuf> {
    let content = load_script_content(input)?;
    let script = build_site_script(&content, settings);
    let path = output_dir.join(file_name_for(&settings.title));
    write_script_json(&path, &script).context("export site script")?;
    info!(path = %path.display(), "site script exported");
    Ok(path)
}

/// `<title>.json`, or `site-script.json` for a blank title. Characters that are
/// not allowed in file names are replaced with `_`.
pub fn file_name_for(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return format!("{}.json", DEFAULT_FILE_STEM);
    }
    let stem: String = trimmed
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            ch if ch.is_control() => '_',
            ch => ch,
        })
        .collect();
    format!("{}.json", stem)
}
