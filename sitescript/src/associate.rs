//! Attach a stored site script to a site design.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::io::catalog::SiteDesignsService;
use crate::script::{SiteDesign, WebTemplate};

/// Which site design receives the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssociateTarget {
    Existing(String),
    New(NewSiteDesign),
}

/// Settings for a site design created during association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSiteDesign {
    pub title: String,
    pub description: String,
    pub web_template: WebTemplate,
}

impl NewSiteDesign {
    /// Design titled `"<list title> template"`.
    pub fn for_list(list_title: &str, web_template: WebTemplate) -> Self {
        Self {
            title: format!("{} template", list_title),
            description: String::new(),
            web_template,
        }
    }
}

/// Append `site_script_id` to the target design and save it.
///
/// A new design is created first and then read back, so the update goes
/// through the same path as for an existing design. The id is not appended
/// twice.
pub fn associate_site_script<S: SiteDesignsService>(
    service: &mut S,
    site_script_id: &str,
    target: &AssociateTarget,
) -> Result<SiteDesign> {
    let mut design = match target {
        AssociateTarget::Existing(id) => service
            .site_design(id)
            .with_context(|| format!("load site design {}", id))?,
        AssociateTarget::New(new) => {
            let created = service
                .save_site_design(SiteDesign {
                    id: String::new(),
                    title: new.title.clone(),
                    description: new.description.clone(),
                    web_template: new.web_template,
                    site_script_ids: None,
                    preview_image_url: None,
                    preview_image_alt_text: None,
                })
                .context("create site design")?;
            debug!(id = %created.id, "site design created for association");
            service
                .site_design(&created.id)
                .with_context(|| format!("load site design {}", created.id))?
        }
    };

    let ids = design.site_script_ids.get_or_insert_with(Vec::new);
    if !ids.iter().any(|id| id == site_script_id) {
        ids.push(site_script_id.to_string());
    }

    let saved = service
        .save_site_design(design)
        .context("update site design")?;
    info!(design = %saved.id, script = %site_script_id, "site script associated");
    Ok(saved)
}
