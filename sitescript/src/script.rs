//! Serde model for site script content, the site script envelope, and site designs.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One provisioning step.
///
/// `verb` is required; everything other than `verb` and `subactions` is kept in
/// `parameters` untouched, in its original field order. A null `subactions` is
/// read as absent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Action {
    pub verb: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subactions: Option<Vec<Action>>,
    #[serde(flatten)]
    pub parameters: Map<String, Value>,
}

impl Action {
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            subactions: None,
            parameters: Map::new(),
        }
    }
}

/// Site script content: the action list plus opaque metadata (`$schema`,
/// `version`, `bindata`, ...). Absent or null `actions` reads as empty.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ScriptContent {
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub actions: Vec<Action>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Action>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Action>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Site script envelope as stored in the tenant or written to disk.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SiteScript {
    pub title: String,
    pub description: String,
    pub version: u32,
    pub content: ScriptContent,
}

/// Base web template a site design applies to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum WebTemplate {
    #[serde(rename = "64")]
    TeamSite,
    #[serde(rename = "68")]
    CommunicationSite,
}

/// Site design ("site template") that runs a list of site scripts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SiteDesign {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub web_template: WebTemplate,
    #[serde(default)]
    pub site_script_ids: Option<Vec<String>>,
    #[serde(default)]
    pub preview_image_url: Option<String>,
    #[serde(default)]
    pub preview_image_alt_text: Option<String>,
}
