//! Test-only helpers for building actions, scripts, and fixture files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value, json};

use crate::core::policy::PolicySet;
use crate::script::{Action, ScriptContent};

/// Leaf action with no parameters.
pub fn action(verb: &str) -> Action {
    Action::new(verb)
}

/// Container action holding `children`.
pub fn container(verb: &str, children: Vec<Action>) -> Action {
    Action {
        subactions: Some(children),
        ..Action::new(verb)
    }
}

/// Policy with every category turned off.
pub fn closed_policy() -> PolicySet {
    PolicySet {
        include_views: false,
        include_content_types: false,
        include_nav_link: false,
        include_description: false,
    }
}

/// Content with deterministic metadata and the given actions.
pub fn content_with(actions: Vec<Action>) -> ScriptContent {
    let mut metadata = Map::new();
    metadata.insert(
        "$schema".to_string(),
        json!("https://developer.microsoft.com/json-schemas/sp/site-design-script-actions.schema.json"),
    );
    metadata.insert("version".to_string(), json!(1));
    ScriptContent { metadata, actions }
}

/// Verbs of `actions`, top level only.
pub fn verbs(actions: &[Action]) -> Vec<&str> {
    actions.iter().map(|action| action.verb.as_str()).collect()
}

/// Raw content as returned for a typical document library.
pub fn list_script_json() -> Value {
    json!({
        "$schema": "schema.json",
        "actions": [
            {
                "verb": "createSPList",
                "listName": "Documents",
                "templateType": 101,
                "subactions": [
                    { "verb": "setDescription", "description": "Team documents" },
                    { "verb": "addSiteColumn", "internalName": "Owner" },
                    { "verb": "addContentType", "name": "Contract" },
                    { "verb": "addSPView", "name": "All Documents", "viewFields": ["DocIcon", "LinkFilename"] },
                    { "verb": "removeSPView", "name": "Old View" }
                ]
            },
            { "verb": "addNavLink", "url": "Shared Documents", "displayName": "Documents" },
            { "verb": "applyTheme", "themeName": "Blue" }
        ],
        "bindata": {},
        "version": 1
    })
}

/// Write `value` as JSON under `dir` and return the path.
pub fn write_fixture(dir: &Path, name: &str, value: &Value) -> Result<PathBuf> {
    let path = dir.join(name);
    let payload = serde_json::to_string_pretty(value).context("serialize fixture")?;
    fs::write(&path, payload).with_context(|| format!("write fixture {}", path.display()))?;
    Ok(path)
}
