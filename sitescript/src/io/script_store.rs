//! Load raw site script content and write site script JSON files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::script::ScriptContent;

const CONTENT_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/site_script/v1.schema.json"
));

/// Load site script content from disk, validating it against the content schema.
///
/// Every action must carry a string `verb`; a document that does not is rejected
/// here with the schema's error messages rather than reaching the filter.
pub fn load_script_content(path: &Path) -> Result<ScriptContent> {
    debug!(path = %path.display(), "loading script content");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read script {}", path.display()))?;
    parse_script_content(&contents).with_context(|| format!("load script {}", path.display()))
}

/// Parse and validate site script content from a JSON string.
pub fn parse_script_content(raw: &str) -> Result<ScriptContent> {
    let value: Value = serde_json::from_str(raw).context("parse script json")?;
    validate_schema(&value)?;
    let content: ScriptContent =
        serde_json::from_value(value).context("deserialize script content")?;
    debug!(actions = content.actions.len(), "script content parsed");
    Ok(content)
}

/// Serialize `value` as JSON indented with four spaces, plus a trailing newline.
pub fn to_script_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("serialize script json")?;
    let mut payload = String::from_utf8(buf).context("script json is not utf-8")?;
    payload.push('\n');
    Ok(payload)
}

/// Write `value` to `path` as four-space indented JSON, creating parent directories.
pub fn write_script_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let payload = to_script_json(value)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    debug!(path = %path.display(), bytes = payload.len(), "writing script json");
    fs::write(path, payload).with_context(|| format!("write {}", path.display()))
}

fn validate_schema(instance: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(CONTENT_SCHEMA).context("parse content schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(instance) {
        let messages = compiled
            .iter_errors(instance)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "script schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}
