//! CLI tests for `sitescript` commands.
//!
//! Spawns the sitescript binary in a temp directory and checks exit codes,
//! stdout, and the files/catalog it produces.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};
use sitescript::exit_codes;
use sitescript::io::catalog::{FileCatalog, SiteDesignsService};
use sitescript::test_support::{list_script_json, write_fixture};

fn sitescript(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sitescript"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run sitescript")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone())
        .expect("utf-8 stdout")
        .trim()
        .to_string()
}

#[test]
fn filter_prints_filtered_content() {
    let temp = tempfile::tempdir().expect("tempdir");
    let raw = json!({
        "actions": [
            { "verb": "SetDescription", "description": "d" },
            { "verb": "AddSPView", "name": "v" },
            { "verb": "AddContentType", "name": "c" },
            { "verb": "AddNavLink", "url": "u" }
        ],
        "version": 1
    });
    write_fixture(temp.path(), "raw.json", &raw).expect("fixture");

    let output = sitescript(
        temp.path(),
        &["filter", "raw.json", "--no-content-types", "--no-nav-link"],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let value: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(
        value,
        json!({
            "version": 1,
            "actions": [
                { "verb": "SetDescription", "description": "d" },
                { "verb": "AddSPView", "name": "v" }
            ]
        })
    );
}

#[test]
fn export_writes_titled_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_fixture(temp.path(), "raw.json", &list_script_json()).expect("fixture");

    let output = sitescript(
        temp.path(),
        &[
            "export",
            "raw.json",
            "--title",
            "Contracts",
            "--description",
            "Contract library",
            "--output-dir",
            "out",
            "--no-views",
        ],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let path = temp.path().join("out").join("Contracts.json");
    assert!(stdout(&output).ends_with("Contracts.json"));

    let value: Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(value["Title"], json!("Contracts"));
    assert_eq!(value["Description"], json!("Contract library"));
    let nested = value["Content"]["actions"][0]["subactions"]
        .as_array()
        .expect("subactions");
    assert!(nested.iter().all(|action| {
        let verb = action["verb"].as_str().unwrap_or_default().to_lowercase();
        verb != "addspview" && verb != "removespview"
    }));
}

#[test]
fn config_policy_applies_without_flags() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_fixture(temp.path(), "raw.json", &list_script_json()).expect("fixture");
    fs::create_dir_all(temp.path().join(".sitescript")).expect("config dir");
    fs::write(
        temp.path().join(".sitescript/config.toml"),
        "[policy]\ninclude_nav_link = false\n",
    )
    .expect("config");

    let output = sitescript(temp.path(), &["filter", "raw.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let value: Value = serde_json::from_slice(&output.stdout).expect("json");
    let verbs: Vec<&str> = value["actions"]
        .as_array()
        .expect("actions")
        .iter()
        .filter_map(|action| action["verb"].as_str())
        .collect();
    assert_eq!(verbs, vec!["createSPList", "applyTheme"]);
}

#[test]
fn malformed_script_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_fixture(
        temp.path(),
        "raw.json",
        &json!({ "actions": [ { "description": "no verb" } ] }),
    )
    .expect("fixture");

    let output = sitescript(temp.path(), &["filter", "raw.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("schema validation failed"));
}

#[test]
fn save_then_associate_with_new_design() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_fixture(temp.path(), "raw.json", &list_script_json()).expect("fixture");

    let saved = sitescript(temp.path(), &["save", "raw.json", "--title", "Docs"]);
    assert_eq!(saved.status.code(), Some(exit_codes::OK));
    let script_id = stdout(&saved);
    assert!(!script_id.is_empty());

    let associated = sitescript(
        temp.path(),
        &[
            "associate",
            &script_id,
            "--list-title",
            "Documents",
            "--web-template",
            "communication-site",
        ],
    );
    assert_eq!(associated.status.code(), Some(exit_codes::OK));
    assert!(stdout(&associated).ends_with("Documents template"));

    let catalog = FileCatalog::new(temp.path().join(".sitescript/catalog.json"));
    let designs = catalog.site_designs().expect("designs");
    assert_eq!(designs.len(), 1);
    assert_eq!(designs[0].site_script_ids, Some(vec![script_id]));

    let listed = sitescript(temp.path(), &["designs"]);
    assert_eq!(listed.status.code(), Some(exit_codes::OK));
    assert!(stdout(&listed).contains("Documents template"));
}

#[test]
fn associate_unknown_design_exits_not_found() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = sitescript(temp.path(), &["associate", "script-1", "--design", "missing"]);
    assert_eq!(output.status.code(), Some(exit_codes::NOT_FOUND));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("site design 'missing' not found"), "{stderr}");
    assert!(!temp.path().join(".sitescript/catalog.json").exists());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = tempfile::tempdir().expect("tempdir");
    let first = sitescript(temp.path(), &["init"]);
    assert_eq!(first.status.code(), Some(exit_codes::OK));
    assert!(temp.path().join(".sitescript/config.toml").exists());

    let second = sitescript(temp.path(), &["init"]);
    assert_eq!(second.status.code(), Some(exit_codes::INVALID));

    let forced = sitescript(temp.path(), &["init", "--force"]);
    assert_eq!(forced.status.code(), Some(exit_codes::OK));
}
