//! CLI tests driving the `pl` binary against a dataset in a temporary directory.
//!
//! Every invocation gets its own config path and dataset path through the
//! process environment, so tests never touch the user's files.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const DATASET_JSON: &str = r##"{
    "projects": [
        { "id": "prj-1", "name": "Apollo", "description": "Launch platform rebuild",
          "departmentId": "dept-eng", "leadId": "per-ana", "startDate": "2024-03-01", "status": "Active" },
        { "id": "prj-2", "name": "Zeus", "description": "Storage migration",
          "departmentId": "dept-ops", "leadId": "per-bao", "startDate": "2023-11-15", "status": "Done" },
        { "id": "prj-3", "name": "Apollo Mobile", "description": "Companion app",
          "departmentId": "dept-gone", "leadId": "per-gone", "startDate": "Q3 2024", "status": "On Hold" }
    ],
    "departments": [
        { "id": "dept-eng", "name": "Engineering", "color": "#3b82f6" },
        { "id": "dept-ops", "name": "Operations", "color": "#10b981" }
    ],
    "personnel": [
        { "id": "per-ana", "name": "Ana", "role": "Program Manager" },
        { "id": "per-bao", "name": "Bao", "role": "Tech Lead" }
    ]
}"##;

struct Sandbox {
    dir: TempDir,
    data_path: PathBuf,
    config_path: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create sandbox");
        let data_path = dir.path().join("dataset.json");
        let config_path = dir.path().join("config").join("config.toml");
        fs::write(&data_path, DATASET_JSON).expect("failed to write dataset");
        Self {
            dir,
            data_path,
            config_path,
        }
    }

    fn pl(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_pl"))
            .args(["--no-color", "--data"])
            .arg(&self.data_path)
            .args(args)
            .env("PL_CONFIG", &self.config_path)
            .env_remove("PL_DATA")
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to run pl")
    }

    fn json(&self, args: &[&str]) -> Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        let output = self.pl(&full);
        assert!(output.status.success(), "{}", stderr(&output));
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn names(value: &Value) -> Vec<String> {
    value["projects"]
        .as_array()
        .expect("projects array")
        .iter()
        .map(|p| p["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_list_without_filters_shows_everything_in_order() {
    let sandbox = Sandbox::new();
    let value = sandbox.json(&["list"]);

    assert_eq!(value["count"], 3);
    assert_eq!(names(&value), ["Apollo", "Zeus", "Apollo Mobile"]);
}

#[test]
fn test_no_subcommand_lists() {
    let sandbox = Sandbox::new();
    let output = sandbox.pl(&[]);

    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with("Project"));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_search_and_status_combine() {
    let sandbox = Sandbox::new();

    let value = sandbox.json(&["list", "--search", "APOLLO"]);
    assert_eq!(names(&value), ["Apollo", "Apollo Mobile"]);

    let value = sandbox.json(&["list", "--search", "apollo", "--status", "Active"]);
    assert_eq!(names(&value), ["Apollo"]);
    assert_eq!(value["filters"]["status"], "Active");
}

#[test]
fn test_department_and_lead_by_name() {
    let sandbox = Sandbox::new();

    let value = sandbox.json(&["list", "--department", "operations"]);
    assert_eq!(names(&value), ["Zeus"]);
    assert_eq!(value["filters"]["department"], "dept-ops");

    let value = sandbox.json(&["list", "--lead", "per-ana"]);
    assert_eq!(names(&value), ["Apollo"]);
}

#[test]
fn test_unresolved_references_render_placeholder() {
    let sandbox = Sandbox::new();
    let output = sandbox.pl(&["list", "--status", "On Hold"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    let row = text.lines().nth(1).expect("one row");
    assert!(row.contains("Apollo Mobile"));
    assert_eq!(row.matches("N/A").count(), 2);
}

#[test]
fn test_empty_state_message() {
    let sandbox = Sandbox::new();
    let output = sandbox.pl(&["list", "--search", "hermes"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "No matching projects found.\n");

    let value = sandbox.json(&["list", "--search", "hermes"]);
    assert_eq!(value["count"], 0);
}

#[test]
fn test_invalid_status_exit_code() {
    let sandbox = Sandbox::new();
    let output = sandbox.pl(&["--json", "list", "--status", "active"]);

    assert_eq!(output.status.code(), Some(1));
    let error: Value = serde_json::from_slice(&output.stderr).expect("stderr is not JSON");
    assert_eq!(error["error"]["code"], "INVALID_FILTER");
    assert!(error["error"]["message"]
        .as_str()
        .unwrap_or_default()
        .contains("On Hold"));
}

#[test]
fn test_unknown_department_suggests() {
    let sandbox = Sandbox::new();
    let output = sandbox.pl(&["list", "--department", "Enginering"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Did you mean 'Engineering'?"));
}

#[test]
fn test_missing_dataset_exit_code() {
    let sandbox = Sandbox::new();
    let output = Command::new(env!("CARGO_BIN_EXE_pl"))
        .args(["--data"])
        .arg(sandbox.dir.path().join("missing.json"))
        .arg("list")
        .env("PL_CONFIG", &sandbox.config_path)
        .output()
        .expect("failed to run pl");

    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_options_lists_choices() {
    let sandbox = Sandbox::new();
    let value = sandbox.json(&["options"]);

    assert_eq!(value["statuses"][0]["value"], "all");
    assert_eq!(value["statuses"].as_array().map(Vec::len), Some(6));
    assert_eq!(value["departments"][1]["value"], "dept-eng");
    assert_eq!(value["personnel"][2]["label"], "Bao");
}

#[test]
fn test_config_set_then_show() {
    let sandbox = Sandbox::new();

    let output = sandbox.pl(&["config", "set", "output.description_width", "12"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(sandbox.config_path.exists());

    let value = sandbox.json(&["config", "show"]);
    assert_eq!(value["config"]["output"]["description_width"], 12);

    let output = sandbox.pl(&["list"]);
    assert!(stdout(&output).contains("Launch pl..."));
}

#[test]
fn test_config_rejects_unknown_key() {
    let sandbox = Sandbox::new();
    let output = sandbox.pl(&["config", "set", "theme", "dark"]);

    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_data_path_from_config() {
    let sandbox = Sandbox::new();
    let data = sandbox.data_path.to_string_lossy().into_owned();

    let output = sandbox.pl(&["config", "set", "data_path", &data]);
    assert!(output.status.success(), "{}", stderr(&output));

    let output = Command::new(env!("CARGO_BIN_EXE_pl"))
        .args(["--json", "list"])
        .env("PL_CONFIG", &sandbox.config_path)
        .env_remove("PL_DATA")
        .output()
        .expect("failed to run pl");
    assert!(output.status.success(), "{}", stderr(&output));
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(value["count"], 3);
}

#[test]
fn test_verbose_traces_config_parse_failure() {
    let sandbox = Sandbox::new();
    fs::create_dir_all(sandbox.config_path.parent().expect("config dir")).expect("mkdir");
    fs::write(&sandbox.config_path, "version = \"one\"").expect("write config");

    let output = sandbox.pl(&["--verbose", "list"]);

    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("config parse failed"), "{}", stderr(&output));
}
