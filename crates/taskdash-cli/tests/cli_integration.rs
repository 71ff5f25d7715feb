use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::tempdir;

const UNREACHABLE_API: &str = "http://127.0.0.1:9/api";

/// Runs the binary with config lookup pointed into `home` so the user's own
/// config file and environment never leak in.
fn taskdash(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("taskdash").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("TASKDASH_API_URL")
        .env_remove("TASKDASH_SETTINGS")
        .env_remove("TASKDASH_DEBUG_LOG");
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

mod settings_tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("settings.json");
        let file = file.to_str().unwrap();

        let output = taskdash(dir.path())
            .args([
                "--settings",
                file,
                "settings",
                "set",
                "--key",
                "generalSettings",
                "--value",
                r#"{"theme":"dark"}"#,
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let json = parse_json_output(&output);
        assert!(json["success"].as_bool().unwrap());
        assert_eq!(json["data"]["value"]["theme"], "dark");
        assert_eq!(json["data"]["value"]["language"], "en");

        let output = taskdash(dir.path())
            .args(["--settings", file, "settings", "get", "--key", "generalSettings"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        assert_eq!(parse_json_output(&output)["data"]["value"]["theme"], "dark");

        let output = taskdash(dir.path())
            .args(["--settings", file, "settings", "reset", "--key", "generalSettings"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        assert_eq!(parse_json_output(&output)["data"]["value"]["theme"], "light");
    }

    #[test]
    fn test_settings_show_defaults_without_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("missing.json");

        let output = taskdash(dir.path())
            .args(["--settings", file.to_str().unwrap(), "settings", "show"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        let data = &json["data"];
        assert!(data["jiraYamlConfig"]
            .as_str()
            .unwrap()
            .starts_with("# JIRA Configuration"));
        assert_eq!(data["jiraFormConfig"]["defaultProject"], "PROJ");
        assert_eq!(data["notificationSettings"]["projectUpdates"], false);
        assert!(!file.exists());
    }

    #[test]
    fn test_settings_list_shows_only_stored_keys() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("settings.json");
        let file = file.to_str().unwrap();

        let output = taskdash(dir.path())
            .args(["--settings", file, "settings", "list"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        assert_eq!(parse_json_output(&output)["data"], serde_json::json!({}));

        taskdash(dir.path())
            .args(["--settings", file, "settings", "set", "--key", "jiraYamlConfig", "--value", "jira: {}"])
            .assert()
            .success();

        let output = taskdash(dir.path())
            .args(["--settings", file, "settings", "list"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        assert_eq!(
            parse_json_output(&output)["data"],
            serde_json::json!({ "jiraYamlConfig": "jira: {}" })
        );
    }

    #[test]
    fn test_settings_env_var_selects_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("from-env.json");

        taskdash(dir.path())
            .env("TASKDASH_SETTINGS", &file)
            .args(["settings", "set", "--key", "jiraYamlConfig", "--value", "jira: {}"])
            .assert()
            .success();

        let stored: Value = serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(stored["jiraYamlConfig"], "jira: {}");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("settings.json");

        taskdash(dir.path())
            .args(["--settings", file.to_str().unwrap(), "settings", "get", "--key", "colors"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Unknown settings key"));
    }

    #[test]
    fn test_malformed_value_is_not_stored() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("settings.json");

        taskdash(dir.path())
            .args([
                "--settings",
                file.to_str().unwrap(),
                "settings",
                "set",
                "--key",
                "notificationSettings",
                "--value",
                "not json",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid value"));
        assert!(!file.exists());
    }
}

mod api_tests {
    use super::*;

    #[test]
    fn test_unreachable_server_reports_json_error() {
        let dir = tempdir().unwrap();

        let output = taskdash(dir.path())
            .args(["--api-url", UNREACHABLE_API, "task", "list"])
            .assert()
            .failure()
            .code(1)
            .get_output()
            .stderr
            .clone();

        let stderr = String::from_utf8_lossy(&output);
        let envelope = stderr
            .lines()
            .find(|line| line.starts_with('{'))
            .expect("error envelope");
        let json: Value = serde_json::from_str(envelope).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("Connection error"));
    }

    #[test]
    fn test_invalid_status_is_rejected() {
        let dir = tempdir().unwrap();

        taskdash(dir.path())
            .args(["--api-url", UNREACHABLE_API, "task", "status", "--id", "1", "--status", "bogus"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid status 'bogus'"));
    }

    #[test]
    fn test_declined_delete_makes_no_request() {
        let dir = tempdir().unwrap();

        taskdash(dir.path())
            .args(["--api-url", UNREACHABLE_API, "task", "delete", "--id", "3"])
            .write_stdin("n\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Deletion cancelled"))
            .stderr(predicate::str::contains("Connection error").not());
    }

    #[test]
    fn test_blank_import_ticket_is_rejected() {
        let dir = tempdir().unwrap();

        taskdash(dir.path())
            .args(["--api-url", UNREACHABLE_API, "import", "--ticket", "  "])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Ticket id is required"));
    }
}

#[test]
fn test_completions_generate() {
    let dir = tempdir().unwrap();

    taskdash(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("taskdash"));
}
