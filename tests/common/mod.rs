use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub roster: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let roster = tmp.path().join("roster.json");
        fs::write(
            &roster,
            serde_json::to_string_pretty(&fixture_people()).expect("serialize fixture"),
        )
        .expect("write fixture roster");

        Self {
            _tmp: tmp,
            home,
            roster,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("roster").expect("roster binary");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--source")
            .arg(self.roster.to_str().expect("roster path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn replace_roster(&self, people: &Value) {
        fs::write(
            &self.roster,
            serde_json::to_string_pretty(people).expect("serialize roster"),
        )
        .expect("rewrite fixture roster");
    }
}

pub fn fixture_people() -> Value {
    serde_json::json!([
        { "id": 1, "name": "Alice", "age": 25, "city": "New York" },
        { "id": 2, "name": "Bob", "age": 30, "city": "London" },
        { "id": 3, "name": "Alice", "age": 27, "city": "Paris" },
        { "id": 4, "name": "Charlie", "age": 28, "city": "Berlin" }
    ])
}
