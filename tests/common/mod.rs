use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PLUGIN_NAME: &str = "LumeLobby";
pub const PLUGIN_VERSION: &str = "0.1.0";
pub const ARCHIVE_BYTES: &[u8] = b"PK\x03\x04lumelobby-fixture-archive-bytes";

pub struct TestEnv {
    _tmp: TempDir,
    pub project: PathBuf,
    pub server: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let project = make_fixture_project(tmp.path());
        let server = tmp.path().join("server");
        fs::create_dir_all(server.join("plugins")).expect("create plugins dir");
        Self {
            _tmp: tmp,
            project,
            server,
        }
    }

    /// Base command with an isolated environment and the fixture
    /// project selected. Callers add the subcommand and flags.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("lumedeploy");
        cmd.env_remove("ISKYWARS_SERVER_DIR")
            .arg("--project-dir")
            .arg(&self.project);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Like `run_json` but pointed at the fixture server via the flag.
    pub fn run_json_server(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--server-dir")
            .arg(&self.server)
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Run an expected-failure command and return the error envelope.
    pub fn run_json_err(&self, server_dir: Option<&Path>, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        cmd.arg("--json");
        if let Some(dir) = server_dir {
            cmd.arg("--server-dir").arg(dir);
        }
        let out = cmd
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }

    pub fn plugins_dir(&self) -> PathBuf {
        self.server.join("plugins")
    }

    pub fn archive_path(&self) -> PathBuf {
        self.project
            .join("build/libs")
            .join(format!("{}-{}.jar", PLUGIN_NAME, PLUGIN_VERSION))
    }
}

fn make_fixture_project(base: &Path) -> PathBuf {
    let project = base.join("project");

    fs::create_dir_all(project.join(".lume")).expect("create .lume");
    fs::create_dir_all(project.join("build/libs")).expect("create build/libs");
    fs::create_dir_all(project.join("src/main/resources")).expect("create resources dir");

    fs::write(
        project.join(".lume/project.json"),
        serde_json::to_string_pretty(&serde_json::json!({
            "name": PLUGIN_NAME,
            "version": PLUGIN_VERSION,
            "group": "de.felix.lumelobby",
            "description": "Lobby plugin for the ISkyWars network"
        }))
        .expect("serialize descriptor"),
    )
    .expect("write descriptor");

    fs::write(
        project
            .join("build/libs")
            .join(format!("{}-{}.jar", PLUGIN_NAME, PLUGIN_VERSION)),
        ARCHIVE_BYTES,
    )
    .expect("write fixture archive");

    fs::write(
        project.join("src/main/resources/paper-plugin.yml"),
        "name: ${name}\nversion: '${version}'\nmain: de.felix.lumelobby.LumeLobbyPlugin\napi-version: '1.21'\n",
    )
    .expect("write template");

    project
}
