//! Sandbox setup utilities for CLI tests
//!
//! Every [`TestSandbox`] owns a temporary directory holding its session file,
//! config file and XDG directories, so tests never touch the user's real
//! cache or configuration.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated session for one test. The TempDir must be kept alive for the
/// duration of the test to prevent cleanup.
pub struct TestSandbox {
    pub temp_dir: TempDir,
    pub session: PathBuf,
    pub config: PathBuf,
}

impl TestSandbox {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The binary with color disabled and the session/config pinned to the sandbox
    pub fn cmd(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("git-sandbox")?;
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config-home"))
            .env("XDG_CACHE_HOME", self.path().join("cache-home"))
            .env_remove("RUST_LOG")
            .arg("--no-color")
            .arg("--session")
            .arg(&self.session)
            .arg("--config")
            .arg(&self.config);
        Ok(cmd)
    }

    /// `git-sandbox run <line>` expected to succeed
    pub fn run_ok(&self, line: &str) -> anyhow::Result<()> {
        self.cmd()?
            .arg("run")
            .args(line.split_whitespace())
            .assert()
            .success();
        Ok(())
    }

    pub fn session_json(&self) -> anyhow::Result<serde_json::Value> {
        let content = fs::read_to_string(&self.session)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Sets up an empty sandbox with no stored session
pub fn setup_sandbox() -> anyhow::Result<TestSandbox> {
    let temp_dir = TempDir::new()?;
    let session = temp_dir.path().join("session.json");
    let config = temp_dir.path().join("config.json");
    Ok(TestSandbox {
        temp_dir,
        session,
        config,
    })
}

/// Scenario: local repository with one staged and one untracked file
pub fn setup_staged_sandbox() -> anyhow::Result<TestSandbox> {
    let sandbox = setup_sandbox()?;
    for line in ["touch a.txt", "touch b.txt", "git init", "git add a.txt"] {
        sandbox.run_ok(line)?;
    }
    Ok(sandbox)
}

/// Scenario: remote scenario right after a clone
pub fn setup_cloned_sandbox() -> anyhow::Result<TestSandbox> {
    let sandbox = setup_sandbox()?;
    sandbox.cmd()?.args(["scenario", "remote"]).assert().success();
    sandbox.run_ok("git clone https://github.com/example/repo.git")?;
    Ok(sandbox)
}
