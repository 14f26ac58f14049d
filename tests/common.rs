#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Isolated sandbox: its own HOME (so no real config is read) and DB file.
pub struct Sandbox {
    pub home: PathBuf,
    pub db: String,
}

impl Sandbox {
    pub fn new(name: &str) -> Self {
        let mut home: PathBuf = env::temp_dir();
        home.push(format!("tyme_test_{name}"));
        fs::remove_dir_all(&home).ok();
        fs::create_dir_all(&home).expect("create sandbox");

        let db = home.join("tyme.sqlite").to_string_lossy().to_string();
        Self { home, db }
    }

    /// `tyme --db <sandbox db>` with HOME pointing at the sandbox.
    pub fn tyme(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("tyme");
        cmd.env("HOME", &self.home)
            .env("APPDATA", &self.home)
            .args(["--db", &self.db]);
        cmd
    }

    /// `init` in test mode: schema + demo entry, no config file.
    pub fn init(&self) {
        self.tyme().args(["--test", "init"]).assert().success();
    }

    /// Output of `tyme total`, trimmed.
    pub fn total(&self) -> String {
        let out = self.tyme().arg("total").output().expect("run total");
        assert!(out.status.success());
        String::from_utf8_lossy(&out.stdout)
            .lines()
            .last()
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    pub fn out_file(&self, name: &str) -> String {
        self.home.join(name).to_string_lossy().to_string()
    }

    /// Write a config file into the sandbox HOME.
    pub fn write_config(&self, yaml: &str) {
        let dir = self.home.join(".tyme");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("tyme.conf"), yaml).expect("write config");
    }
}
