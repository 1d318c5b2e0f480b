//! Shared testing utilities for prdgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Full example input used across CLI tests.
pub const SAMPLE_JSON: &str = r#"{
    "product_name": "Task Flow",
    "product_description": "A lightweight task board for small teams.",
    "target_audience": "Remote teams of 3-10 people",
    "problem_statement": "Small Teams Lose Track Of Work",
    "proposed_solution": "A Shared Board With Async Updates",
    "key_features": ["Boards", "Notifications", "Time Tracking"],
    "success_metrics": ["1,000 weekly active teams", "NPS above 40"],
    "technical_requirements": ["Web and mobile clients"],
    "dependencies": ["Email delivery provider"],
    "risks": ["Scope creep"],
    "timeline_weeks": 10,
    "budget": "$50,000",
    "competitors": ["Trello"]
}"#;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `prdgen` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("prdgen").expect("Failed to locate prdgen binary");
        cmd.current_dir(&self.work_dir).env_remove("PRDGEN_CONFIG").env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Expected default output file name for a product generated today.
    pub fn default_output_name(product_name: &str) -> String {
        let date = chrono::Local::now().date_naive().format("%Y%m%d");
        format!("PRD_{}_{}.md", product_name.replace(' ', "_"), date)
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, relative: impl AsRef<Path>) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read output file")
    }

    /// Markdown files present directly in `dir` (relative to the work directory).
    pub fn markdown_files(&self, dir: impl AsRef<Path>) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.work_dir.join(dir)) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .filter(|name| name.ends_with(".md"))
            .collect();
        names.sort();
        names
    }

    /// Root of the temporary tree, outside the work directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }
}
