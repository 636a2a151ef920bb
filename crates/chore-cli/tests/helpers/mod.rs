use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for running CLI commands with temporary databases
pub struct CliTestHarness {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with a temporary database
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");

        Self { temp_dir, db_path }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("chore").expect("Failed to find chore binary");

        // Isolate from any chore.toml or CHORE_* settings of the developer
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("CHORE_DEFAULT_DOMAIN");
        cmd.env_remove("CHORE_LOG");
        cmd.env("CHORE_DATABASE_PATH", &self.db_path);
        cmd.env("CHORE_TIMEZONE", "UTC");

        cmd
    }

    /// Get the database path for this test instance
    pub fn db_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Adds a task and returns its full id, read back from `all --json`
    pub fn add_and_get_id(&self, args: &[&str]) -> String {
        let mut full_args = vec!["add"];
        full_args.extend_from_slice(args);
        self.run_success(&full_args);

        let output = self.command().args(["all", "--json"]).output().expect("Failed to run chore");
        let tasks: Vec<serde_json::Value> =
            serde_json::from_slice(&output.stdout).expect("all --json did not print JSON");
        tasks
            .last()
            .and_then(|task| task["id"].as_str())
            .expect("no task in listing")
            .to_string()
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output indicates successful task creation
    pub fn task_created_successfully() -> impl Predicate<str> {
        predicate::str::contains("✓").and(predicate::str::contains("Added task"))
    }

    /// Predicate to check if output indicates successful task completion
    pub fn task_completed_successfully() -> impl Predicate<str> {
        predicate::str::contains("Completed task")
    }

    /// Predicate to check for empty result set
    pub fn empty_result() -> impl Predicate<str> {
        predicate::str::contains("No tasks found")
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }
}
