//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running surf against a temporary project.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Returns the path to the surf binary, checking the llvm-cov target
/// directory first and falling back to cargo's own lookup relative to the
/// test executable.
fn surf_binary() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug/surf");
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    assert_cmd::cargo::cargo_bin("surf")
}

/// Create a CLI builder for surf commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            dir: None,
            // Deterministic output regardless of the caller's terminal
            envs: vec![("NO_COLOR".into(), "1".into())],
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> Command {
        let mut cmd = Command::new(surf_binary());
        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        // Parent settings must not leak into tests
        cmd.env_remove("SURF_CATALOG_DIR");
        cmd.env_remove("SURF_JOBS");
        cmd.env_remove("SURF_LOG");
        cmd.env_remove("COLOR");

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        cmd
    }

    fn output(self) -> Output {
        self.command().output().expect("command should run")
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.output();
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect a specific exit code
    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.output();
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit code\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout should be JSON")
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stdout does not contain substring.
    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout should not contain '{}'\nstdout: {}",
            unexpected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary project directory with a `.surf/` catalog.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Create an empty project (no catalog directory)
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a project whose catalog holds `content` as `.surf/<name>`
    pub fn with_catalog(name: &str, content: &str) -> Self {
        let project = Self::empty();
        project.catalog_file(name, content);
        project
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Write a catalog file under `.surf/`
    pub fn catalog_file(&self, name: &str, content: &str) {
        self.file(Path::new(".surf").join(name), content);
    }

    /// Run surf in this project's directory
    pub fn surf(&self) -> CliBuilder {
        cli().pwd(self.path())
    }
}

/// A command whose declaration and help agree
pub const CONSISTENT_CATALOG: &str = r#"
command "Invoke-Build" {
  primary = ["Task"]

  parameter "File" { type = "String" }
  parameter "Verbose" { type = "SwitchParameter" }

  parameter_set "ByName" {
    parameter "Task" {
      type      = "String[]"
      mandatory = true
    }
  }
}

help "Invoke-Build" {
  synopsis    = "Invokes build tasks."
  description = "Invokes tasks defined in a build script."

  link "Online Version" {
    uri = "https://example.invalid/invoke-build"
  }

  parameter "Task" {
    text     = "One or more tasks to invoke."
    required = "true"
    type     = " String[] "
  }

  parameter "File" {
    text     = "The build script."
    required = "false"
    type     = "String"
  }
}
"#;

/// A command whose help has drifted from its declaration
pub const DRIFTED_CATALOG: &str = r#"
[command.Get-Widget]
primary = ["Name"]

[command.Get-Widget.parameter.Name]
type = "String"

[command.Get-Widget.parameter.Count]
type = "Int32"

[help.Get-Widget]
synopsis = "{{ Fill in the Synopsis }}"
description = "Gets widgets."

[[help.Get-Widget.link]]
text = "Online Version"
uri = "https://example.invalid/get-widget"

[help.Get-Widget.parameter.Name]
text = "The widget name."
required = "true"
type = "String"
"#;
