//! Test environment builder for isolated Armory testing.
//!
//! Provides `TestEnv` - temp directories for the project and for HOME, plus
//! helpers to run the armory binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running an Armory CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON, one value per line
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run armory from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    /// Run armory from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run armory from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let home = self.home_dir.path();
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("ARMORY_PREFABS_DIR")
            .env_remove("ARMORY_SHADER")
            .env_remove("ARMORY_VERBOSITY");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute armory");
        output_to_result(output)
    }

    /// Read a project file, panicking with context when missing
    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Write a project file, creating parent directories
    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for `TestEnv`
#[derive(Default)]
pub struct TestEnvBuilder {
    initialized: bool,
    config: Option<String>,
    files: Vec<(String, String)>,
    directories: Vec<String>,
}

impl TestEnvBuilder {
    /// Create the `Assets` root container
    pub fn initialized(mut self) -> Self {
        self.initialized = true;
        self
    }

    /// Write `armory.toml`
    pub fn with_config(mut self, content: &str) -> Self {
        self.config = Some(content.to_string());
        self
    }

    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn with_directories(mut self, dirs: &[&str]) -> Self {
        self.directories
            .extend(dirs.iter().map(|dir| dir.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_armory")),
        };

        if self.initialized {
            std::fs::create_dir_all(env.project_path("Assets")).expect("Failed to create root");
        }
        if let Some(config) = &self.config {
            env.write_project_file("armory.toml", config);
        }
        for dir in &self.directories {
            std::fs::create_dir_all(env.project_path(dir)).expect("Failed to create directory");
        }
        for (relative, content) in &self.files {
            env.write_project_file(relative, content);
        }
        env
    }
}
