use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod create;
mod insert_key;

const BIN_NAME: &str = "translately";

pub const EN_US: &str = r#"export const enUS = {
  // Buttons
  "button.cancel": "Cancel",
  "button.ok": "OK",
  // Labels
  "label.name": "Name",
};
"#;

pub const DE_DE: &str = r#"export const deDE = {
  // Buttons
  "button.cancel": "Abbrechen",
  "button.ok": "OK",
  // Labels
  "label.name": "Name",
};
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    /// An empty project; the `.git` marker stops config discovery at its root.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// A project with `src/i18n/enUS.ts` and `src/i18n/deDE.ts`.
    pub fn with_translations() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("src/i18n/enUS.ts", EN_US)?;
        test.write_file("src/i18n/deDE.ts", DE_DE)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn create_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("create");
        cmd
    }

    pub fn insert_key_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("insert-key");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Run `cmd` feeding `input` on stdin.
pub fn run_with_input(cmd: &mut Command, input: &str) -> Result<Output> {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("Failed to spawn command")?;

    if let Some(mut stdin) = child.stdin.take() {
        // The command may exit without reading everything
        let _ = stdin.write_all(input.as_bytes());
    }

    let output = child.wait_with_output()?;
    Ok(output)
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
