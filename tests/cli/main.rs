use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use assert_cmd::Command;
use tempfile::TempDir;

mod add;
mod check;
mod goto;
mod init;
mod locales;
mod locate;
mod path;
mod resolve;

const BIN_NAME: &str = "glossa";

pub const EN_JSON: &str = r#"{
  "general": {
    "submit": "Submit",
    "cancel": "Cancel"
  },
  "auth": {
    "title": "Sign in"
  }
}"#;

pub const FR_JSON: &str = r#"{
  "general": {
    "submit": "Envoyer"
  }
}"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with a config, an English dictionary and a (partial)
    /// French dictionary.
    pub fn with_dictionaries() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            ".glossarc.json",
            r#"{
  "dictionaryPath": "i18n/en.json",
  "includes": ["app"]
}"#,
        )?;
        test.write_file("i18n/en.json", EN_JSON)?;
        test.write_file("i18n/fr.json", FR_JSON)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary should be built");
        cmd.current_dir(&self.project_dir);
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }
}
