// src/infrastructure/renderer.rs
use crate::constants::BROWSER_LAUNCH_DELAY_MS;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::instrument;

/// Writes rendered HTML to disk and hands it to the system browser
#[derive(Debug, Default)]
pub struct HtmlWriter {
    // Keep last temp dir alive to prevent deletion
    _temp_dir: Option<tempfile::TempDir>,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self { _temp_dir: None }
    }

    pub fn write_to(&self, path: &Path, content: &str) -> Result<()> {
        File::create(path)
            .with_context(|| format!("Failed to create file at {}", path.display()))?
            .write_all(content.as_bytes())
            .context("Failed to write HTML content")?;
        Ok(())
    }

    pub fn create_temp_file(&mut self, content: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("runboard-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = temp_dir.path().join("notes.html");
        self.write_to(&file_path, content)?;

        self._temp_dir = Some(temp_dir);

        Ok(file_path)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_in_browser(&mut self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "linux")]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        // Keep the temp directory alive briefly
        std::thread::sleep(std::time::Duration::from_millis(BROWSER_LAUNCH_DELAY_MS));

        Ok(())
    }
}
