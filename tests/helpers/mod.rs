use anyhow::{Context, Result};
use runboard::infrastructure::JsonStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture for working with a temporary copy of the payload store
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    /// Create a new test store by copying the fixture directory
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let root = temp_dir.path().join("store");

        copy_dir_all(&fixtures_dir().join("store"), &root)
            .context("Failed to copy store fixture")?;

        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    pub fn open(&self) -> Result<JsonStore> {
        JsonStore::new(&self.root)
    }
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Raw JSON of a payload fixture, e.g. `payload("runs.json")`
#[allow(dead_code)]
pub fn payload(name: &str) -> Result<String> {
    let path = fixtures_dir().join("payloads").join(name);
    std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Recursively copy directory contents
fn copy_dir_all(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_all(&entry.path(), &dst_path)?;
        } else {
            std::fs::copy(entry.path(), &dst_path)?;
        }
    }
    Ok(())
}

/// Known ids from the fixture store
#[allow(dead_code)]
pub mod fixture_ids {
    pub const ROOT: &str = "abcdef1234567890abcdef1234567890";
    pub const OTHER_ROOT: &str = "zzzzzz99990000111122223333444455";
    pub const LOAD_RUN: &str = "1111112222223333334444445555556a";
    pub const TRAIN_RUN: &str = "fedcba0987654321fedcba0987654321";

    pub const ADA: &str = "ada@example.com";
    pub const GRACE: &str = "grace@example.com";

    // Notes in chronological order
    pub const NOTE_OTHER_ROOT: &str = "9c8b7a6f5e4d3c2b1a0f9e8d7c6b5a49";
    pub const NOTE_ADA: &str = "5b1f0c3e9a7d4f6b8e2a1c0d3f4e5a6b";
    pub const NOTE_GRACE: &str = "0a1b2c3d4e5f60718293a4b5c6d7e8f9";

    pub const NONEXISTENT: &str = "000000000000";
}
