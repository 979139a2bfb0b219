//! Common test utilities for obsctl integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a manifest with the given project names
    pub fn write_manifest(&self, path: &str, names: &[&str]) {
        let mut yaml = String::from("projects:\n");
        for name in names {
            yaml.push_str(&format!("  - name: {}\n", name));
        }
        self.write_file(path, &yaml);
    }
}
