use std::{
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// 30 MB, shared across every part of a single request body.
pub const MAX_UPLOAD_SIZE: usize = 30 * 1024 * 1024;

/// Number of files an upload must carry.
pub const REQUIRED_FILES: usize = 3;

/// Multipart field that carries the uploaded files.
pub const FILES_FIELD: &str = "files";

/// Runtime settings for the bundler service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address.
    pub addr: SocketAddr,
    /// Directory that holds the per-request temporary archives.
    pub upload_dir: PathBuf,
    /// Directory containing `index.html`.
    pub templates_dir: PathBuf,
    /// Limit on the whole request body, in bytes.
    pub max_upload_size: usize,
    /// Exact number of files accepted per upload.
    pub required_files: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            upload_dir: PathBuf::from("./uploads"),
            templates_dir: PathBuf::from("html/templates"),
            max_upload_size: MAX_UPLOAD_SIZE,
            required_files: REQUIRED_FILES,
        }
    }
}

impl Config {
    pub fn with_upload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.upload_dir = dir.into();
        self
    }

    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = dir.into();
        self
    }

    pub fn with_max_upload_size(mut self, bytes: usize) -> Self {
        self.max_upload_size = bytes;
        self
    }

    /// Path of the landing page template.
    pub fn index_template(&self) -> PathBuf {
        self.templates_dir.join("index.html")
    }

    /// Human readable size limit used in client-facing messages, e.g. `30MB`.
    pub fn max_upload_size_label(&self) -> String {
        let mb = self.max_upload_size / (1024 * 1024);
        if mb > 0 && mb * 1024 * 1024 == self.max_upload_size {
            format!("{}MB", mb)
        } else {
            format!("{} bytes", self.max_upload_size)
        }
    }

    /// Create the upload and template directories if they are missing.
    pub fn ensure_dirs(&self) -> Result<()> {
        create_dir(&self.upload_dir)?;
        create_dir(&self.templates_dir)?;
        Ok(())
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {:?}", dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_service_limits() {
        let config = Config::default();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.max_upload_size, 30 * 1024 * 1024);
        assert_eq!(config.required_files, 3);
        assert_eq!(config.index_template(), PathBuf::from("html/templates/index.html"));
    }

    #[test]
    fn size_label_prefers_whole_megabytes() {
        assert_eq!(Config::default().max_upload_size_label(), "30MB");
        let small = Config::default().with_max_upload_size(1500);
        assert_eq!(small.max_upload_size_label(), "1500 bytes");
    }

    #[test]
    fn ensure_dirs_creates_nested_directories() {
        let root = tempfile::tempdir().unwrap();
        let config = Config::default()
            .with_upload_dir(root.path().join("a/uploads"))
            .with_templates_dir(root.path().join("b/templates"));

        config.ensure_dirs().unwrap();

        assert!(config.upload_dir.is_dir());
        assert!(config.templates_dir.is_dir());
    }
}
