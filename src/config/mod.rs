//! Company-identity configuration and header-image assets
//!
//! The identity block is a flat string mapping persisted as pretty JSON;
//! it feeds the delivery-note header and has no coupling to the order
//! store. The header image lives in an assets directory and is probed
//! under a fixed set of candidate names.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

/// Candidate header-image file names, probed in order
pub const HEADER_IMAGE_CANDIDATES: [&str; 3] = ["sha.jpg", "header_sha.jpg", "header_sha.png"];

/// File name used when a new header image is installed
pub const HEADER_IMAGE_TARGET: &str = "header_sha.png";

/// Company identity printed on every delivery note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyIdentity {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl Default for CompanyIdentity {
    /// The identity shipped with the system, used until a configuration
    /// file is saved
    fn default() -> Self {
        Self {
            name: "PT. SHA SOLO".to_string(),
            address: "Jl. Yosodipuro No. 21 Surakarta 57131".to_string(),
            phone: "0271-644987 (Hunting) / 081-325-999-999".to_string(),
            email: "sha@shasolo.com / marketing@shasolo.com".to_string(),
            website: "www.shasolo.com".to_string(),
        }
    }
}

impl CompanyIdentity {
    /// Load the identity from `path`, falling back to the defaults when
    /// the file does not exist yet.
    ///
    /// A file that exists but is not the expected JSON mapping is a
    /// [`ConfigError::Malformed`] — unlike table fields, configuration is
    /// never degraded silently.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Persist the identity to `path` as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(|source| {
            ConfigError::Malformed {
                path: path.to_path_buf(),
                source,
            }
        })?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "company identity saved");
        Ok(())
    }
}

/// First existing header image under `assets_dir`, probing
/// [`HEADER_IMAGE_CANDIDATES`] in order
pub fn find_header_image(assets_dir: &Path) -> Option<PathBuf> {
    HEADER_IMAGE_CANDIDATES
        .iter()
        .map(|name| assets_dir.join(name))
        .find(|path| path.exists())
}

/// Install a new header image under `assets_dir`, creating the directory
/// if needed, and return the written path
pub fn install_header_image(assets_dir: &Path, bytes: &[u8]) -> Result<PathBuf, ConfigError> {
    fs::create_dir_all(assets_dir).map_err(|source| ConfigError::Io {
        path: assets_dir.to_path_buf(),
        source,
    })?;
    let target = assets_dir.join(HEADER_IMAGE_TARGET);
    fs::write(&target, bytes).map_err(|source| ConfigError::Io {
        path: target.clone(),
        source,
    })?;
    tracing::info!(path = %target.display(), "header image installed");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let identity = CompanyIdentity::load(&dir.path().join("config_identitas.json")).unwrap();
        assert_eq!(identity, CompanyIdentity::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config_identitas.json");
        let identity = CompanyIdentity {
            name: "PT. Example".to_string(),
            ..CompanyIdentity::default()
        };
        identity.save(&path).unwrap();
        assert_eq!(CompanyIdentity::load(&path).unwrap(), identity);
    }

    #[test]
    fn test_malformed_file_is_an_error_not_a_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config_identitas.json");
        fs::write(&path, "not json at all").unwrap();
        let err = CompanyIdentity::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn test_header_image_probe_order() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_header_image(dir.path()), None);

        fs::write(dir.path().join("header_sha.png"), b"png").unwrap();
        assert_eq!(
            find_header_image(dir.path()),
            Some(dir.path().join("header_sha.png"))
        );

        // an earlier candidate wins once present
        fs::write(dir.path().join("sha.jpg"), b"jpg").unwrap();
        assert_eq!(
            find_header_image(dir.path()),
            Some(dir.path().join("sha.jpg"))
        );
    }

    #[test]
    fn test_install_header_image_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        let written = install_header_image(&assets, b"bytes").unwrap();
        assert_eq!(written, assets.join(HEADER_IMAGE_TARGET));
        assert_eq!(fs::read(&written).unwrap(), b"bytes");
    }
}
