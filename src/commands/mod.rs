pub mod convert;
pub mod generate;

use std::path::{Path, PathBuf};

use crate::icon::IconError;
use crate::utils::manifest::WebManifest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressAction {
    Created,
    ManifestUpdated,
}

/// Progress report for one step of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub action: ProgressAction,
    pub index: usize,
    pub total: usize,
    pub file: PathBuf,
}

/// Point the manifest's icon list at the given sizes.
fn update_manifest(path: &Path, sizes: &[u32]) -> Result<(), IconError> {
    let mut manifest = WebManifest::load_or_default(path).map_err(|e| IconError::ManifestError {
        reason: format!("failed to load '{}': {}", path.display(), e),
    })?;

    manifest.set_icons(sizes).map_err(|e| IconError::ManifestError {
        reason: e.to_string(),
    })?;

    manifest.save(path).map_err(|e| IconError::ManifestError {
        reason: format!("failed to save '{}': {}", path.display(), e),
    })
}
