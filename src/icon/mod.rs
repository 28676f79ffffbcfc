pub mod flatten;
pub mod layout;
pub mod placeholder;
pub mod resize;

use std::fmt;
use std::path::{Path, PathBuf};

/// Square icon sizes required by the web app, in pixels.
pub const TARGET_SIZES: [u32; 2] = [192, 512];

/// Directory the icons are written to, relative to the working directory.
pub const OUTPUT_DIR: &str = "icons";

/// Photo the converter reads when no source is given.
pub const SOURCE_FILENAME: &str = "windmill-app-cpver.JPG";

/// File name of the icon for a given size, e.g. `icon-192x192.png`.
pub fn icon_filename(size: u32) -> String {
    format!("icon-{}x{}.png", size, size)
}

/// Full path of the icon for a given size inside `output_dir`.
pub fn icon_path(output_dir: &Path, size: u32) -> PathBuf {
    output_dir.join(icon_filename(size))
}

/// Error type for icon generation and conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    MissingCapability { format: String, operation: String },
    SourceUnreadable { path: PathBuf, reason: String },
    DirectoryFailed { path: PathBuf, reason: String },
    WriteFailed { path: PathBuf, reason: String },
    ManifestError { reason: String },
    InvalidSize { size: u32 },
}

impl IconError {
    /// True when the failure came from reading or writing the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            IconError::SourceUnreadable { .. }
                | IconError::DirectoryFailed { .. }
                | IconError::WriteFailed { .. }
        )
    }
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::MissingCapability { format, operation } => {
                write!(f, "{} {} support is not available in this build", format, operation)
            }
            IconError::SourceUnreadable { path, reason } => {
                write!(f, "failed to read source image '{}': {}", path.display(), reason)
            }
            IconError::DirectoryFailed { path, reason } => {
                write!(f, "failed to create directory '{}': {}", path.display(), reason)
            }
            IconError::WriteFailed { path, reason } => {
                write!(f, "failed to write '{}': {}", path.display(), reason)
            }
            IconError::ManifestError { reason } => {
                write!(f, "manifest error: {}", reason)
            }
            IconError::InvalidSize { size } => {
                write!(f, "invalid icon size {}: must be positive", size)
            }
        }
    }
}

impl std::error::Error for IconError {}
