use std::path::{Path, PathBuf};

use crate::commands::{Progress, ProgressAction, update_manifest};
use crate::icon::flatten::{SourceMode, flatten};
use crate::icon::resize::resize_square;
use crate::icon::{IconError, TARGET_SIZES, icon_path};
use crate::utils::file_ops::{load_source, write_png};

/// Turn a photo into icons at every target size.
///
/// Workflow:
/// 1. Load the source image (nothing is written if this fails)
/// 2. Composite any alpha onto white; palette sources are pasted unmasked
/// 3. Resample to each size and write the PNG, reporting each file
/// 4. Optionally point a web manifest at the new icons
///
/// The output directory must already exist.
pub fn run<F>(
    source: &Path,
    output_dir: &Path,
    manifest: Option<&Path>,
    mut on_progress: Option<F>,
) -> Result<Vec<PathBuf>, IconError>
where
    F: FnMut(Progress),
{
    let decoded = load_source(source).map_err(|e| IconError::SourceUnreadable {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mode = SourceMode::of(&decoded.image, decoded.original_color);
    let opaque = flatten(&decoded.image, mode);
    let mut written = Vec::with_capacity(TARGET_SIZES.len());

    for (index, &size) in TARGET_SIZES.iter().enumerate() {
        let resized = resize_square(&opaque, size)?;
        let path = icon_path(output_dir, size);

        write_png(&resized, &path).map_err(|e| IconError::WriteFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        if let Some(ref mut cb) = on_progress {
            cb(Progress {
                action: ProgressAction::Created,
                index,
                total: TARGET_SIZES.len(),
                file: path.clone(),
            });
        }
        written.push(path);
    }

    if let Some(manifest_path) = manifest {
        update_manifest(manifest_path, &TARGET_SIZES)?;
        if let Some(ref mut cb) = on_progress {
            cb(Progress {
                action: ProgressAction::ManifestUpdated,
                index: 0,
                total: 1,
                file: manifest_path.to_path_buf(),
            });
        }
    }

    Ok(written)
}
