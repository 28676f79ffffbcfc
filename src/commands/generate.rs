use std::path::{Path, PathBuf};

use crate::commands::{Progress, ProgressAction, update_manifest};
use crate::icon::placeholder::render;
use crate::icon::{IconError, TARGET_SIZES, icon_path};
use crate::utils::file_ops::{ensure_dir, write_png};

/// Draw the placeholder icon at every target size.
///
/// Workflow:
/// 1. Create the output directory if needed
/// 2. Render and write one PNG per size, reporting each file
/// 3. Optionally point a web manifest at the new icons
///
/// Files written before a failure are left in place.
pub fn run<F>(
    output_dir: &Path,
    manifest: Option<&Path>,
    mut on_progress: Option<F>,
) -> Result<Vec<PathBuf>, IconError>
where
    F: FnMut(Progress),
{
    ensure_dir(output_dir).map_err(|e| IconError::DirectoryFailed {
        path: output_dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut written = Vec::with_capacity(TARGET_SIZES.len());

    for (index, &size) in TARGET_SIZES.iter().enumerate() {
        let icon = render(size)?;
        let path = icon_path(output_dir, size);

        write_png(&icon, &path).map_err(|e| IconError::WriteFailed {
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
