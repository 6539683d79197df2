use std::fs;
use std::path::{Path, PathBuf};

use paperscout_core::ExportPayload;

/// Persist a completed export under `out_dir`, returning where it landed.
///
/// Saving to the user's filesystem is a platform capability that lives here,
/// outside the workflow core; the core's job ends at producing the payload.
pub fn save_export(payload: &ExportPayload, out_dir: &Path) -> Result<PathBuf, String> {
    fs::create_dir_all(out_dir)
        .map_err(|e| format!("failed to create {}: {e}", out_dir.display()))?;
    let path = out_dir.join(&payload.file_name);
    fs::write(&path, &payload.bytes)
        .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    Ok(path)
}
