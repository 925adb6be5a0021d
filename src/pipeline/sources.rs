/// Source acquisition
///
/// Before any icons are cut, each source image must exist in the public
/// assets directory. A source already staged there is used as-is; an
/// absent one is copied in from the artifact fallback directory.

use std::fs;
use std::path::Path;

use crate::error::IconError;

/// How a staged source came to be in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquisition {
    /// Already present at the staged path; no copy performed
    AlreadyStaged,
    /// Copied in from the artifact fallback directory
    CopiedFromArtifact,
}

/// Ensure a source image exists at `staged`, copying it from `artifact`
/// when absent. Re-running with the source already in place performs no
/// copy. Fails with `MissingSource` when neither location has the file.
pub fn ensure_source(staged: &Path, artifact: &Path) -> Result<Acquisition, IconError> {
    if staged.exists() {
        return Ok(Acquisition::AlreadyStaged);
    }

    if !artifact.exists() {
        return Err(IconError::MissingSource {
            staged: staged.to_path_buf(),
            artifact: artifact.to_path_buf(),
        });
    }

    println!("📥 Copying {} to {}", artifact.display(), staged.display());
    fs::copy(artifact, staged).map_err(|source| IconError::CopyFailed {
        from: artifact.to_path_buf(),
        to: staged.to_path_buf(),
        source,
    })?;

    Ok(Acquisition::CopiedFromArtifact)
}
