use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the icon pipeline.
///
/// `MissingSource` is recoverable at the run level: the family of icons
/// depending on that source is skipped while the other family still runs.
/// Everything else aborts the run on first occurrence.
#[derive(Debug, Error)]
pub enum IconError {
    /// A required source image is absent from both its staged location
    /// and the artifact fallback directory.
    #[error(
        "source image missing: {} (artifact fallback {} also absent)",
        .staged.display(),
        .artifact.display()
    )]
    MissingSource { staged: PathBuf, artifact: PathBuf },

    /// The copy from the artifact directory into the public assets
    /// directory failed partway through acquisition.
    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decode, resize, or encode failure from the image library.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
