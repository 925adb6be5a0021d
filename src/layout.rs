use std::path::PathBuf;

use crate::pipeline::icons::SourceKind;

/// Staged filename of the transparent (web) source artwork
pub const TRANSPARENT_SOURCE: &str = "trans.png";
/// Staged filename of the opaque (mobile) source artwork
pub const OPAQUE_SOURCE: &str = "black.png";

/// Artifact-directory filenames of the exported artwork drops
pub const TRANSPARENT_ARTIFACT: &str = "media__1770458619443.png";
pub const OPAQUE_ARTIFACT: &str = "media__1770458626885.png";

/// Filesystem layout for one run: where sources are staged and icons are
/// written, plus the fallback directory checked when a staged source is
/// absent. Sources and outputs share the public assets directory.
#[derive(Debug, Clone)]
pub struct Layout {
    pub public_dir: PathBuf,
    pub artifact_dir: PathBuf,
}

impl Layout {
    pub fn new(public_dir: impl Into<PathBuf>, artifact_dir: impl Into<PathBuf>) -> Self {
        Layout {
            public_dir: public_dir.into(),
            artifact_dir: artifact_dir.into(),
        }
    }

    /// The default layout, anchored at the user's home directory:
    /// - public assets: ~/Desktop/magicstoneapp/public
    /// - artifact fallback: ~/.gemini/antigravity/brain/<session id>
    pub fn default_paths() -> Self {
        let desktop = dirs::desktop_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user home directory");
        let home = dirs::home_dir().expect("Could not determine user home directory");

        Layout {
            public_dir: desktop.join("magicstoneapp").join("public"),
            artifact_dir: home
                .join(".gemini")
                .join("antigravity")
                .join("brain")
                .join("9a9a2671-857f-46e4-a87a-5bb72967dd6d"),
        }
    }

    /// Path where a source of the given kind is expected to be staged
    pub fn staged_source(&self, kind: SourceKind) -> PathBuf {
        let name = match kind {
            SourceKind::Transparent => TRANSPARENT_SOURCE,
            SourceKind::Opaque => OPAQUE_SOURCE,
        };
        self.public_dir.join(name)
    }

    /// Fallback path of a source in the artifact directory
    pub fn artifact_source(&self, kind: SourceKind) -> PathBuf {
        let name = match kind {
            SourceKind::Transparent => TRANSPARENT_ARTIFACT,
            SourceKind::Opaque => OPAQUE_ARTIFACT,
        };
        self.artifact_dir.join(name)
    }

    /// Path of an output icon file in the public assets directory
    pub fn output(&self, file_name: &str) -> PathBuf {
        self.public_dir.join(file_name)
    }
}
