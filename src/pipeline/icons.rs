/// The fixed icon table and the resize/save step
///
/// Every output the tool produces is one row here: a filename, the source
/// artwork it is cut from, exact pixel dimensions, and an encoding. No
/// output is derived from another output; each row is load-once, resize,
/// save.

use image::{imageops::FilterType, DynamicImage, ImageFormat};
use std::path::Path;

use crate::error::IconError;

/// Which source artwork an icon family is cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Transparent artwork, kept RGBA — favicon and web app icons
    Transparent,
    /// Opaque artwork, flattened to RGB — Apple touch and Android icons
    Opaque,
}

impl SourceKind {
    /// Human-readable family name for status lines
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Transparent => "web",
            SourceKind::Opaque => "mobile",
        }
    }
}

/// Output encoding for one icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFormat {
    Ico,
    Png,
}

/// One row of the fixed output table
#[derive(Debug, Clone, Copy)]
pub struct IconSpec {
    pub file_name: &'static str,
    pub source: SourceKind,
    pub width: u32,
    pub height: u32,
    pub format: IconFormat,
}

/// The complete output set, in generation order
pub const ICON_TABLE: &[IconSpec] = &[
    IconSpec {
        file_name: "favicon.ico",
        source: SourceKind::Transparent,
        width: 32,
        height: 32,
        format: IconFormat::Ico,
    },
    IconSpec {
        file_name: "icon.png",
        source: SourceKind::Transparent,
        width: 192,
        height: 192,
        format: IconFormat::Png,
    },
    IconSpec {
        file_name: "icon-32x32.png",
        source: SourceKind::Transparent,
        width: 32,
        height: 32,
        format: IconFormat::Png,
    },
    IconSpec {
        file_name: "apple-touch-icon.png",
        source: SourceKind::Opaque,
        width: 180,
        height: 180,
        format: IconFormat::Png,
    },
    IconSpec {
        file_name: "android-chrome-192x192.png",
        source: SourceKind::Opaque,
        width: 192,
        height: 192,
        format: IconFormat::Png,
    },
    IconSpec {
        file_name: "android-chrome-512x512.png",
        source: SourceKind::Opaque,
        width: 512,
        height: 512,
        format: IconFormat::Png,
    },
];

/// Table rows cut from the given source
pub fn family(source: SourceKind) -> impl Iterator<Item = &'static IconSpec> {
    ICON_TABLE.iter().filter(move |spec| spec.source == source)
}

/// Load a source image and normalize it to the channel mode its family
/// requires: RGBA for web icons, RGB for mobile icons.
pub fn load_source(path: &Path, kind: SourceKind) -> Result<DynamicImage, IconError> {
    let img = image::open(path)?;
    let img = match kind {
        SourceKind::Transparent => DynamicImage::ImageRgba8(img.to_rgba8()),
        SourceKind::Opaque => DynamicImage::ImageRgb8(img.to_rgb8()),
    };
    Ok(img)
}

/// Resize the loaded source to the row's exact dimensions and save it,
/// overwriting any existing file at `out_path`.
///
/// Sources are assumed square; a non-square input is stretched to the
/// target dimensions, not letterboxed.
pub fn render_icon(
    source: &DynamicImage,
    spec: &IconSpec,
    out_path: &Path,
) -> Result<(), IconError> {
    let resized = source.resize_exact(spec.width, spec.height, FilterType::Lanczos3);
    let format = match spec.format {
        IconFormat::Ico => ImageFormat::Ico,
        IconFormat::Png => ImageFormat::Png,
    };
    resized.save_with_format(out_path, format)?;
    Ok(())
}
