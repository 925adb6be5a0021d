/// Icon generation pipeline
///
/// This module handles:
/// - Source acquisition with artifact fallback (sources.rs)
/// - The fixed icon table and resize/save step (icons.rs)
/// - Orchestration of the two independent icon families

pub mod icons;
pub mod sources;

use std::path::PathBuf;

use crate::error::IconError;
use crate::layout::Layout;
use icons::SourceKind;
use sources::Acquisition;

/// Outcome of one full run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Output files written, in table order
    pub written: Vec<PathBuf>,
    /// Families skipped because their source was missing, with the reason
    pub skipped: Vec<(SourceKind, String)>,
}

/// Stage both sources, then cut every icon in the table.
///
/// The two families are independent and non-transactional: a missing
/// source skips its family and the other still runs, so mobile icons can
/// land even when the web source is gone (and vice versa). Image decode,
/// resize, or encode errors abort the whole run immediately; outputs
/// already written stay on disk.
pub fn run(layout: &Layout) -> Result<RunSummary, IconError> {
    let mut summary = RunSummary::default();

    generate_family(layout, SourceKind::Transparent, &mut summary)?;
    generate_family(layout, SourceKind::Opaque, &mut summary)?;

    Ok(summary)
}

/// Acquire one source and render every table row cut from it
fn generate_family(
    layout: &Layout,
    kind: SourceKind,
    summary: &mut RunSummary,
) -> Result<(), IconError> {
    let staged = layout.staged_source(kind);
    let artifact = layout.artifact_source(kind);

    match sources::ensure_source(&staged, &artifact) {
        Ok(Acquisition::AlreadyStaged | Acquisition::CopiedFromArtifact) => {}
        Err(err @ IconError::MissingSource { .. }) => {
            eprintln!("⚠️  Skipping {} icons: {}", kind.label(), err);
            summary.skipped.push((kind, err.to_string()));
            return Ok(());
        }
        Err(err) => return Err(err),
    }

    println!(
        "--- {} icons (from {}) ---",
        kind.label(),
        staged.display()
    );

    // Load once per family, then one resize+save per table row
    let source = icons::load_source(&staged, kind)?;
    for spec in icons::family(kind) {
        let out_path = layout.output(spec.file_name);
        icons::render_icon(&source, spec, &out_path)?;
        println!("✅ Saved {}", spec.file_name);
        summary.written.push(out_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, Rgba};
    use std::path::Path;
    use tempfile::tempdir;

    fn write_transparent_fixture(path: &Path) {
        let buf = ImageBuffer::from_fn(512, 512, |x, y| {
            Rgba([
                (x * 255 / 512) as u8,
                (y * 255 / 512) as u8,
                90,
                (x * 255 / 512) as u8,
            ])
        });
        buf.save(path).unwrap();
    }

    fn write_opaque_fixture(path: &Path) {
        let buf =
            ImageBuffer::from_fn(512, 512, |x, y| Rgb([(x * 255 / 512) as u8, 20, (y * 255 / 512) as u8]));
        buf.save(path).unwrap();
    }

    fn test_layout() -> (tempfile::TempDir, Layout) {
        let dir = tempdir().unwrap();
        let public = dir.path().join("public");
        let artifacts = dir.path().join("artifacts");
        std::fs::create_dir_all(&public).unwrap();
        std::fs::create_dir_all(&artifacts).unwrap();
        let layout = Layout::new(public, artifacts);
        (dir, layout)
    }

    #[test]
    fn full_run_writes_every_icon() {
        let (_dir, layout) = test_layout();
        write_transparent_fixture(&layout.staged_source(SourceKind::Transparent));
        write_opaque_fixture(&layout.staged_source(SourceKind::Opaque));

        let summary = run(&layout).unwrap();

        assert!(summary.skipped.is_empty());
        assert_eq!(summary.written.len(), icons::ICON_TABLE.len());
        for spec in icons::ICON_TABLE {
            assert!(
                layout.output(spec.file_name).exists(),
                "{} was not written",
                spec.file_name
            );
        }
    }

    #[test]
    fn sources_are_pulled_from_artifacts_when_unstaged() {
        let (_dir, layout) = test_layout();
        write_transparent_fixture(&layout.artifact_source(SourceKind::Transparent));
        write_opaque_fixture(&layout.artifact_source(SourceKind::Opaque));

        let summary = run(&layout).unwrap();

        assert!(summary.skipped.is_empty());
        // Acquisition staged both sources next to the outputs
        assert!(layout.staged_source(SourceKind::Transparent).exists());
        assert!(layout.staged_source(SourceKind::Opaque).exists());
        assert_eq!(summary.written.len(), icons::ICON_TABLE.len());
    }

    #[test]
    fn missing_transparent_source_skips_only_web_icons() {
        let (_dir, layout) = test_layout();
        write_opaque_fixture(&layout.staged_source(SourceKind::Opaque));

        let summary = run(&layout).unwrap();

        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].0, SourceKind::Transparent);
        assert!(summary.skipped[0].1.contains("trans.png"));

        for spec in icons::family(SourceKind::Transparent) {
            assert!(!layout.output(spec.file_name).exists());
        }
        for spec in icons::family(SourceKind::Opaque) {
            assert!(layout.output(spec.file_name).exists());
        }
    }

    #[test]
    fn missing_opaque_source_skips_only_mobile_icons() {
        let (_dir, layout) = test_layout();
        write_transparent_fixture(&layout.staged_source(SourceKind::Transparent));

        let summary = run(&layout).unwrap();

        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].0, SourceKind::Opaque);

        for spec in icons::family(SourceKind::Opaque) {
            assert!(!layout.output(spec.file_name).exists());
        }
        for spec in icons::family(SourceKind::Transparent) {
            assert!(layout.output(spec.file_name).exists());
        }
    }

    #[test]
    fn both_sources_missing_writes_nothing() {
        let (_dir, layout) = test_layout();

        let summary = run(&layout).unwrap();

        assert!(summary.written.is_empty());
        assert_eq!(summary.skipped.len(), 2);
    }

    #[test]
    fn rerun_overwrites_outputs_in_place() {
        let (_dir, layout) = test_layout();
        write_transparent_fixture(&layout.staged_source(SourceKind::Transparent));
        write_opaque_fixture(&layout.staged_source(SourceKind::Opaque));

        run(&layout).unwrap();
        let summary = run(&layout).unwrap();

        // Second run regenerates everything without complaint
        assert!(summary.skipped.is_empty());
        assert_eq!(summary.written.len(), icons::ICON_TABLE.len());
    }
}
