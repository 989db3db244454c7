//! @acp:module "Asset Ingestion"
//! @acp:summary "Copies and normalizes source files into the project asset tree per category rules"
//! @acp:domain cli
//! @acp:layer service
//!
//! Ingestion is best-effort and per-file: a missing source is a silent no-op,
//! a decode/encode failure skips that file only and is reported back as a
//! warning on the save that triggered it.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::ImageFormat;

use crate::error::{ModError, Result};
use crate::manifest::AssetDescriptor;

/// App icons are resampled to exactly this square size
pub const ICON_SIZE: u32 = 256;

/// Wallpapers and splash screens below this size are upscaled to it
pub const HD_WIDTH: u32 = 1920;
pub const HD_HEIGHT: u32 = 1080;

/// Outcome of ingesting a full save's worth of descriptors
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Destination paths actually written
    pub written: Vec<PathBuf>,
    /// Per-file failures; the save that collected them still succeeded
    pub failures: Vec<ModError>,
}

/// @acp:summary "Ingest every descriptor, continuing past per-file failures"
pub fn ingest_all(project_root: &Path, assets: &[AssetDescriptor]) -> IngestReport {
    let mut report = IngestReport::default();
    for asset in assets {
        match ingest(project_root, asset) {
            Ok(Some(dest)) => report.written.push(dest),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(source = %asset.source.display(), "asset skipped: {e}");
                report.failures.push(e);
            }
        }
    }
    report
}

/// @acp:summary "Materialize one source file under `<project>/<category>/<basename>`"
///
/// Returns `Ok(None)` when the source does not exist (nothing written, no
/// error raised).
pub fn ingest(project_root: &Path, asset: &AssetDescriptor) -> Result<Option<PathBuf>> {
    if !asset.source.is_file() {
        return Ok(None);
    }
    let Some(filename) = asset.source.file_name() else {
        return Ok(None);
    };

    let dest_dir = project_root.join(asset.category);
    fs::create_dir_all(&dest_dir).map_err(|e| ModError::fs("create", &dest_dir, e))?;
    let dest = dest_dir.join(filename);

    match asset.category {
        "app_icon" => resample_icon(&asset.source, &dest)?,
        "wallpaper" | "splash_screen"
            if matches!(asset.sub_category, "image" | "path") =>
        {
            normalize_hd(&asset.source, &dest)?
        }
        _ => copy_verbatim(&asset.source, &dest)?,
    }
    tracing::debug!(dest = %dest.display(), "asset ingested");
    Ok(Some(dest))
}

/// Resample to exactly 256x256 and encode PNG, whatever the source format.
/// The destination keeps the source basename.
fn resample_icon(source: &Path, dest: &Path) -> Result<()> {
    let img = decode(source)?;
    img.resize_exact(ICON_SIZE, ICON_SIZE, FilterType::Lanczos3)
        .save_with_format(dest, ImageFormat::Png)
        .map_err(|e| processing_error(source, e))
}

/// Upscale-resample to exactly 1920x1080 when either dimension falls short,
/// keeping JPEG encoding for `.jpg` sources and PNG otherwise. Sources
/// already at or above 1920x1080 are copied verbatim, never downscaled.
fn normalize_hd(source: &Path, dest: &Path) -> Result<()> {
    let img = decode(source)?;
    if img.width() >= HD_WIDTH && img.height() >= HD_HEIGHT {
        return copy_verbatim(source, dest);
    }

    let format = if source.to_string_lossy().ends_with(".jpg") {
        ImageFormat::Jpeg
    } else {
        ImageFormat::Png
    };
    img.resize_exact(HD_WIDTH, HD_HEIGHT, FilterType::Lanczos3)
        .save_with_format(dest, format)
        .map_err(|e| processing_error(source, e))
}

fn copy_verbatim(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest)
        .map(|_| ())
        .map_err(|e| ModError::fs("copy", source, e))
}

fn decode(source: &Path) -> Result<image::DynamicImage> {
    image::open(source).map_err(|e| processing_error(source, e))
}

fn processing_error(source: &Path, e: image::ImageError) -> ModError {
    ModError::AssetProcessing {
        path: source.to_path_buf(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn descriptor(source: &Path, category: &'static str, sub: &'static str) -> AssetDescriptor {
        AssetDescriptor {
            source: source.to_path_buf(),
            category,
            sub_category: sub,
        }
    }

    fn write_png(path: &Path, w: u32, h: u32) {
        RgbImage::new(w, h).save(path).unwrap();
    }

    #[test]
    fn test_missing_source_is_a_silent_noop() {
        let project = tempfile::tempdir().unwrap();
        let result = ingest(
            project.path(),
            &descriptor(Path::new("/no/such/file.png"), "wallpaper", "image"),
        )
        .unwrap();
        assert!(result.is_none());
        assert!(!project.path().join("wallpaper").exists());
    }

    #[test]
    fn test_app_icon_resampled_to_square_png() {
        let src_dir = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();
        let src = src_dir.path().join("icon.jpg");
        RgbImage::new(100, 40).save(&src).unwrap();

        let dest = ingest(project.path(), &descriptor(&src, "app_icon", "path"))
            .unwrap()
            .unwrap();
        assert_eq!(dest, project.path().join("app_icon").join("icon.jpg"));

        let out = image::ImageReader::open(&dest)
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!((out.width(), out.height()), (ICON_SIZE, ICON_SIZE));
        // PNG payload regardless of the source extension
        let format = image::ImageReader::open(&dest)
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .format();
        assert_eq!(format, Some(ImageFormat::Png));
    }

    #[test]
    fn test_small_wallpaper_upscaled_to_hd() {
        let src_dir = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();
        let src = src_dir.path().join("wall.png");
        write_png(&src, 800, 600);

        let dest = ingest(project.path(), &descriptor(&src, "wallpaper", "image"))
            .unwrap()
            .unwrap();
        let out = image::open(&dest).unwrap();
        assert_eq!((out.width(), out.height()), (HD_WIDTH, HD_HEIGHT));
    }

    #[test]
    fn test_large_wallpaper_copied_unmodified() {
        let src_dir = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();
        let src = src_dir.path().join("big.jpg");
        RgbImage::new(3000, 2000).save(&src).unwrap();

        let dest = ingest(project.path(), &descriptor(&src, "wallpaper", "image"))
            .unwrap()
            .unwrap();
        assert_eq!(fs::read(&src).unwrap(), fs::read(&dest).unwrap());
    }

    #[test]
    fn test_other_categories_copy_verbatim() {
        let src_dir = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();
        let src = src_dir.path().join("click.wav");
        fs::write(&src, b"RIFF....WAVE").unwrap();

        let dest = ingest(project.path(), &descriptor(&src, "sounds", "CLICK"))
            .unwrap()
            .unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"RIFF....WAVE");
    }

    #[test]
    fn test_corrupt_image_reports_per_file_error() {
        let src_dir = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();
        let src = src_dir.path().join("broken.png");
        fs::write(&src, b"not an image at all").unwrap();

        let err = ingest(project.path(), &descriptor(&src, "app_icon", "path")).unwrap_err();
        assert!(matches!(err, ModError::AssetProcessing { .. }));
    }

    #[test]
    fn test_ingest_all_continues_past_failures() {
        let src_dir = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();
        let good = src_dir.path().join("ok.png");
        write_png(&good, 10, 10);
        let bad = src_dir.path().join("bad.png");
        fs::write(&bad, b"garbage").unwrap();

        let report = ingest_all(
            project.path(),
            &[
                descriptor(&bad, "app_icon", "path"),
                descriptor(&good, "app_icon", "path"),
            ],
        );
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.written.len(), 1);
    }
}
