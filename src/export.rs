//! Canvas capture and PNG export.
//!
//! The capture path reads a consistent, fully-flushed snapshot of the
//! canvas — strokes are synchronous, so no partial-stroke state can be
//! observed — and encodes it with the `image` crate.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::RgbaImage;

use crate::error::PaintResult;
use crate::surface::CanvasSurface;

/// Read the current canvas as an `RgbaImage`.
pub fn capture(surface: &CanvasSurface) -> PaintResult<RgbaImage> {
    Ok(surface.snapshot()?.to_rgba_image())
}

/// Capture the canvas and write it as a PNG to `path`.
pub fn export_png(surface: &CanvasSurface, path: &Path) -> PaintResult<()> {
    let img = capture(surface)?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Capture the canvas and write `{unix_millis}.png` into `dir`, creating
/// the directory if needed. Returns the path written.
pub fn export_png_timestamped(surface: &CanvasSurface, dir: &Path) -> PaintResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.png", unix_millis()));
    export_png(surface, &path)?;
    Ok(path)
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("paintcore-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn capture_matches_canvas_pixels() {
        let mut canvas = CanvasSurface::with_size(8, 8).unwrap();
        canvas.fill(Rgba([1, 2, 3, 255])).unwrap();
        let img = capture(&canvas).unwrap();
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(*img.get_pixel(4, 4), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn timestamped_export_writes_a_png() {
        let mut canvas = CanvasSurface::with_size(4, 4).unwrap();
        canvas.fill(Rgba([200, 100, 50, 255])).unwrap();

        let dir = scratch_dir("export");
        let path = export_png_timestamped(&canvas, &dir).unwrap();
        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(*decoded.get_pixel(0, 0), Rgba([200, 100, 50, 255]));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
