//! Colour selection: HSV conversion, spectrum strip and picker-square
//! generation, and pixel-lookup sampling.
//!
//! The picker surface is two raw pixel buffers: a `width×1` hue spectrum and
//! a `width×height` saturation/value square for the currently selected hue.
//! A colour is chosen purely by reading a pixel out of the square — there is
//! no analytic inverse, the buffer *is* the gamut.

use image::Rgba;
use rayon::prelude::*;

use crate::brush::clamp_to_buffer;
use crate::buffer::PixelBuffer;
use crate::error::{PaintError, PaintResult};

// ============================================================================
// HSV <-> RGBA
// ============================================================================

/// Convert HSV (all components 0.0–1.0) to an RGBA colour.
/// Byte scaling truncates, matching the generator contract below.
pub fn hsv_to_rgba(h: f32, s: f32, v: f32, a: u8) -> Rgba<u8> {
    let h6 = h * 6.0;
    let c = v * s;
    let x = c * (1.0 - ((h6 % 2.0) - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match h6 as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Rgba([
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
        a,
    ])
}

/// Convert an RGBA colour to `[h, s, v]`, each 0.0–1.0. Alpha is ignored.
pub fn rgba_to_hsv(color: Rgba<u8>) -> [f32; 3] {
    let r = color.0[0] as f32 / 255.0;
    let g = color.0[1] as f32 / 255.0;
    let b = color.0[2] as f32 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let h = if d == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / d % 6.0) / 6.0
    } else if max == g {
        (((b - r) / d) + 2.0) / 6.0
    } else {
        (((r - g) / d) + 4.0) / 6.0
    };
    let h = if h < 0.0 { h + 1.0 } else { h };
    let s = if max == 0.0 { 0.0 } else { d / max };
    [h, s, max]
}

// ============================================================================
// HEX READ-OUT
// ============================================================================

/// `RRGGBB` hex string for the colour (alpha omitted, uppercase).
pub fn color_to_hex(color: Rgba<u8>) -> String {
    format!("{:02X}{:02X}{:02X}", color.0[0], color.0[1], color.0[2])
}

/// Parse an `RRGGBB` hex string (optional leading `#`) into an opaque colour.
pub fn color_from_hex(s: &str) -> PaintResult<Rgba<u8>> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PaintError::InvalidArgument(format!(
            "expected 6-digit hex colour, got {:?}",
            s
        )));
    }
    let parse = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|e| PaintError::InvalidArgument(e.to_string()))
    };
    Ok(Rgba([parse(0..2)?, parse(2..4)?, parse(4..6)?, 255]))
}

// ============================================================================
// GENERATORS — pure, deterministic pixel-buffer producers
// ============================================================================

/// Generate the `width×1` hue spectrum strip: pixel `i` is the fully
/// saturated, full-value colour at hue `i / width`, opaque.
pub fn generate_spectrum(width: u32) -> PaintResult<PixelBuffer> {
    let mut buf = PixelBuffer::new(width, 1)?;
    for (i, px) in buf.pixels_mut().iter_mut().enumerate() {
        let hue = i as f32 / width as f32;
        *px = hsv_to_rgba(hue, 1.0, 1.0, 255);
    }
    Ok(buf)
}

/// Generate the `width×height` saturation/value picker square for `hue`.
///
/// For column `i`, row `j` (top-left origin, y down):
///   `u = (width - i) / width`       — white blend, pure hue at the right edge
///   `v = (height - 1 - j) / height` — brightness, exactly black on the bottom row
/// and each channel of the byte-scaled pure hue colour `t` becomes
/// `((u * (255 - t)) + t) * v`, truncated to a byte. Alpha is 255.
///
/// The pure hue therefore sits at the top-right corner `(W-1, 0)`, the
/// top-left fades to white and the bottom row is black.
///
/// Rows are generated in parallel — the buffer is not shared until returned.
pub fn generate_picker_square(hue: f32, width: u32, height: u32) -> PaintResult<PixelBuffer> {
    let mut buf = PixelBuffer::new(width, height)?;
    let target = hsv_to_rgba(hue, 1.0, 1.0, 255);
    let tr = target.0[0] as f32;
    let tg = target.0[1] as f32;
    let tb = target.0[2] as f32;

    buf.pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(j, row)| {
            let v = (height - 1 - j as u32) as f32 / height as f32;
            for (i, px) in row.iter_mut().enumerate() {
                let u = (width - i as u32) as f32 / width as f32;
                let r = u * (255.0 - tr) + tr;
                let g = u * (255.0 - tg) + tg;
                let b = u * (255.0 - tb) + tb;
                *px = Rgba([(r * v) as u8, (g * v) as u8, (b * v) as u8, 255]);
            }
        });
    Ok(buf)
}

// ============================================================================
// SAMPLER
// ============================================================================

/// Read the colour under a float coordinate, truncating toward zero.
///
/// Callers are expected to pre-clamp pointer positions (see
/// [`clamp_to_buffer`]); coordinates that truncate outside the buffer fail
/// with `OutOfBounds`. Read-only and idempotent.
pub fn sample(buffer: &PixelBuffer, x: f32, y: f32) -> PaintResult<Rgba<u8>> {
    let ix = x.trunc() as i64;
    let iy = y.trunc() as i64;
    if !buffer.contains(ix, iy) {
        return Err(buffer.oob(ix, iy));
    }
    buffer.get(ix as u32, iy as u32)
}

// ============================================================================
// PICKER STATE — spectrum + square + current selection
// ============================================================================

/// Owns the two picker buffers and the current selection.
///
/// The spectrum strip is generated once at construction; the square is
/// regenerated whenever the hue changes. The last picked pixel is remembered
/// so a hue change re-samples the selected colour at the same spot, exactly
/// as a picker knob stays put while the square shifts underneath it.
pub struct PickerState {
    spectrum: PixelBuffer,
    square: PixelBuffer,
    hue: f32,
    current_color: Rgba<u8>,
    current_pixel: (f32, f32),
}

impl PickerState {
    /// Build a picker with a `width×1` spectrum and a `width×height` square
    /// at hue 0.
    pub fn new(width: u32, height: u32) -> PaintResult<Self> {
        let spectrum = generate_spectrum(width)?;
        let square = generate_picker_square(0.0, width, height)?;
        // Knob starts in the black corner, so the initial selection is black.
        let current_pixel = (0.0, (height - 1) as f32);
        let current_color = sample(&square, current_pixel.0, current_pixel.1)?;
        Ok(Self {
            spectrum,
            square,
            hue: 0.0,
            current_color,
            current_pixel,
        })
    }

    pub fn spectrum(&self) -> &PixelBuffer {
        &self.spectrum
    }

    pub fn square(&self) -> &PixelBuffer {
        &self.square
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn current_color(&self) -> Rgba<u8> {
        self.current_color
    }

    /// Hex read-out of the current selection.
    pub fn current_hex(&self) -> String {
        color_to_hex(self.current_color)
    }

    /// Spectrum position changed: regenerate the square for the new hue and
    /// re-sample the selection at the remembered pixel. Returns the new
    /// selected colour.
    pub fn set_hue(&mut self, hue: f32) -> PaintResult<Rgba<u8>> {
        self.hue = hue.clamp(0.0, 1.0);
        self.square =
            generate_picker_square(self.hue, self.square.width(), self.square.height())?;
        self.current_color = sample(&self.square, self.current_pixel.0, self.current_pixel.1)?;
        Ok(self.current_color)
    }

    /// Picker position changed, in buffer space. Remembers the pixel and
    /// returns the newly selected colour.
    pub fn pick(&mut self, x: f32, y: f32) -> PaintResult<Rgba<u8>> {
        self.current_color = sample(&self.square, x, y)?;
        self.current_pixel = (x, y);
        Ok(self.current_color)
    }

    /// Picker position changed, in centre-origin pointer coordinates.
    /// Applies the shared clamp policy before sampling, so this cannot miss
    /// the buffer.
    pub fn pick_at_pointer(&mut self, local_x: f32, local_y: f32) -> PaintResult<Rgba<u8>> {
        let (x, y) = clamp_to_buffer(
            (local_x, local_y),
            self.square.width(),
            self.square.height(),
        );
        self.pick(x, y)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn channel_close(a: u8, b: u8, tol: u8) -> bool {
        (a as i16 - b as i16).unsigned_abs() as u8 <= tol
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(hsv_to_rgba(0.0, 1.0, 1.0, 255), Rgba([255, 0, 0, 255]));
        assert_eq!(hsv_to_rgba(1.0 / 3.0, 1.0, 1.0, 255), Rgba([0, 255, 0, 255]));
        assert_eq!(hsv_to_rgba(2.0 / 3.0, 1.0, 1.0, 255), Rgba([0, 0, 255, 255]));
        // s = 0 collapses to grey regardless of hue
        assert_eq!(hsv_to_rgba(0.42, 0.0, 1.0, 255), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn hsv_round_trip() {
        for &(h, s, v) in &[(0.12, 0.8, 0.9), (0.55, 0.3, 0.4), (0.91, 1.0, 1.0)] {
            let c = hsv_to_rgba(h, s, v, 255);
            let [h2, s2, v2] = rgba_to_hsv(c);
            assert!((h - h2).abs() < 0.02, "hue {} -> {}", h, h2);
            assert!((s - s2).abs() < 0.02);
            assert!((v - v2).abs() < 0.02);
        }
    }

    #[test]
    fn hex_round_trip() {
        let c = Rgba([0x1A, 0xB2, 0x03, 255]);
        assert_eq!(color_to_hex(c), "1AB203");
        assert_eq!(color_from_hex("1AB203").unwrap(), c);
        assert_eq!(color_from_hex("#1ab203").unwrap(), c);
        assert!(color_from_hex("12345").is_err());
        assert!(color_from_hex("zzzzzz").is_err());
    }

    #[test]
    fn spectrum_has_width_pixels_and_red_ends() {
        let strip = generate_spectrum(360).unwrap();
        assert_eq!(strip.width(), 360);
        assert_eq!(strip.height(), 1);
        // index 0: hue 0 — pure red
        assert_eq!(strip.get(0, 0).unwrap(), Rgba([255, 0, 0, 255]));
        // last index: hue 359/360 — wrapping back toward red
        let last = strip.get(359, 0).unwrap();
        assert_eq!(last.0[0], 255);
        assert!(last.0[2] < 8, "blue channel should be nearly gone: {:?}", last);
    }

    #[test]
    fn spectrum_rejects_zero_width() {
        assert!(matches!(
            generate_spectrum(0),
            Err(PaintError::InvalidArgument(_))
        ));
    }

    #[test]
    fn picker_square_corners() {
        let hue = 0.25; // (127, 255, 0)
        let sq = generate_picker_square(hue, 100, 100).unwrap();

        // Bottom row (v = 0) is exactly black, including both corners.
        assert_eq!(sq.get(0, 99).unwrap(), Rgba([0, 0, 0, 255]));
        assert_eq!(sq.get(99, 99).unwrap(), Rgba([0, 0, 0, 255]));

        // Top-right corner approaches the pure hue (u and v are 1/W off
        // from their ideals, so allow a few counts of truncation slack).
        let target = hsv_to_rgba(hue, 1.0, 1.0, 255);
        let corner = sq.get(99, 0).unwrap();
        for ch in 0..3 {
            assert!(
                channel_close(corner.0[ch], target.0[ch], 5),
                "channel {}: {} vs {}",
                ch,
                corner.0[ch],
                target.0[ch]
            );
        }

        // Top-left corner blends to white.
        let top = sq.get(0, 0).unwrap();
        for ch in 0..3 {
            assert!(channel_close(top.0[ch], 255, 5), "top-left {:?}", top);
        }
    }

    #[test]
    fn picker_square_rejects_zero_dimensions() {
        assert!(generate_picker_square(0.5, 0, 10).is_err());
        assert!(generate_picker_square(0.5, 10, 0).is_err());
    }

    #[test]
    fn sample_truncates_and_bounds_checks() {
        let sq = generate_picker_square(0.6, 16, 16).unwrap();
        let a = sample(&sq, 7.9, 3.2).unwrap();
        assert_eq!(a, sq.get(7, 3).unwrap());
        // idempotent
        assert_eq!(sample(&sq, 7.9, 3.2).unwrap(), a);
        assert!(matches!(
            sample(&sq, 16.0, 0.0),
            Err(PaintError::OutOfBounds { .. })
        ));
        // -0.5 truncates toward zero, landing at row 0 — still in bounds.
        assert!(sample(&sq, 0.0, -0.5).is_ok());
        assert!(matches!(
            sample(&sq, 0.0, -1.2),
            Err(PaintError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn picker_state_starts_black() {
        let picker = PickerState::new(48, 48).unwrap();
        assert_eq!(picker.current_color(), Rgba([0, 0, 0, 255]));
        assert_eq!(picker.current_hex(), "000000");
    }

    #[test]
    fn picker_state_resamples_on_hue_change() {
        let mut picker = PickerState::new(64, 64).unwrap();
        let picked = picker.pick(60.0, 60.0).unwrap();
        assert_eq!(picker.current_color(), picked);

        let after = picker.set_hue(0.5).unwrap();
        // same pixel, new square
        assert_eq!(after, sample(picker.square(), 60.0, 60.0).unwrap());
        assert_ne!(after, picked);
    }

    #[test]
    fn pick_at_pointer_clamps_instead_of_failing() {
        let mut picker = PickerState::new(32, 32).unwrap();
        // Far off the square in centre-origin coordinates: clamps to an edge.
        let c = picker.pick_at_pointer(1000.0, -1000.0).unwrap();
        assert_eq!(c, sample(picker.square(), 31.0, 0.0).unwrap());
    }
}
