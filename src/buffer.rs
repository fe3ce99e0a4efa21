use image::{Rgba, RgbaImage};

use crate::error::{PaintError, PaintResult};

/// A pixel with zero alpha, used for empty fills and erased regions.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

// ============================================================================
// PIXEL BUFFER — flat, exclusively-owned RGBA surface
// ============================================================================

/// Flat 2D RGBA pixel surface backed by a single `Vec`.
///
/// Layout is **row-major**: `index = y * width + x`, origin at the top-left,
/// x growing right and y growing down. This matches `image::RgbaImage`
/// memory order, so the raw-byte and `RgbaImage` bridges below are straight
/// copies with no reshuffling.
///
/// The buffer is exclusively owned by whichever component created it (a
/// picker generator or a canvas surface); it is never shared or aliased.
#[derive(Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba<u8>>,
}

impl PixelBuffer {
    // ---- construction -------------------------------------------------------

    /// Create a fully transparent buffer. Fails on zero dimensions.
    pub fn new(width: u32, height: u32) -> PaintResult<Self> {
        if width == 0 || height == 0 {
            return Err(PaintError::InvalidArgument(format!(
                "buffer dimensions must be positive, got {}×{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: vec![TRANSPARENT; (width as usize) * (height as usize)],
        })
    }

    /// Create a buffer filled with a solid color.
    pub fn new_filled(width: u32, height: u32, color: Rgba<u8>) -> PaintResult<Self> {
        let mut buf = Self::new(width, height)?;
        buf.fill(color);
        Ok(buf)
    }

    /// Import from a flat `RgbaImage` (same row-major layout).
    pub fn from_rgba_image(src: &RgbaImage) -> PaintResult<Self> {
        let mut buf = Self::new(src.width(), src.height())?;
        for (dst, px) in buf.pixels.iter_mut().zip(src.pixels()) {
            *dst = *px;
        }
        Ok(buf)
    }

    // ---- geometry -----------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count (`width * height`).
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    // ---- pixel access -------------------------------------------------------

    /// Read the pixel at (x, y). `OutOfBounds` outside the buffer extent.
    pub fn get(&self, x: u32, y: u32) -> PaintResult<Rgba<u8>> {
        if x >= self.width || y >= self.height {
            return Err(self.oob(x as i64, y as i64));
        }
        Ok(self.pixels[self.index(x, y)])
    }

    /// Overwrite the pixel at (x, y). `OutOfBounds` outside the buffer extent.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba<u8>) -> PaintResult<()> {
        if x >= self.width || y >= self.height {
            return Err(self.oob(x as i64, y as i64));
        }
        let idx = self.index(x, y);
        self.pixels[idx] = color;
        Ok(())
    }

    /// Overwrite the pixel at a signed coordinate if it lies inside the
    /// buffer; silently skip otherwise. Used by the brush stamper, which
    /// probes a square neighbourhood that may overhang the edges.
    #[inline]
    pub(crate) fn set_clipped(&mut self, x: i64, y: i64, color: Rgba<u8>) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[idx] = color;
        true
    }

    pub(crate) fn oob(&self, x: i64, y: i64) -> PaintError {
        PaintError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    // ---- whole-buffer operations --------------------------------------------

    /// Fill every pixel with `color`.
    pub fn fill(&mut self, color: Rgba<u8>) {
        for px in &mut self.pixels {
            *px = color;
        }
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.fill(TRANSPARENT);
    }

    /// Replace this buffer's contents from another of identical dimensions.
    pub(crate) fn copy_from(&mut self, other: &PixelBuffer) -> PaintResult<()> {
        if self.width != other.width || self.height != other.height {
            return Err(PaintError::InvalidArgument(format!(
                "dimension mismatch: {}×{} vs {}×{}",
                self.width, self.height, other.width, other.height
            )));
        }
        self.pixels.copy_from_slice(&other.pixels);
        Ok(())
    }

    // ---- export bridges -----------------------------------------------------

    /// Flat RGBA byte copy (row-major), suitable for texture upload.
    pub fn as_raw_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            out.extend_from_slice(&px.0);
        }
        out
    }

    /// Convert to an `image::RgbaImage` for encoding or inspection.
    pub fn to_rgba_image(&self) -> RgbaImage {
        // from_raw cannot fail here: the byte count is len * 4 by construction.
        RgbaImage::from_raw(self.width, self.height, self.as_raw_rgba())
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    /// Mutable access to the flat pixel slice, for row-parallel generator
    /// loops. Row `y` occupies `[y * width, (y + 1) * width)`.
    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgba<u8>] {
        &mut self.pixels
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
