//! Plain-data brush configuration.
//!
//! These values feed the external paint renderer's shader uniforms, but
//! inside the engine they are an ordinary struct handed to the stroke
//! operations explicitly. Serde-derived so a host can persist tool
//! settings.

use image::Rgba;
use serde::{Deserialize, Serialize};

/// Inclusive value range a UI slider exposes for one parameter.
pub type Range = (f32, f32);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrushConfig {
    /// Paint colour as RGBA bytes (stored flat for serialization).
    pub color: [u8; 4],
    /// Erase brush radius in pixels.
    pub erase_radius: i32,
    /// Paint line thickness, in normalized canvas units (shader-side).
    pub line_size: f32,
    /// Edge-noise displacement amplitude (shader-side).
    pub noise_size: f32,
    /// Edge-noise frequency (shader-side).
    pub noise_scale: f32,
    /// Colour-noise amplitude (shader-side).
    pub noise_color_size: f32,
}

impl BrushConfig {
    pub const LINE_SIZE_RANGE: Range = (0.001, 0.05);
    pub const NOISE_SIZE_RANGE: Range = (0.0, 0.05);
    pub const NOISE_SCALE_RANGE: Range = (1.0, 50.0);
    pub const NOISE_COLOR_SIZE_RANGE: Range = (0.0, 0.3);
    pub const ERASE_RADIUS_RANGE: (i32, i32) = (1, 30);

    pub fn color_rgba(&self) -> Rgba<u8> {
        Rgba(self.color)
    }

    pub fn set_color(&mut self, color: Rgba<u8>) {
        self.color = color.0;
    }

    /// Clamp every parameter into its slider range.
    pub fn clamped(mut self) -> Self {
        self.line_size = self
            .line_size
            .clamp(Self::LINE_SIZE_RANGE.0, Self::LINE_SIZE_RANGE.1);
        self.noise_size = self
            .noise_size
            .clamp(Self::NOISE_SIZE_RANGE.0, Self::NOISE_SIZE_RANGE.1);
        self.noise_scale = self
            .noise_scale
            .clamp(Self::NOISE_SCALE_RANGE.0, Self::NOISE_SCALE_RANGE.1);
        self.noise_color_size = self
            .noise_color_size
            .clamp(Self::NOISE_COLOR_SIZE_RANGE.0, Self::NOISE_COLOR_SIZE_RANGE.1);
        self.erase_radius = self
            .erase_radius
            .clamp(Self::ERASE_RADIUS_RANGE.0, Self::ERASE_RADIUS_RANGE.1);
        self
    }
}

impl Default for BrushConfig {
    /// Black paint, minimum noise/line values (the tool panel resets its
    /// sliders to their range minimums), stock erase radius.
    fn default() -> Self {
        Self {
            color: [0, 0, 0, 255],
            erase_radius: crate::surface::DEFAULT_ERASE_RADIUS,
            line_size: Self::LINE_SIZE_RANGE.0,
            noise_size: Self::NOISE_SIZE_RANGE.0,
            noise_scale: Self::NOISE_SCALE_RANGE.0,
            noise_color_size: Self::NOISE_COLOR_SIZE_RANGE.0,
        }
    }
}
