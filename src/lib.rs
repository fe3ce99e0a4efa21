//! paintcore — interactive raster-canvas engine.
//!
//! Maintains a square pixel surface that a user paints onto or erases from
//! via continuous pointer drags, plus a colour-selection surface (hue
//! spectrum strip + saturation/value picker square) sampled by pixel
//! lookup. Paint strokes themselves are rendered by an external pipeline;
//! this crate owns the pixel buffers, the erase raster algorithm, and the
//! consistency contract between the writable buffer and the presented
//! render surface.

pub mod logger;

pub mod anchor;
pub mod brush;
pub mod buffer;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod picker;
pub mod surface;

pub use brush::{clamp_to_buffer, stamp, stroke_path, DirtyRect};
pub use buffer::{PixelBuffer, TRANSPARENT};
pub use config::BrushConfig;
pub use controller::{PaintEngine, PaintMode, StrokeEffect, StrokeSegment};
pub use error::{PaintError, PaintResult};
pub use picker::{
    generate_picker_square, generate_spectrum, hsv_to_rgba, rgba_to_hsv, sample, PickerState,
};
pub use surface::{CanvasSurface, MemoryTarget, RenderTarget, DEFAULT_ERASE_RADIUS};
