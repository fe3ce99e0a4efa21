//! Input event surface: the glue between pointer/UI events and the engine.
//!
//! A host feeds pointer positions (centre-origin, relative to the painted
//! rectangle) and mode/colour changes in; the engine routes them to the
//! canvas surface, the picker, and — in Paint mode — hands normalized
//! stroke segments back out for the external line renderer to draw.

use image::Rgba;

use crate::brush::{clamp_to_buffer, DirtyRect};
use crate::config::BrushConfig;
use crate::error::PaintResult;
use crate::picker::PickerState;
use crate::surface::CanvasSurface;

// ============================================================================
// MODE + SEGMENT HAND-OFF
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaintMode {
    #[default]
    Paint,
    Erase,
}

/// One paint-stroke segment in normalized `[0, 1]²` canvas coordinates.
///
/// Paint strokes are rendered externally (GPU line drawing between two drag
/// samples); this is the hand-off. `start` is the newest drag sample and
/// `end` the previous one — the order the external shader protocol expects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeSegment {
    pub start: (f32, f32),
    pub end: (f32, f32),
}

// ============================================================================
// PAINT ENGINE
// ============================================================================

/// Owns the canvas surface, the colour picker and the brush configuration,
/// and exposes the event methods of the external interface. Strictly
/// sequential: one pointer, one event at a time.
pub struct PaintEngine {
    surface: CanvasSurface,
    picker: PickerState,
    config: BrushConfig,
    mode: PaintMode,
    /// Previous normalized paint position. `None` until the second drag
    /// sample of a paint gesture, so the first sample only seeds the
    /// segment and no zero-length line is emitted.
    segment_anchor: Option<(f32, f32)>,
}

impl PaintEngine {
    /// Build an engine over a square canvas and a picker surface.
    pub fn new(canvas_size: u32, picker_size: u32) -> PaintResult<Self> {
        let surface = CanvasSurface::with_size(canvas_size, canvas_size)?;
        let picker = PickerState::new(picker_size, picker_size)?;
        let mut engine = Self {
            surface,
            picker,
            config: BrushConfig::default(),
            mode: PaintMode::Paint,
            segment_anchor: None,
        };
        engine.config.set_color(engine.picker.current_color());
        engine.surface.set_erase_radius(engine.config.erase_radius)?;
        Ok(engine)
    }

    // ---- accessors ----------------------------------------------------------

    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut CanvasSurface {
        &mut self.surface
    }

    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    pub fn config(&self) -> &BrushConfig {
        &self.config
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    pub fn selected_color(&self) -> Rgba<u8> {
        self.picker.current_color()
    }

    // ---- pointer events -----------------------------------------------------

    /// Drag gesture started at a centre-origin pointer position.
    pub fn on_stroke_begin(&mut self, pos: (f32, f32)) {
        let clamped = self.clamp_to_canvas(pos);
        self.surface.begin_stroke(clamped);
        self.segment_anchor = None;
    }

    /// Drag continued. In Erase mode the raster erase runs and the returned
    /// segment is `None`; in Paint mode no pixels change here and the
    /// normalized segment (if any) is handed to the external renderer.
    pub fn on_stroke_continue(&mut self, pos: (f32, f32)) -> PaintResult<StrokeEffect> {
        match self.mode {
            PaintMode::Paint => {
                let current = self.normalize_to_canvas(pos);
                let segment = self
                    .segment_anchor
                    .map(|previous| StrokeSegment { start: current, end: previous });
                self.segment_anchor = Some(current);
                Ok(StrokeEffect::Paint(segment))
            }
            PaintMode::Erase => {
                let clamped = self.clamp_to_canvas(pos);
                let dirty = self.surface.continue_stroke(clamped)?;
                Ok(StrokeEffect::Erased(dirty))
            }
        }
    }

    /// Drag gesture ended: drop per-gesture state.
    pub fn on_stroke_end(&mut self) {
        self.segment_anchor = None;
        self.surface.end_stroke();
    }

    // ---- commands -----------------------------------------------------------

    pub fn on_clear_requested(&mut self) -> PaintResult<()> {
        self.surface.clear()
    }

    pub fn on_mode_changed(&mut self, mode: PaintMode) {
        self.mode = mode;
    }

    pub fn set_erase_size(&mut self, radius: i32) -> PaintResult<()> {
        self.surface.set_erase_radius(radius)?;
        self.config.erase_radius = radius;
        Ok(())
    }

    // ---- colour selection ---------------------------------------------------

    /// Spectrum slider moved: regenerate the picker square and adopt the
    /// re-sampled colour as the paint colour.
    pub fn on_spectrum_position_changed(&mut self, hue: f32) -> PaintResult<Rgba<u8>> {
        let color = self.picker.set_hue(hue)?;
        self.config.set_color(color);
        Ok(color)
    }

    /// Picker knob moved (centre-origin coordinates over the square).
    pub fn on_picker_position_changed(&mut self, pos: (f32, f32)) -> PaintResult<Rgba<u8>> {
        let color = self.picker.pick_at_pointer(pos.0, pos.1)?;
        self.config.set_color(color);
        Ok(color)
    }

    // ---- coordinate helpers -------------------------------------------------

    fn clamp_to_canvas(&self, pos: (f32, f32)) -> (f32, f32) {
        clamp_to_buffer(pos, self.surface.width(), self.surface.height())
    }

    /// Centre-origin → normalized [0, 1] (paint hand-off; unclamped, as the
    /// external renderer clips in its own space).
    fn normalize_to_canvas(&self, pos: (f32, f32)) -> (f32, f32) {
        let w = self.surface.width() as f32;
        let h = self.surface.height() as f32;
        ((w * 0.5 + pos.0) / w, (h * 0.5 + pos.1) / h)
    }
}

/// What a drag-continuation did, per mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeEffect {
    /// Paint mode: segment for the external renderer (`None` on the first
    /// sample of a gesture).
    Paint(Option<StrokeSegment>),
    /// Erase mode: region of the canvas that changed, if any.
    Erased(Option<DirtyRect>),
}

// ============================================================================
// TESTS
// ============================================================================
