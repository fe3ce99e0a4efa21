//! The paintable canvas: an authoritative render target plus its CPU mirror.
//!
//! The presentation side owns a texture (the *authoritative* surface — what
//! the user actually sees, including paint strokes rendered externally on
//! the GPU). The erase algorithm runs on the CPU, so every erase cycle is a
//! read-modify-write: pull the target into the mirror, stamp the mirror,
//! flush the mirror back. The pull step is mandatory — skipping it would
//! discard any paint rendered since the last erase.

use image::Rgba;

use crate::brush::{stamp, stroke_path, DirtyRect};
use crate::buffer::{PixelBuffer, TRANSPARENT};
use crate::error::{PaintError, PaintResult};

/// Default erase brush radius, in pixels.
pub const DEFAULT_ERASE_RADIUS: i32 = 20;

// ============================================================================
// RENDER TARGET — the authoritative surface abstraction
// ============================================================================

/// Contract between the canvas and whatever owns the displayed pixels.
///
/// A GPU texture implements this with a read-back and an upload; the
/// in-crate [`MemoryTarget`] implements it with plain copies. Implementors
/// backed by external resources surface their failures as
/// [`PaintError::RenderTargetUnavailable`]; the canvas aborts the stroke
/// and leaves its state consistent.
pub trait RenderTarget {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Read the full current contents into `dst` (dimensions must match).
    fn pull_into(&self, dst: &mut PixelBuffer) -> PaintResult<()>;

    /// Overwrite the full contents from `src` (dimensions must match).
    fn flush_from(&mut self, src: &PixelBuffer) -> PaintResult<()>;

    /// Reset to fully transparent. No read-back involved.
    fn clear(&mut self) -> PaintResult<()>;
}

/// CPU-only render target backed by a pixel buffer. Used headless and in
/// tests; a windowed host would swap in a texture-backed implementation.
pub struct MemoryTarget {
    buffer: PixelBuffer,
}

impl MemoryTarget {
    pub fn new(width: u32, height: u32) -> PaintResult<Self> {
        Ok(Self {
            buffer: PixelBuffer::new(width, height)?,
        })
    }
}

impl RenderTarget for MemoryTarget {
    fn width(&self) -> u32 {
        self.buffer.width()
    }

    fn height(&self) -> u32 {
        self.buffer.height()
    }

    fn pull_into(&self, dst: &mut PixelBuffer) -> PaintResult<()> {
        dst.copy_from(&self.buffer)
    }

    fn flush_from(&mut self, src: &PixelBuffer) -> PaintResult<()> {
        self.buffer.copy_from(src)
    }

    fn clear(&mut self) -> PaintResult<()> {
        self.buffer.clear();
        Ok(())
    }
}

// ============================================================================
// CANVAS SURFACE
// ============================================================================

/// Owns the canonical pixel state of the paintable area and coordinates
/// erase strokes against it.
///
/// All coordinates are buffer-space (top-left origin); pointer conversion
/// and clamping happen in the caller (see `brush::clamp_to_buffer`). Calls
/// must arrive sequentially — each `continue_stroke` is a read-modify-write
/// critical section against the render target.
pub struct CanvasSurface {
    target: Box<dyn RenderTarget>,
    /// CPU mirror of the target, re-pulled at the start of every erase
    /// cycle. Scratch between cycles, so a failed flush never leaves the
    /// authoritative surface half-written.
    mirror: PixelBuffer,
    last_center: Option<(f32, f32)>,
    erase_radius: i32,
    dirty_generation: u64,
}

impl CanvasSurface {
    pub fn new(target: Box<dyn RenderTarget>) -> PaintResult<Self> {
        let mirror = PixelBuffer::new(target.width(), target.height())?;
        Ok(Self {
            target,
            mirror,
            last_center: None,
            erase_radius: DEFAULT_ERASE_RADIUS,
            dirty_generation: 0,
        })
    }

    /// Convenience constructor over an in-memory target.
    pub fn with_size(width: u32, height: u32) -> PaintResult<Self> {
        Self::new(Box::new(MemoryTarget::new(width, height)?))
    }

    // ---- accessors ----------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.mirror.width()
    }

    pub fn height(&self) -> u32 {
        self.mirror.height()
    }

    pub fn erase_radius(&self) -> i32 {
        self.erase_radius
    }

    pub fn set_erase_radius(&mut self, radius: i32) -> PaintResult<()> {
        if radius < 0 {
            return Err(PaintError::InvalidArgument(format!(
                "erase radius must be non-negative, got {}",
                radius
            )));
        }
        self.erase_radius = radius;
        Ok(())
    }

    /// Bumped on every mutation; a presentation layer re-reads the surface
    /// when this moves.
    pub fn dirty_generation(&self) -> u64 {
        self.dirty_generation
    }

    pub fn is_stroke_active(&self) -> bool {
        self.last_center.is_some()
    }

    // ---- stroke lifecycle ---------------------------------------------------

    /// Record the brush centre at gesture start. No pixels change.
    pub fn begin_stroke(&mut self, center: (f32, f32)) {
        self.last_center = Some(center);
    }

    /// Apply one erase segment from the last recorded centre to `center`.
    ///
    /// The full cycle: pull the authoritative target into the mirror,
    /// stamp a transparent circle at every interpolated path point, flush
    /// the mirror back, then advance the recorded centre. Any target
    /// failure aborts before the centre advances.
    ///
    /// Fails with `InvalidState` when no stroke has begun.
    pub fn continue_stroke(&mut self, center: (f32, f32)) -> PaintResult<Option<DirtyRect>> {
        let last = self
            .last_center
            .ok_or(PaintError::InvalidState("continue_stroke before begin_stroke"))?;

        self.target.pull_into(&mut self.mirror)?;

        let mut dirty = None;
        for point in stroke_path(last, center) {
            let touched = stamp(&mut self.mirror, point, self.erase_radius, TRANSPARENT)?;
            dirty = DirtyRect::union(dirty, touched);
        }

        self.target.flush_from(&self.mirror)?;
        self.last_center = Some(center);
        self.dirty_generation += 1;
        Ok(dirty)
    }

    /// Forget the recorded centre at gesture end.
    pub fn end_stroke(&mut self) {
        self.last_center = None;
    }

    // ---- whole-surface operations -------------------------------------------

    /// Reset the canvas to transparent. No read-back is needed.
    pub fn clear(&mut self) -> PaintResult<()> {
        self.target.clear()?;
        self.mirror.clear();
        self.dirty_generation += 1;
        Ok(())
    }

    /// Replace the canvas contents wholesale (e.g. restoring a session or
    /// seeding a background).
    pub fn load(&mut self, contents: &PixelBuffer) -> PaintResult<()> {
        self.target.flush_from(contents)?;
        self.mirror.copy_from(contents)?;
        self.dirty_generation += 1;
        Ok(())
    }

    /// Consistent, fully-flushed read of the current canvas. Never exposes
    /// partial-stroke state: strokes are synchronous, so by the time this
    /// runs the last cycle has flushed.
    pub fn snapshot(&self) -> PaintResult<PixelBuffer> {
        let mut out = PixelBuffer::new(self.mirror.width(), self.mirror.height())?;
        self.target.pull_into(&mut out)?;
        Ok(out)
    }

    /// Fill the canvas with a solid colour (demo/test seeding).
    pub fn fill(&mut self, color: Rgba<u8>) -> PaintResult<()> {
        let filled = PixelBuffer::new_filled(self.width(), self.height(), color)?;
        self.load(&filled)
    }
}

// ============================================================================
// TESTS
// ============================================================================
