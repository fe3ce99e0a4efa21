//! End-to-end scenarios: full drag gestures through the engine, and the
//! spectrum → picker square → sample pipeline.

use image::Rgba;

use paintcore::{
    generate_picker_square, generate_spectrum, hsv_to_rgba, sample, CanvasSurface, PaintEngine,
    PaintError, PaintMode, StrokeEffect, TRANSPARENT,
};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

// ============================================================================
// Erase gesture
// ============================================================================

#[test]
fn erase_drag_clears_tightened_circles_along_the_path() {
    // 100×100 opaque white canvas; erase radius 5; one segment (50,50)→(60,50)
    // in buffer space.
    let mut canvas = CanvasSurface::with_size(100, 100).unwrap();
    canvas.fill(WHITE).unwrap();
    canvas.set_erase_radius(5).unwrap();

    canvas.begin_stroke((50.0, 50.0));
    canvas.continue_stroke((60.0, 50.0)).unwrap();

    let snap = canvas.snapshot().unwrap();
    let limit = 25.0 * 0.5;

    // Every pixel inside the tightened circle of SOME interpolated centre
    // (50,50), (51,50), …, (59,50) must be transparent; everything else
    // must still be white. The endpoint (60,50) is excluded by contract,
    // but its neighbourhood is covered by the centres before it.
    let centers: Vec<(f32, f32)> = (50..60).map(|x| (x as f32, 50.0)).collect();
    for y in 0..100u32 {
        for x in 0..100u32 {
            let erased = centers.iter().any(|c| {
                let dx = x as f32 - c.0;
                let dy = y as f32 - c.1;
                dx * dx + dy * dy < limit
            });
            let px = snap.get(x, y).unwrap();
            if erased {
                assert_eq!(px, TRANSPARENT, "({}, {}) should be erased", x, y);
            } else {
                assert_eq!(px, WHITE, "({}, {}) should be untouched", x, y);
            }
        }
    }

    // Explicit corner check from the scenario.
    assert_eq!(snap.get(0, 0).unwrap(), WHITE);
}

#[test]
fn full_pointer_gesture_through_the_engine() {
    // Same scenario driven through the event surface with centre-origin
    // pointer coordinates: (0,0) maps to buffer (50,50).
    let mut engine = PaintEngine::new(100, 64).unwrap();
    engine.surface_mut().fill(WHITE).unwrap();
    engine.on_mode_changed(PaintMode::Erase);
    engine.set_erase_size(5).unwrap();

    engine.on_stroke_begin((0.0, 0.0));
    let effect = engine.on_stroke_continue((10.0, 0.0)).unwrap();
    assert!(matches!(effect, StrokeEffect::Erased(Some(_))));
    engine.on_stroke_end();

    let snap = engine.surface().snapshot().unwrap();
    assert_eq!(snap.get(50, 50).unwrap(), TRANSPARENT);
    assert_eq!(snap.get(55, 50).unwrap(), TRANSPARENT);
    assert_eq!(snap.get(0, 0).unwrap(), WHITE);
}

#[test]
fn continue_without_begin_leaves_canvas_untouched() {
    let mut canvas = CanvasSurface::with_size(50, 50).unwrap();
    canvas.fill(WHITE).unwrap();
    let before = canvas.snapshot().unwrap();

    let err = canvas.continue_stroke((25.0, 25.0)).unwrap_err();
    assert!(matches!(err, PaintError::InvalidState(_)));
    assert_eq!(canvas.snapshot().unwrap(), before);
}

#[test]
fn clear_then_read_is_fully_transparent() {
    let mut canvas = CanvasSurface::with_size(64, 64).unwrap();
    canvas.fill(Rgba([12, 34, 56, 255])).unwrap();
    canvas.clear().unwrap();

    let snap = canvas.snapshot().unwrap();
    for y in 0..64 {
        for x in 0..64 {
            assert_eq!(snap.get(x, y).unwrap(), TRANSPARENT);
        }
    }
}

// ============================================================================
// Colour pipeline
// ============================================================================

#[test]
fn spectrum_to_square_to_sample_pipeline() {
    let strip = generate_spectrum(360).unwrap();

    // Hue at spectrum index 90 is 90/360 = 0.25; the strip pixel there must
    // be exactly the HSV conversion.
    let hue = 90.0 / 360.0;
    let strip_px = strip.get(90, 0).unwrap();
    assert_eq!(strip_px, hsv_to_rgba(hue, 1.0, 1.0, 255));

    let square = generate_picker_square(hue, 100, 100).unwrap();

    // The pure hue sits at the top-right corner (W-1, 0); every channel is
    // within truncation slack of the direct HSV conversion.
    let target = hsv_to_rgba(hue, 1.0, 1.0, 255);
    let corner = sample(&square, 99.0, 0.0).unwrap();
    for ch in 0..3 {
        let diff = (corner.0[ch] as i16 - target.0[ch] as i16).abs();
        assert!(diff <= 5, "channel {} off by {}", ch, diff);
    }

    // The bottom-left corner is black.
    assert_eq!(sample(&square, 0.0, 99.0).unwrap(), Rgba([0, 0, 0, 255]));

    // Sampling is idempotent and bounds-checked.
    assert_eq!(sample(&square, 99.0, 0.0).unwrap(), corner);
    assert!(matches!(
        sample(&square, 100.0, 0.0),
        Err(PaintError::OutOfBounds { .. })
    ));
}

#[test]
fn selected_colour_survives_a_mode_round_trip() {
    let mut engine = PaintEngine::new(64, 64).unwrap();
    engine.on_picker_position_changed((20.0, -20.0)).unwrap();
    let picked = engine.on_spectrum_position_changed(2.0 / 3.0).unwrap();
    assert_ne!(picked, Rgba([0, 0, 0, 255]));

    engine.on_mode_changed(PaintMode::Erase);
    engine.on_mode_changed(PaintMode::Paint);

    assert_eq!(engine.selected_color(), picked);
    assert_eq!(engine.config().color_rgba(), picked);
}
