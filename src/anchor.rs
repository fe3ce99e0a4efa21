//! Anchor-preset classification for rectangular UI regions.
//!
//! A region's anchors are two normalized points, `min` and `max`, each
//! component 0, 0.5 or 1. Matching point pairs pin the region to a corner,
//! edge midpoint or centre; mismatched components stretch it along that
//! axis. This is pure layout bookkeeping for hosts that position the canvas
//! and picker rectangles — a classification function, nothing more.

/// Where a region is pinned (or stretched) inside its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorPreset {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    HorizontalStretchTop,
    HorizontalStretchMiddle,
    HorizontalStretchBottom,
    VerticalStretchLeft,
    VerticalStretchCenter,
    VerticalStretchRight,
    StretchAll,
}

/// One normalized anchor component, snapped to its three meaningful stops.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Stop {
    Zero,
    Half,
    One,
    Other,
}

fn stop(v: f32) -> Stop {
    if v == 0.0 {
        Stop::Zero
    } else if v == 0.5 {
        Stop::Half
    } else if v == 1.0 {
        Stop::One
    } else {
        Stop::Other
    }
}

/// Classify an anchor pair. Unrecognized combinations fall back to
/// `TopLeft`.
pub fn classify(min: (f32, f32), max: (f32, f32)) -> AnchorPreset {
    use Stop::*;
    let key = (stop(min.0), stop(min.1), stop(max.0), stop(max.1));
    match key {
        // pinned: min == max
        (Zero, One, Zero, One) => AnchorPreset::TopLeft,
        (Half, One, Half, One) => AnchorPreset::TopCenter,
        (One, One, One, One) => AnchorPreset::TopRight,
        (Zero, Half, Zero, Half) => AnchorPreset::MiddleLeft,
        (Half, Half, Half, Half) => AnchorPreset::MiddleCenter,
        (One, Half, One, Half) => AnchorPreset::MiddleRight,
        (Zero, Zero, Zero, Zero) => AnchorPreset::BottomLeft,
        (Half, Zero, Half, Zero) => AnchorPreset::BottomCenter,
        (One, Zero, One, Zero) => AnchorPreset::BottomRight,
        // stretched along x
        (Zero, One, One, One) => AnchorPreset::HorizontalStretchTop,
        (Zero, Half, One, Half) => AnchorPreset::HorizontalStretchMiddle,
        (Zero, Zero, One, Zero) => AnchorPreset::HorizontalStretchBottom,
        // stretched along y
        (Zero, Zero, Zero, One) => AnchorPreset::VerticalStretchLeft,
        (Half, Zero, Half, One) => AnchorPreset::VerticalStretchCenter,
        (One, Zero, One, One) => AnchorPreset::VerticalStretchRight,
        // stretched both ways
        (Zero, Zero, One, One) => AnchorPreset::StretchAll,
        _ => AnchorPreset::TopLeft,
    }
}
