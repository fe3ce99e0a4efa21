// ============================================================================
// paintcore CLI — headless canvas rendering via command-line arguments
// ============================================================================
//
// Usage examples:
//   paintcore --spectrum-out spectrum.png
//   paintcore --picker-out square.png --hue 0.25 --picker-size 256
//   paintcore --erase-demo-out erased.png --size 512 --erase-radius 12
//
// Everything runs synchronously on the current thread; rayon is only used
// inside the picker-square generator.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use image::Rgba;

use crate::controller::{PaintEngine, PaintMode};
use crate::error::PaintResult;
use crate::export;
use crate::picker::{generate_picker_square, generate_spectrum};
use crate::{log_err, log_info};

// ============================================================================
// CLI argument definition (clap Derive)
// ============================================================================

/// paintcore headless renderer.
///
/// Render the colour-picker buffers to PNG and/or run a scripted erase pass
/// over a solid canvas — no GUI required.
#[derive(Parser, Debug)]
#[command(
    name = "paintcore",
    about = "paintcore headless canvas renderer",
    long_about = "Render the hue spectrum strip, a saturation/value picker square,\n\
                  or an erase-stroke demo canvas to PNG files.\n\n\
                  Example:\n  \
                  paintcore --picker-out square.png --hue 0.25\n  \
                  paintcore --erase-demo-out out.png --size 512 --erase-radius 12"
)]
pub struct CliArgs {
    /// Write the hue spectrum strip (width × 1) to this PNG.
    #[arg(long, value_name = "FILE")]
    pub spectrum_out: Option<PathBuf>,

    /// Write a saturation/value picker square to this PNG.
    #[arg(long, value_name = "FILE")]
    pub picker_out: Option<PathBuf>,

    /// Hue for the picker square, 0.0–1.0.
    #[arg(long, default_value_t = 0.0, value_name = "0.0-1.0")]
    pub hue: f32,

    /// Edge length of the picker buffers in pixels.
    #[arg(long, default_value_t = 256, value_name = "PIXELS")]
    pub picker_size: u32,

    /// Run the erase demo (solid white canvas, one diagonal erase drag)
    /// and write the result to this PNG.
    #[arg(long, value_name = "FILE")]
    pub erase_demo_out: Option<PathBuf>,

    /// Canvas edge length for the erase demo.
    #[arg(long, default_value_t = 512, value_name = "PIXELS")]
    pub size: u32,

    /// Erase brush radius for the demo.
    #[arg(long, default_value_t = 20, value_name = "PIXELS")]
    pub erase_radius: i32,
}

// ============================================================================
// Runner
// ============================================================================

pub fn run(args: &CliArgs) -> ExitCode {
    if args.spectrum_out.is_none() && args.picker_out.is_none() && args.erase_demo_out.is_none()
    {
        eprintln!("Nothing to do: pass --spectrum-out, --picker-out or --erase-demo-out.");
        return ExitCode::FAILURE;
    }

    let started = Instant::now();
    match run_inner(args) {
        Ok(()) => {
            log_info!("CLI run finished in {:.1?}", started.elapsed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_err!("CLI run failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_inner(args: &CliArgs) -> PaintResult<()> {
    if let Some(path) = &args.spectrum_out {
        let strip = generate_spectrum(args.picker_size)?;
        strip.to_rgba_image().save_with_format(path, image::ImageFormat::Png)?;
        log_info!("Wrote spectrum strip ({}×1) to {}", args.picker_size, path.display());
        println!("spectrum  -> {}", path.display());
    }

    if let Some(path) = &args.picker_out {
        let square = generate_picker_square(args.hue, args.picker_size, args.picker_size)?;
        square.to_rgba_image().save_with_format(path, image::ImageFormat::Png)?;
        log_info!(
            "Wrote picker square (hue {:.3}, {}×{} px) to {}",
            args.hue,
            args.picker_size,
            args.picker_size,
            path.display()
        );
        println!("picker    -> {}", path.display());
    }

    if let Some(path) = &args.erase_demo_out {
        erase_demo(args, path)?;
        println!("erase demo -> {}", path.display());
    }

    Ok(())
}

/// Solid white canvas, one diagonal erase drag across it, exported as PNG.
fn erase_demo(args: &CliArgs, path: &std::path::Path) -> PaintResult<()> {
    let mut engine = PaintEngine::new(args.size, args.picker_size)?;
    engine.surface_mut().fill(Rgba([255, 255, 255, 255]))?;
    engine.on_mode_changed(PaintMode::Erase);
    engine.set_erase_size(args.erase_radius)?;

    // Pointer positions are centre-origin; sweep corner to corner in a few
    // sparse samples and let the interpolator densify the path.
    let half = args.size as f32 * 0.4;
    engine.on_stroke_begin((-half, -half));
    for step in 1..=8 {
        let t = step as f32 / 8.0;
        engine.on_stroke_continue((-half + 2.0 * half * t, -half + 2.0 * half * t))?;
    }
    engine.on_stroke_end();

    export::export_png(engine.surface(), path)?;
    log_info!(
        "Erase demo: {0}×{0}px canvas, radius {1}, wrote {2}",
        args.size,
        args.erase_radius,
        path.display()
    );
    Ok(())
}
