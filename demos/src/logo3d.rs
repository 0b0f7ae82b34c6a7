//! Interactive 3D logo demo
//!
//! Loads a logo image, crops it to its opaque content, extrudes the alpha
//! silhouette, and opens a pointer-reactive viewer. Without a GPU (or with
//! an unusable logo) it reports the static-logo fallback and exits.

use anyhow::{Context, Result};
use clap::Parser;
use logoforge_core::crop_to_content;
use logoforge_render::{HeroViewer, QualityTier, SettingsInput};
use logoforge_shape::{build_extruded_logo_geometry, DEFAULT_TARGET_HEIGHT};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "logo3d", about = "Render a logo image as an interactive 3D extrusion")]
struct Args {
    /// Logo image with an alpha channel (PNG recommended)
    image: std::path::PathBuf,

    /// Quality preset: balanced, max, or light
    #[arg(long, default_value = "balanced")]
    quality: String,

    /// Disable idle spin and pointer steering
    #[arg(long)]
    reduced_motion: bool,

    /// Emulate a coarse-pointer (touch) environment
    #[arg(long)]
    touch: bool,

    /// Device pixel ratio to emulate
    #[arg(long, default_value_t = 1.0)]
    dpr: f32,

    /// Build the geometry and print a summary without opening a window
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let tier = QualityTier::parse(&args.quality)
        .with_context(|| format!("unknown quality preset: {}", args.quality))?;

    let image = image::open(&args.image)
        .with_context(|| format!("failed to open {}", args.image.display()))?
        .to_rgba8();
    let cropped = crop_to_content(&image)
        .context("logo image has no opaque content to extrude")?;
    info!(
        width = cropped.width(),
        height = cropped.height(),
        "cropped logo to content"
    );

    if args.headless {
        let mesh = build_extruded_logo_geometry(&cropped, DEFAULT_TARGET_HEIGHT)
            .context("logo yielded no 3D geometry")?;
        println!(
            "extruded logo: {} vertices, {} faces",
            mesh.vertex_count(),
            mesh.face_count()
        );
        return Ok(());
    }

    let input = SettingsInput {
        tier,
        reduced_motion: args.reduced_motion,
        touch: args.touch,
        device_pixel_ratio: args.dpr,
    };
    HeroViewer::new(cropped, input, DEFAULT_TARGET_HEIGHT)
        .run()
        .context("viewer failed")?;
    Ok(())
}
