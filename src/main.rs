use clap::{Parser, ValueEnum};
use image::ImageReader;
use std::path::PathBuf;

use portsight::{BlurType, FilterCriteria, Pipeline};

/// Blur kernel names accepted on the command line. Anything else is a
/// parse error rather than a silent fallback.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum BlurArg {
    Box,
    Gaussian,
    Median,
    Bilateral,
}

impl From<BlurArg> for BlurType {
    fn from(arg: BlurArg) -> Self {
        match arg {
            BlurArg::Box => BlurType::Box,
            BlurArg::Gaussian => BlurType::Gaussian,
            BlurArg::Median => BlurType::Median,
            BlurArg::Bilateral => BlurType::Bilateral,
        }
    }
}

#[derive(Parser)]
#[command(name = "portsight")]
#[command(about = "Detect rectangular port targets in a camera frame")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save stage outputs to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Keep only outer borders at the extraction stage
    #[arg(long)]
    external_only: bool,

    /// Blur kernel type
    #[arg(long, value_enum, default_value_t = BlurArg::Box)]
    blur: BlurArg,

    /// Blur radius in pixels (0 disables blurring)
    #[arg(long, default_value_t = 0.0)]
    blur_radius: f64,

    /// Working frame width after resize
    #[arg(long, default_value_t = 320)]
    resize_width: u32,

    /// Working frame height after resize
    #[arg(long, default_value_t = 240)]
    resize_height: u32,

    /// Minimum contour area in square pixels
    #[arg(long, default_value_t = 20.0)]
    min_area: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.verbose {
        println!("Loading image: {:?}", args.image_path);
    }

    let img = ImageReader::open(&args.image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    if args.verbose {
        println!("Image loaded: {}x{}\n", img.width(), img.height());
    }

    let criteria = FilterCriteria {
        min_area: args.min_area,
        ..FilterCriteria::default()
    };

    let mut pipeline = Pipeline::new()
        .with_verbose(args.verbose)
        .with_resize(
            args.resize_width,
            args.resize_height,
            image::imageops::FilterType::CatmullRom,
        )
        .with_blur(args.blur.into(), args.blur_radius)
        .with_external_only(args.external_only)
        .with_criteria(criteria);

    if let Some(debug_dir) = args.debug_out {
        pipeline = pipeline.with_debug(debug_dir)?;
    }

    let candidates = pipeline.process(&img)?;

    println!("\n=== Port Target Detection Results ===");
    println!("Total candidates: {}", candidates.len());

    if !candidates.is_empty() {
        println!("\nCandidates:");
        for (i, contour) in candidates.iter().enumerate() {
            let bb = contour.bounding_box();
            println!(
                "  Candidate {} at ({}, {}) {}x{} - area: {:.1}, solidity: {:.1}, ratio: {:.2}",
                i + 1,
                bb.x,
                bb.y,
                bb.width,
                bb.height,
                contour.area(),
                contour.solidity(),
                contour.aspect_ratio()
            );
        }
    }

    Ok(())
}
