use image::ImageReader;
use std::env;

use portsight::{FilterCriteria, Pipeline};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <image_path>", args[0]);
        std::process::exit(1);
    }

    let img = ImageReader::open(&args[1])?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    println!("Loaded image: {}x{}", img.width(), img.height());

    // Pipeline 1: production tuning
    println!("\n=== Default Criteria ===");
    let mut pipeline = Pipeline::new().with_verbose(true);
    let candidates = pipeline.process(&img)?;
    println!("Found {} candidates", candidates.len());

    for (i, contour) in candidates.iter().take(10).enumerate() {
        let bb = contour.bounding_box();
        println!(
            "  {}: ({}, {}) {}x{} solidity={:.1}",
            i + 1,
            bb.x,
            bb.y,
            bb.width,
            bb.height,
            contour.solidity()
        );
    }

    // Pipeline 2: stricter geometry for long-range frames
    println!("\n=== Strict Criteria ===");
    let strict = FilterCriteria {
        min_area: 100.0,        // Larger blobs only
        min_width: 20.0,
        solidity: [60.0, 100.0], // Mostly convex shapes
        min_ratio: 1.2,          // Wider than tall
        max_ratio: 4.0,
        ..FilterCriteria::default()
    };

    let mut strict_pipeline = Pipeline::new().with_criteria(strict);
    let strict_candidates = strict_pipeline.process(&img)?;
    println!(
        "Strict criteria kept {} of the frame's candidates",
        strict_candidates.len()
    );

    Ok(())
}
