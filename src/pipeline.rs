use std::path::PathBuf;

use anyhow::Result;
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::detection::{contours, filter, preprocessing, threshold};
use crate::detection::{BlurParams, BlurType, ChannelRange, FilterCriteria, ResizeParams, RgbThreshold};
use crate::models::Contour;

/// Debug configuration for pipeline execution
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Directory receiving one image per stage
    pub output_dir: PathBuf,
}

/// Output of every stage, retained after each `process()` call.
///
/// Empty before the first run. A successful run overwrites all fields in
/// stage order; a failed run leaves the previous state untouched, so
/// stale-but-valid diagnostics stay readable.
#[derive(Debug, Clone, Default)]
pub struct PipelineState {
    pub resized: Option<RgbImage>,
    pub blurred: Option<RgbImage>,
    pub mask: Option<GrayImage>,
    pub contours: Vec<Contour>,
    pub filtered: Vec<Contour>,
}

/// The fixed five-stage port detection pipeline.
///
/// Resize, blur, RGB threshold, contour extraction, contour filtering.
/// Stage parameters are explicit configuration; every intermediate output
/// stays queryable through [`Pipeline::state`] after a run. One instance
/// per concurrent caller: the retained state is the only mutable part.
pub struct Pipeline {
    resize: ResizeParams,
    blur: BlurParams,
    threshold: RgbThreshold,
    external_only: bool,
    criteria: FilterCriteria,
    state: PipelineState,
    verbose: bool,
    debug: Option<DebugConfig>,
}

impl Pipeline {
    /// Pipeline with the production port-target tuning.
    pub fn new() -> Self {
        Self {
            resize: ResizeParams {
                width: 320,
                height: 240,
                filter: FilterType::CatmullRom,
            },
            blur: BlurParams {
                kind: BlurType::Box,
                radius: 0.0,
            },
            threshold: RgbThreshold {
                red: ChannelRange::new(119.56849774417753, 133.7775891341256),
                green: ChannelRange::new(107.56284802666342, 148.93039049235995),
                blue: ChannelRange::new(80.80061374629109, 116.74795903623163),
            },
            external_only: false,
            criteria: FilterCriteria::default(),
            state: PipelineState::default(),
            verbose: false,
            debug: None,
        }
    }

    pub fn with_resize(mut self, width: u32, height: u32, filter: FilterType) -> Self {
        self.resize = ResizeParams { width, height, filter };
        self
    }

    pub fn with_blur(mut self, kind: BlurType, radius: f64) -> Self {
        self.blur = BlurParams { kind, radius };
        self
    }

    pub fn with_threshold(mut self, threshold: RgbThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Keep only top-level outer borders at the extraction stage.
    pub fn with_external_only(mut self, external_only: bool) -> Self {
        self.external_only = external_only;
        self
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.debug = Some(DebugConfig { output_dir });
        Ok(self)
    }

    /// Every stage output from the most recent successful run.
    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    /// Run the five stages over one frame and return the candidates.
    ///
    /// An empty (zero-dimension) frame produces an empty candidate list
    /// without error. The same frame and parameters always produce the
    /// same output.
    pub fn process(&mut self, input: &DynamicImage) -> Result<&[Contour]> {
        if input.width() == 0 || input.height() == 0 {
            self.state = PipelineState::default();
            return Ok(&self.state.filtered);
        }

        let frame = input.to_rgb8();

        if self.verbose {
            println!(
                "Resizing {}x{} frame to {}x{}...",
                frame.width(),
                frame.height(),
                self.resize.width,
                self.resize.height
            );
        }
        let resized = preprocessing::resize(&frame, &self.resize);

        if self.verbose {
            println!("Applying {:?} blur (radius {})...", self.blur.kind, self.blur.radius);
        }
        let blurred = preprocessing::blur(&resized, &self.blur);

        if self.verbose {
            println!("Thresholding RGB channels...");
        }
        let mask = threshold::rgb_threshold(&blurred, &self.threshold);

        let contours = contours::extract_contours(&mask, self.external_only);
        if self.verbose {
            println!("Extracted {} contours", contours.len());
        }

        let filtered = filter::filter_contours(&contours, &self.criteria);
        if self.verbose {
            println!("  → {} candidates passed filtering", filtered.len());
        }

        self.state = PipelineState {
            resized: Some(resized),
            blurred: Some(blurred),
            mask: Some(mask),
            contours,
            filtered,
        };

        self.save_debug_outputs()?;

        Ok(&self.state.filtered)
    }

    /// Save each stage's output if debug mode is enabled.
    fn save_debug_outputs(&self) -> Result<()> {
        let Some(debug) = &self.debug else {
            return Ok(());
        };
        let dir = &debug.output_dir;

        let (Some(resized), Some(blurred), Some(mask)) =
            (&self.state.resized, &self.state.blurred, &self.state.mask)
        else {
            return Ok(());
        };

        resized
            .save(dir.join("01_resize.png"))
            .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;
        blurred
            .save(dir.join("02_blur.png"))
            .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;
        mask.save(dir.join("03_threshold.png"))
            .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;

        // Raw outlines in green over the resized frame
        let mut outlines = resized.clone();
        for contour in &self.state.contours {
            for i in 0..contour.points.len() {
                let p1 = contour.points[i];
                let p2 = contour.points[(i + 1) % contour.points.len()];
                draw_line_segment_mut(
                    &mut outlines,
                    (p1.x as f32, p1.y as f32),
                    (p2.x as f32, p2.y as f32),
                    Rgb([0, 255, 0]),
                );
            }
        }
        outlines
            .save(dir.join("04_contours.png"))
            .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;

        // Surviving candidates as red bounding boxes
        let mut boxes = resized.clone();
        for contour in &self.state.filtered {
            let bb = contour.bounding_box();
            if bb.width > 0 && bb.height > 0 {
                let rect = Rect::at(bb.x, bb.y).of_size(bb.width, bb.height);
                draw_hollow_rect_mut(&mut boxes, rect, Rgb([255, 0, 0]));
            }
        }
        boxes
            .save(dir.join("05_filtered.png"))
            .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;

        if self.verbose {
            println!("  Debug: saved stage outputs to {}", dir.display());
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
