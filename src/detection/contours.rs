use image::GrayImage;
use imageproc::contours::{BorderType, find_contours};

use crate::models::Contour;

/// Extract outlines from a binary mask.
///
/// With `external_only` set, only top-level outer borders are returned
/// (holes and nested outlines discarded). Either way the result is a flat
/// list: hierarchy information from the tracer is dropped.
pub fn extract_contours(mask: &GrayImage, external_only: bool) -> Vec<Contour> {
    find_contours::<i32>(mask)
        .into_iter()
        .filter(|c| !external_only || (c.border_type == BorderType::Outer && c.parent.is_none()))
        .map(|c| Contour::new(c.points))
        .collect()
}
