use image::{ImageBuffer, Rgb, RgbImage};
use imageproc::point::Point;
use portsight::{Contour, FilterCriteria};

/// Color inside all three default threshold ranges.
pub const TARGET_COLOR: Rgb<u8> = Rgb([126, 128, 98]);

/// Backdrop color outside the default threshold ranges.
pub const BACKDROP_COLOR: Rgb<u8> = Rgb([20, 20, 20]);

pub fn contour(points: &[(i32, i32)]) -> Contour {
    Contour::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

/// Axis-aligned rectangle outline: four corners, clockwise.
pub fn rect_contour(x: i32, y: i32, width: i32, height: i32) -> Contour {
    contour(&[
        (x, y),
        (x + width, y),
        (x + width, y + height),
        (x, y + height),
    ])
}

/// Four-point star centered at (30, 30).
///
/// Own area 600, convex hull area 1800, so solidity is exactly 100/3.
pub fn star_contour() -> Contour {
    contour(&[
        (60, 30),
        (35, 35),
        (30, 60),
        (25, 35),
        (0, 30),
        (25, 25),
        (30, 0),
        (35, 25),
    ])
}

/// Criteria that accept any non-degenerate contour: every bound wide
/// open except the closed solidity range.
pub fn permissive_criteria() -> FilterCriteria {
    FilterCriteria {
        min_area: 0.0,
        min_perimeter: 0.0,
        min_width: 0.0,
        max_width: f64::INFINITY,
        min_height: 0.0,
        max_height: f64::INFINITY,
        solidity: [0.0, 100.0],
        min_vertices: 0,
        max_vertices: usize::MAX,
        min_ratio: 0.0,
        max_ratio: f64::INFINITY,
    }
}

/// 640x480 dark frame with one in-threshold rectangle.
pub fn target_frame(x: u32, y: u32, width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(640, 480, |px, py| {
        if px >= x && px < x + width && py >= y && py < y + height {
            TARGET_COLOR
        } else {
            BACKDROP_COLOR
        }
    })
}
