use imageproc::geometry::{arc_length, convex_hull};
use imageproc::point::Point;

/// Axis-aligned bounding box of a contour, in pixel coordinates.
///
/// Width and height are geometric extents (max - min), so a single-point
/// or collinear contour has zero width or height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// A closed outline extracted from a binary mask.
///
/// Points are ordered along the boundary; the closing edge back to the
/// first point is implied. Contours are flat: no parent/hole relation is
/// tracked.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Point<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let min_x = self.points.iter().map(|p| p.x).min().unwrap_or(0);
        let min_y = self.points.iter().map(|p| p.y).min().unwrap_or(0);
        let max_x = self.points.iter().map(|p| p.x).max().unwrap_or(0);
        let max_y = self.points.iter().map(|p| p.y).max().unwrap_or(0);

        BoundingBox {
            x: min_x,
            y: min_y,
            width: (max_x - min_x) as u32,
            height: (max_y - min_y) as u32,
        }
    }

    /// Enclosed polygon area via the shoelace formula.
    ///
    /// Fewer than 3 points enclose nothing and yield 0.
    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }

    /// Closed arc length: sum of edge lengths including the closing edge.
    pub fn perimeter(&self) -> f64 {
        arc_length(&self.points, true)
    }

    /// Smallest convex polygon containing all points (monotone chain).
    pub fn convex_hull(&self) -> Contour {
        Contour::new(convex_hull(self.points.as_slice()))
    }

    /// Ratio of contour area to convex hull area, as a percentage.
    ///
    /// A convex contour measures ~100. Degenerate contours divide 0 by 0
    /// and come out NaN, which fails any closed range check.
    pub fn solidity(&self) -> f64 {
        let hull = self.convex_hull();
        100.0 * self.area() / hull.area()
    }

    /// Bounding-box width over height. A zero-height box is +inf, so it
    /// only passes a ratio bound that is itself unbounded.
    pub fn aspect_ratio(&self) -> f64 {
        let bb = self.bounding_box();
        if bb.height == 0 {
            return f64::INFINITY;
        }
        bb.width as f64 / bb.height as f64
    }
}

/// |signed shoelace area|, so the result is independent of winding order.
fn polygon_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut twice_area = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        twice_area += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    (twice_area.abs() as f64) / 2.0
}
