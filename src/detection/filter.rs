use crate::models::Contour;

/// Geometric acceptance criteria for candidate contours.
///
/// All bounds are inclusive. Solidity is a [min%, max%] pair; vertex
/// bounds count the contour's raw points.
#[derive(Debug, Clone, Copy)]
pub struct FilterCriteria {
    pub min_area: f64,
    pub min_perimeter: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub solidity: [f64; 2],
    pub min_vertices: usize,
    pub max_vertices: usize,
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl Default for FilterCriteria {
    /// Production tuning for the port target.
    fn default() -> Self {
        Self {
            min_area: 20.0,
            min_perimeter: 0.0,
            min_width: 8.0,
            max_width: 1000.0,
            min_height: 0.0,
            max_height: 1000.0,
            solidity: [0.0, 100.0],
            min_vertices: 0,
            max_vertices: 1_000_000,
            min_ratio: 0.0,
            max_ratio: 1000.0,
        }
    }
}

impl FilterCriteria {
    /// Test a single contour against every predicate.
    ///
    /// Predicates are ordered cheapest first so most rejects skip the
    /// hull computation; the order never changes the result set. A
    /// degenerate contour's solidity is NaN and its zero-height aspect
    /// ratio is +inf, both of which fail the closed-range checks here.
    pub fn accepts(&self, contour: &Contour) -> bool {
        let bb = contour.bounding_box();
        let width = bb.width as f64;
        if width < self.min_width || width > self.max_width {
            return false;
        }
        let height = bb.height as f64;
        if height < self.min_height || height > self.max_height {
            return false;
        }

        if contour.area() < self.min_area {
            return false;
        }
        if contour.perimeter() < self.min_perimeter {
            return false;
        }

        let solidity = contour.solidity();
        if !(solidity >= self.solidity[0] && solidity <= self.solidity[1]) {
            return false;
        }

        let vertices = contour.vertex_count();
        if vertices < self.min_vertices || vertices > self.max_vertices {
            return false;
        }

        let ratio = contour.aspect_ratio();
        if !(ratio >= self.min_ratio && ratio <= self.max_ratio) {
            return false;
        }

        true
    }
}

/// Keep exactly the contours passing every criterion, in input order.
pub fn filter_contours(contours: &[Contour], criteria: &FilterCriteria) -> Vec<Contour> {
    contours
        .iter()
        .filter(|c| criteria.accepts(c))
        .cloned()
        .collect()
}
