//! Field bounds.

use glam::DVec2;
use rand::Rng;

/// The rectangle `[0, width] x [0, height]` every center must lie in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub width: f64,
    pub height: f64,
}

impl FieldBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if a point lies within the bounds (edges included).
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Clamp a point into the bounds.
    #[inline]
    pub fn clamp(&self, point: DVec2) -> DVec2 {
        DVec2::new(point.x.clamp(0.0, self.width), point.y.clamp(0.0, self.height))
    }

    /// Get a uniformly random point in `[0, width) x [0, height)`.
    #[inline]
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> DVec2 {
        DVec2::new(
            rng.random_range(0.0..self.width),
            rng.random_range(0.0..self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_includes_edges() {
        let bounds = FieldBounds::new(500.0, 300.0);
        assert!(bounds.contains(DVec2::new(0.0, 0.0)));
        assert!(bounds.contains(DVec2::new(500.0, 300.0)));
        assert!(!bounds.contains(DVec2::new(500.1, 10.0)));
        assert!(!bounds.contains(DVec2::new(10.0, -0.1)));
    }

    #[test]
    fn test_clamp() {
        let bounds = FieldBounds::new(100.0, 100.0);
        assert_eq!(bounds.clamp(DVec2::new(-5.0, 150.0)), DVec2::new(0.0, 100.0));
        assert_eq!(bounds.clamp(DVec2::new(40.0, 60.0)), DVec2::new(40.0, 60.0));
    }

    #[test]
    fn test_random_points_in_bounds() {
        let bounds = FieldBounds::new(50.0, 20.0);
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let p = bounds.random_point(&mut rng);
            assert!(p.x >= 0.0 && p.x < 50.0);
            assert!(p.y >= 0.0 && p.y < 20.0);
        }
    }
}
