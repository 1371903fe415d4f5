//! Planar geometry shared by the classification rules.

use nalgebra::Point2;

/// Unsigned interior angle at vertex `b` formed by points `a` and `c`,
/// in degrees, always in [0, 180].
///
/// Symmetric in `a` and `c`. Computed from the atan2 difference of the two
/// rays; results past 180 degrees wrap to the reflex complement.
pub fn interior_angle(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> f32 {
    let to_c = (c.y - b.y).atan2(c.x - b.x);
    let to_a = (a.y - b.y).atan2(a.x - b.x);

    let mut degrees = (to_c - to_a).to_degrees().abs();
    if degrees > 180.0 {
        degrees = 360.0 - degrees;
    }
    degrees
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    #[test]
    fn test_right_angle() {
        let angle = interior_angle(p(0.0, 100.0), p(0.0, 0.0), p(100.0, 0.0));
        assert!((angle - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_straight_line() {
        let angle = interior_angle(p(-50.0, 0.0), p(0.0, 0.0), p(50.0, 0.0));
        assert!((angle - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_reflex_wraps_to_interior() {
        // Rays at +170 and -170 degrees: raw difference is 340, interior is 20.
        let angle = interior_angle(p(-100.0, 17.6), p(0.0, 0.0), p(-100.0, -17.6));
        assert!(angle < 180.0);
        assert!((angle - 20.0).abs() < 0.5);
    }

    #[test]
    fn test_symmetry() {
        let a = p(12.0, 88.0);
        let b = p(40.0, 40.0);
        let c = p(95.0, 61.0);
        assert_eq!(interior_angle(a, b, c), interior_angle(c, b, a));
    }
}
