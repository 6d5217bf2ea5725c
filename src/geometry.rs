//! Geometric distance primitives.
//!
//! Stateless vector/line math used by the cost model:
//! Euclidean distance, orthogonal projection onto an infinite line, and the
//! TRACLUS perpendicular and angular distances between two line segments.
//!
//! All functions are total over finite coordinates; degenerate (zero-length)
//! segments yield zero distances rather than errors.

use nalgebra::{Matrix2, Vector2};

use crate::trajectory::{Point, Segment};

/// Below this length a segment's direction is considered undefined.
const DEGENERATE_EPS: f64 = 1e-12;

/// Euclidean (L2) distance between two points.
#[inline]
#[must_use]
pub fn euclidean_distance(p1: &Point, p2: &Point) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Orthogonal projection of `point` onto the infinite line through
/// `line.head` and `line.tail`.
///
/// A vertical line is handled exactly as `(line.x, point.y)`. Otherwise
/// the line's slope builds a 2×2 rotation taking the line's direction onto
/// the x-axis; both line and point are transformed, the projection copies
/// the point's abscissa and the line's constant ordinate in that frame,
/// and the transform is inverted. No trigonometric functions are involved.
#[must_use]
pub fn project_onto_line(point: &Point, line: &Segment) -> Point {
    // Vertical line (this also covers a degenerate line collapsed to a
    // single point): the projection needs no transform at all.
    if line.head.x == line.tail.x {
        return Point::new(line.head.x, point.y);
    }

    let slope = line.dy() / line.dx();
    let scale = (1.0 + slope * slope).sqrt();
    let (cos, sin) = (1.0 / scale, slope / scale);
    let rotation = Matrix2::new(cos, sin, -sin, cos);

    // A rotation built from a finite slope is non-singular; the vertical
    // branch above already handled the only degenerate direction.
    let Some(inverse) = rotation.try_inverse() else {
        return *point;
    };

    let rotated_line = rotation * Vector2::new(line.head.x, line.head.y);
    let rotated_point = rotation * Vector2::new(point.x, point.y);
    let projected = inverse * Vector2::new(rotated_point.x, rotated_line.y);

    Point::new(projected.x, projected.y)
}

/// TRACLUS perpendicular distance between two segments.
///
/// Let `d1`, `d2` be the Euclidean distances from `line_short`'s endpoints
/// to their projections on the infinite extension of `line_long`. The
/// result is `(d1² + d2²) / (d1 + d2)`, which weights the metric toward
/// the larger deviation, and 0 when both distances vanish.
#[must_use]
pub fn perpendicular_distance(line_long: &Segment, line_short: &Segment) -> f64 {
    let proj_head = project_onto_line(&line_short.head, line_long);
    let proj_tail = project_onto_line(&line_short.tail, line_long);
    let d1 = euclidean_distance(&line_short.head, &proj_head);
    let d2 = euclidean_distance(&line_short.tail, &proj_tail);

    let sum = d1 + d2;
    if sum > 0.0 {
        (d1 * d1 + d2 * d2) / sum
    } else {
        0.0
    }
}

/// TRACLUS angular distance between two segments.
///
/// Returns `|sin θ| · L` where θ is the angle between the direction
/// vectors and `L = length(line_short)`: 0 for parallel segments, `L` for
/// perpendicular ones. The sine is taken from the cross product of the
/// direction vectors, which is exactly zero for collinear segments;
/// deriving it from the cosine would amplify rounding near θ = 0.
///
/// The `directional` flag does not change the numeric value: the
/// undirected policy folds the angle to `min(θ, π − θ)`, whose sine
/// magnitude is identical. The flag only tags how reversed-direction
/// segments should be interpreted by a downstream clustering stage.
#[must_use]
pub fn angular_distance(line_long: &Segment, line_short: &Segment, directional: bool) -> f64 {
    let long_len = line_long.length();
    let short_len = line_short.length();
    if long_len < DEGENERATE_EPS || short_len < DEGENERATE_EPS {
        return 0.0;
    }

    let cross = line_long.dx() * line_short.dy() - line_long.dy() * line_short.dx();
    let sin_theta = (cross / (long_len * short_len)).abs().min(1.0);

    // Both direction policies reduce to |sin θ| · L: folding the angle
    // to min(θ, π − θ) leaves the sine magnitude unchanged.
    let _ = directional;

    sin_theta * short_len
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_euclidean_distance() {
        assert_relative_eq!(
            euclidean_distance(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0)),
            5.0
        );
        assert_relative_eq!(
            euclidean_distance(&Point::new(1.0, 1.0), &Point::new(1.0, 1.0)),
            0.0
        );
    }

    #[test]
    fn test_projection_vertical_line() {
        let line = seg(2.0, 0.0, 2.0, 5.0);
        let p = project_onto_line(&Point::new(7.0, 3.0), &line);
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.y, 3.0);
    }

    #[test]
    fn test_projection_horizontal_line() {
        let line = seg(0.0, 1.0, 4.0, 1.0);
        let p = project_onto_line(&Point::new(2.5, 7.0), &line);
        assert_abs_diff_eq!(p.x, 2.5, epsilon = 1e-10);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_projection_diagonal_line() {
        // Projecting (2, 0) onto y = x lands on (1, 1).
        let line = seg(0.0, 0.0, 3.0, 3.0);
        let p = project_onto_line(&Point::new(2.0, 0.0), &line);
        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_projection_point_on_line() {
        let line = seg(0.0, 0.0, 2.0, 1.0);
        let p = project_onto_line(&Point::new(2.0, 1.0), &line);
        assert_abs_diff_eq!(p.x, 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_perpendicular_distance_self_is_zero() {
        let line = seg(0.0, 0.0, 3.0, 4.0);
        assert_abs_diff_eq!(perpendicular_distance(&line, &line), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_perpendicular_distance_parallel_offset() {
        // Both endpoints deviate by 1, so (1 + 1) / 2 = 1.
        let long = seg(0.0, 0.0, 10.0, 0.0);
        let short = seg(2.0, 1.0, 5.0, 1.0);
        assert_relative_eq!(perpendicular_distance(&long, &short), 1.0);
    }

    #[test]
    fn test_perpendicular_distance_weights_larger_deviation() {
        // d1 = 0, d2 = 2 → (0 + 4) / 2 = 2, not the mean 1.
        let long = seg(0.0, 0.0, 10.0, 0.0);
        let short = seg(3.0, 0.0, 3.0, 2.0);
        assert_relative_eq!(perpendicular_distance(&long, &short), 2.0);
    }

    #[test]
    fn test_perpendicular_distance_degenerate_short() {
        // Zero-length short segment lying on the long line: d1 + d2 = 0.
        let long = seg(0.0, 0.0, 10.0, 0.0);
        let short = seg(4.0, 0.0, 4.0, 0.0);
        assert_relative_eq!(perpendicular_distance(&long, &short), 0.0);
    }

    #[test]
    fn test_angular_distance_self_is_zero() {
        let line = seg(0.0, 0.0, 3.0, 4.0);
        assert_abs_diff_eq!(angular_distance(&line, &line, true), 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(angular_distance(&line, &line, false), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_angular_distance_collinear_diagonal_is_exactly_zero() {
        // A diagonal sub-segment of its own spanning segment: the cross
        // product vanishes exactly, with no rounding residue for the cost
        // comparison to trip over.
        let long = seg(0.0, 0.0, 3.0, 3.0);
        let short = seg(1.0, 1.0, 2.0, 2.0);
        assert_eq!(angular_distance(&long, &short, true), 0.0);
        assert_eq!(angular_distance(&long, &short, false), 0.0);

        let sloped = seg(0.0, 0.0, 2.0, 1.0);
        let sub = seg(2.0, 1.0, 4.0, 2.0);
        assert_eq!(angular_distance(&sloped, &sub, true), 0.0);
    }

    #[test]
    fn test_angular_distance_perpendicular_equals_length() {
        let long = seg(0.0, 0.0, 1.0, 0.0);
        let short = seg(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(angular_distance(&long, &short, true), 1.0);

        let short_long = seg(0.0, 0.0, 0.0, 3.0);
        assert_relative_eq!(angular_distance(&long, &short_long, true), 3.0);
    }

    #[test]
    fn test_angular_distance_forty_five_degrees() {
        let long = seg(0.0, 0.0, 1.0, 0.0);
        let short = seg(0.0, 0.0, 1.0, 1.0);
        let expected = std::f64::consts::FRAC_1_SQRT_2 * short.length();
        assert_relative_eq!(angular_distance(&long, &short, true), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_angular_distance_policies_agree() {
        // Reversed direction: θ > 90°, both policies give the same value.
        let long = seg(0.0, 0.0, 1.0, 0.0);
        let short = seg(1.0, 0.0, 0.0, 1.0);
        let directional = angular_distance(&long, &short, true);
        let undirected = angular_distance(&long, &short, false);
        assert_relative_eq!(directional, undirected, epsilon = 1e-12);
    }

    #[test]
    fn test_angular_distance_degenerate() {
        let long = seg(0.0, 0.0, 1.0, 0.0);
        let zero = seg(5.0, 5.0, 5.0, 5.0);
        assert_relative_eq!(angular_distance(&long, &zero, true), 0.0);
        assert_relative_eq!(angular_distance(&zero, &long, true), 0.0);
    }
}
