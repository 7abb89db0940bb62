use crate::primitives::linear_equation;

/// Evaluates at `t` the line through `point_a` and `point_b`, points given as `(x, y)`.
///
/// Points with equal `x` have no defined slope, the result is then infinite or NaN.
/// # Example
/// ```
/// use generic_easing::line_through_points;
///
/// assert_eq!(0.5, line_through_points(0.5, (0.0, 0.0), (1.0, 1.0)));
/// assert!(!line_through_points(0.5, (1.0, 0.0), (1.0, 2.0)).is_finite());
/// ```
pub fn line_through_points(t: f64, point_a: (f64, f64), point_b: (f64, f64)) -> f64 {
    let (x1, y1) = point_a;
    let (x2, y2) = point_b;
    let slope = (y2 - y1) / (x2 - x1);
    let intercept = y1 - slope * x1;
    linear_equation(t, slope, intercept)
}

/// Line through `(0, 0)` and `point`.
pub fn line_from_zero(t: f64, point: (f64, f64)) -> f64 {
    line_through_points(t, (0.0, 0.0), point)
}

/// Line through `point` and `(1, 1)`.
pub fn line_to_one(t: f64, point: (f64, f64)) -> f64 {
    line_through_points(t, point, (1.0, 1.0))
}
