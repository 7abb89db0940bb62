//! Library of easing curves over the unit interval and Bezier curves of arbitrary degree.
//!
//! Easing families (smooth start, smooth stop, smooth step, arch) accept either an integer
//! exponent or a continuous one, in which case the two bracketing integer curves are blended.
//! Bezier curves are one dimensional, evaluated from evenly spaced control values.
//!
//! # Example
//! ```
//! use generic_easing::{smooth_start, smooth_start_real, normalized_bezier};
//! use assert_approx_eq::assert_approx_eq;
//!
//! assert_approx_eq!(0.25, smooth_start(0.5, 2), 1e-12);
//! assert_approx_eq!(0.1875, smooth_start_real(0.5, 2.5), 1e-12);
//! assert_approx_eq!(0.5, normalized_bezier(0.5, &[0.0, 1.0]), 1e-12);
//! ```

mod bezier;
mod family;
mod line;
mod pascal;
mod primitives;

pub use bezier::{bezier, normalized_bezier, Bezier};
pub use family::{
    arch, arch_real, curve_by_integer_power, curve_by_real_power, smooth_start,
    smooth_start_real, smooth_step, smooth_step_real, smooth_stop, smooth_stop_real,
    CurveFamily,
};
pub use line::{line_from_zero, line_through_points, line_to_one};
pub use pascal::pascal_row;
pub use primitives::{
    absolute_value, clamp01, clamp_max, clamp_min, integer_power, linear_blend, linear_equation,
};
