/// Saturates `value` into `[0, 1]`.
pub fn clamp01(value: f64) -> f64 {
    clamp_max(clamp_min(value, 0.0), 1.0)
}

pub fn clamp_min(value: f64, min: f64) -> f64 {
    if value < min { min } else { value }
}

pub fn clamp_max(value: f64, max: f64) -> f64 {
    if value > max { max } else { value }
}

pub fn absolute_value(value: f64) -> f64 {
    if value < 0.0 { -value } else { value }
}

/// Blends `a` into `b`: `(1 - weight) * a + weight * b`.
/// `weight` is saturated into `[0, 1]` before use, out of range weights are not rejected.
pub fn linear_blend(a: f64, b: f64, weight: f64) -> f64 {
    let weight = clamp01(weight);
    (1.0 - weight) * a + weight * b
}

/// Evaluates `slope * x + intercept`.
pub fn linear_equation(x: f64, slope: f64, intercept: f64) -> f64 {
    slope * x + intercept
}

/// Raises `base` to `exponent` by repeated multiplication. `exponent` of 0 yields 1 for any base, 0 included.
///
/// The loop stops as soon as the result can only change sign: once it reaches 0, infinity or
/// NaN, or right away for a base of magnitude 1. Bases close to but not at magnitude 1 still
/// cost one multiplication per unit of `exponent`.
pub fn integer_power(base: f64, exponent: u32) -> f64 {
    let mut result = 1.0;
    for step in 0..exponent {
        result *= base;
        if result == 0.0 || !result.is_finite() || absolute_value(base) == 1.0 {
            let remaining = exponent - step - 1;
            if base < 0.0 && remaining % 2 == 1 {
                result = -result;
            }
            break;
        }
    }
    result
}
