use std::{error::Error, fmt::Display, str::FromStr};

use crate::primitives::{clamp_min, integer_power, linear_blend};

/// Family of easing curves parameterized by a sharpness exponent.
/// - `SmoothStart` - `t^n`, ease-in,
/// - `SmoothStop` - `1 - (1 - t)^n`, ease-out,
/// - `SmoothStep` - smooth start blended into smooth stop by `t`, ease-in-out,
/// - `Arch` - `(4t(1 - t))^n`, zero at both ends with a peak of 1 at `t = 0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveFamily {
    SmoothStart,
    SmoothStop,
    SmoothStep,
    Arch,
}

impl CurveFamily {
    pub const ALL: [CurveFamily; 4] = [
        CurveFamily::SmoothStart,
        CurveFamily::SmoothStop,
        CurveFamily::SmoothStep,
        CurveFamily::Arch,
    ];

    /// Evaluates the family at `t` with an integer exponent.
    pub fn evaluate(&self, t: f64, n: u32) -> f64 {
        curve_by_integer_power(*self, t, n)
    }

    /// Evaluates the family at `t` with a continuous exponent, see [curve_by_real_power].
    /// # Example
    /// ```
    /// use generic_easing::CurveFamily;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let family: CurveFamily = "smooth-start".parse().unwrap();
    /// // halfway between t^2 and t^3
    /// assert_approx_eq!(family.evaluate_real(0.5, 2.5), 0.1875, 1e-12);
    /// ```
    pub fn evaluate_real(&self, t: f64, exponent: f64) -> f64 {
        let family = *self;
        curve_by_real_power(t, exponent, |t, n| curve_by_integer_power(family, t, n))
    }

    pub fn name(&self) -> &'static str {
        match self {
            CurveFamily::SmoothStart => "smooth-start",
            CurveFamily::SmoothStop => "smooth-stop",
            CurveFamily::SmoothStep => "smooth-step",
            CurveFamily::Arch => "arch",
        }
    }
}

impl Display for CurveFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CurveFamily {
    type Err = Box<dyn Error>;

    /// Accepts family names case-insensitively, with `_` in place of `-` allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match CurveFamily::ALL.iter().find(|family| family.name() == normalized) {
            Some(family) => Ok(*family),
            None => Err(Box::new(CurveFamilyError(format!("unknown curve family '{}'", s)))),
        }
    }
}

/// Dispatches to the integer exponent curve of `family`.
pub fn curve_by_integer_power(family: CurveFamily, t: f64, n: u32) -> f64 {
    match family {
        CurveFamily::SmoothStart => smooth_start(t, n),
        CurveFamily::SmoothStop => smooth_stop(t, n),
        CurveFamily::SmoothStep => smooth_step(t, n),
        CurveFamily::Arch => arch(t, n),
    }
}

/// Generalizes an integer exponent `curve` to a continuous `exponent`.
///
/// The exponent is split into `floor` and `frac = exponent - floor`, then the curves for
/// `floor` and `floor + 1` are blended with `frac` as the weight. Whole exponents give
/// exactly the `floor` curve. Negative exponents are saturated to 0.
pub fn curve_by_real_power<F>(t: f64, exponent: f64, curve: F) -> f64
where
    F: Fn(f64, u32) -> f64,
{
    let exponent = clamp_min(exponent, 0.0);
    let floor = exponent.floor();
    let frac = exponent - floor;
    let n = floor as u32;

    linear_blend(curve(t, n), curve(t, n.saturating_add(1)), frac)
}

pub fn smooth_start(t: f64, n: u32) -> f64 {
    integer_power(t, n)
}

pub fn smooth_stop(t: f64, n: u32) -> f64 {
    1.0 - integer_power(1.0 - t, n)
}

/// Smooth start blended into smooth stop, using `t` itself as the blend weight.
pub fn smooth_step(t: f64, n: u32) -> f64 {
    linear_blend(smooth_start(t, n), smooth_stop(t, n), t)
}

pub fn arch(t: f64, n: u32) -> f64 {
    integer_power(4.0 * t * (1.0 - t), n)
}

pub fn smooth_start_real(t: f64, exponent: f64) -> f64 {
    curve_by_real_power(t, exponent, smooth_start)
}

pub fn smooth_stop_real(t: f64, exponent: f64) -> f64 {
    curve_by_real_power(t, exponent, smooth_stop)
}

pub fn smooth_step_real(t: f64, exponent: f64) -> f64 {
    curve_by_real_power(t, exponent, smooth_step)
}

pub fn arch_real(t: f64, exponent: f64) -> f64 {
    curve_by_real_power(t, exponent, arch)
}

#[derive(Debug)]
struct CurveFamilyError(String);

impl Display for CurveFamilyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in CurveFamily: {}", self.0)
    }
}

impl Error for CurveFamilyError {}
