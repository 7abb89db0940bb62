use nalgebra::DVector;

use crate::{pascal::pascal_weights, primitives::{integer_power, linear_blend}};

/// One dimensional Bezier curve over evenly spaced control values.
///
/// Curves with fewer than three control values are degenerate: they evaluate to the
/// linear blend from 0 to 1 at `t` and the control values are not used.
#[derive(Debug, Clone, PartialEq)]
pub struct Bezier {
    control_values: DVector<f64>,
}

impl Bezier {
    pub fn new(control_values: Vec<f64>) -> Self {
        Bezier { control_values: DVector::from_vec(control_values) }
    }

    /// Bezier curve pinned to (0, 0) and (1, 1), `interior_values` lie between these endpoints.
    /// # Example
    /// ```
    /// use generic_easing::Bezier;
    ///
    /// let bezier = Bezier::normalized(&[0.9, 0.1]);
    /// assert_eq!(0.0, bezier.evaluate(0.0));
    /// assert_eq!(1.0, bezier.evaluate(1.0));
    /// ```
    pub fn normalized(interior_values: &[f64]) -> Self {
        Bezier::new(normalized_values(interior_values))
    }

    /// Degree of the curve, `None` when there are no control values.
    pub fn degree(&self) -> Option<usize> {
        self.control_values.len().checked_sub(1)
    }

    pub fn control_values(&self) -> &[f64] {
        self.control_values.as_slice()
    }

    pub fn evaluate(&self, t: f64) -> f64 {
        if self.control_values.len() <= 2 {
            return linear_blend(0.0, 1.0, t);
        }
        bernstein_weights(t, self.control_values.len() - 1).dot(&self.control_values)
    }

    pub fn batch_evaluate(&self, t_vector: &[f64]) -> Vec<f64> {
        t_vector.iter().map(|t| self.evaluate(*t)).collect()
    }
}

/// Evaluates the Bezier curve with control values `values` at `t`:
/// `sum C(n, i) * values[i] * (1 - t)^(n - i) * t^i` for degree `n = values.len() - 1`.
///
/// Sequences of length 2 or less are not used as control values, the result is then the
/// linear blend from 0 to 1 at `t`.
/// # Example
/// ```
/// use generic_easing::bezier;
///
/// assert_eq!(0.5, bezier(0.5, &[0.0, 1.0, 0.0]));
/// assert_eq!(0.3, bezier(0.3, &[5.0, 9.0]));
/// ```
pub fn bezier(t: f64, values: &[f64]) -> f64 {
    if values.len() <= 2 {
        return linear_blend(0.0, 1.0, t);
    }
    let controls = DVector::from_column_slice(values);
    bernstein_weights(t, values.len() - 1).dot(&controls)
}

/// [bezier] through `[0, interior_values.., 1]`, so the curve starts at 0 and ends at 1.
pub fn normalized_bezier(t: f64, interior_values: &[f64]) -> f64 {
    bezier(t, &normalized_values(interior_values))
}

fn normalized_values(interior_values: &[f64]) -> Vec<f64> {
    let mut values = Vec::with_capacity(interior_values.len() + 2);
    values.push(0.0);
    values.extend_from_slice(interior_values);
    values.push(1.0);
    values
}

fn bernstein_weights(t: f64, degree: usize) -> DVector<f64> {
    let s = 1.0 - t;
    let coefficients = pascal_weights(degree);
    let n = degree as u32;

    DVector::from_fn(degree + 1, |i, _| {
        let i_pow = i as u32;
        coefficients[i] * integer_power(s, n - i_pow) * integer_power(t, i_pow)
    })
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rand::Rng;
    use super::*;

    #[test]
    fn symmetric_hump() {
        assert_eq!(0.5, bezier(0.5, &[0.0, 1.0, 0.0]));
    }

    #[test]
    fn short_sequences_fall_back_to_identity() {
        assert_eq!(0.3, bezier(0.3, &[5.0, 9.0]));
        assert_eq!(0.3, bezier(0.3, &[5.0]));
        assert_eq!(0.3, bezier(0.3, &[]));
        assert_eq!(0.75, Bezier::new(vec![-2.0, 8.0]).evaluate(0.75));
    }

    #[test]
    fn short_sequence_fallback_saturates() {
        assert_eq!(1.0, bezier(1.5, &[5.0, 9.0]));
        assert_eq!(0.0, bezier(-0.5, &[]));
    }

    #[test]
    fn quadratic() {
        let eps = 1e-12;
        let t = 0.25;
        let s = 1.0 - t;
        let expected = s * s * 2.0 + 2.0 * s * t * -1.0 + t * t * 4.0;
        assert_approx_eq!(bezier(t, &[2.0, -1.0, 4.0]), expected, eps);
    }

    #[test]
    fn cubic_endpoints() {
        let eps = 1e-12;
        let values = [1.5, -3.0, 7.0, 2.5];
        assert_approx_eq!(bezier(0.0, &values), 1.5, eps);
        assert_approx_eq!(bezier(1.0, &values), 2.5, eps);
    }

    #[test]
    fn evenly_spaced_values_are_linear() {
        let eps = 1e-12;
        let values: Vec<f64> = (0..=6).map(|i| i as f64 / 6.0).collect();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_approx_eq!(bezier(t, &values), t, eps);
        }
    }

    #[test]
    fn normalized_endpoints() {
        let mut rng = rand::thread_rng();
        for len in 1..8 {
            let interior: Vec<f64> = (0..len).map(|_| rng.gen_range(-5.0..5.0)).collect();
            assert_eq!(0.0, normalized_bezier(0.0, &interior));
            assert_eq!(1.0, normalized_bezier(1.0, &interior));
        }
    }

    #[test]
    fn normalized_empty_interior_is_linear() {
        assert_eq!(0.4, normalized_bezier(0.4, &[]));
    }

    #[test]
    fn normalized_matches_explicit_values() {
        let eps = 1e-12;
        let t = 0.65;
        assert_approx_eq!(normalized_bezier(t, &[0.2, 0.9]), bezier(t, &[0.0, 0.2, 0.9, 1.0]), eps);
    }

    #[test]
    fn value_type_matches_functions() {
        let eps = 1e-12;
        let values = vec![0.0, 0.8, 0.1, 1.0];
        let curve = Bezier::new(values.clone());
        let normalized = Bezier::normalized(&[0.8, 0.1]);

        assert_eq!(Some(3), curve.degree());
        assert_eq!(values.as_slice(), curve.control_values());
        assert_eq!(curve, normalized);

        let t_vector: Vec<f64> = (0..=20).map(|i| i as f64 / 20.0).collect();
        let results = curve.batch_evaluate(&t_vector);
        assert_eq!(t_vector.len(), results.len());
        for (t, result) in t_vector.iter().zip(results) {
            assert_approx_eq!(bezier(*t, &values), result, eps);
        }
    }

    #[test]
    fn empty_value_type() {
        let curve = Bezier::new(Vec::new());
        assert_eq!(None, curve.degree());
        assert_eq!(0.2, curve.evaluate(0.2));
    }

    #[test]
    fn high_degree_weights_sum_to_one() {
        let eps = 1e-9;
        for len in [60, 68, 70, 80, 100, 200] {
            let ones = vec![1.0; len];
            for t in [0.1, 0.5, 0.9] {
                assert_approx_eq!(bezier(t, &ones), 1.0, eps);
            }
        }
    }

    #[test]
    fn high_degree_normalized_endpoints() {
        let interior: Vec<f64> = (0..90).map(|i| (i % 7) as f64 / 7.0).collect();
        assert_eq!(0.0, normalized_bezier(0.0, &interior));
        assert_eq!(1.0, normalized_bezier(1.0, &interior));
    }

    #[ignore]
    #[test]
    fn perfomance() {
        use std::time::Instant;

        let mut rng = rand::thread_rng();
        let interior: Vec<f64> = (0..30).map(|_| rng.gen_range(0.0..1.0)).collect();
        let t_vector: Vec<f64> = (0..=1000).map(|i| i as f64 / 1000.0).collect();

        let now = Instant::now();
        for t in t_vector.iter() {
            assert!(normalized_bezier(*t, &interior).is_finite());
        }
        println!("normalized_bezier time: {:.2?}", now.elapsed());

        let curve = Bezier::normalized(&interior);
        let now = Instant::now();
        let results = curve.batch_evaluate(&t_vector);
        assert!(results.len() == t_vector.len());
        println!("batch_evaluate time: {:.2?}", now.elapsed());
    }
}
