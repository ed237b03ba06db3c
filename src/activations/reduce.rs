//! Reductions along the last (feature) axis.
//!
//! Every function keeps the reduced axis with length one so the result
//! broadcasts back against its input.

use ndarray::{ArrayBase, ArrayD, Axis, Data, IxDyn};

fn last_axis<S: Data<Elem = f32>>(x: &ArrayBase<S, IxDyn>) -> Axis {
    Axis(x.ndim() - 1)
}

/// Maximum along the last axis.
pub fn max<S: Data<Elem = f32>>(x: &ArrayBase<S, IxDyn>) -> ArrayD<f32> {
    let axis = last_axis(x);
    x.fold_axis(axis, f32::NEG_INFINITY, |&acc, &v| acc.max(v))
        .insert_axis(axis)
}

/// Maximum absolute value along the last axis.
pub fn max_abs<S: Data<Elem = f32>>(x: &ArrayBase<S, IxDyn>) -> ArrayD<f32> {
    let axis = last_axis(x);
    x.fold_axis(axis, 0.0f32, |&acc, &v| acc.max(v.abs()))
        .insert_axis(axis)
}

pub fn sum<S: Data<Elem = f32>>(x: &ArrayBase<S, IxDyn>) -> ArrayD<f32> {
    let axis = last_axis(x);
    x.sum_axis(axis).insert_axis(axis)
}

/// Per-row scale used to keep intermediate sums in range.
fn scale<S: Data<Elem = f32>>(x: &ArrayBase<S, IxDyn>) -> ArrayD<f32> {
    max_abs(x).mapv(|s| if s > 0.0 && s.is_finite() { s } else { 1.0 })
}

/// Arithmetic mean along the last axis.
pub fn mean<S: Data<Elem = f32>>(x: &ArrayBase<S, IxDyn>) -> ArrayD<f32> {
    let n = x.len_of(last_axis(x)) as f32;
    let scale = scale(x);
    let scaled = x / &scale;
    &sum(&scaled).mapv(|s| s / n) * &scale
}

/// Population standard deviation (no degrees-of-freedom correction).
pub fn std<S: Data<Elem = f32>>(x: &ArrayBase<S, IxDyn>) -> ArrayD<f32> {
    let scale = scale(x);
    let scaled = x / &scale;
    let centered = &scaled - &mean(&scaled);
    &mean(&centered.mapv(|v| v * v)).mapv(f32::sqrt) * &scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn reductions_keep_last_axis() {
        let x = array![[1.0f32, -4.0, 3.0], [2.0, 2.0, 2.0]].into_dyn();
        assert_eq!(max(&x).shape(), &[2, 1]);
        assert_eq!(max(&x), array![[3.0f32], [2.0]].into_dyn());
        assert_eq!(max_abs(&x), array![[4.0f32], [2.0]].into_dyn());
        assert_eq!(sum(&x), array![[0.0f32], [6.0]].into_dyn());
        assert_eq!(mean(&x), array![[0.0f32], [2.0]].into_dyn());
    }

    #[test]
    fn std_is_population_std() {
        let x = array![2.0f32, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_dyn();
        let s = std(&x);
        assert_eq!(s.shape(), &[1]);
        assert!((s[[0]] - 2.0).abs() < 1e-5);
    }

    #[test]
    fn large_magnitudes_stay_finite() {
        let x = array![3e38f32, 3e38, -3e38, 1e20].into_dyn();
        assert!(mean(&x)[[0]].is_finite());
        assert!(std(&x)[[0]].is_finite());
        assert!(std(&x)[[0]] > 0.0);
    }
}
