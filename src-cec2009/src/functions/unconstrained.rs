//! Unconstrained CEC2009 problems UF1..UF10
//!
//! UF1..UF7 are bi-objective: component `x0` positions the point along the
//! front and the remaining components are split by parity of their 1-based
//! index `j` (odd `j` feeds `f0`, even `j` feeds `f1`). UF8..UF10 are
//! tri-objective and split `j >= 3` by `j mod 3`.
//!
//! Bounds: see [`crate::tables::bounds`].

use super::{
    cos_factor, mod3_classes, parity_classes, phase6, power_shape, ripple, ripple8, spherical,
    target3,
};
use ndarray::{Array1, ArrayView1, array};
use std::f64::consts::PI;

/// Deviation of component `j` from `sin(6πx0 + jπ/n)`
fn sine_deviation(x: &ArrayView1<'_, f64>, j: usize, dim: usize) -> f64 {
    x[j - 1] - phase6(x[0], j, dim).sin()
}

/// UF1: sine-shaped Pareto set, convex front `f1 = 1 - sqrt(f0)`
pub fn uf1(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    let [odd, even] = parity_classes(dim, |j| {
        let y = sine_deviation(&x, j, dim);
        (y * y, 1.0)
    });
    array![
        x[0] + odd.twice_mean(),
        1.0 - x[0].sqrt() + even.twice_mean()
    ]
}

/// UF2: amplitude-modulated Pareto set, sine on even `j`, cosine on odd `j`
pub fn uf2(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    let [odd, even] = parity_classes(dim, |j| {
        let amp = 0.3
            * x[0]
            * (x[0] * (24.0 * PI * x[0] + 4.0 * j as f64 * PI / dim as f64).cos() + 2.0);
        let y = if j % 2 == 0 {
            x[j - 1] - amp * phase6(x[0], j, dim).sin()
        } else {
            x[j - 1] - amp * phase6(x[0], j, dim).cos()
        };
        (y * y, 1.0)
    });
    array![
        x[0] + odd.twice_mean(),
        1.0 - x[0].sqrt() + even.twice_mean()
    ]
}

/// UF3: power-law Pareto set with a cosine-product multimodal penalty
pub fn uf3(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    let [odd, even] = parity_classes(dim, |j| {
        let y = x[j - 1] - power_shape(x[0], j, dim);
        (y * y, cos_factor(y, j))
    });
    array![
        x[0] + odd.twice_mean_with_product(),
        1.0 - x[0].sqrt() + even.twice_mean_with_product()
    ]
}

/// UF4: concave front, sigmoid-damped deviations
pub fn uf4(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    let [odd, even] = parity_classes(dim, |j| {
        let y = sine_deviation(&x, j, dim);
        (y.abs() / (1.0 + (2.0 * y.abs()).exp()), 1.0)
    });
    array![
        x[0] + odd.twice_mean(),
        1.0 - x[0] * x[0] + even.twice_mean()
    ]
}

/// UF5: discrete front of `2N + 1` points, ripple penalty
pub fn uf5(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    const N: f64 = 10.0;
    const E: f64 = 0.1;
    let [odd, even] = parity_classes(dim, |j| (ripple(sine_deviation(&x, j, dim)), 1.0));
    let h = (0.5 / N + E) * (2.0 * N * PI * x[0]).sin().abs();
    array![
        x[0] + h + odd.twice_mean(),
        1.0 - x[0] + h + even.twice_mean()
    ]
}

/// UF6: one isolated point plus `N` disconnected segments
pub fn uf6(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    const N: f64 = 2.0;
    const E: f64 = 0.1;
    let [odd, even] = parity_classes(dim, |j| {
        let y = sine_deviation(&x, j, dim);
        (y * y, cos_factor(y, j))
    });
    let mut h = 2.0 * (0.5 / N + E) * (2.0 * N * PI * x[0]).sin();
    if h < 0.0 {
        h = 0.0;
    }
    array![
        x[0] + h + odd.twice_mean_with_product(),
        1.0 - x[0] + h + even.twice_mean_with_product()
    ]
}

/// UF7: linear front reparameterised by `x0^0.2`
pub fn uf7(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    let [odd, even] = parity_classes(dim, |j| {
        let y = sine_deviation(&x, j, dim);
        (y * y, 1.0)
    });
    let base = x[0].powf(0.2);
    array![base + odd.twice_mean(), 1.0 - base + even.twice_mean()]
}

/// UF8: spherical tri-objective front
pub fn uf8(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    let classes = mod3_classes(dim, |j| {
        let y = x[j - 1] - target3(&x, j, dim);
        y * y
    });
    Array1::from(spherical(x[0], x[1], &classes).to_vec())
}

/// UF9: two disconnected planar pieces
pub fn uf9(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    const E: f64 = 0.1;
    let [c1, c2, c3] = mod3_classes(dim, |j| {
        let y = x[j - 1] - target3(&x, j, dim);
        y * y
    });
    let mut base = (1.0 + E) * (1.0 - 4.0 * (2.0 * x[0] - 1.0) * (2.0 * x[0] - 1.0));
    if base < 0.0 {
        base = 0.0;
    }
    array![
        0.5 * (base + 2.0 * x[0]) * x[1] + c1.twice_mean(),
        0.5 * (base - 2.0 * x[0] + 2.0) * x[1] + c2.twice_mean(),
        1.0 - x[1] + c3.twice_mean()
    ]
}

/// UF10: spherical front with the fine ripple penalty
pub fn uf10(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    let classes = mod3_classes(dim, |j| ripple8(x[j - 1] - target3(&x, j, dim)));
    Array1::from(spherical(x[0], x[1], &classes).to_vec())
}
