//! Constrained CEC2009 problems CF1..CF10
//!
//! Each function returns the objectives followed by the inequality
//! constraints. The raw constraint of the published definition is feasible
//! when `>= 0`; it is negated once so that the returned value is feasible
//! when `<= 0`.
//!
//! CF6 and CF7 read `x[3]`: they require `dim >= 4` and panic otherwise.

use super::{
    Class, cos_factor, kink, mod3_classes, parity_classes, phase6, power_shape, ripple, ripple8,
    sgn, spherical, target3,
};
use ndarray::{Array1, ArrayView1, array};
use std::f64::consts::PI;

/// `sgn(v) * sqrt(|v|)`, with `sgn(0) = -1`
#[inline]
fn signed_sqrt(v: f64) -> f64 {
    sgn(v) * v.abs().sqrt()
}

/// `sgn(t) |t| / (1 + exp(4 |t|))`
#[inline]
fn damped(t: f64) -> f64 {
    sgn(t) * t.abs() / (1.0 + (4.0 * t.abs()).exp())
}

/// Raw spherical-front constraint shared by CF8..CF10
#[inline]
fn spherical_constraint(f: &[f64; 3], a: f64, n: f64, abs: bool) -> f64 {
    let denom = 1.0 - f[2] * f[2];
    let s = (n * PI * ((f[0] * f[0] - f[1] * f[1]) / denom + 1.0)).sin();
    let s = if abs { s.abs() } else { s };
    (f[0] * f[0] + f[1] * f[1]) / denom - a * s - 1.0
}

/// Odd / even sums over `j = 2..=dim` without normalisation (CF4..CF7)
fn parity_sums(
    dim: usize,
    mut odd: impl FnMut(usize) -> f64,
    mut even: impl FnMut(usize) -> f64,
) -> (f64, f64) {
    let mut sum1 = 0.0;
    let mut sum2 = 0.0;
    for j in 2..=dim {
        if j % 2 == 1 {
            sum1 += odd(j);
        } else {
            sum2 += even(j);
        }
    }
    (sum1, sum2)
}

/// Second constraint of CF6 / CF7 mirrors `x[3]` around this curve
#[inline]
fn quarter_root_gap(x0: f64) -> f64 {
    0.25 * (1.0 - x0).sqrt() - 0.5 * (1.0 - x0)
}

/// CF1: linear front, feasible only at `N + 1` discrete points
pub fn cf1(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    const N: f64 = 10.0;
    const A: f64 = 1.0;
    let [odd, even] = parity_classes(dim, |j| {
        let y = x[j - 1] - power_shape(x[0], j, dim);
        (y * y, 1.0)
    });
    let f0 = x[0] + odd.twice_mean();
    let f1 = 1.0 - x[0] + even.twice_mean();
    let g = f1 + f0 - A * (N * PI * (f0 - f1 + 1.0)).sin().abs() - 1.0;
    array![f0, f1, -g]
}

/// CF2: convex front split into disconnected feasible pieces
pub fn cf2(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    const N: f64 = 2.0;
    const A: f64 = 1.0;
    let [odd, even] = parity_classes(dim, |j| {
        let y = if j % 2 == 1 {
            x[j - 1] - phase6(x[0], j, dim).sin()
        } else {
            x[j - 1] - phase6(x[0], j, dim).cos()
        };
        (y * y, 1.0)
    });
    let f0 = x[0] + odd.twice_mean();
    let f1 = 1.0 - x[0].sqrt() + even.twice_mean();
    let t = f1 + f0.sqrt() - A * (N * PI * (f0.sqrt() - f1 + 1.0)).sin() - 1.0;
    array![f0, f1, -damped(t)]
}

/// CF3: concave front with a cosine-product penalty
pub fn cf3(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    const N: f64 = 2.0;
    const A: f64 = 1.0;
    let [odd, even] = parity_classes(dim, |j| {
        let y = x[j - 1] - phase6(x[0], j, dim).sin();
        (y * y, cos_factor(y, j))
    });
    let f0 = x[0] + odd.twice_mean_with_product();
    let f1 = 1.0 - x[0] * x[0] + even.twice_mean_with_product();
    let g = f1 + f0 * f0 - A * (N * PI * (f0 * f0 - f1 + 1.0)).sin() - 1.0;
    array![f0, f1, -g]
}

/// CF4: linear front, constraint acting on `x[1]`
pub fn cf4(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    let (sum1, sum2) = parity_sums(
        dim,
        |j| {
            let y = x[j - 1] - phase6(x[0], j, dim).sin();
            y * y
        },
        |j| {
            let y = x[j - 1] - phase6(x[0], j, dim).sin();
            if j == 2 { kink(y) } else { y * y }
        },
    );
    let f0 = x[0] + sum1;
    let f1 = 1.0 - x[0] + sum2;
    let t = x[1] - (6.0 * x[0] * PI + 2.0 * PI / dim as f64).sin() - 0.5 * x[0] + 0.25;
    array![f0, f1, -damped(t)]
}

/// CF5: CF4 with a ripple penalty and a modulated Pareto set
pub fn cf5(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    let (sum1, sum2) = parity_sums(
        dim,
        |j| ripple(x[j - 1] - 0.8 * x[0] * phase6(x[0], j, dim).cos()),
        |j| {
            let y = x[j - 1] - 0.8 * x[0] * phase6(x[0], j, dim).sin();
            if j == 2 { kink(y) } else { ripple(y) }
        },
    );
    let f0 = x[0] + sum1;
    let f1 = 1.0 - x[0] + sum2;
    let g = x[1] - 0.8 * x[0] * (6.0 * x[0] * PI + 2.0 * PI / dim as f64).sin() - 0.5 * x[0] + 0.25;
    array![f0, f1, -g]
}

/// CF6: two constraints on `x[1]` and `x[3]`; requires `dim >= 4`
pub fn cf6(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    let (sum1, sum2) = parity_sums(
        dim,
        |j| {
            let y = x[j - 1] - 0.8 * x[0] * phase6(x[0], j, dim).cos();
            y * y
        },
        |j| {
            let y = x[j - 1] - 0.8 * x[0] * phase6(x[0], j, dim).sin();
            y * y
        },
    );
    let f0 = x[0] + sum1;
    let f1 = (1.0 - x[0]) * (1.0 - x[0]) + sum2;
    let g0 = x[1]
        - 0.8 * x[0] * (6.0 * x[0] * PI + 2.0 * PI / dim as f64).sin()
        - signed_sqrt((x[0] - 0.5) * (1.0 - x[0]));
    let g1 = x[3]
        - 0.8 * x[0] * (6.0 * x[0] * PI + 4.0 * PI / dim as f64).sin()
        - signed_sqrt(quarter_root_gap(x[0]));
    array![f0, f1, -g0, -g1]
}

/// CF7: CF6 with ripple penalties; requires `dim >= 4`
pub fn cf7(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    let (sum1, sum2) = parity_sums(
        dim,
        |j| ripple(x[j - 1] - phase6(x[0], j, dim).cos()),
        |j| {
            let y = x[j - 1] - phase6(x[0], j, dim).sin();
            if j == 2 || j == 4 { y * y } else { ripple(y) }
        },
    );
    let f0 = x[0] + sum1;
    let f1 = (1.0 - x[0]) * (1.0 - x[0]) + sum2;
    let g0 = x[1]
        - (6.0 * x[0] * PI + 2.0 * PI / dim as f64).sin()
        - signed_sqrt((x[0] - 0.5) * (1.0 - x[0]));
    let g1 = x[3]
        - (6.0 * x[0] * PI + 4.0 * PI / dim as f64).sin()
        - signed_sqrt(quarter_root_gap(x[0]));
    array![f0, f1, -g0, -g1]
}

fn tri_objective(f: [f64; 3], g: f64) -> Array1<f64> {
    array![f[0], f[1], f[2], -g]
}

fn squared_classes(x: &ArrayView1<'_, f64>, dim: usize) -> [Class; 3] {
    mod3_classes(dim, |j| {
        let y = x[j - 1] - target3(x, j, dim);
        y * y
    })
}

/// CF8: spherical front cut by `|sin|` bands
pub fn cf8(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    let f = spherical(x[0], x[1], &squared_classes(&x, dim));
    let g = spherical_constraint(&f, 4.0, 2.0, true);
    tri_objective(f, g)
}

/// CF9: spherical front cut by `sin` bands
pub fn cf9(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    let f = spherical(x[0], x[1], &squared_classes(&x, dim));
    let g = spherical_constraint(&f, 3.0, 2.0, false);
    tri_objective(f, g)
}

/// CF10: CF9 with the fine ripple penalty
pub fn cf10(x: ArrayView1<'_, f64>, dim: usize) -> Array1<f64> {
    let classes = mod3_classes(dim, |j| ripple8(x[j - 1] - target3(&x, j, dim)));
    let f = spherical(x[0], x[1], &classes);
    let g = spherical_constraint(&f, 1.0, 2.0, false);
    tri_objective(f, g)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_power_set(x0: f64, dim: usize) -> Array1<f64> {
        Array1::from_shape_fn(dim, |i| {
            if i == 0 { x0 } else { power_shape(x0, i + 1, dim) }
        })
    }

    #[test]
    fn test_cf1_boundary_feasible_on_front() {
        let dim = 10;
        let f = cf1(on_power_set(0.5, dim).view(), dim);
        assert!((f[0] + f[1] - 1.0).abs() < 1e-12);
        // raw residual 1 - |sin(10π)| - 1 vanishes
        assert!(f[2].abs() < 1e-12, "g = {}", f[2]);
    }

    #[test]
    fn test_cf1_negation_applied_once() {
        let dim = 6;
        let mut x = on_power_set(0.3, dim);
        x[1] += 1.5;
        let f = cf1(x.view(), dim);
        let raw = f[1] + f[0] - (10.0 * PI * (f[0] - f[1] + 1.0)).sin().abs() - 1.0;
        assert!(raw > 0.0);
        assert_eq!(f[2], -raw);
        assert!(f[2] < 0.0);
    }

    #[test]
    fn test_cf2_damped_constraint() {
        let dim = 5;
        let x0: f64 = 0.25;
        let x = Array1::from_shape_fn(dim, |i| {
            let j = i + 1;
            match i {
                0 => x0,
                _ if j % 2 == 1 => phase6(x0, j, dim).sin(),
                _ => phase6(x0, j, dim).cos(),
            }
        });
        let f = cf2(x.view(), dim);
        assert!((f[0] - x0).abs() < 1e-12);
        assert!((f[1] - (1.0 - x0.sqrt())).abs() < 1e-12);
        // t = 1 - sin(2π) - 1 is ~0; damped(t) stays tiny whatever its sign
        assert!(f[2].abs() < 1e-12);
    }

    #[test]
    fn test_cf3_constraint_formula() {
        let x = array![0.2, 0.1, -0.3, 0.4, 0.0];
        let f = cf3(x.view(), 5);
        let raw = f[1] + f[0] * f[0] - (2.0 * PI * (f[0] * f[0] - f[1] + 1.0)).sin() - 1.0;
        assert_eq!(f[2], -raw);
    }

    #[test]
    fn test_cf4_sign_of_zero() {
        // sgn(0) = -1, but |0| keeps the damped value at zero
        assert_eq!(damped(0.0), 0.0);
        assert!(damped(1.0) > 0.0);
        assert!(damped(-1.0) < 0.0);
        let x = array![0.0, 0.0, 0.0];
        let f = cf4(x.view(), 3);
        // t = 0 - sin(2π/3) + 0.25
        let t = -(2.0 * PI / 3.0).sin() + 0.25;
        let expected = -(-(t.abs()) / (1.0 + (4.0 * t.abs()).exp()));
        assert!((f[2] - expected).abs() < 1e-15);
        assert!(f[2] > 0.0);
    }

    #[test]
    fn test_cf5_first_even_uses_kink() {
        let dim = 3;
        let x0: f64 = 0.5;
        // y2 = 1 -> kink branch 0.125 + 0
        let t2 = 0.8 * x0 * phase6(x0, 2, dim).sin();
        let t3 = 0.8 * x0 * phase6(x0, 3, dim).cos();
        let x = array![x0, t2 + 1.0, t3];
        let f = cf5(x.view(), dim);
        assert!((f[0] - x0).abs() < 1e-12);
        assert!((f[1] - (1.0 - x0 + 0.125)).abs() < 1e-12);
    }

    #[test]
    fn test_cf6_cf7_two_constraints() {
        let x = array![0.5, 0.1, 0.2, 0.3, -0.1];
        let f6 = cf6(x.view(), 5);
        let f7 = cf7(x.view(), 5);
        assert_eq!(f6.len(), 4);
        assert_eq!(f7.len(), 4);
        // (x0 - 0.5)(1 - x0) == 0 takes the sgn(0) = -1 branch: sqrt(0) = 0 anyway
        let g0 = 0.1 - 0.8 * 0.5 * (6.0 * 0.5 * PI + 2.0 * PI / 5.0).sin();
        assert!((f6[2] + g0).abs() < 1e-15);
    }

    #[test]
    #[should_panic]
    fn test_cf6_requires_fourth_component() {
        let x = array![0.5, 0.1, 0.2];
        let _ = cf6(x.view(), 3);
    }

    #[test]
    fn test_cf8_cf10_constraint_formula() {
        let x = array![0.3, 0.6, 0.1, -0.2, 0.5, 0.05];
        for (f, a, abs) in [
            (cf8(x.view(), 6), 4.0, true),
            (cf9(x.view(), 6), 3.0, false),
            (cf10(x.view(), 6), 1.0, false),
        ] {
            assert_eq!(f.len(), 4);
            let d = 1.0 - f[2] * f[2];
            let s = (2.0 * PI * ((f[0] * f[0] - f[1] * f[1]) / d + 1.0)).sin();
            let s = if abs { s.abs() } else { s };
            let raw = (f[0] * f[0] + f[1] * f[1]) / d - a * s - 1.0;
            assert_eq!(f[3], -raw);
        }
    }

    #[test]
    fn test_uf_cf_objectives_share_formula() {
        let x = array![0.3, 0.6, 0.1, -0.2, 0.5, 0.05];
        let uf = crate::functions::uf8(x.view(), 6);
        let cf = cf8(x.view(), 6);
        assert_eq!(uf.to_vec(), cf.to_vec()[..3].to_vec());
        let uf = crate::functions::uf10(x.view(), 6);
        let cf = cf10(x.view(), 6);
        assert_eq!(uf.to_vec(), cf.to_vec()[..3].to_vec());
    }
}
