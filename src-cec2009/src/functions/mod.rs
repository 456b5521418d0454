//! CEC2009 fitness functions
//!
//! - `unconstrained`: UF1..UF10
//! - `constrained`: CF1..CF10
//!
//! Every function has the signature [`Evaluator`]: it receives the decision
//! vector and the problem dimension and returns objectives followed by the
//! inequality constraints (feasible when `<= 0`). Evaluators never check
//! their input; a decision vector shorter than `dim` panics on indexing and
//! empty residue classes produce NaN, as in the published formulas.

use ndarray::{Array1, ArrayView1};
use std::f64::consts::PI;

pub mod constrained;
pub mod unconstrained;

pub use constrained::*;
pub use unconstrained::*;

/// Fitness evaluator: `(x, dim) -> [f_0, .., f_m, g_0, ..]`
pub type Evaluator = fn(ArrayView1<'_, f64>, usize) -> Array1<f64>;

/// UF1..UF10, indexed by `prob_id - 1`
pub static UNCONSTRAINED: [Evaluator; 10] = [
    uf1, uf2, uf3, uf4, uf5, uf6, uf7, uf8, uf9, uf10,
];

/// CF1..CF10, indexed by `prob_id - 1`
pub static CONSTRAINED: [Evaluator; 10] = [
    cf1, cf2, cf3, cf4, cf5, cf6, cf7, cf8, cf9, cf10,
];

/// Select the evaluator of a (validated) problem id
pub(crate) fn evaluator(prob_id: u32, is_constrained: bool) -> Evaluator {
    let table = if is_constrained {
        &CONSTRAINED
    } else {
        &UNCONSTRAINED
    };
    table[prob_id as usize - 1]
}

/// `+1` for strictly positive values, `-1` otherwise (zero included)
#[inline]
pub fn sgn(val: f64) -> f64 {
    if val > 0.0 { 1.0 } else { -1.0 }
}

/// Phase shared by the bi-objective shapes: `6πx0 + jπ/n`
#[inline]
pub(crate) fn phase6(x0: f64, j: usize, dim: usize) -> f64 {
    6.0 * PI * x0 + j as f64 * PI / dim as f64
}

/// Tri-objective target `2 x1 sin(2πx0 + jπ/n)`
#[inline]
pub(crate) fn target3(x: &ArrayView1<'_, f64>, j: usize, dim: usize) -> f64 {
    2.0 * x[1] * (2.0 * PI * x[0] + j as f64 * PI / dim as f64).sin()
}

/// Power-law shape of UF3 / CF1: `x0^(0.5 (1 + 3 (j-2) / (n-2)))`
#[inline]
pub(crate) fn power_shape(x0: f64, j: usize, dim: usize) -> f64 {
    x0.powf(0.5 * (1.0 + 3.0 * (j as f64 - 2.0) / (dim as f64 - 2.0)))
}

/// Ripple transform `2y² - cos(4πy) + 1`
#[inline]
pub(crate) fn ripple(y: f64) -> f64 {
    2.0 * y * y - (4.0 * PI * y).cos() + 1.0
}

/// Finer ripple used by UF10 / CF10: `4y² - cos(8πy) + 1`
#[inline]
pub(crate) fn ripple8(y: f64) -> f64 {
    4.0 * y * y - (8.0 * PI * y).cos() + 1.0
}

/// Cosine product factor `cos(20πy / sqrt(j))`
#[inline]
pub(crate) fn cos_factor(y: f64, j: usize) -> f64 {
    (20.0 * y * PI / (j as f64).sqrt()).cos()
}

/// Piecewise term used on the first even index of CF4 / CF5
#[inline]
pub(crate) fn kink(y: f64) -> f64 {
    if y < 1.5 - 0.75 * 2f64.sqrt() {
        y.abs()
    } else {
        0.125 + (y - 1.0) * (y - 1.0)
    }
}

/// Accumulator for one residue class of decision-vector indices
#[derive(Debug, Clone, Copy)]
pub(crate) struct Class {
    pub sum: f64,
    pub prod: f64,
    pub count: f64,
}

impl Class {
    pub const fn new() -> Self {
        Self {
            sum: 0.0,
            prod: 1.0,
            count: 0.0,
        }
    }

    #[inline]
    pub fn push(&mut self, v: f64) {
        self.sum += v;
        self.count += 1.0;
    }

    #[inline]
    pub fn push_with_factor(&mut self, v: f64, p: f64) {
        self.push(v);
        self.prod *= p;
    }

    /// `2 * sum / count`; NaN on an empty class
    #[inline]
    pub fn twice_mean(&self) -> f64 {
        2.0 * self.sum / self.count
    }

    /// `2 * (4 sum - 2 prod + 2) / count`
    #[inline]
    pub fn twice_mean_with_product(&self) -> f64 {
        2.0 * (4.0 * self.sum - 2.0 * self.prod + 2.0) / self.count
    }
}

/// Split indices `j = 2..=dim` by parity, returning `[odd, even]`
///
/// `term(j)` returns the contribution and the product factor of component
/// `j` (1-indexed).
pub(crate) fn parity_classes(dim: usize, mut term: impl FnMut(usize) -> (f64, f64)) -> [Class; 2] {
    let mut odd = Class::new();
    let mut even = Class::new();
    for j in 2..=dim {
        let (v, p) = term(j);
        if j % 2 == 0 {
            even.push_with_factor(v, p);
        } else {
            odd.push_with_factor(v, p);
        }
    }
    [odd, even]
}

/// Split indices `j = 3..=dim` into the three mod-3 classes
///
/// `term(j)` gives the contribution of component `j` (1-indexed).
pub(crate) fn mod3_classes(dim: usize, mut term: impl FnMut(usize) -> f64) -> [Class; 3] {
    let mut classes = [Class::new(); 3];
    for j in 3..=dim {
        let v = term(j);
        match j % 3 {
            1 => classes[0].push(v),
            2 => classes[1].push(v),
            _ => classes[2].push(v),
        }
    }
    classes
}

/// Spherical base front of UF8 / UF10 / CF8..CF10 plus class penalties
pub(crate) fn spherical(x0: f64, x1: f64, classes: &[Class; 3]) -> [f64; 3] {
    [
        (0.5 * PI * x0).cos() * (0.5 * PI * x1).cos() + classes[0].twice_mean(),
        (0.5 * PI * x0).cos() * (0.5 * PI * x1).sin() + classes[1].twice_mean(),
        (0.5 * PI * x0).sin() + classes[2].twice_mean(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sgn_zero_is_negative() {
        assert_eq!(sgn(0.0), -1.0);
        assert_eq!(sgn(-0.0), -1.0);
        assert_eq!(sgn(1e-300), 1.0);
        assert_eq!(sgn(-3.0), -1.0);
        assert_eq!(sgn(f64::NAN), -1.0);
    }

    #[test]
    fn test_empty_class_is_nan() {
        let c = Class::new();
        assert!(c.twice_mean().is_nan());
    }

    #[test]
    fn test_mod3_partition() {
        // j = 3..=8 -> residues 0,1,2,0,1,2
        let classes = mod3_classes(8, |j| j as f64);
        assert_eq!(classes[0].count, 2.0);
        assert_eq!(classes[0].sum, (4 + 7) as f64);
        assert_eq!(classes[1].sum, (5 + 8) as f64);
        assert_eq!(classes[2].sum, (3 + 6) as f64);
    }

    #[test]
    fn test_dispatch_tables_are_distinct() {
        let x = Array1::from_vec(vec![0.3, 0.2, 0.1, -0.1, 0.4, 0.25]);
        for id in 1..=10u32 {
            let u = evaluator(id, false)(x.view(), 6);
            let c = evaluator(id, true)(x.view(), 6);
            assert_ne!(u.len(), c.len(), "UF{} and CF{} should differ in length", id, id);
        }
    }

    #[test]
    fn test_kink_is_continuous() {
        let t = 1.5 - 0.75 * 2f64.sqrt();
        let left = kink(t - 1e-12);
        let right = kink(t);
        assert!((left - right).abs() < 1e-9, "{} vs {}", left, right);
    }
}
