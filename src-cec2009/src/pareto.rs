//! Decision vectors on the Pareto set of each problem
//!
//! All deviation terms vanish on these vectors, so the objectives reduce to
//! the base curve of the problem. For CF problems the constraints are not
//! taken into account: the returned point may be infeasible.

use crate::Cec2009;
use crate::functions::{phase6, power_shape};
use ndarray::Array1;
use std::f64::consts::PI;

/// Pareto-set decision vector of `problem` with leading components `x0`
/// and, for tri-objective problems, `x1`
///
/// Both should lie in `[0, 1]`. `x1` is ignored by the bi-objective
/// problems, whose second component follows from `x0`.
pub fn pareto_set_point(problem: &Cec2009, x0: f64, x1: f64) -> Array1<f64> {
    let dim = problem.dimension();
    let id = problem.prob_id();

    if id >= 8 {
        return Array1::from_shape_fn(dim, |i| match i {
            0 => x0,
            1 => x1,
            _ => 2.0 * x1 * (2.0 * PI * x0 + (i + 1) as f64 * PI / dim as f64).sin(),
        });
    }

    let target = |j: usize| -> f64 {
        let odd = j % 2 == 1;
        match (id, problem.is_constrained()) {
            (2, false) => {
                let amp = 0.3
                    * x0
                    * (x0 * (24.0 * PI * x0 + 4.0 * j as f64 * PI / dim as f64).cos() + 2.0);
                if odd {
                    amp * phase6(x0, j, dim).cos()
                } else {
                    amp * phase6(x0, j, dim).sin()
                }
            }
            (3, false) | (1, true) => power_shape(x0, j, dim),
            (2, true) => {
                if odd {
                    phase6(x0, j, dim).sin()
                } else {
                    phase6(x0, j, dim).cos()
                }
            }
            (5 | 6, true) => {
                if odd {
                    0.8 * x0 * phase6(x0, j, dim).cos()
                } else {
                    0.8 * x0 * phase6(x0, j, dim).sin()
                }
            }
            (7, true) => {
                if odd {
                    phase6(x0, j, dim).cos()
                } else {
                    phase6(x0, j, dim).sin()
                }
            }
            // UF1, UF4..UF7, CF3, CF4
            _ => phase6(x0, j, dim).sin(),
        }
    };

    Array1::from_shape_fn(dim, |i| if i == 0 { x0 } else { target(i + 1) })
}

/// `n` evenly spaced Pareto-set points (an `n x n` grid for tri-objective
/// problems)
pub fn pareto_set_samples(problem: &Cec2009, n: usize) -> Vec<Array1<f64>> {
    let step = |k: usize| {
        if n > 1 {
            k as f64 / (n - 1) as f64
        } else {
            0.0
        }
    };
    if problem.objective_count() == 3 {
        (0..n)
            .flat_map(|a| (0..n).map(move |b| (a, b)))
            .map(|(a, b)| pareto_set_point(problem, step(a), step(b)))
            .collect()
    } else {
        (0..n)
            .map(|k| pareto_set_point(problem, step(k), 0.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    /// Objectives with all deviation penalties removed
    fn base_front(p: &Cec2009, x: &Array1<f64>) -> Vec<f64> {
        let x0 = x[0];
        match (p.prob_id(), p.is_constrained()) {
            (1 | 2 | 3, false) => vec![x0, 1.0 - x0.sqrt()],
            (4, false) => vec![x0, 1.0 - x0 * x0],
            (7, false) => vec![x0.powf(0.2), 1.0 - x0.powf(0.2)],
            (1 | 4 | 5, true) => vec![x0, 1.0 - x0],
            (2, true) => vec![x0, 1.0 - x0.sqrt()],
            (3, true) => vec![x0, 1.0 - x0 * x0],
            (6 | 7, true) => vec![x0, (1.0 - x0) * (1.0 - x0)],
            (8 | 10, _) | (9, true) => {
                let x1 = x[1];
                vec![
                    (0.5 * PI * x0).cos() * (0.5 * PI * x1).cos(),
                    (0.5 * PI * x0).cos() * (0.5 * PI * x1).sin(),
                    (0.5 * PI * x0).sin(),
                ]
            }
            _ => unreachable!("no closed form used for {}", p.name()),
        }
    }

    #[test]
    fn test_penalties_vanish_on_pareto_set() {
        for p in Cec2009::all(12).unwrap() {
            let closed_form = !matches!(
                (p.prob_id(), p.is_constrained()),
                (5 | 6 | 9, false)
            );
            if !closed_form {
                continue;
            }
            for t in [[0.0, 0.3], [0.36, 0.5], [0.81, 1.0]] {
                let x = pareto_set_point(&p, t[0], t[1]);
                let f = p.fitness(&x);
                let expected = base_front(&p, &x);
                for (k, e) in expected.iter().enumerate() {
                    assert!(
                        (f[k] - e).abs() < TOL,
                        "{} at {:?}: f[{}] expected {}, got {}",
                        p.name(),
                        t,
                        k,
                        e,
                        f[k]
                    );
                }
            }
        }
    }

    #[test]
    fn test_second_coordinate_only_used_by_tri_objective() {
        let p = Cec2009::new(4, false, 6).unwrap();
        assert_eq!(pareto_set_point(&p, 0.4, 0.0), pareto_set_point(&p, 0.4, 0.9));

        let p = Cec2009::new(8, false, 6).unwrap();
        let a = pareto_set_point(&p, 0.4, 0.2);
        let b = pareto_set_point(&p, 0.4, 0.9);
        assert_eq!(a[1], 0.2);
        assert_eq!(b[1], 0.9);
        assert_ne!(a, b);
    }

    #[test]
    fn test_sample_counts() {
        let p = Cec2009::new(1, false, 10).unwrap();
        assert_eq!(pareto_set_samples(&p, 11).len(), 11);
        let p = Cec2009::new(9, true, 10).unwrap();
        let samples = pareto_set_samples(&p, 4);
        assert_eq!(samples.len(), 16);
        assert!(samples.iter().all(|x| x.len() == 10));
    }
}
