//! Objective / constraint counts and box bounds for the CEC2009 suite
//!
//! All tables are indexed by `prob_id - 1`. Callers must have validated
//! `prob_id` beforehand (see [`crate::Cec2009::new`]).

use ndarray::Array1;

/// Number of objectives for problems 1..=10 (identical for UF and CF)
pub const N_OBJECTIVES: [usize; 10] = [2, 2, 2, 2, 2, 2, 2, 3, 3, 3];

/// Number of inequality constraints for CF1..=CF10
pub const N_INEQUALITY_CONSTRAINTS: [usize; 10] = [1, 1, 1, 1, 1, 2, 2, 1, 1, 1];

/// Objective count of problem `prob_id`
pub(crate) fn objective_count(prob_id: u32) -> usize {
    N_OBJECTIVES[prob_id as usize - 1]
}

/// Inequality constraint count, 0 for the unconstrained variants
pub(crate) fn constraint_count(prob_id: u32, is_constrained: bool) -> usize {
    if is_constrained {
        N_INEQUALITY_CONSTRAINTS[prob_id as usize - 1]
    } else {
        0
    }
}

/// Box shape of a variant: the first `head` components live in `[0, 1]`,
/// the remaining ones in `[-tail, tail]` (or `[0, 1]` when `tail` is `None`)
#[derive(Debug, Clone, Copy, PartialEq)]
struct BoxShape {
    head: usize,
    tail: Option<f64>,
}

fn box_shape(prob_id: u32, is_constrained: bool) -> BoxShape {
    let shape = |head, tail| BoxShape { head, tail };
    if !is_constrained {
        match prob_id {
            // [0,1] x [-1,1]^{n-1}
            1 | 2 | 5 | 6 | 7 => shape(1, Some(1.0)),
            // [0,1]^{n}
            3 => shape(1, None),
            // [0,1] x [-2,2]^{n-1}
            4 => shape(1, Some(2.0)),
            // [0,1]^{2} x [-2,2]^{n-2}
            _ => shape(2, Some(2.0)),
        }
    } else {
        match prob_id {
            // [0,1]^{n}
            1 => shape(1, None),
            // [0,1] x [-1,1]^{n-1}
            2 => shape(1, Some(1.0)),
            // [0,1] x [-2,2]^{n-1}
            3..=7 => shape(1, Some(2.0)),
            // [0,1]^{2} x [-4,4]^{n-2}
            8 => shape(2, Some(4.0)),
            // [0,1]^{2} x [-2,2]^{n-2}
            _ => shape(2, Some(2.0)),
        }
    }
}

/// Lower and upper bounds of a `dim`-dimensional problem
pub fn bounds(prob_id: u32, is_constrained: bool, dim: usize) -> (Array1<f64>, Array1<f64>) {
    let BoxShape { head, tail } = box_shape(prob_id, is_constrained);
    let (tail_lo, tail_hi) = match tail {
        Some(t) => (-t, t),
        None => (0.0, 1.0),
    };
    let lower = Array1::from_shape_fn(dim, |i| if i < head { 0.0 } else { tail_lo });
    let upper = Array1::from_shape_fn(dim, |i| if i < head { 1.0 } else { tail_hi });
    (lower, upper)
}
