//! Uniform contract of a box-bounded, multi-objective, inequality-constrained
//! test problem, as consumed by an external optimizer

use ndarray::{Array1, Array2};

/// A multi-objective problem with inequality constraints (`g(x) <= 0`)
///
/// The fitness vector holds `objective_count()` objectives to minimise
/// followed by `constraint_count()` inequality constraints.
pub trait MultiObjectiveProblem {
    /// Human readable name
    fn name(&self) -> String;

    /// Length of the decision vector
    fn dimension(&self) -> usize;

    fn objective_count(&self) -> usize;

    /// Number of inequality constraints
    fn constraint_count(&self) -> usize;

    /// Number of equality constraints
    fn equality_constraint_count(&self) -> usize {
        0
    }

    /// Lower and upper bounds, each of length `dimension()`
    fn bounds(&self) -> (Array1<f64>, Array1<f64>);

    /// Objectives followed by inequality constraints
    fn fitness(&self, x: &Array1<f64>) -> Array1<f64>;

    /// Length of the vector returned by [`fitness`](Self::fitness)
    fn fitness_len(&self) -> usize {
        self.objective_count() + self.equality_constraint_count() + self.constraint_count()
    }

    /// Bounds as a `2 x n` matrix: row 0 lower, row 1 upper
    fn bounds_matrix(&self) -> Array2<f64> {
        let (lower, upper) = self.bounds();
        let n = self.dimension();
        Array2::from_shape_fn((2, n), |(i, j)| if i == 0 { lower[j] } else { upper[j] })
    }

    /// Bounds as `(min, max)` pairs
    fn bounds_pairs(&self) -> Vec<(f64, f64)> {
        let (lower, upper) = self.bounds();
        lower.iter().copied().zip(upper.iter().copied()).collect()
    }

    /// True when every constraint entry of `fitness` is `<= 0`
    ///
    /// NaN constraints are reported infeasible.
    fn is_feasible(&self, fitness: &Array1<f64>) -> bool {
        fitness
            .iter()
            .skip(self.objective_count())
            .all(|&g| g <= 0.0)
    }
}
