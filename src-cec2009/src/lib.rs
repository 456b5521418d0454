//! CEC2009 multi-objective test problems
//!
//! This library provides the twenty benchmark problems of the CEC2009
//! special session on multi-objective optimisation:
//!
//! - **UF1..UF10**: unconstrained, 2 objectives (UF1..UF7) or 3 (UF8..UF10)
//! - **CF1..CF10**: the constrained counterparts, with 1 inequality
//!   constraint (2 for CF6 and CF7) in the `g(x) <= 0` convention
//!
//! A problem is described by `(prob_id, is_constrained, dimension)` and
//! exposes bounds, objective / constraint counts and a pure fitness
//! function. Instances hold no mutable state and can be shared freely
//! between threads.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use cec2009::Cec2009;
//!
//! let problem = Cec2009::new(1, false, 30).unwrap();
//! assert_eq!(problem.name(), "CEC2009 - UF1");
//!
//! let (lower, upper) = problem.bounds();
//! let x = (&lower + &upper) / 2.0;
//! let f = problem.fitness(&x);
//! assert_eq!(f.len(), 2);
//! ```

use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub mod error;
pub mod functions;
pub mod pareto;
pub mod problem;
pub mod tables;

pub use error::{Cec2009Error, Result};
pub use functions::{Evaluator, sgn};
pub use pareto::{pareto_set_point, pareto_set_samples};
pub use problem::MultiObjectiveProblem;

/// Unconstrained (UF) or constrained (CF) flavour of a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Unconstrained,
    Constrained,
}

impl Variant {
    /// "UF" or "CF"
    pub fn prefix(&self) -> &'static str {
        match self {
            Variant::Unconstrained => "UF",
            Variant::Constrained => "CF",
        }
    }

    pub fn is_constrained(&self) -> bool {
        matches!(self, Variant::Constrained)
    }
}

/// Serialized form of a [`Cec2009`] problem, validated on deserialization
#[derive(Debug, Clone, Deserialize)]
pub struct Cec2009Descriptor {
    pub prob_id: u32,
    pub is_constrained: bool,
    pub dim: usize,
}

impl TryFrom<Cec2009Descriptor> for Cec2009 {
    type Error = Cec2009Error;

    fn try_from(d: Cec2009Descriptor) -> Result<Self> {
        Cec2009::new(d.prob_id, d.is_constrained, d.dim)
    }
}

/// One CEC2009 problem instance
///
/// Immutable after construction; [`fitness`](Cec2009::fitness) is a pure
/// function of the decision vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Cec2009Descriptor")]
pub struct Cec2009 {
    prob_id: u32,
    is_constrained: bool,
    dim: usize,
}

impl Default for Cec2009 {
    /// UF1 in dimension 30
    fn default() -> Self {
        Self {
            prob_id: 1,
            is_constrained: false,
            dim: 30,
        }
    }
}

impl Cec2009 {
    /// Build problem `prob_id` (1..=10) of the UF (`is_constrained == false`)
    /// or CF family in dimension `dim`
    ///
    /// # Errors
    ///
    /// [`Cec2009Error::InvalidProblemId`] when `prob_id` is outside `1..=10`,
    /// [`Cec2009Error::ZeroDimension`] when `dim == 0`.
    pub fn new(prob_id: u32, is_constrained: bool, dim: usize) -> Result<Self> {
        if !(1..=10).contains(&prob_id) {
            return Err(Cec2009Error::InvalidProblemId(prob_id));
        }
        if dim < 1 {
            return Err(Cec2009Error::ZeroDimension);
        }
        let problem = Self {
            prob_id,
            is_constrained,
            dim,
        };
        log::debug!("created {} with dimension {}", problem.name(), dim);
        if dim < problem.minimum_dimension() {
            log::warn!(
                "{} needs dimension >= {} to be well defined, got {}",
                problem.name(),
                problem.minimum_dimension(),
                dim
            );
        }
        Ok(problem)
    }

    /// Parse a name such as `"UF3"`, `"cf10"` or `"CEC2009 - UF1"`
    pub fn from_name(name: &str, dim: usize) -> Result<Self> {
        let unknown = || Cec2009Error::UnknownProblemName(name.to_string());
        let upper = name.trim().to_ascii_uppercase();
        let short = upper
            .strip_prefix("CEC2009 - ")
            .unwrap_or(upper.as_str())
            .trim();
        let (is_constrained, digits) = if let Some(d) = short.strip_prefix("UF") {
            (false, d)
        } else if let Some(d) = short.strip_prefix("CF") {
            (true, d)
        } else {
            return Err(unknown());
        };
        let prob_id: u32 = digits.parse().map_err(|_| unknown())?;
        Self::new(prob_id, is_constrained, dim)
    }

    pub fn prob_id(&self) -> u32 {
        self.prob_id
    }

    pub fn is_constrained(&self) -> bool {
        self.is_constrained
    }

    pub fn variant(&self) -> Variant {
        if self.is_constrained {
            Variant::Constrained
        } else {
            Variant::Unconstrained
        }
    }

    /// Length of the decision vector
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// 2 for problems 1..=7, 3 for 8..=10, whatever the variant
    pub fn objective_count(&self) -> usize {
        tables::objective_count(self.prob_id)
    }

    /// Inequality constraints; 0 for UF problems
    pub fn constraint_count(&self) -> usize {
        tables::constraint_count(self.prob_id, self.is_constrained)
    }

    /// The suite has no equality constraints
    pub fn equality_constraint_count(&self) -> usize {
        0
    }

    /// Box bounds `(lower, upper)`; advisory only, never enforced
    pub fn bounds(&self) -> (Array1<f64>, Array1<f64>) {
        tables::bounds(self.prob_id, self.is_constrained, self.dim)
    }

    /// "CEC2009 - UF<id>" or "CEC2009 - CF<id>"
    pub fn name(&self) -> String {
        format!("CEC2009 - {}", self.short_name())
    }

    /// "UF<id>" or "CF<id>"
    pub fn short_name(&self) -> String {
        format!("{}{}", self.variant().prefix(), self.prob_id)
    }

    /// Smallest dimension for which every residue class is populated and all
    /// fixed indices exist
    ///
    /// Smaller dimensions are accepted by [`Cec2009::new`] but produce NaN
    /// objectives, or a panic for CF6 / CF7 which read `x[3]`.
    pub fn minimum_dimension(&self) -> usize {
        match (self.prob_id, self.is_constrained) {
            (8..=10, _) => 5,
            (6 | 7, true) => 4,
            _ => 3,
        }
    }

    /// The evaluator this instance dispatches to
    pub fn evaluator(&self) -> Evaluator {
        functions::evaluator(self.prob_id, self.is_constrained)
    }

    /// Objectives followed by inequality constraints
    ///
    /// `x` must have length `dimension()`; it is not checked. A shorter
    /// vector panics on indexing, a longer one has its tail ignored.
    pub fn fitness(&self, x: &Array1<f64>) -> Array1<f64> {
        self.fitness_view(x.view())
    }

    /// [`fitness`](Cec2009::fitness) for a borrowed view
    pub fn fitness_view(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
        (self.evaluator())(x, self.dim)
    }

    /// [`fitness`](Cec2009::fitness) for a plain slice
    pub fn fitness_slice(&self, x: &[f64]) -> Array1<f64> {
        self.fitness_view(ArrayView1::from(x))
    }

    /// True when every constraint of `fitness` is `<= 0` (always true for UF)
    pub fn is_feasible(&self, fitness: &Array1<f64>) -> bool {
        MultiObjectiveProblem::is_feasible(self, fitness)
    }

    /// Bounds as a `2 x n` matrix: row 0 lower, row 1 upper
    pub fn bounds_matrix(&self) -> Array2<f64> {
        MultiObjectiveProblem::bounds_matrix(self)
    }

    /// Bounds as `(min, max)` pairs
    pub fn bounds_pairs(&self) -> Vec<(f64, f64)> {
        MultiObjectiveProblem::bounds_pairs(self)
    }

    /// All twenty problems in dimension `dim`, UF first
    pub fn all(dim: usize) -> Result<Vec<Self>> {
        [false, true]
            .into_iter()
            .flat_map(|c| (1..=10).map(move |id| (id, c)))
            .map(|(id, c)| Self::new(id, c, dim))
            .collect()
    }
}

impl fmt::Display for Cec2009 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl MultiObjectiveProblem for Cec2009 {
    fn name(&self) -> String {
        Cec2009::name(self)
    }

    fn dimension(&self) -> usize {
        self.dim
    }

    fn objective_count(&self) -> usize {
        Cec2009::objective_count(self)
    }

    fn constraint_count(&self) -> usize {
        Cec2009::constraint_count(self)
    }

    fn bounds(&self) -> (Array1<f64>, Array1<f64>) {
        Cec2009::bounds(self)
    }

    fn fitness(&self, x: &Array1<f64>) -> Array1<f64> {
        Cec2009::fitness(self, x)
    }
}

/// Metadata for one problem of the suite
#[derive(Debug, Clone, Serialize)]
pub struct ProblemMetadata {
    /// Full name, e.g. "CEC2009 - CF6"
    pub name: String,
    /// Short name, e.g. "CF6"
    pub short_name: String,
    pub variant: Variant,
    pub prob_id: u32,
    /// Description of the Pareto front
    pub description: String,
    pub objectives: usize,
    pub inequality_constraints: usize,
    /// Dimension used in the CEC2009 competition
    pub recommended_dimension: usize,
    /// Smallest well-defined dimension
    pub minimum_dimension: usize,
    /// Bounds at the recommended dimension
    pub bounds: Vec<(f64, f64)>,
}

const UF_DESCRIPTIONS: [&str; 10] = [
    "Convex front f2 = 1 - sqrt(f1), sine-shaped Pareto set",
    "Convex front f2 = 1 - sqrt(f1), amplitude-modulated Pareto set",
    "Convex front f2 = 1 - sqrt(f1), power-law Pareto set, cosine-product penalty",
    "Concave front f2 = 1 - f1^2, sigmoid-damped penalty",
    "Discrete front of 21 points on f1 + f2 = 1, ripple penalty",
    "Isolated point plus 2 disconnected segments of f1 + f2 = 1",
    "Linear front f1 + f2 = 1 reparameterised by x1^0.2",
    "Spherical 3-objective front",
    "Two disconnected planar 3-objective pieces",
    "Spherical 3-objective front, fine ripple penalty",
];

const CF_DESCRIPTIONS: [&str; 10] = [
    "Linear front with 11 feasible discrete points",
    "Convex front split into disconnected feasible regions",
    "Concave front with disconnected feasible regions, cosine-product penalty",
    "Piecewise linear front, constraint on x2",
    "Piecewise linear front, ripple penalty, constraint on x2",
    "Piecewise front, two constraints on x2 and x4",
    "Piecewise front, ripple penalty, two constraints on x2 and x4",
    "Spherical 3-objective front cut into |sin| bands",
    "Spherical 3-objective front cut into sin bands",
    "Spherical 3-objective front cut into sin bands, fine ripple penalty",
];

/// Get metadata for all twenty problems, keyed by lowercase short name
/// ("uf1".."uf10", "cf1".."cf10")
pub fn get_problem_metadata() -> HashMap<String, ProblemMetadata> {
    let mut metadata = HashMap::new();
    for constrained in [false, true] {
        for id in 1..=10u32 {
            let recommended_dimension = if constrained { 10 } else { 30 };
            let p = Cec2009 {
                prob_id: id,
                is_constrained: constrained,
                dim: recommended_dimension,
            };
            let description = if constrained {
                CF_DESCRIPTIONS[id as usize - 1]
            } else {
                UF_DESCRIPTIONS[id as usize - 1]
            };
            metadata.insert(
                p.short_name().to_lowercase(),
                ProblemMetadata {
                    name: p.name(),
                    short_name: p.short_name(),
                    variant: p.variant(),
                    prob_id: id,
                    description: description.to_string(),
                    objectives: p.objective_count(),
                    inequality_constraints: p.constraint_count(),
                    recommended_dimension,
                    minimum_dimension: p.minimum_dimension(),
                    bounds: p.bounds_pairs(),
                },
            );
        }
    }
    metadata
}
