use cec2009::{Cec2009, Cec2009Error, MultiObjectiveProblem};
use ndarray::Array1;
use std::f64::consts::PI;

const DIMS: [usize; 4] = [5, 10, 30, 57];

fn midpoint(p: &Cec2009) -> Array1<f64> {
    let (lower, upper) = p.bounds();
    (&lower + &upper) / 2.0
}

#[test]
fn test_bounds_are_ordered_and_sized() {
    for dim in DIMS {
        for p in Cec2009::all(dim).unwrap() {
            let (lower, upper) = p.bounds();
            assert_eq!(lower.len(), dim, "{}", p);
            assert_eq!(upper.len(), dim, "{}", p);
            for i in 0..dim {
                assert!(lower[i] <= upper[i], "{} component {}", p, i);
            }
        }
    }
}

#[test]
fn test_objective_and_constraint_counts() {
    for id in 1..=10u32 {
        let expected_objectives = if id <= 7 { 2 } else { 3 };
        let expected_constraints = if id == 6 || id == 7 { 2 } else { 1 };
        let u = Cec2009::new(id, false, 10).unwrap();
        let c = Cec2009::new(id, true, 10).unwrap();
        assert_eq!(u.objective_count(), expected_objectives);
        assert_eq!(c.objective_count(), expected_objectives);
        assert_eq!(u.constraint_count(), 0);
        assert_eq!(c.constraint_count(), expected_constraints);
    }
}

#[test]
fn test_fitness_length() {
    for dim in DIMS {
        for p in Cec2009::all(dim).unwrap() {
            let f = p.fitness(&midpoint(&p));
            assert_eq!(f.len(), p.objective_count() + p.constraint_count(), "{}", p);
            assert_eq!(f.len(), p.fitness_len());
            assert!(f.iter().all(|v| v.is_finite()), "{} gave {:?}", p, f);
        }
    }
}

#[test]
fn test_fitness_is_deterministic() {
    for p in Cec2009::all(11).unwrap() {
        let (lower, upper) = p.bounds();
        let x = Array1::from_shape_fn(p.dimension(), |i| {
            lower[i] + (upper[i] - lower[i]) * ((i as f64 * 0.37).fract())
        });
        let a = p.fitness(&x);
        let b = p.fitness(&x);
        // bitwise equality, not approximate
        let a_bits: Vec<u64> = a.iter().map(|v| v.to_bits()).collect();
        let b_bits: Vec<u64> = b.iter().map(|v| v.to_bits()).collect();
        assert_eq!(a_bits, b_bits, "{}", p);
    }
}

#[test]
fn test_uf1_dimension_three() {
    let p = Cec2009::new(1, false, 3).unwrap();
    let x = Array1::from_vec(vec![0.5, 0.0, 0.0]);
    let f = p.fitness(&x);

    // x[1] (j = 2) is the only even term, x[2] (j = 3) the only odd one
    let y2 = x[1] - (6.0 * PI * 0.5 + 2.0 * PI / 3.0).sin();
    let y3 = x[2] - (6.0 * PI * 0.5 + 3.0 * PI / 3.0).sin();
    let f0 = 0.5 + 2.0 * y3 * y3;
    let f1 = 1.0 - 0.5f64.sqrt() + 2.0 * y2 * y2;
    assert!((f[0] - f0).abs() < 1e-9, "f0 = {}, expected {}", f[0], f0);
    assert!((f[1] - f1).abs() < 1e-9, "f1 = {}, expected {}", f[1], f1);
}

#[test]
fn test_construction_errors_are_invalid_argument() {
    for (id, constrained, dim) in [(0, false, 5), (11, true, 5), (3, false, 0)] {
        let err = Cec2009::new(id, constrained, dim).unwrap_err();
        assert!(err.is_invalid_argument(), "{:?}", err);
    }
    assert!(Cec2009::new(3, false, 5).is_ok());
    assert!(matches!(
        Cec2009::new(42, false, 5),
        Err(Cec2009Error::InvalidProblemId(42))
    ));
}

#[test]
fn test_cf1_boundary_feasible_on_pareto_curve() {
    let dim = 10;
    let p = Cec2009::new(1, true, dim).unwrap();
    for x0 in [0.0f64, 0.2, 0.5, 0.7, 1.0] {
        let x = Array1::from_shape_fn(dim, |i| {
            if i == 0 {
                x0
            } else {
                let j = (i + 1) as f64;
                x0.powf(0.5 * (1.0 + 3.0 * (j - 2.0) / (dim as f64 - 2.0)))
            }
        });
        let f = p.fitness(&x);
        assert!((f[0] + f[1] - 1.0).abs() < 1e-12);
        // g = -(f0 + f1 - |sin(10 pi (f0 - f1 + 1))| - 1)
        let expected = (10.0 * PI * (f[0] - f[1] + 1.0)).sin().abs();
        assert!((f[2] - expected).abs() < 1e-9, "x0 = {}: g = {}", x0, f[2]);
        assert!(f[2] >= 0.0);
    }
    // x0 = 0.5 puts the sine on a zero: the point sits on the boundary
    let x = Array1::from_shape_fn(dim, |i| {
        if i == 0 {
            0.5
        } else {
            let j = (i + 1) as f64;
            0.5f64.powf(0.5 * (1.0 + 3.0 * (j - 2.0) / (dim as f64 - 2.0)))
        }
    });
    let f = p.fitness(&x);
    assert!(f[2].abs() < 1e-9, "g = {}", f[2]);
    assert!(p.is_feasible(&f.mapv(|v| if v.abs() < 1e-9 { 0.0 } else { v })));
}

#[test]
fn test_bounds_are_advisory() {
    // out of bounds vectors are evaluated as is
    let p = Cec2009::new(4, true, 6).unwrap();
    let x = Array1::from_elem(6, 25.0);
    let f = p.fitness(&x);
    assert_eq!(f.len(), 3);
    assert!(f.iter().all(|v| v.is_finite()));
}

#[test]
fn test_trait_object_view() {
    let problems: Vec<Box<dyn MultiObjectiveProblem>> = vec![
        Box::new(Cec2009::new(2, false, 8).unwrap()),
        Box::new(Cec2009::new(7, true, 8).unwrap()),
    ];
    for p in &problems {
        let (lower, upper) = p.bounds();
        let f = p.fitness(&((&lower + &upper) / 2.0));
        assert_eq!(f.len(), p.fitness_len());
        assert_eq!(p.bounds_matrix().shape(), &[2, 8]);
    }
    assert_eq!(problems[1].constraint_count(), 2);
}
