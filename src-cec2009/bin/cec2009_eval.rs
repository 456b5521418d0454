use cec2009::{Cec2009, get_problem_metadata};
use clap::Parser;
use ndarray::Array1;
use serde::Serialize;

/// CLI arguments for evaluating one CEC2009 problem
#[derive(Parser)]
#[command(name = "cec2009_eval")]
#[command(about = "Evaluate a CEC2009 problem (UF1..UF10, CF1..CF10) at a decision vector")]
struct Args {
    /// Problem name, e.g. UF1 or CF7
    #[arg(short, long, default_value = "UF1")]
    problem: String,

    /// Dimension of the decision vector (defaults to the competition setting)
    #[arg(short, long)]
    dim: Option<usize>,

    /// Decision vector (comma-separated); midpoint of the bounds if absent
    #[arg(short, long, allow_hyphen_values = true)]
    x: Option<String>,

    /// Print a JSON document instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    problem: Cec2009,
    name: String,
    objectives: usize,
    inequality_constraints: usize,
    lower: Vec<f64>,
    upper: Vec<f64>,
    x: Vec<f64>,
    fitness: Vec<f64>,
    feasible: bool,
}

fn parse_vector(s: &str) -> Result<Vec<f64>, String> {
    s.split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid value {:?}: {}", v, e))
        })
        .collect()
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let dim = match args.dim {
        Some(d) => d,
        None => {
            let lowered = args.problem.trim().to_lowercase();
            let key = lowered.trim_start_matches("cec2009 - ");
            get_problem_metadata()
                .get(key)
                .map(|m| m.recommended_dimension)
                .unwrap_or(30)
        }
    };
    let problem = Cec2009::from_name(&args.problem, dim)?;
    let (lower, upper) = problem.bounds();

    let x = match &args.x {
        Some(s) => {
            let v = parse_vector(s)?;
            if v.len() != dim {
                return Err(format!(
                    "{} expects {} components, got {}",
                    problem.name(),
                    dim,
                    v.len()
                )
                .into());
            }
            Array1::from(v)
        }
        None => (&lower + &upper) / 2.0,
    };
    log::info!("evaluating {} in dimension {}", problem.name(), dim);

    let fitness = problem.fitness(&x);
    let report = Report {
        problem,
        name: problem.name(),
        objectives: problem.objective_count(),
        inequality_constraints: problem.constraint_count(),
        lower: lower.to_vec(),
        upper: upper.to_vec(),
        x: x.to_vec(),
        feasible: problem.is_feasible(&fitness),
        fitness: fitness.to_vec(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.name);
        println!("  objectives:             {}", report.objectives);
        println!("  inequality constraints: {}", report.inequality_constraints);
        println!("  x:       {:?}", report.x);
        println!("  fitness: {:?}", report.fitness);
        if problem.is_constrained() {
            println!("  feasible: {}", report.feasible);
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
