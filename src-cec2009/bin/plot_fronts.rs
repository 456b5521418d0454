use cec2009::{Cec2009, pareto_set_samples};
use cec2009_env::output_dir_or_default;
use clap::Parser;
use ndarray::Array1;
use plotly::{
    Layout, Plot, Scatter, Scatter3D,
    common::{Marker, Mode, Title},
    layout::{Axis, LayoutScene},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// CLI arguments for plotting objective space samples
#[derive(Parser)]
#[command(name = "plot_fronts")]
#[command(about = "Plot random samples and the Pareto front of CEC2009 problems with Plotly")]
struct Args {
    /// Height of the plot in pixels
    #[arg(short = 'H', long, default_value = "800")]
    height: usize,

    /// Width of the plot in pixels
    #[arg(short = 'W', long, default_value = "800")]
    width: usize,

    /// Dimension of the decision vectors
    #[arg(short, long, default_value = "10")]
    dim: usize,

    /// Number of random decision vectors per problem
    #[arg(short, long, default_value = "2000")]
    samples: usize,

    /// Number of Pareto-set points per axis
    #[arg(long, default_value = "101")]
    front_points: usize,

    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for HTML files (defaults to $CEC2009_DIR/data_generated/plots)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Problems to plot (comma-separated, e.g. UF1,CF6); all if empty
    #[arg(short, long)]
    problems: Option<String>,
}

/// Uniform samples inside the box bounds of `problem`
fn sample_population(problem: &Cec2009, n: usize, rng: &mut impl Rng) -> Vec<Array1<f64>> {
    let (lower, upper) = problem.bounds();
    (0..n)
        .map(|_| {
            Array1::from_shape_fn(problem.dimension(), |i| {
                rng.random_range(lower[i]..upper[i])
            })
        })
        .collect()
}

/// Objective columns of the evaluated points, split into feasible and
/// infeasible sets
fn objective_columns(
    problem: &Cec2009,
    points: &[Array1<f64>],
) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let m = problem.objective_count();
    let mut feasible = vec![Vec::new(); m];
    let mut infeasible = vec![Vec::new(); m];
    for x in points {
        let f = problem.fitness(x);
        let target = if problem.is_feasible(&f) {
            &mut feasible
        } else {
            &mut infeasible
        };
        for k in 0..m {
            target[k].push(f[k]);
        }
    }
    (feasible, infeasible)
}

fn add_trace(plot: &mut Plot, columns: Vec<Vec<f64>>, name: &str, size: usize) {
    if columns.first().is_none_or(|c| c.is_empty()) {
        return;
    }
    let mut it = columns.into_iter();
    let (f0, f1) = match (it.next(), it.next()) {
        (Some(a), Some(b)) => (a, b),
        _ => return,
    };
    match it.next() {
        Some(f2) => plot.add_trace(
            Scatter3D::new(f0, f1, f2)
                .mode(Mode::Markers)
                .name(name)
                .marker(Marker::new().size(size)),
        ),
        None => plot.add_trace(
            Scatter::new(f0, f1)
                .mode(Mode::Markers)
                .name(name)
                .marker(Marker::new().size(size)),
        ),
    }
}

fn build_plot(
    problem: &Cec2009,
    samples: &[Array1<f64>],
    front: &[Array1<f64>],
    width: usize,
    height: usize,
) -> Plot {
    let mut plot = Plot::new();

    let (feasible, infeasible) = objective_columns(problem, samples);
    if problem.is_constrained() {
        add_trace(&mut plot, feasible, "feasible samples", 3);
        add_trace(&mut plot, infeasible, "infeasible samples", 3);
    } else {
        add_trace(&mut plot, feasible, "samples", 3);
    }

    // the front is drawn whatever its feasibility
    let (f_ok, f_ko) = objective_columns(problem, front);
    let merged: Vec<Vec<f64>> = f_ok
        .into_iter()
        .zip(f_ko)
        .map(|(mut a, b)| {
            a.extend(b);
            a
        })
        .collect();
    add_trace(&mut plot, merged, "Pareto set image", 5);

    plot.set_layout(objective_layout(problem, width, height));
    plot
}

/// Layout with objective axes named `f0`, `f1` (and `f2` on the 3-D scene)
fn objective_layout(problem: &Cec2009, width: usize, height: usize) -> Layout {
    let axis = |label: &str| Axis::new().title(Title::with_text(label));
    let layout = Layout::new()
        .title(Title::with_text(format!(
            "{} (dimension {})",
            problem.name(),
            problem.dimension()
        )))
        .width(width)
        .height(height);
    if problem.objective_count() == 3 {
        layout.scene(
            LayoutScene::new()
                .x_axis(axis("f0"))
                .y_axis(axis("f1"))
                .z_axis(axis("f2")),
        )
    } else {
        layout.x_axis(axis("f0")).y_axis(axis("f1"))
    }
}

fn write_plot(plot: &Plot, output_dir: &Path, problem: &Cec2009) -> PathBuf {
    let filename = output_dir.join(format!("{}.html", problem.short_name().to_lowercase()));
    plot.write_html(&filename);
    filename
}

fn selected_problems(args: &Args) -> Result<Vec<Cec2009>, cec2009::Cec2009Error> {
    match &args.problems {
        Some(list) => list
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| Cec2009::from_name(s, args.dim))
            .collect(),
        None => Cec2009::all(args.dim),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let output_dir = match output_dir_or_default(args.output_dir.as_deref()) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error accessing output directory: {}", e);
            eprintln!("Please pass --output-dir or set CEC2009_DIR to your project root.");
            std::process::exit(1);
        }
    };

    let problems = match selected_problems(&args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut rng: StdRng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => {
            let mut thread_rng = rand::rng();
            StdRng::from_rng(&mut thread_rng)
        }
    };

    for problem in &problems {
        if problem.dimension() < problem.minimum_dimension() {
            log::warn!(
                "skipping {}: dimension {} < {}",
                problem.name(),
                problem.dimension(),
                problem.minimum_dimension()
            );
            continue;
        }
        let samples = sample_population(problem, args.samples, &mut rng);
        let front = pareto_set_samples(problem, args.front_points);
        let plot = build_plot(problem, &samples, &front, args.width, args.height);
        let path = write_plot(&plot, &output_dir, problem);
        log::info!("{} -> {}", problem.name(), path.display());
    }
}
