//! hormiga-tsp CLI: Lévy-ACO optimization of TSPLIB-style instances.

use clap::{Parser, Subcommand};
use hormiga_tsp::{plot, Budget, LevyAcoSolver, TspInstance, TspSolver};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "hormiga-tsp")]
#[command(about = "Lévy-flight ant colony optimization for the Euclidean TSP")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a TSP instance
    Solve {
        /// Instance file (TSPLIB-style coordinates)
        instance: PathBuf,

        /// Number of iterations
        #[arg(short, long, default_value = "1000")]
        iterations: usize,

        /// Number of ants per iteration
        #[arg(long, default_value = "20")]
        ants: usize,

        /// Pheromone exponent (alpha)
        #[arg(long, default_value = "1.0")]
        alpha: f64,

        /// Heuristic exponent (beta)
        #[arg(long, default_value = "3.0")]
        beta: f64,

        /// Evaporation rate (rho), in (0, 1)
        #[arg(long, default_value = "0.1")]
        rho: f64,

        /// Lévy stability parameter, in (0, 2]
        #[arg(long, default_value = "1.5")]
        levy_beta: f64,

        /// Per-iteration probability that Lévy guidance is active
        #[arg(long, default_value = "0.8")]
        levy_threshold: f64,

        /// Per-step Lévy jump probability within an active iteration
        #[arg(long, default_value = "0.095")]
        altering_ratio: f64,

        /// Extra pheromone multiplier along the best tour
        #[arg(long, default_value = "5.0")]
        elitist_weight: f64,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Output solution file (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render the best tour to an SVG file
        #[arg(long)]
        plot: Option<PathBuf>,

        /// Print each new best cost as it is found
        #[arg(short, long)]
        verbose: bool,
    },

    /// Display instance information
    Info {
        /// Instance file
        instance: PathBuf,
    },
}

/// Machine-readable solve result
#[derive(Serialize)]
struct SolutionReport<'a> {
    instance: &'a str,
    tour: &'a [usize],
    length: f64,
    evaluations: usize,
    iterations: usize,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Solve {
            instance,
            iterations,
            ants,
            alpha,
            beta,
            rho,
            levy_beta,
            levy_threshold,
            altering_ratio,
            elitist_weight,
            seed,
            output,
            plot,
            verbose,
        } => cmd_solve(&SolveArgs {
            instance,
            iterations,
            ants,
            alpha,
            beta,
            rho,
            levy_beta,
            levy_threshold,
            altering_ratio,
            elitist_weight,
            seed,
            output,
            plot,
            verbose,
        }),
        Commands::Info { instance } => cmd_info(&instance),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

struct SolveArgs {
    instance: PathBuf,
    iterations: usize,
    ants: usize,
    alpha: f64,
    beta: f64,
    rho: f64,
    levy_beta: f64,
    levy_threshold: f64,
    altering_ratio: f64,
    elitist_weight: f64,
    seed: Option<u64>,
    output: Option<PathBuf>,
    plot: Option<PathBuf>,
    verbose: bool,
}

fn cmd_solve(args: &SolveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let instance = TspInstance::load(&args.instance)?;

    println!("Solving TSP Instance");
    println!("====================");
    println!(
        "Instance:     {} ({} cities)",
        instance.name, instance.dimension
    );
    println!("Ants:         {}", args.ants);
    println!("Iterations:   {}", args.iterations);
    println!(
        "alpha/beta:   {:.2}/{:.2}   rho: {:.2}",
        args.alpha, args.beta, args.rho
    );
    println!(
        "Lévy:         beta {:.2}, threshold {:.2}, altering {:.3}",
        args.levy_beta, args.levy_threshold, args.altering_ratio
    );
    match args.seed {
        Some(s) => println!("Seed:         {s}"),
        None => println!("Seed:         (none, non-reproducible)"),
    }
    println!();

    let mut solver = LevyAcoSolver::new()
        .with_ants(args.ants)
        .with_alpha(args.alpha)
        .with_beta(args.beta)
        .with_rho(args.rho)
        .with_levy_beta(args.levy_beta)
        .with_levy_threshold(args.levy_threshold)
        .with_altering_ratio(args.altering_ratio)
        .with_elitist_weight(args.elitist_weight)
        .with_verbose(args.verbose);
    if let Some(s) = args.seed {
        solver = solver.with_seed(s);
    }

    let start = Instant::now();
    let solution = solver.solve(&instance, Budget::Iterations(args.iterations))?;
    let elapsed = start.elapsed();

    println!();
    println!("Solution Found");
    println!("--------------");
    println!("Tour length:      {:.2}", solution.length);
    println!("Evaluations:      {}", solution.evaluations);
    println!("Computation time: {:.3}s", elapsed.as_secs_f64());
    println!(
        "Tour: {} -> ... -> {}",
        solution.tour.first().unwrap_or(&0),
        solution.tour.last().unwrap_or(&0)
    );

    if let Some(out_path) = &args.output {
        let report = SolutionReport {
            instance: &instance.name,
            tour: &solution.tour,
            length: solution.length,
            evaluations: solution.evaluations,
            iterations: solution.history.len(),
        };
        std::fs::write(out_path, serde_json::to_string_pretty(&report)?)?;
        println!("\nOutput: {}", out_path.display());
    }

    if let Some(plot_path) = &args.plot {
        plot::save_svg(plot_path, &instance, &solution.tour)?;
        println!("Plot:   {}", plot_path.display());
    }

    Ok(())
}

fn cmd_info(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let instance = TspInstance::load(path)?;

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in &instance.coords {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    let finite_nearest: Vec<f64> = (0..instance.num_cities())
        .map(|i| instance.nearest_distance(i))
        .filter(|d| d.is_finite())
        .collect();
    let mean_nearest = if finite_nearest.is_empty() {
        None
    } else {
        Some(finite_nearest.iter().sum::<f64>() / finite_nearest.len() as f64)
    };

    println!("Instance Information");
    println!("====================");
    println!("File:       {}", path.display());
    println!("Name:       {}", instance.name);
    println!("Cities:     {}", instance.dimension);
    println!("X range:    [{min_x:.2}, {max_x:.2}]");
    println!("Y range:    [{min_y:.2}, {max_y:.2}]");
    match mean_nearest {
        Some(m) => println!("Mean nearest-neighbor distance: {m:.3}"),
        None => println!("Mean nearest-neighbor distance: (undefined for a single city)"),
    }

    Ok(())
}
