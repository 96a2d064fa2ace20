use std::{
    io::{self, Read, Write},
    path::PathBuf,
    str::FromStr,
};

use anyhow::Context;
use clap::Parser;
use gauss_seidel::{Config, Report, gauss_seidel, solve, textual::Problem};

use crate::render::TerminalSink;

mod render;

#[derive(Parser)]
#[command(name = "gauss-seidel", version, about, long_about = None)]
struct Cli {
    /// Path to the problem file.
    /// Use '-' for stdin.
    #[arg(short = 'f', long)]
    filepath: PathBuf,

    /// Stop once no unknown changes by this much in a sweep.
    /// Overrides the problem file.
    #[arg(short = 'e', long)]
    epsilon: Option<f64>,

    /// Decimal places to show, or 'auto' for the shortest exact representation.
    /// Overrides the problem file.
    #[arg(short = 'p', long)]
    precision: Option<Precision>,

    /// Give up after this many sweeps.
    /// Overrides the problem file.
    #[arg(long = "max-sweeps")]
    max_sweeps: Option<usize>,

    /// Don't color the output.
    #[arg(long = "no-color")]
    no_color: bool,

    /// Show the full-precision solution after the report.
    #[arg(long = "show-solution")]
    show_solution: bool,
}

#[derive(Clone, Copy)]
struct Precision(Option<usize>);

impl FromStr for Precision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "auto" {
            return Ok(Self(None));
        }
        s.parse()
            .map(|digits| Self(Some(digits)))
            .map_err(|_| format!("expected a number of digits or 'auto', got '{s}'"))
    }
}

impl Cli {
    /// Settings from the problem file, overridden by any given on the command line.
    fn config(&self, problem: &Problem) -> Config {
        let mut config = problem.config();
        if let Some(epsilon) = self.epsilon {
            config = config.with_epsilon(epsilon);
        }
        if let Some(Precision(precision)) = self.precision {
            config = config.with_precision(precision);
        }
        if let Some(max_sweeps) = self.max_sweeps {
            config = config.with_max_sweeps(max_sweeps);
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    let (report, solution) = match main_inner(&cli) {
        Ok(o) => o,
        Err(e) => {
            use colored::Colorize;
            eprintln!("{}: {e:#}", "Error".red());
            std::process::exit(1);
        }
    };
    if let Err(e) = print_output(&report, solution.as_deref()) {
        eprintln!("Error: could not write output: {e}");
        std::process::exit(1);
    }
    if report.has_error() {
        std::process::exit(1);
    }
}

type RunResult = (Report, Option<Vec<f64>>);

fn main_inner(cli: &Cli) -> anyhow::Result<RunResult> {
    let problem_txt = read_problem(cli)?;
    let problem = Problem::from_str(&problem_txt)
        .map_err(anyhow::Error::msg)
        .context("could not parse the problem")?;
    let system = problem.to_system()?;
    let config = cli.config(&problem);
    let report = gauss_seidel(&system, config)?;
    let solution = if cli.show_solution {
        solve(&system, config)
            .ok()
            .map(|outcome| outcome.solution().to_vec())
    } else {
        None
    };
    Ok((report, solution))
}

/// Prints the report, and the solution if asked for, to stdout.
fn print_output(report: &Report, solution: Option<&[f64]>) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    report.render(&mut TerminalSink::new(&mut stdout))?;
    if let Some(solution) = solution {
        writeln!(stdout, "Solution:")?;
        for (i, x) in solution.iter().enumerate() {
            writeln!(stdout, "\tx{i} = {x}")?;
        }
    }
    Ok(())
}

/// Read the problem text from a file or stdin, depending on user args.
/// They pass a filename, or '-' for stdin.
fn read_problem(cli: &Cli) -> anyhow::Result<String> {
    // Read from file
    if cli.filepath != PathBuf::from("-") {
        return std::fs::read_to_string(&cli.filepath)
            .with_context(|| format!("could not read {}", cli.filepath.display()));
    }

    // Read from stdin
    let mut problem_txt = String::with_capacity(100);
    io::stdin()
        .read_to_string(&mut problem_txt)
        .context("could not read stdin")?;
    Ok(problem_txt)
}
