//! pcurve: generate a mixed curve collection, print it, and sum circle radii.

mod args;
mod report;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

use pcurve_collection::{
    evaluate_all, filter_circles, generate_curves, sort_by_radius, sum_of_radii, ExecutionPolicy,
};
use pcurve_core::{Result, Tolerance};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use args::{parse_args, CliArgs, Command, USAGE};
use report::{RunReport, SumTiming};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n", e);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let cli = match command {
        Command::Help => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Command::Run(cli) => cli,
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &CliArgs) -> Result<()> {
    let curves = generate_curves(&cli.generator)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if !cli.quiet {
        let shown = cli.limit.unwrap_or(curves.len()).min(curves.len());
        for evaluation in evaluate_all(&curves[..shown], cli.t) {
            writeln!(out, "{}", evaluation)?;
        }
    }

    let mut circles = filter_circles(&curves);
    sort_by_radius(&mut circles);
    info!(
        circles = circles.len(),
        min = ?circles.first().map(|c| c.get_radius()),
        max = ?circles.last().map(|c| c.get_radius()),
        "sorted circles by radius"
    );

    let sums: Vec<SumTiming> = [ExecutionPolicy::Sequenced, ExecutionPolicy::Parallel]
        .into_iter()
        .map(|policy| {
            let start = Instant::now();
            let sum = sum_of_radii(&circles, policy);
            SumTiming::new(policy, sum, start.elapsed())
        })
        .collect();

    let sums_agree = Tolerance::reduction(circles.len()).relative_eq(sums[0].sum, sums[1].sum);
    if !sums_agree {
        warn!(
            sequenced = sums[0].sum,
            parallel = sums[1].sum,
            "sequenced and parallel sums differ beyond reassociation tolerance"
        );
    }

    if cli.json {
        let report = RunReport {
            curves: curves.len(),
            circles: circles.len(),
            min_radius: circles.first().map(|c| c.get_radius()),
            max_radius: circles.last().map(|c| c.get_radius()),
            sums,
            sums_agree,
        };
        serde_json::to_writer_pretty(&mut out, &report).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        for timing in &sums {
            writeln!(out, "{}", timing)?;
        }
    }

    out.flush()?;
    Ok(())
}
