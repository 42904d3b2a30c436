//! Command-line argument parsing.

use pcurve_collection::{GeneratorConfig, DEFAULT_EVAL_PARAMETER};
use pcurve_core::{PcurveError, Result};

pub const USAGE: &str = "\
Usage: pcurve [OPTIONS]

Generate random circles, ellipses and helices, print each curve's point and
derivative, then sum the radii of the circles sequentially and in parallel.

Options:
  --count <N>    Number of curves to generate (default: 1000000)
  --seed <S>     Seed for reproducible generation
  --t <T>        Parameter at which curves are evaluated (default: PI/4)
  --limit <K>    Print only the first K evaluations
  --quiet        Do not print evaluations
  --json         Print the summary as JSON
  -h, --help     Show this help

Logging is controlled by RUST_LOG (default: warn).";

/// What the user asked the program to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(CliArgs),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub generator: GeneratorConfig,
    pub t: f64,
    pub limit: Option<usize>,
    pub quiet: bool,
    pub json: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            t: DEFAULT_EVAL_PARAMETER,
            limit: None,
            quiet: false,
            json: false,
        }
    }
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--count" => cli.generator.count = parse_value(&arg, args.next())?,
            "--seed" => cli.generator.seed = Some(parse_value(&arg, args.next())?),
            "--t" => {
                let t: f64 = parse_value(&arg, args.next())?;
                if !t.is_finite() {
                    return Err(PcurveError::InvalidArgument(format!(
                        "--t must be finite, got {}",
                        t
                    )));
                }
                cli.t = t;
            }
            "--limit" => cli.limit = Some(parse_value(&arg, args.next())?),
            "--quiet" => cli.quiet = true,
            "--json" => cli.json = true,
            other => {
                return Err(PcurveError::InvalidArgument(format!(
                    "unknown option '{}'",
                    other
                )))
            }
        }
    }

    Ok(Command::Run(cli))
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T> {
    let value = value
        .ok_or_else(|| PcurveError::InvalidArgument(format!("{} requires a value", flag)))?;
    value
        .parse()
        .map_err(|_| PcurveError::InvalidArgument(format!("invalid value for {}: '{}'", flag, value)))
}
