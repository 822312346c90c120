// Evaluate the models of an input file and print the report.

use clap::Parser;
use env_logger::{Builder, Env};
use log::info;
use regeval::parse_input;
use regeval::report::{render, ReportFormat, ReportParams};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Parser)]
#[command(version, about = "Evaluate linear models against a set of points")]
struct Args {
    /// Input file: N, N lines `x y`, P, P lines `slope intercept`
    input: PathBuf,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Decimals of the numbers in the text report
    #[arg(long)]
    precision: Option<usize>,

    /// Write the report there instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read_to_string(&args.input)
        .map_err(|e| format!("cannot open {}: {}", args.input.display(), e))?;
    let mut evaluator = parse_input(&data)?;
    evaluator.run_evaluation()?;

    let mut params = ReportParams::new();
    params.format = args.format;
    if let Some(precision) = args.precision {
        params.precision = precision;
    }
    let report = render(&evaluator, &params)?;

    match &args.output {
        Some(path) => {
            info!("Writing report to {}", path.display());
            fs::write(path, report)?;
        }
        None => print!("{}", report),
    }
    Ok(())
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
