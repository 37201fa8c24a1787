//! Parse a reasoners performance log and dump it as json.
use clap::Parser;
use reasoner_perf::{PerfError, PerformanceLog};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "perf2json")]
#[command(version)]
#[command(about = "Convert a reasoners performance log to json")]
struct Cli {
    /// Performance log to read
    #[arg(env = "REASONER_PERF_LOG")]
    input: PathBuf,

    /// Json file to write, standard output if absent
    output: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<(), PerfError> {
    let log = PerformanceLog::load(&cli.input)?;
    match &cli.output {
        Some(output) => log.save(output),
        None => {
            println!("{}", serde_json::to_string_pretty(&log)?);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("reasoner_perf=warn".parse().expect("valid log directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
