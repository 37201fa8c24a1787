//! Draw one bar chart per ontology out of a reasoners performance log.
//!
//! ```text
//! perf2svg performance-results.txt --output-dir charts --report charts/index.html
//! RUST_LOG=debug perf2svg performance-results.txt
//! ```
use clap::Parser;
use reasoner_perf::{
    render_all, write_html_report, AlignedTable, ParserConfiguration, PerfError,
    PerformanceLog, RenderOptions, SvgRenderer,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "perf2svg")]
#[command(version)]
#[command(about = "Compare reasoners execution times with one bar chart per ontology")]
struct Cli {
    /// Performance log to read
    #[arg(env = "REASONER_PERF_LOG")]
    input: PathBuf,

    /// Directory receiving the svg charts
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Chart width in pixels
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Also write an html page with all charts and statistics
    #[arg(long)]
    report: Option<PathBuf>,

    /// Also export the parsed timings as json
    #[arg(long)]
    json: Option<PathBuf>,

    /// Drop malformed measurement lines instead of failing
    #[arg(long)]
    skip_malformed: bool,
}

fn run(cli: &Cli) -> Result<bool, PerfError> {
    let config = ParserConfiguration {
        skip_malformed: cli.skip_malformed,
    };
    let log = PerformanceLog::load_with(&cli.input, config)?;
    info!(
        "{} ontologies and {} reasoners found in {}",
        log.len(),
        log.reasoners().len(),
        cli.input.display()
    );
    if let Some(json) = &cli.json {
        log.save(json)?;
    }

    let table = AlignedTable::new(&log);
    let options = RenderOptions {
        width: cli.width,
        height: cli.height,
    };
    let mut renderer = SvgRenderer::new(&cli.output_dir, options);
    let summary = render_all(&table, &mut renderer);
    if let Some(report) = &cli.report {
        write_html_report(report, &table, options)?;
        info!("saved report in {}", report.display());
    }
    for failure in &summary.failures {
        eprintln!("warning: {}", failure);
    }
    Ok(summary.is_success())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("reasoner_perf=info".parse().expect("valid log directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
