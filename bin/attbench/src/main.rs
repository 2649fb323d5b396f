use std::io;

use attbench::cli::Cli;
use attbench_bench::runner::run;
use attbench_consensus::bls;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Set the default log level to `info` if not set
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    // The report goes to stdout, logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.bench_config();

    let result = bls::initialize()
        .map_err(anyhow::Error::from)
        .and_then(|scheme| run(&config, scheme, io::stdout().lock()));

    match result {
        Ok(report) => {
            info!(
                "Benchmark finished: {:.2} individual verifications/second on average",
                report.individual.stats.mean
            );
            Ok(())
        }
        Err(err) => {
            error!("Benchmark aborted: {err:#}");
            Err(err)
        }
    }
}
