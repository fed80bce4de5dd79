//! cropgen command-line interface
//!
//! This binary generates a synthetic commodity price series and writes it to
//! a timestamped CSV file. Diagnostics go to stderr and are filtered with
//! `RUST_LOG` (default `info`).

use std::process::ExitCode;

use cropgen_cli::args::Args;
use cropgen_cli::run::run;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse_args();

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "cropgen failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
