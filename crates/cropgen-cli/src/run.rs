//! Drives one CLI invocation: generate, export, report.

use cropgen::generator::{generate, Dataset};
use tracing::info;

use crate::args::Args;
use crate::csv_writer::{generation_timestamp, write_to_dest, OutputDest};
use crate::error::Result;
use crate::report::render_report;

/// What a run produced.
#[derive(Debug)]
pub struct RunOutcome {
    /// The generated dataset.
    pub dataset: Dataset,
    /// Where the CSV was written.
    pub dest: OutputDest,
}

/// Generates the dataset described by `args` and writes it out.
///
/// The console report is printed to stdout unless `--quiet` is set or the
/// CSV itself is going to stdout.
pub fn run(args: &Args) -> Result<RunOutcome> {
    let config = args.generator_config()?;
    let dataset = generate(&config)?;
    info!(
        seed = dataset.seed,
        rows = dataset.len(),
        crop = %config.crop,
        "generated dataset"
    );

    let dest = args.output_dest(&generation_timestamp());
    write_to_dest(&dataset.records, &dest)?;

    if let OutputDest::File(path) = &dest {
        info!(path = %path, "wrote CSV");
        if !args.quiet {
            print!(
                "{}",
                render_report(path, &dataset.summary(), &dataset.records, args.preview)
            );
        }
    }

    Ok(RunOutcome { dataset, dest })
}
