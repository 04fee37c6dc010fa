use anyhow::Result;
use tracing::debug;

use pagecat::{cli, copy, logging, sizing};

fn main() -> Result<()> {
    logging::init_logging();

    let cli_opts = cli::parse();
    debug!(
        "starting input={} policy={:?}",
        cli_opts.input.display(),
        sizing::BUILD_POLICY
    );

    copy::run(&cli_opts.input, sizing::BUILD_POLICY)?;
    Ok(())
}
