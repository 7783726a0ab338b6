//! `textstamp transform`: stamp and number one file.

use chrono::Local;
use tracing::{debug, instrument};

use textstamp_adapters::TransformOrchestratorProvider;
use textstamp_core::domain::TransformContext;

use crate::{cli::TransformArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Run the pipeline for `args.target_file`.
///
/// `--tmp-dir` wins over the configured output directory.  The timestamp is
/// taken once, here, so the header reflects the start of the invocation.
#[instrument(skip_all, fields(target = %args.target_file.display()))]
pub fn execute(args: TransformArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let tmp_dir = args.tmp_dir.unwrap_or(config.tmp_dir);
    let context = TransformContext::new(args.target_file, tmp_dir, Local::now().naive_local());
    debug!(output = %context.output_path().display(), "Resolved output path");

    let orchestrator = TransformOrchestratorProvider::new().provide();
    let result = orchestrator.orchestrate(&context)?;

    output.result(&result)
}
