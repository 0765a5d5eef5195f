use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use crate::cli::{Cli, SummaryFormat};
use crate::core::summary::MatchSummary;
use crate::filter::TaxonFilter;
use crate::parsing::fasta::{is_fasta_file, open_input, STDIN_PATH};
use crate::utils::validation::check_distinct_paths;

/// Execute one extraction: scan the input, write matches and the summary.
///
/// All three files are closed on every return path.
///
/// # Errors
///
/// Returns an error if the paths clash, the input cannot be opened or read,
/// or either output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(cli: Cli) -> anyhow::Result<()> {
    check_distinct_paths(&cli.input_file, &cli.output_file, &cli.summary_file)?;

    if cli.input_file.as_os_str() != STDIN_PATH && !is_fasta_file(&cli.input_file) {
        warn!(
            "{} does not have a FASTA extension; reading it as FASTA anyway",
            cli.input_file.display()
        );
    }

    let filter = TaxonFilter::new(cli.target_taxon.as_str(), cli.match_on);
    info!(
        "Extracting records matching '{}' ({}) from {}",
        filter.target(),
        filter.strategy(),
        cli.input_file.display()
    );

    let reader = open_input(&cli.input_file)?;
    let mut output = create_output(&cli.output_file)?;

    let summary = filter
        .extract(reader, &mut output)
        .with_context(|| format!("Failed to filter {}", cli.input_file.display()))?;

    write_summary(&summary, &cli.summary_file, cli.summary_format)?;

    if summary.is_empty() {
        warn!("No records matched '{}'", filter.target());
    }
    info!(
        "Wrote {} record(s) to {}",
        summary.count,
        cli.output_file.display()
    );

    Ok(())
}

fn create_output(path: &Path) -> anyhow::Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn write_summary(
    summary: &MatchSummary,
    path: &Path,
    format: SummaryFormat,
) -> anyhow::Result<()> {
    let mut writer = create_output(path)?;
    match format {
        SummaryFormat::Text => summary.write_text(&mut writer),
        SummaryFormat::Json => summary.write_json(&mut writer),
    }
    .and_then(|()| writer.flush())
    .with_context(|| format!("Failed to write summary to {}", path.display()))
}
