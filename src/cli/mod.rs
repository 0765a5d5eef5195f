//! Command-line interface for fasta-taxon-filter.
//!
//! ## Usage
//!
//! ```text
//! # Keep every record whose header mentions Rhizobium
//! fasta-taxon-filter -f seqs.fasta -o rhizobium.fasta -s summary.txt -t Rhizobium
//!
//! # Match only the last rank of lineage headers (A;B;...;Genus)
//! fasta-taxon-filter -f silva.fasta.gz -o out.fasta -s summary.txt -t Rhizobium \
//!     --match-on derived-label
//!
//! # Read from a pipe and write a JSON summary
//! zcat seqs.fa.gz | fasta-taxon-filter -f - -o out.fa -s summary.json -t Rhizobium \
//!     --summary-format json
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::core::types::MatchStrategy;
use crate::utils::validation::validate_target_taxon;

pub mod extract;

#[derive(Parser, Debug)]
#[command(name = "fasta-taxon-filter")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Extract FASTA records whose header contains a target taxon")]
#[command(
    long_about = "fasta-taxon-filter scans a FASTA file once and keeps the records whose header contains the target taxon.\n\nMatched records are written with their sequence joined onto a single line, and a summary lists how many records matched and their names."
)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Input FASTA file (optionally .gz/.bgz compressed); use '-' for stdin
    #[arg(short = 'f', long = "input_file", visible_alias = "input-file")]
    pub input_file: PathBuf,

    /// Output FASTA file for the matched records
    #[arg(short = 'o', long = "output_file", visible_alias = "output-file")]
    pub output_file: PathBuf,

    /// Summary report listing the matched records
    #[arg(short = 's', long = "summary_file", visible_alias = "summary-file")]
    pub summary_file: PathBuf,

    /// Taxon to look for in the headers (case-sensitive substring)
    #[arg(
        short = 't',
        long = "target_taxon",
        visible_alias = "target-taxon",
        value_parser = validate_target_taxon
    )]
    pub target_taxon: String,

    /// Header field the taxon is matched against
    #[arg(short = 'm', long, value_enum, default_value_t = MatchStrategy::FullHeader)]
    pub match_on: MatchStrategy,

    /// Summary report format
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub summary_format: SummaryFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryFormat {
    Text,
    Json,
}

impl std::fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryFormat::Text => write!(f, "text"),
            SummaryFormat::Json => write!(f, "json"),
        }
    }
}
