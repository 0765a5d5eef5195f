//! Single-pass extraction of FASTA records carrying a target taxon.
//!
//! The scan is a fold over lines: a [`PendingRecord`] accumulates the record
//! being read and hands it back once the next header (or end of input) closes
//! it. Each closed record with a non-empty sequence is tested against the
//! target with the configured [`MatchStrategy`]; matches are emitted in input
//! order and tallied in a [`MatchSummary`].
//!
//! ## Example
//!
//! ```rust
//! use fasta_taxon_filter::core::types::MatchStrategy;
//! use fasta_taxon_filter::filter::filter;
//!
//! let lines = [">seq1 desc", "AC", "GT", ">seq2 desc Rhizobium", "TTTT"];
//! let (records, summary) = filter(lines, "Rhizobium", MatchStrategy::FullHeader);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].sequence, "TTTT");
//! assert_eq!(summary.names, vec!["seq2"]);
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::record::Record;
use crate::core::summary::MatchSummary;
use crate::core::types::MatchStrategy;

pub mod pending;

pub use pending::PendingRecord;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl FilterError {
    /// Classify an error raised while reading input lines.
    ///
    /// Undecodable input is not an I/O fault of the stream itself.
    fn from_read(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::InvalidData {
            FilterError::Unexpected(format!("malformed input: {err}"))
        } else {
            FilterError::Io(err)
        }
    }
}

/// A target taxon together with the header field it is searched in
#[derive(Debug, Clone)]
pub struct TaxonFilter {
    target: String,
    strategy: MatchStrategy,
}

impl TaxonFilter {
    pub fn new(target: impl Into<String>, strategy: MatchStrategy) -> Self {
        Self {
            target: target.into(),
            strategy,
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Case-sensitive substring test against the strategy's taxon field
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        record.taxon_field(self.strategy).contains(&self.target)
    }

    /// Run the scan over in-memory lines, collecting every match.
    ///
    /// Returned records are already in emission form: with
    /// [`MatchStrategy::DerivedLabel`] the header is `>` plus the derived label.
    pub fn apply<I, S>(&self, lines: I) -> (Vec<Record>, MatchSummary)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pending = PendingRecord::new();
        let mut summary = MatchSummary::new();
        let mut matched = Vec::new();

        for line in lines {
            if let Some(record) = pending.push_line(line.as_ref()) {
                self.collect(record, &mut matched, &mut summary);
            }
        }
        if let Some(record) = pending.finish() {
            self.collect(record, &mut matched, &mut summary);
        }

        (matched, summary)
    }

    fn collect(&self, record: Record, matched: &mut Vec<Record>, summary: &mut MatchSummary) {
        if !self.matches(&record) {
            return;
        }
        summary.record(record.identifier());
        matched.push(Record::new(
            record.output_header(self.strategy),
            record.sequence,
        ));
    }

    /// Stream records from `reader`, writing each match to `writer` as soon as
    /// it is closed.
    ///
    /// The writer is flushed before returning so write failures surface here.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Io` if reading or writing fails, or
    /// `FilterError::Unexpected` if the input is not valid UTF-8.
    pub fn extract<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
    ) -> Result<MatchSummary, FilterError> {
        let mut pending = PendingRecord::new();
        let mut summary = MatchSummary::new();
        let mut seen = 0usize;

        for line in reader.lines() {
            let line = line.map_err(FilterError::from_read)?;
            if let Some(record) = pending.push_line(&line) {
                seen += 1;
                self.emit(&record, writer, &mut summary)?;
            }
        }

        if pending.discarded_lines() > 0 {
            warn!(
                "Discarded {} data line(s) that appeared before the first header",
                pending.discarded_lines()
            );
        }

        if let Some(record) = pending.finish() {
            seen += 1;
            self.emit(&record, writer, &mut summary)?;
        }

        writer.flush()?;
        debug!(
            "Scanned {seen} non-empty record(s), {} matched",
            summary.count
        );

        Ok(summary)
    }

    fn emit<W: Write>(
        &self,
        record: &Record,
        writer: &mut W,
        summary: &mut MatchSummary,
    ) -> io::Result<()> {
        if !self.matches(record) {
            return Ok(());
        }
        debug!("Matched {}", record.header);
        record.write_to(writer, self.strategy)?;
        summary.record(record.identifier());
        Ok(())
    }
}

/// Filter `lines` for records whose taxon field contains `target`.
///
/// This is the pure form of the scan: no I/O, matches returned in input order
/// together with their summary.
pub fn filter<I, S>(lines: I, target: &str, strategy: MatchStrategy) -> (Vec<Record>, MatchSummary)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TaxonFilter::new(target, strategy).apply(lines)
}
